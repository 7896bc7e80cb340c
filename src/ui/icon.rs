use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon file name under `/icons`, without the .svg extension
    name: &'static str,
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=name
            draggable=false
        />
    }
}

pub mod icons {
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const ARROW_LEFT: &str = "arrow-left";
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const EDIT: &str = "edit";
    pub const EYE: &str = "eye";
    pub const EYE_CLOSED: &str = "eye-closed";
    pub const LOGOUT: &str = "logout";
    pub const PEN: &str = "pen";
    pub const PLUS: &str = "plus";
    pub const RING: &str = "ring";
    pub const SEARCH: &str = "search";
    pub const TRASH: &str = "trash";
    pub const WHATSAPP: &str = "whatsapp";
    pub const X: &str = "x";
}
