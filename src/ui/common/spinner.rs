use leptos::prelude::*;

/// Spinner size options
#[derive(Clone, Copy, PartialEq)]
pub enum SpinnerSize {
    Small,
    Medium,
    Large,
}

impl SpinnerSize {
    fn class(&self) -> &'static str {
        match self {
            SpinnerSize::Small => "spinner-sm",
            SpinnerSize::Medium => "spinner-md",
            SpinnerSize::Large => "spinner-lg",
        }
    }
}

/// Loading spinner component
#[component]
pub fn Spinner(
    #[prop(default = SpinnerSize::Medium)]
    size: SpinnerSize,
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
    /// Optional label text
    #[prop(default = String::new())]
    label: String,
    #[prop(default = false)]
    centered: bool,
) -> impl IntoView {
    let base_classes = format!("spinner spinner-circle {}", size.class());

    let full_classes = if class.is_empty() {
        base_classes
    } else {
        format!("{} {}", base_classes, class)
    };

    let container_class = if centered {
        "spinner-container spinner-centered"
    } else {
        "spinner-container"
    };

    view! {
        <div class=container_class>
            <div class=full_classes role="status" aria-live="polite">
                <div class="spinner-circle-inner"></div>
                <span class="sr-only">"Cargando..."</span>
            </div>
            {(!label.is_empty()).then(|| view! {
                <div class="spinner-label">{label.clone()}</div>
            })}
        </div>
    }
}

/// Centered spinner used while a page waits for the backend
#[component]
pub fn LoadingSpinner(
    #[prop(default = "Cargando...".to_string())]
    message: String,
) -> impl IntoView {
    view! {
        <Spinner size=SpinnerSize::Large label=message centered=true />
    }
}

/// Inline spinner for buttons
#[component]
pub fn InlineSpinner(
    #[prop(default = String::new())]
    class: String,
) -> impl IntoView {
    view! {
        <Spinner size=SpinnerSize::Small class=format!("spinner-inline {}", class) />
    }
}
