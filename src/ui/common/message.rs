//! Error banners

use crate::ui::{Icon, icons};
use leptos::prelude::*;

/// Error message component
/// Displays an error message with an alert icon
#[component]
pub fn ErrorMessage(
    /// Error signal - shows message when Some, hidden when None
    #[prop(into)]
    error: Signal<Option<String>>,
    /// Shows a dismiss button when set
    #[prop(optional, into)]
    on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div class="error-message" role="alert">
                <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                <span>{move || error.get().unwrap_or_default()}</span>
                {on_dismiss.map(|dismiss| view! {
                    <button
                        type="button"
                        class="error-message-dismiss"
                        aria-label="Cerrar"
                        on:click=move |_| dismiss.run(())
                    >
                        <Icon name=icons::X class="w-4 h-4"/>
                    </button>
                })}
            </div>
        </Show>
    }
}
