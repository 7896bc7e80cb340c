use leptos::prelude::*;

/// Numbered page buttons; `page` is 1-based. Renders nothing for a single page.
#[component]
pub fn Pagination(
    page: RwSignal<usize>,
    #[prop(into)]
    pages: Signal<usize>,
) -> impl IntoView {
    view! {
        <Show when=move || { pages.get() > 1 }>
            <nav class="pagination" aria-label="Paginación">
                {move || {
                    (1..=pages.get())
                        .map(|n| {
                            view! {
                                <button
                                    type="button"
                                    class="pagination-button"
                                    class:pagination-button-active=move || page.get() == n
                                    aria-current=move || (page.get() == n).then_some("page")
                                    on:click=move |_| page.set(n)
                                >
                                    {n}
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </nav>
        </Show>
    }
}
