//! Image picker for the admin edit forms.

use leptos::prelude::*;

use crate::core::http::FileUpload;

/// Read the first file selected in `input`
#[cfg(not(feature = "ssr"))]
pub async fn read_selected_file(input: &web_sys::HtmlInputElement) -> Option<FileUpload> {
    let file = input.files()?.get(0)?;
    let buffer = match wasm_bindgen_futures::JsFuture::from(file.array_buffer()).await {
        Ok(buffer) => buffer,
        Err(e) => {
            leptos::logging::warn!("failed to read {}: {:?}", file.name(), e);
            return None;
        }
    };
    let content_type = match file.type_() {
        t if t.is_empty() => "application/octet-stream".to_string(),
        t => t,
    };
    Some(FileUpload {
        file_name: file.name(),
        content_type,
        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
    })
}

/// File input that hands the picked image to `on_pick`
#[component]
pub fn ImageInput(
    #[prop(into)]
    on_pick: Callback<FileUpload>,
) -> impl IntoView {
    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(not(feature = "ssr"))]
        {
            use leptos::task::spawn_local;
            use wasm_bindgen::JsCast;

            let Some(input) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            spawn_local(async move {
                if let Some(upload) = read_selected_file(&input).await {
                    on_pick.run(upload);
                }
            });
        }
        #[cfg(feature = "ssr")]
        let _ = (ev, on_pick);
    };

    view! {
        <input
            type="file"
            accept="image/*"
            class="admin-input"
            on:change=on_change
        />
    }
}
