//! The generator page: form, preview, and download actions.
//!
//! Field edits only mutate state; rendering is the explicit action, run on
//! the Generate button, on Enter in any field, and once when the preview
//! container first mounts.

use leptos::prelude::*;

use qrgen::ExportFormat;

use crate::assets;
use crate::components::number_field::NumberField;
use crate::consts::{MAX_LOGO_RATIO, MAX_QR_SIZE, MIN_LOGO_RATIO, MIN_QR_SIZE};
use crate::render::{QrRenderer, StyledQr};
use crate::state::form::QrForm;
use crate::util::download;

/// Single-page generator UI.
#[component]
pub fn GeneratorPage() -> impl IntoView {
    let form = expect_context::<RwSignal<QrForm>>();
    let qr = expect_context::<RwSignal<StyledQr>>();

    let preview_ref = NodeRef::<leptos::html::Div>::new();

    // Build options (clamping the form as a side effect), re-render, and
    // replace the preview contents.
    let run_render = move || {
        let options = form.write().build_options();
        let mut renderer = qr.write();
        match renderer.update(options) {
            Ok(()) => {
                if let Some(container) = preview_ref.get_untracked() {
                    renderer.mount(&container);
                }
            }
            Err(err) => log::warn!("QR render failed: {err}"),
        }
    };

    // First render once the preview container exists.
    let initialized = RwSignal::new(false);
    Effect::new(move || {
        if preview_ref.get().is_some() && !initialized.get_untracked() {
            initialized.set(true);
            run_render();
        }
    });

    let on_generate = move |_| run_render();
    let on_enter = Callback::new(move |()| run_render());
    let enter_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            run_render();
        }
    };

    let set_size = Callback::new(move |v: String| form.update(|f| f.size_input = v));
    let set_ratio = Callback::new(move |v: String| form.update(|f| f.ratio_input = v));

    let on_download = move |_| {
        let exported = qr.with_untracked(|renderer| renderer.export(ExportFormat::Png));
        match exported {
            Ok(bytes) => download::save_file("qr-code.png", "image/png", &bytes),
            Err(err) => log::warn!("QR export failed: {err}"),
        }
    };

    view! {
        <div class="generator-page">
            <h1 class="generator-page__title">"Generate a styled QR code"</h1>
            <img class="generator-page__logo" alt="Logo" src=assets::logo_data_url()/>

            <label for="qr-source" class="field">
                "String to encode"
                <input
                    id="qr-source"
                    type="url"
                    class="field__source"
                    prop:value=move || form.get().source.clone()
                    on:input=move |ev| form.update(|f| f.source = event_target_value(&ev))
                    on:keydown=enter_keydown
                />
            </label>

            <label for="embed-logo" class="field">
                "Embed the logo"
                <input
                    id="embed-logo"
                    type="checkbox"
                    prop:checked=move || form.get().logo_enabled
                    on:change=move |ev| form.update(|f| f.logo_enabled = event_target_checked(&ev))
                    on:keydown=enter_keydown
                />
            </label>

            <NumberField
                id="qr-size"
                label=format!("QR size ({MIN_QR_SIZE}px - {MAX_QR_SIZE}px)")
                step="10"
                value=Signal::derive(move || form.get().size_input.clone())
                on_input=set_size
                on_enter=on_enter
            />
            <NumberField
                id="logo-ratio"
                label=format!("Logo size ({MIN_LOGO_RATIO} - {MAX_LOGO_RATIO})")
                step="0.01"
                value=Signal::derive(move || form.get().ratio_input.clone())
                on_input=set_ratio
                on_enter=on_enter
            />

            <button type="button" class="btn btn--primary" on:click=on_generate>
                "Generate a QR code"
            </button>

            <div class="generator-page__preview" node_ref=preview_ref></div>

            <button type="button" class="btn" on:click=on_download>
                "Download PNG"
            </button>

            <Show when=move || !form.get().error_message.is_empty()>
                <p class="generator-page__error">{move || form.get().error_message.clone()}</p>
            </Show>
        </div>
    }
}
