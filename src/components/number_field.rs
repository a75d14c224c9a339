//! Labeled numeric input with an Enter-to-generate shortcut.

use leptos::prelude::*;

/// A labeled `<input type="number">` bound to a string-valued getter.
///
/// The raw text is forwarded on every edit; parsing and clamping happen in
/// the form model when a render is triggered, never per keystroke.
#[component]
pub fn NumberField(
    id: &'static str,
    label: String,
    step: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    on_enter: Callback<()>,
) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            on_enter.run(());
        }
    };

    view! {
        <label for=id class="field">
            {label}
            <input
                id=id
                type="number"
                step=step
                class="field__number"
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                on:keydown=on_keydown
            />
        </label>
    }
}
