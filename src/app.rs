//! Root application component and shared context provision.

use leptos::prelude::*;

use crate::pages::generator::GeneratorPage;
use crate::render::StyledQr;
use crate::state::form::QrForm;

/// Root component.
///
/// Provides the form state and the renderer instance as contexts so the
/// page and its components share one of each.
#[component]
pub fn App() -> impl IntoView {
    let form = RwSignal::new(QrForm::default());
    let qr = RwSignal::new(StyledQr::default());

    provide_context(form);
    provide_context(qr);

    view! { <GeneratorPage/> }
}
