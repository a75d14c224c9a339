use super::*;

use crate::state::form::QrForm;

// =============================================================
// StyledQr
// =============================================================

#[test]
fn update_caches_the_rendered_document() {
    let mut renderer = StyledQr::default();
    let options = QrForm::default().build_options();
    renderer.update(options).expect("render should succeed");

    let bytes = renderer
        .export(ExportFormat::Png)
        .expect("export should succeed");
    assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
}

#[test]
fn repeated_updates_with_unchanged_state_are_idempotent() {
    let mut form = QrForm::default();

    let mut first = StyledQr::default();
    first.update(form.build_options()).expect("render should succeed");
    let mut second = StyledQr::default();
    second.update(form.build_options()).expect("render should succeed");

    assert_eq!(first, second);
}

#[test]
fn export_before_any_update_is_rejected() {
    let renderer = StyledQr::default();
    assert!(matches!(
        renderer.export(ExportFormat::Png),
        Err(qrgen::RenderError::NoOptions)
    ));
}

#[test]
fn exported_png_matches_the_clamped_size() {
    let mut form = QrForm { size_input: "50".to_owned(), ..QrForm::default() };
    let mut renderer = StyledQr::default();
    renderer.update(form.build_options()).expect("render should succeed");

    let bytes = renderer
        .export(ExportFormat::Png)
        .expect("export should succeed");
    let decoded = image_size(&bytes);
    assert_eq!(decoded, (100, 100));
}

/// Pull width/height out of a PNG header (big-endian u32s at offsets 16/20).
fn image_size(png: &[u8]) -> (u32, u32) {
    let field = |at: usize| {
        let mut v: u32 = 0;
        for byte in &png[at..at + 4] {
            v = (v << 8) | u32::from(*byte);
        }
        v
    };
    (field(16), field(20))
}
