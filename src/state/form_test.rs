#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_source_is_the_placeholder_url() {
    let form = QrForm::default();
    assert_eq!(form.source, "https://example.com/");
}

#[test]
fn default_logo_is_enabled() {
    assert!(QrForm::default().logo_enabled);
}

#[test]
fn default_numeric_fields_are_in_range() {
    let mut form = QrForm::default();
    assert_eq!(form.validate(), (200, 0.5));
}

#[test]
fn default_error_message_is_empty() {
    assert!(QrForm::default().error_message.is_empty());
}

// =============================================================
// validate — size clamping
// =============================================================

#[test]
fn size_within_range_is_unchanged() {
    let mut form = QrForm { size_input: "550".to_owned(), ..QrForm::default() };
    assert_eq!(form.validate().0, 550);
}

#[test]
fn size_at_the_bounds_is_accepted_as_is() {
    let mut form = QrForm { size_input: "100".to_owned(), ..QrForm::default() };
    assert_eq!(form.validate().0, 100);
    form.size_input = "1000".to_owned();
    assert_eq!(form.validate().0, 1000);
}

#[test]
fn size_above_max_snaps_to_max() {
    let mut form = QrForm { size_input: "1500".to_owned(), ..QrForm::default() };
    assert_eq!(form.validate().0, 1000);
}

#[test]
fn negative_size_snaps_to_min() {
    let mut form = QrForm { size_input: "-5".to_owned(), ..QrForm::default() };
    assert_eq!(form.validate().0, 100);
}

#[test]
fn non_numeric_size_takes_the_minimum_bound() {
    let mut form = QrForm { size_input: "abc".to_owned(), ..QrForm::default() };
    assert_eq!(form.validate().0, 100);
    form.size_input = String::new();
    assert_eq!(form.validate().0, 100);
}

#[test]
fn clamped_size_is_written_back_to_the_field() {
    let mut form = QrForm { size_input: "1500".to_owned(), ..QrForm::default() };
    form.validate();
    assert_eq!(form.size_input, "1000");
}

// =============================================================
// validate — ratio clamping
// =============================================================

#[test]
fn ratio_within_range_is_unchanged() {
    let mut form = QrForm { ratio_input: "0.3".to_owned(), ..QrForm::default() };
    assert!((form.validate().1 - 0.3).abs() < f64::EPSILON);
}

#[test]
fn ratio_at_the_bounds_is_accepted_as_is() {
    let mut form = QrForm { ratio_input: "0.1".to_owned(), ..QrForm::default() };
    assert!((form.validate().1 - 0.1).abs() < f64::EPSILON);
    form.ratio_input = "0.5".to_owned();
    assert!((form.validate().1 - 0.5).abs() < f64::EPSILON);
}

#[test]
fn ratio_above_max_snaps_to_max() {
    let mut form = QrForm { ratio_input: "0.8".to_owned(), ..QrForm::default() };
    assert!((form.validate().1 - 0.5).abs() < f64::EPSILON);
    assert_eq!(form.ratio_input, "0.5");
}

#[test]
fn non_numeric_ratio_takes_the_minimum_bound() {
    let mut form = QrForm { ratio_input: "lots".to_owned(), ..QrForm::default() };
    assert!((form.validate().1 - 0.1).abs() < f64::EPSILON);
}

#[test]
fn nan_input_takes_the_minimum_bound() {
    let mut form = QrForm { ratio_input: "NaN".to_owned(), ..QrForm::default() };
    assert!((form.validate().1 - 0.1).abs() < f64::EPSILON);
}

// =============================================================
// build_options
// =============================================================

#[test]
fn options_are_square_with_fixed_styling() {
    let mut form = QrForm::default();
    let options = form.build_options();
    assert_eq!(options.width, options.height);
    assert_eq!(options.format, OutputFormat::Svg);
    assert_eq!(options.corners_square.color, "#0b5d2e");
    assert_eq!(options.corners_square.style, CornerStyle::ExtraRounded);
    assert_eq!(options.corners_dot.color, "#16a92e");
    assert_eq!(options.image_options.margin, 5);
}

#[test]
fn rebuilding_with_unchanged_state_yields_a_deep_equal_value() {
    let mut form = QrForm::default();
    let first = form.build_options();
    let second = form.build_options();
    assert_eq!(first, second);
}

#[test]
fn logo_toggle_controls_the_image_field() {
    let mut form = QrForm { logo_enabled: false, ..QrForm::default() };
    assert!(form.build_options().image.is_none());

    form.logo_enabled = true;
    assert_eq!(form.build_options().image.as_deref(), Some(assets::LOGO_PNG));
}

#[test]
fn out_of_range_inputs_are_corrected_before_building() {
    let mut form = QrForm {
        source: "https://example.com".to_owned(),
        logo_enabled: true,
        size_input: "50".to_owned(),
        ratio_input: "0.8".to_owned(),
        error_message: String::new(),
    };
    let options = form.build_options();
    assert_eq!(options.width, 100);
    assert_eq!(options.height, 100);
    assert_eq!(options.data, "https://example.com");
    assert!(options.image.is_some());
    assert!((options.image_options.size - 0.5).abs() < f64::EPSILON);
    assert_eq!(options.image_options.margin, 5);
}

#[test]
fn empty_source_still_builds_options() {
    let mut form = QrForm { source: String::new(), ..QrForm::default() };
    assert_eq!(form.build_options().data, "");
}

#[test]
fn source_text_is_never_validated() {
    let mut form = QrForm { source: "not a url at all \u{1f600}".to_owned(), ..QrForm::default() };
    assert_eq!(form.build_options().data, "not a url at all \u{1f600}");
}
