use super::*;

#[test]
fn training_type_label_title_cases_words() {
    assert_eq!(training_type_label(Some("professional_training")), "Professional Training");
    assert_eq!(training_type_label(Some("GENERAL-training")), "General Training");
    assert_eq!(training_type_label(Some("Professional Training")), "Professional Training");
    assert_eq!(training_type_label(Some("work__based")), "Work Based");
}

#[test]
fn training_type_label_falls_back_when_missing() {
    assert_eq!(training_type_label(None), NOT_SPECIFIED);
    assert_eq!(training_type_label(Some("   ")), NOT_SPECIFIED);
}

#[test]
fn relevance_label_capitalizes_first_letter() {
    assert_eq!(relevance_label(Some("high")), "High");
    assert_eq!(relevance_label(None), NOT_SPECIFIED);
}

#[test]
fn hours_label_groups_thousands() {
    assert_eq!(hours_label(Some(120.0)), "120");
    assert_eq!(hours_label(Some(1500.0)), "1,500");
    assert_eq!(hours_label(Some(1_234_567.0)), "1,234,567");
}

#[test]
fn hours_label_zero_or_missing_is_not_available() {
    assert_eq!(hours_label(Some(0.0)), NOT_AVAILABLE);
    assert_eq!(hours_label(None), NOT_AVAILABLE);
}

#[test]
fn credits_label_formats_numbers() {
    assert_eq!(credits_label(Some(30.0)), "30 ECTS");
    assert_eq!(credits_label(Some(2.5)), "2.5 ECTS");
    assert_eq!(credits_label(None), "0 ECTS");
}

#[test]
fn or_placeholder_ignores_blank_values() {
    assert_eq!(or_placeholder(Some("cert.pdf"), "Document"), "cert.pdf");
    assert_eq!(or_placeholder(Some(""), "Document"), "Document");
    assert_eq!(or_placeholder(None, "Document"), "Document");
}
