use lenient_rail::{LenientCollection, ReportFormat, ValidationError};

fn batch() -> LenientCollection<&'static str> {
    LenientCollection::from_parts(
        vec!["a", "b"],
        [
            (
                0,
                ValidationError::new("string_type", "Input should be a valid string")
                    .with_input(3, "int"),
            ),
            (3, ValidationError::new("string_type", "Input should be a valid string").at("name")),
        ],
        4,
    )
    .unwrap()
}

#[test]
fn default_format_is_multiline() {
    let text = ReportFormat::default().title("EventList").render(&batch());

    assert_eq!(
        text,
        "2 validation errors for EventList\n\
         0\n  Input should be a valid string [type=string_type, input_value=3, input_type=int]\n\
         3.name\n  Input should be a valid string [type=string_type]"
    );
}

#[test]
fn compact_format_joins_entries() {
    let format = ReportFormat { separator: " | ".into(), ..ReportFormat::compact() };
    let text = format.render(&batch());

    assert_eq!(
        text,
        "2 validation errors: 0: Input should be a valid string [type=string_type, \
         input_value=3, input_type=int] | 3.name: Input should be a valid string [type=string_type]"
    );
}

#[test]
fn redacted_format_hides_inputs() {
    let text = ReportFormat::redacted().render(&batch());

    assert!(!text.contains("input_value"));
    assert!(text.contains("[type=string_type]"));
}

#[test]
fn indices_can_be_hidden() {
    let format = ReportFormat { show_index: false, ..ReportFormat::compact() };
    let text = format.render(&batch());

    assert_eq!(
        text,
        "2 validation errors: Input should be a valid string [type=string_type, input_value=3, \
         input_type=int]; name: Input should be a valid string [type=string_type]"
    );
}

#[test]
fn custom_indent_is_applied() {
    let format = ReportFormat { indent: "\t".into(), ..ReportFormat::default() };
    let text = format.render(&batch());

    assert!(text.contains("\n0\n\tInput should be a valid string"));
}

#[test]
fn render_and_render_report_agree() {
    let format = ReportFormat::default();
    let batch = batch();

    assert_eq!(format.render(&batch), format.render_report(&batch.report()));
}
