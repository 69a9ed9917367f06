use lenient_rail::{kinds, InputValue, LocSegment, ValidationError};

#[test]
fn new_error_has_no_input_and_no_location() {
    let err = ValidationError::new(kinds::INT_TYPE, "Input should be a valid integer");

    assert_eq!(err.kind(), "int_type");
    assert_eq!(err.message(), "Input should be a valid integer");
    assert!(err.input().is_none());
    assert!(err.loc().is_empty());
    assert_eq!(err.to_string(), "Input should be a valid integer [type=int_type]");
}

#[test]
fn input_is_recorded_as_display_text() {
    let err = ValidationError::new(kinds::GREATER_THAN_EQUAL, "Input should be >= 0")
        .with_input(-3, "int");

    assert_eq!(
        err.input(),
        Some(&InputValue { value: "-3".into(), type_name: "int".into() })
    );
    assert_eq!(
        err.to_string(),
        "Input should be >= 0 [type=greater_than_equal, input_value=-3, input_type=int]"
    );
}

#[test]
fn location_segments_are_prepended() {
    let err = ValidationError::new("missing", "Field required")
        .at("user_id")
        .at_index(4)
        .at(String::from("events"));

    assert_eq!(
        err.loc(),
        &[
            LocSegment::Field("events".into()),
            LocSegment::Index(4),
            LocSegment::Field("user_id".into()),
        ]
    );
    assert_eq!(err.loc_path(), "events.4.user_id");
    assert!(err.to_string().starts_with("events.4.user_id: Field required"));
}

#[test]
fn segments_convert_from_common_types() {
    assert_eq!(LocSegment::from(3_usize), LocSegment::Index(3));
    assert_eq!(LocSegment::from("name").to_string(), "name");
    assert_eq!(LocSegment::from(String::from("x")), LocSegment::Field("x".into()));
}

#[test]
fn validation_error_is_a_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
    assert_error(&ValidationError::new("k", "m"));
}
