use lenient_rail::{LenientCollection, ValidationError};

fn batch() -> LenientCollection<u32> {
    vec![
        Ok(1),
        Err(ValidationError::new("int_parsing", "Input should be a valid integer")
            .with_input("'c'", "str")),
        Ok(3),
        Err(ValidationError::new("missing", "Field required").at("user_id")),
    ]
    .into_iter()
    .collect()
}

#[test]
fn report_counts_and_indexes_failures() {
    let report = batch().report();

    assert_eq!(report.original_len, 4);
    assert_eq!(report.accepted, 2);
    assert_eq!(report.rejected, 2);
    assert_eq!(report.errors.iter().map(|e| e.index).collect::<Vec<_>>(), vec![1, 3]);
    assert_eq!(report.errors[1].error.loc_path(), "user_id");
    assert!(!report.is_clean());
}

#[test]
fn clean_batch_reports_clean() {
    let clean: LenientCollection<u32> = vec![Ok(1)].into_iter().collect();
    let report = clean.report();

    assert!(report.is_clean());
    assert_eq!(report.to_string(), "0 validation errors");
}

#[test]
fn display_is_compact_and_alternate_is_multiline() {
    let report = batch().report();

    assert_eq!(
        report.to_string(),
        "2 validation errors: 1: Input should be a valid integer [type=int_parsing, \
         input_value='c', input_type=str]; 3.user_id: Field required [type=missing]"
    );
    assert_eq!(
        format!("{report:#}"),
        "2 validation errors\n1\n  Input should be a valid integer [type=int_parsing, \
         input_value='c', input_type=str]\n3.user_id\n  Field required [type=missing]"
    );
}

#[cfg(feature = "serde")]
#[test]
fn report_serializes_with_flattened_errors() {
    let json = serde_json::to_value(batch().report()).unwrap();

    assert_eq!(json["original_len"], 4);
    assert_eq!(json["rejected"], 2);
    assert_eq!(json["errors"][0]["index"], 1);
    assert_eq!(json["errors"][0]["kind"], "int_parsing");
    assert_eq!(json["errors"][0]["input"]["value"], "'c'");
    assert_eq!(json["errors"][1]["loc"], serde_json::json!(["user_id"]));

    let back: lenient_rail::BatchReport = serde_json::from_value(json).unwrap();
    assert_eq!(back, batch().report());
}
