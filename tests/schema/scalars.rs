use lenient_rail::schema::json::{type_name, Bool, Float, Int, IntRange, Str};
use lenient_rail::{kinds, validate_collection, SchemaError};
use serde_json::{json, Value};

#[test]
fn lax_int_accepts_numbers_and_numeric_strings() {
    let raw = [json!(1), json!("2"), json!("c")];
    let batch = validate_collection(&raw, &Int).unwrap();

    assert_eq!(batch.successes(), &[1, 2]);
    assert_eq!(batch.original_error_indices(), &[2]);
    assert_eq!(batch.original_len(), 3);

    let merged = batch.with_errors();
    assert_eq!(merged[..2], [Ok(&1), Ok(&2)]);

    let error = merged[2].unwrap_err();
    assert_eq!(error.kind(), kinds::INT_PARSING);
    assert_eq!(error.input().unwrap().value, "'c'");
    assert_eq!(error.input().unwrap().type_name, "str");
}

#[test]
fn lax_int_distinguishes_failure_kinds() {
    let raw = [json!(2.0), json!(2.5), json!(1e30), json!(null), json!([1])];
    let batch = validate_collection(&raw, &Int).unwrap();

    assert_eq!(batch.successes(), &[2]);
    let found: Vec<&str> = batch.errors().iter().map(|e| e.kind()).collect();
    assert_eq!(
        found,
        vec![kinds::INT_FROM_FLOAT, kinds::INT_PARSING_SIZE, kinds::INT_TYPE, kinds::INT_TYPE]
    );
    assert_eq!(batch.original_error_indices(), &[1, 2, 3, 4]);
}

#[test]
fn strict_str_rejects_numbers() {
    let raw = [json!("a"), json!("b"), json!(3)];
    let batch = validate_collection(&raw, &Str::strict()).unwrap();

    assert_eq!(batch.successes(), &["a", "b"]);
    assert_eq!(batch.original_error_indices(), &[2]);
    assert_eq!(batch.errors()[0].kind(), kinds::STRING_TYPE);
    assert_eq!(batch.errors()[0].input().unwrap().type_name, "int");
}

#[test]
fn coercing_str_accepts_numbers() {
    let raw = [json!("a"), json!("b"), json!(3)];
    let batch = validate_collection(&raw, &Str::coerce_numbers()).unwrap();

    assert_eq!(batch.successes(), &["a", "b", "3"]);
    assert!(batch.is_complete());
    assert_eq!(Str::default(), Str::strict());
}

#[test]
fn float_and_bool_coercions() {
    let floats =
        validate_collection(&[json!(1), json!("2.5"), json!("x"), json!(true)], &Float).unwrap();
    assert_eq!(floats.successes(), &[1.0, 2.5]);
    assert_eq!(
        floats.errors().iter().map(|e| e.kind()).collect::<Vec<_>>(),
        vec![kinds::FLOAT_PARSING, kinds::FLOAT_TYPE]
    );

    let raw = [json!(true), json!("yes"), json!(" Off "), json!(0), json!(2), json!("maybe")];
    let bools = validate_collection(&raw, &Bool).unwrap();
    assert_eq!(bools.successes(), &[true, true, false, false]);
    assert_eq!(bools.original_error_indices(), &[4, 5]);
    assert!(bools.errors().iter().all(|e| e.kind() == kinds::BOOL_PARSING));
}

#[test]
fn int_range_captures_out_of_bounds_values() {
    let raw = [json!(-1), json!(0), json!(10), json!(11), json!("5")];
    let batch = validate_collection(&raw, &IntRange::new().min(0).max(10)).unwrap();

    assert_eq!(batch.successes(), &[0, 10, 5]);
    assert_eq!(batch.original_error_indices(), &[0, 3]);
    assert_eq!(batch.errors()[0].kind(), kinds::GREATER_THAN_EQUAL);
    assert_eq!(batch.errors()[1].message(), "Input should be less than or equal to 10");
}

#[test]
fn misconfigured_range_is_not_captured() {
    let raw = [json!(1), json!(2)];
    let err = validate_collection(&raw, &IntRange::new().min(5).max(1)).unwrap_err();

    assert!(matches!(err, SchemaError::Misconfigured { .. }));
    assert!(err.to_string().contains("min 5 is greater than max 1"));
}

#[test]
fn misconfigured_range_on_empty_batch_is_never_run() {
    let raw: [Value; 0] = [];
    let batch = validate_collection(&raw, &IntRange::new().min(5).max(1)).unwrap();
    assert!(batch.is_empty());
}

#[test]
fn type_names_follow_json_kinds() {
    assert_eq!(type_name(&json!(null)), "null");
    assert_eq!(type_name(&json!(1)), "int");
    assert_eq!(type_name(&json!(1.5)), "float");
    assert_eq!(type_name(&json!("s")), "str");
    assert_eq!(type_name(&json!({})), "dict");
    assert_eq!(type_name(&json!([])), "list");
    assert_eq!(type_name(&json!(false)), "bool");
}
