use lenient_rail::{invalid, kinds, schema_fn, validate_collection};

#[test]
fn invalid_macro_formats_message() {
    let limit = 3;
    let err = invalid!(kinds::VALUE_ERROR, "expected at most {limit} tags, got {}", 5);

    assert_eq!(err.kind(), "value_error");
    assert_eq!(err.message(), "expected at most 3 tags, got 5");
    assert!(err.input().is_none());
}

#[test]
fn invalid_macro_accepts_owned_kinds() {
    let kind = String::from("custom");
    let err = invalid!(kind, "plain message");
    assert_eq!(err.kind(), "custom");
}

#[test]
fn invalid_macro_inside_schema() {
    let tags = schema_fn(|raw: &Vec<&str>| {
        if raw.len() <= 2 {
            Ok(raw.len())
        } else {
            Err(invalid!(kinds::VALUE_ERROR, "too many tags: {}", raw.len()).at("tags"))
        }
    });

    let batch = validate_collection(&[vec!["a"], vec!["a", "b", "c"]], &tags).unwrap();
    assert_eq!(batch.successes(), &[1]);
    assert_eq!(batch.errors()[0].to_string(), "tags: too many tags: 3 [type=value_error]");
}
