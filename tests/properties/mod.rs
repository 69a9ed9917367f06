use lenient_rail::schema::Opaque;
use lenient_rail::{
    schema_fn, validate_collection, LenientCollection, Outcome, SchemaError, ValidationError,
};
use proptest::prelude::*;

fn outcome_strategy() -> impl Strategy<Value = Outcome<u32, u32>> {
    prop_oneof![any::<u32>().prop_map(Outcome::Success), any::<u32>().prop_map(Outcome::Failure)]
}

fn even(raw: &i64) -> Result<i64, ValidationError> {
    if raw % 2 == 0 {
        Ok(*raw)
    } else {
        Err(ValidationError::new("even", "Input should be even").with_input(raw, "int"))
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Counts always add up and every error has exactly one index.
    #[test]
    fn prop_lengths_add_up(outcomes in prop::collection::vec(outcome_strategy(), 0..64)) {
        let batch: LenientCollection<u32, u32> = outcomes.iter().cloned().collect();

        prop_assert_eq!(batch.original_len(), outcomes.len());
        prop_assert_eq!(batch.original_len(), batch.len() + batch.errors().len());
        prop_assert_eq!(batch.errors().len(), batch.original_error_indices().len());
    }

    /// Indices are strictly increasing, in range, and point at failures.
    #[test]
    fn prop_indices_point_at_failures(outcomes in prop::collection::vec(outcome_strategy(), 0..64)) {
        let batch: LenientCollection<u32, u32> = outcomes.iter().cloned().collect();
        let indices = batch.original_error_indices();

        prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(indices.iter().all(|&i| i < batch.original_len()));
        for (&index, error) in indices.iter().zip(batch.errors()) {
            prop_assert_eq!(&outcomes[index], &Outcome::Failure(*error));
        }
    }

    /// Successes keep their relative input order.
    #[test]
    fn prop_successes_preserve_order(outcomes in prop::collection::vec(outcome_strategy(), 0..64)) {
        let batch: LenientCollection<u32, u32> = outcomes.iter().cloned().collect();
        let expected: Vec<u32> = outcomes.iter().filter_map(|o| o.success()).collect();

        prop_assert_eq!(batch.successes(), expected.as_slice());
    }

    /// Reconstruction gives back the input sequence of outcomes.
    #[test]
    fn prop_reconstruction_is_lossless(outcomes in prop::collection::vec(outcome_strategy(), 0..64)) {
        let batch: LenientCollection<u32, u32> = outcomes.iter().cloned().collect();
        let expected: Vec<Result<u32, u32>> = outcomes.iter().cloned().map(Outcome::into_result).collect();

        let borrowed: Vec<Result<u32, u32>> =
            batch.iter_with_errors().map(|r| r.copied().map_err(|e| *e)).collect();
        prop_assert_eq!(&borrowed, &expected);
        prop_assert_eq!(batch.iter_with_errors().len(), outcomes.len());
        prop_assert_eq!(batch.into_with_errors(), expected);
    }

    /// Parts taken apart and checked back in give the same collection.
    #[test]
    fn prop_parts_round_trip(outcomes in prop::collection::vec(outcome_strategy(), 0..64)) {
        let batch: LenientCollection<u32, u32> = outcomes.into_iter().collect();
        let original_len = batch.original_len();
        let (successes, errors, indices) = batch.clone().into_parts();

        let rebuilt = LenientCollection::from_raw_parts(successes, errors, indices, original_len);
        prop_assert_eq!(rebuilt, Ok(batch));
    }

    /// Per-item validation captures exactly the items the schema rejects.
    #[test]
    fn prop_validation_partitions_by_predicate(raw in prop::collection::vec(any::<i64>(), 0..64)) {
        let batch = validate_collection(&raw, &schema_fn(even)).unwrap();

        let expected_indices: Vec<usize> =
            raw.iter().enumerate().filter(|(_, v)| *v % 2 != 0).map(|(i, _)| i).collect();
        prop_assert_eq!(batch.original_error_indices(), expected_indices.as_slice());
        prop_assert!(batch.iter().all(|v| v % 2 == 0));
        prop_assert_eq!(batch.original_len(), raw.len());
    }

    /// Whole-sequence validation either accepts everything or fails.
    #[test]
    fn prop_whole_mode_never_captures(raw in prop::collection::vec(any::<i64>(), 0..32)) {
        let result = validate_collection(&raw, &Opaque(schema_fn(even)));

        match result {
            Ok(batch) => {
                prop_assert!(batch.is_complete());
                prop_assert_eq!(batch.successes(), raw.as_slice());
            }
            Err(err) => prop_assert!(raw.iter().any(|v| v % 2 != 0), "unexpected {}", err),
        }
    }

    /// A structural failure anywhere aborts the whole batch.
    #[test]
    fn prop_structural_failure_propagates(
        raw in prop::collection::vec(0_i64..100, 1..32),
        at in any::<prop::sample::Index>(),
    ) {
        let poison = at.index(raw.len());
        let mut raw = raw;
        raw[poison] = -1;

        let schema = schema_fn(|value: &i64| match *value {
            -1 => Err(SchemaError::misconfigured("poisoned", "sentinel reached")),
            v if v % 2 == 0 => Ok(v),
            _ => Err(SchemaError::from(ValidationError::new("even", "odd"))),
        });

        let err = validate_collection(&raw, &schema).unwrap_err();
        prop_assert!(!err.is_invalid());
    }
}
