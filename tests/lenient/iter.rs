use lenient_rail::{LenientCollection, Outcome};

fn batch(pattern: &str) -> LenientCollection<usize, usize> {
    pattern
        .chars()
        .enumerate()
        .map(|(i, c)| if c == 'x' { Outcome::Failure(i) } else { Outcome::Success(i) })
        .collect()
}

#[test]
fn iterator_reports_exact_size() {
    let batch = batch(".x.x.");
    let mut iter = batch.iter_with_errors();

    assert_eq!(iter.len(), 5);
    iter.next();
    iter.next();
    assert_eq!(iter.len(), 3);
}

#[test]
fn leading_and_trailing_errors_are_placed_correctly() {
    let batch = batch("xx..xx");
    let positions: Vec<usize> =
        batch.iter_with_errors().map(|item| *item.unwrap_or_else(|e| e)).collect();

    assert_eq!(positions, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn owned_iterator_places_trailing_errors() {
    let owned: Vec<_> = batch("..xxx").into_with_errors();
    assert_eq!(owned, vec![Ok(0), Ok(1), Err(2), Err(3), Err(4)]);
}

#[test]
fn iterators_are_fused() {
    let batch = batch("x.");
    let mut iter = batch.iter_with_errors();
    assert!(iter.by_ref().count() == 2);
    assert!(iter.next().is_none());
    assert!(iter.next().is_none());
}

#[test]
fn every_pattern_of_four_items_is_reconstructed() {
    for mask in 0_u8..16 {
        let pattern: String =
            (0..4).map(|bit| if mask & (1 << bit) != 0 { 'x' } else { '.' }).collect();
        let batch = batch(&pattern);

        let positions: Vec<usize> =
            batch.iter_with_errors().map(|item| *item.unwrap_or_else(|e| e)).collect();
        assert_eq!(positions, vec![0, 1, 2, 3], "pattern {pattern}");

        for (position, item) in batch.iter_with_errors().enumerate() {
            assert_eq!(item.is_err(), pattern.as_bytes()[position] == b'x');
        }
    }
}
