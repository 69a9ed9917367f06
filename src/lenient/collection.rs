//! The partitioning collector.
//!
//! [`LenientCollection`] consumes a stream of [`Outcome`]s in one pass, keeps
//! the successes in input order and records every captured error next to the
//! position its item held in the input. The interleaved view is rebuilt on
//! demand by [`LenientCollection::with_errors`].

use crate::lenient::iter::{ErrorEntries, IntoWithErrors, WithErrors};
use crate::lenient::Outcome;
use crate::types::{ErrorVec, IndexVec, InvariantError, ValidationError};
use core::ops::Deref;

#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

/// Validated items of one batch plus the failures that were set aside.
///
/// # Invariants
///
/// - `original_len() == len() + errors().len()`
/// - `original_error_indices()` has one entry per error, is strictly
///   increasing and every entry is below `original_len()`
///
/// Both constructors uphold these: the collector by assigning indices itself,
/// [`from_parts`](Self::from_parts) by checking. Fields are never exposed
/// mutably, so a built collection cannot drift out of shape.
///
/// # Examples
///
/// ```
/// use lenient_rail::{LenientCollection, Outcome};
///
/// let batch: LenientCollection<i32, &str> = vec![
///     Outcome::Success(1),
///     Outcome::Success(2),
///     Outcome::Failure("c is not an integer"),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(batch.successes(), &[1, 2]);
/// assert_eq!(batch.errors(), &["c is not an integer"]);
/// assert_eq!(batch.original_error_indices(), &[2]);
/// assert_eq!(batch.with_errors(), vec![Ok(&1), Ok(&2), Err(&"c is not an integer")]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LenientCollection<T, E = ValidationError> {
    successes: Vec<T>,
    errors: ErrorVec<E>,
    original_error_indices: IndexVec,
    original_len: usize,
}

impl<T, E> Default for LenientCollection<T, E> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> LenientCollection<T, E> {
    /// Creates the collection of an empty batch.
    #[inline]
    pub fn new() -> Self {
        Self {
            successes: Vec::new(),
            errors: ErrorVec::new(),
            original_error_indices: IndexVec::new(),
            original_len: 0,
        }
    }

    /// Partitions `outcomes` in a single pass.
    ///
    /// The position of each outcome in the iterator becomes the original index
    /// of its error.
    pub fn from_outcomes<I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = Outcome<T, E>>,
    {
        let outcomes = outcomes.into_iter();
        let mut collection = Self {
            successes: Vec::with_capacity(outcomes.size_hint().0),
            ..Self::new()
        };
        for outcome in outcomes {
            collection.record(outcome);
        }
        collection
    }

    /// Wraps items that were validated as one unit, without per-item capture.
    #[inline]
    pub(crate) fn from_successes(successes: Vec<T>) -> Self {
        Self { original_len: successes.len(), successes, ..Self::new() }
    }

    /// Rebuilds a collection from separately stored parts, checking every invariant.
    ///
    /// `errors` pairs each error with its original index.
    ///
    /// # Errors
    ///
    /// Returns an [`InvariantError`] when the indices are unordered, duplicated
    /// or out of range, or when the counts do not add up to `original_len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lenient_rail::{InvariantError, LenientCollection};
    ///
    /// let ok = LenientCollection::from_parts(vec!['a', 'c'], [(1, "bad b")], 3).unwrap();
    /// assert_eq!(ok.with_errors(), vec![Ok(&'a'), Err(&"bad b"), Ok(&'c')]);
    ///
    /// let unordered = LenientCollection::from_parts(vec!['a'], [(2, "x"), (1, "y")], 3);
    /// assert!(matches!(unordered, Err(InvariantError::UnorderedIndex { .. })));
    /// ```
    pub fn from_parts<I>(
        successes: Vec<T>,
        errors: I,
        original_len: usize,
    ) -> Result<Self, InvariantError>
    where
        I: IntoIterator<Item = (usize, E)>,
    {
        let mut collected_errors = ErrorVec::new();
        let mut indices = IndexVec::new();
        for (position, (index, error)) in errors.into_iter().enumerate() {
            if index >= original_len {
                return Err(InvariantError::IndexOutOfRange { index, original_len });
            }
            if let Some(&previous) = indices.last() {
                if index <= previous {
                    return Err(InvariantError::UnorderedIndex { position, index, previous });
                }
            }
            indices.push(index);
            collected_errors.push(error);
        }

        if successes.len() + collected_errors.len() != original_len {
            return Err(InvariantError::LengthMismatch {
                original_len,
                successes: successes.len(),
                errors: collected_errors.len(),
            });
        }

        Ok(Self {
            successes,
            errors: collected_errors,
            original_error_indices: indices,
            original_len,
        })
    }

    /// Inverse of [`into_parts`](Self::into_parts): errors and their indices
    /// arrive as two parallel sequences.
    ///
    /// # Errors
    ///
    /// [`InvariantError::IndexCountMismatch`] when the two sequences differ in
    /// length, otherwise whatever [`from_parts`](Self::from_parts) reports.
    ///
    /// # Examples
    ///
    /// ```
    /// use lenient_rail::{InvariantError, LenientCollection};
    ///
    /// let batch = LenientCollection::from_parts(vec![1, 3], [(1, "two")], 3).unwrap();
    /// let (successes, errors, indices) = batch.clone().into_parts();
    /// let rebuilt = LenientCollection::from_raw_parts(successes, errors, indices, 3).unwrap();
    /// assert_eq!(rebuilt, batch);
    ///
    /// let short = LenientCollection::<i32, &str>::from_raw_parts(vec![1], ["a", "b"], [1], 3);
    /// assert_eq!(short, Err(InvariantError::IndexCountMismatch { errors: 2, indices: 1 }));
    /// ```
    pub fn from_raw_parts<EI, II>(
        successes: Vec<T>,
        errors: EI,
        original_error_indices: II,
        original_len: usize,
    ) -> Result<Self, InvariantError>
    where
        EI: IntoIterator<Item = E>,
        II: IntoIterator<Item = usize>,
    {
        let errors: ErrorVec<E> = errors.into_iter().collect();
        let indices: IndexVec = original_error_indices.into_iter().collect();
        if errors.len() != indices.len() {
            return Err(InvariantError::IndexCountMismatch {
                errors: errors.len(),
                indices: indices.len(),
            });
        }
        Self::from_parts(successes, indices.into_iter().zip(errors), original_len)
    }

    fn record(&mut self, outcome: Outcome<T, E>) {
        let index = self.original_len;
        match outcome {
            Outcome::Success(value) => self.successes.push(value),
            Outcome::Failure(error) => {
                debug_assert!(self.original_error_indices.last().map_or(true, |&last| last < index));
                self.errors.push(error);
                self.original_error_indices.push(index);
            }
        }
        self.original_len += 1;
    }

    /// Length of the input the collection was built from.
    #[must_use]
    #[inline]
    pub fn original_len(&self) -> usize {
        self.original_len
    }

    /// Validated items in input order.
    #[must_use]
    #[inline]
    pub fn successes(&self) -> &[T] {
        &self.successes
    }

    /// Captured errors in input order.
    #[must_use]
    #[inline]
    pub fn errors(&self) -> &[E] {
        &self.errors
    }

    /// Original index of each entry of [`errors`](Self::errors).
    #[must_use]
    #[inline]
    pub fn original_error_indices(&self) -> &[usize] {
        &self.original_error_indices
    }

    #[must_use]
    #[inline]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns `true` when every input item validated.
    #[must_use]
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterates errors together with their original indices.
    #[inline]
    pub fn error_entries(&self) -> ErrorEntries<'_, E> {
        ErrorEntries::new(&self.original_error_indices, &self.errors)
    }

    /// Lazily interleaves successes and errors back into input order.
    #[inline]
    pub fn iter_with_errors(&self) -> WithErrors<'_, T, E> {
        WithErrors::new(&self.successes, &self.errors, &self.original_error_indices)
    }

    /// Returns the input-ordered view: `Ok` for validated items, `Err` for failures.
    ///
    /// Without errors this is exactly the successes; when every item failed it
    /// is exactly the errors. Calling it repeatedly yields equal results.
    #[must_use]
    pub fn with_errors(&self) -> Vec<Result<&T, &E>> {
        self.iter_with_errors().collect()
    }

    /// Owned counterpart of [`with_errors`](Self::with_errors).
    #[must_use]
    pub fn into_with_errors(self) -> Vec<Result<T, E>> {
        IntoWithErrors::new(self.successes, self.errors, self.original_error_indices).collect()
    }

    /// Transforms every validated item, keeping errors and positions.
    pub fn map<U, F>(self, f: F) -> LenientCollection<U, E>
    where
        F: FnMut(T) -> U,
    {
        LenientCollection {
            successes: self.successes.into_iter().map(f).collect(),
            errors: self.errors,
            original_error_indices: self.original_error_indices,
            original_len: self.original_len,
        }
    }

    /// Transforms every captured error, keeping successes and positions.
    pub fn map_errors<G, F>(self, f: F) -> LenientCollection<T, G>
    where
        F: FnMut(E) -> G,
    {
        LenientCollection {
            successes: self.successes,
            errors: self.errors.into_iter().map(f).collect(),
            original_error_indices: self.original_error_indices,
            original_len: self.original_len,
        }
    }

    #[must_use]
    #[inline]
    pub fn into_successes(self) -> Vec<T> {
        self.successes
    }

    /// Splits into successes, errors and their original indices.
    #[inline]
    pub fn into_parts(self) -> (Vec<T>, ErrorVec<E>, IndexVec) {
        (self.successes, self.errors, self.original_error_indices)
    }

    /// Strict view of the batch: every item, or every failure with its index.
    ///
    /// # Errors
    ///
    /// Returns all `(original_index, error)` pairs when at least one item failed.
    pub fn into_result(self) -> Result<Vec<T>, ErrorVec<(usize, E)>> {
        if self.errors.is_empty() {
            Ok(self.successes)
        } else {
            Err(self.original_error_indices.into_iter().zip(self.errors).collect())
        }
    }
}

impl<T, E> Deref for LenientCollection<T, E> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        &self.successes
    }
}

impl<T, E> AsRef<[T]> for LenientCollection<T, E> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.successes
    }
}

impl<T, E> FromIterator<Outcome<T, E>> for LenientCollection<T, E> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = Outcome<T, E>>>(iter: I) -> Self {
        Self::from_outcomes(iter)
    }
}

/// Every `Err` is treated as a captured failure.
impl<T, E> FromIterator<Result<T, E>> for LenientCollection<T, E> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = Result<T, E>>>(iter: I) -> Self {
        Self::from_outcomes(iter.into_iter().map(Outcome::from))
    }
}

impl<T, E> IntoIterator for LenientCollection<T, E> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    /// Yields the validated items only.
    fn into_iter(self) -> Self::IntoIter {
        self.successes.into_iter()
    }
}

impl<'a, T, E> IntoIterator for &'a LenientCollection<T, E> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.successes.iter()
    }
}

/// Serializes as a plain sequence of the validated items; captured errors are
/// not part of the output.
///
/// # Examples
///
/// ```
/// use lenient_rail::LenientCollection;
///
/// let batch = LenientCollection::from_parts(vec![10_u8, 200], [(1, "negative")], 3).unwrap();
/// assert_eq!(serde_json::to_string(&batch).unwrap(), "[10,200]");
/// ```
#[cfg(feature = "serde")]
impl<T, E> Serialize for LenientCollection<T, E>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(&self.successes)
    }
}
