//! Wrap-and-partition pipeline over a slice of raw items.

use crate::lenient::{Lenient, LenientCollection, Outcome};
use crate::traits::{Capture, ElementType, ItemSchema};
use crate::types::BatchError;

/// Collection type produced by validating with schema `S` over `Raw` items.
pub type CollectionFor<S, Raw> = LenientCollection<
    <S as ItemSchema<Raw>>::Output,
    <<S as ItemSchema<Raw>>::Error as Capture>::Captured,
>;

/// Conventional upper bound for one ingestion batch, for use with
/// [`BatchValidator::max_items`].
pub const DEFAULT_MAX_ITEMS: usize = 1000;

/// How failures are isolated while validating a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Isolation {
    /// Each item is validated on its own; data failures are captured.
    #[default]
    PerItem,
    /// The sequence is validated as one unit; the first failure of any kind
    /// aborts the batch.
    Whole,
}

impl From<ElementType> for Isolation {
    #[inline]
    fn from(element_type: ElementType) -> Self {
        match element_type {
            ElementType::Known => Self::PerItem,
            ElementType::Opaque => Self::Whole,
        }
    }
}

/// Validates every item of `raw_items` against `schema` in one pass.
///
/// With a known element type each item is validated independently: data
/// failures are captured in the returned collection together with their
/// original index. Any failure [`Capture`] refuses propagates as `Err` and
/// aborts the batch. With an opaque element type the sequence is validated as
/// a whole and the first failure of any kind propagates.
///
/// # Errors
///
/// Returns the first error the schema does not classify as a data problem.
///
/// # Examples
///
/// ```
/// use lenient_rail::{schema_fn, validate_collection, ValidationError};
///
/// let as_int = schema_fn(|raw: &&str| {
///     raw.parse::<i64>()
///         .map_err(|_| ValidationError::new("int_parsing", "unable to parse string as an integer"))
/// });
///
/// let batch = validate_collection(&["1", "2", "c"], &as_int).unwrap();
/// assert_eq!(batch.successes(), &[1, 2]);
/// assert_eq!(batch.original_error_indices(), &[2]);
/// assert_eq!(batch.original_len(), 3);
/// ```
pub fn validate_collection<Raw, S>(
    raw_items: &[Raw],
    schema: &S,
) -> Result<CollectionFor<S, Raw>, S::Error>
where
    S: ItemSchema<Raw> + ?Sized,
{
    run(raw_items, schema, schema.element_type().into())
}

fn run<Raw, S>(
    raw_items: &[Raw],
    schema: &S,
    isolation: Isolation,
) -> Result<CollectionFor<S, Raw>, S::Error>
where
    S: ItemSchema<Raw> + ?Sized,
{
    let collection = match isolation {
        Isolation::PerItem => per_item(raw_items, schema)?,
        Isolation::Whole => whole(raw_items, schema)?,
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(
        original_len = collection.original_len(),
        accepted = collection.len(),
        rejected = collection.errors().len(),
        ?isolation,
        "validated batch"
    );

    Ok(collection)
}

fn per_item<Raw, S>(raw_items: &[Raw], schema: &S) -> Result<CollectionFor<S, Raw>, S::Error>
where
    S: ItemSchema<Raw> + ?Sized,
{
    let lenient = Lenient::new(schema);
    raw_items
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            let outcome = lenient.validate(raw);
            log_outcome(index, &outcome);
            outcome
        })
        .collect()
}

#[cfg(feature = "tracing")]
fn log_outcome<T, C, E>(index: usize, outcome: &Result<Outcome<T, C>, E>) {
    match outcome {
        Ok(Outcome::Failure(_)) => tracing::trace!(index, "captured item failure"),
        Err(_) => tracing::warn!(index, "item failure aborted the batch"),
        Ok(Outcome::Success(_)) => {}
    }
}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
fn log_outcome<T, C, E>(_index: usize, _outcome: &Result<Outcome<T, C>, E>) {}

fn whole<Raw, S>(raw_items: &[Raw], schema: &S) -> Result<CollectionFor<S, Raw>, S::Error>
where
    S: ItemSchema<Raw> + ?Sized,
{
    let successes = raw_items
        .iter()
        .map(|raw| schema.validate_one(raw))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(LenientCollection::from_successes(successes))
}

/// Configurable front door for validating batches.
///
/// # Examples
///
/// ```
/// use lenient_rail::{schema_fn, BatchError, BatchValidator, ValidationError};
///
/// let validator = BatchValidator::new(schema_fn(|raw: &u32| {
///     if *raw % 2 == 0 {
///         Ok(*raw)
///     } else {
///         Err(ValidationError::new("even", "Input should be even"))
///     }
/// }))
/// .max_items(3);
///
/// let batch = validator.validate(&[2, 3, 4]).unwrap();
/// assert_eq!(batch.successes(), &[2, 4]);
///
/// let rejected = validator.validate(&[2, 4, 6, 8]);
/// assert_eq!(rejected, Err(BatchError::TooManyItems { max: 3, got: 4 }));
/// ```
#[derive(Debug, Clone)]
pub struct BatchValidator<S> {
    schema: S,
    max_items: Option<usize>,
    isolation: Option<Isolation>,
}

impl<S> BatchValidator<S> {
    /// Creates a validator without a batch limit, isolating as the schema describes.
    #[inline]
    pub fn new(schema: S) -> Self {
        Self { schema, max_items: None, isolation: None }
    }

    /// Rejects batches with more than `max` items before validating any of them.
    #[inline]
    pub fn max_items(mut self, max: usize) -> Self {
        self.max_items = Some(max);
        self
    }

    /// Removes the batch limit.
    #[inline]
    pub fn unbounded(mut self) -> Self {
        self.max_items = None;
        self
    }

    /// Overrides the isolation derived from the schema's element type.
    #[inline]
    pub fn isolation(mut self, isolation: Isolation) -> Self {
        self.isolation = Some(isolation);
        self
    }

    #[inline]
    pub fn schema(&self) -> &S {
        &self.schema
    }

    #[inline]
    pub fn limit(&self) -> Option<usize> {
        self.max_items
    }

    /// Validates a batch.
    ///
    /// # Errors
    ///
    /// [`BatchError::TooManyItems`] when the batch exceeds the limit, or
    /// [`BatchError::Item`] with the first failure the schema does not capture.
    pub fn validate<Raw>(
        &self,
        raw_items: &[Raw],
    ) -> Result<CollectionFor<S, Raw>, BatchError<S::Error>>
    where
        S: ItemSchema<Raw>,
    {
        if let Some(max) = self.max_items {
            if raw_items.len() > max {
                #[cfg(feature = "tracing")]
                tracing::warn!(max, got = raw_items.len(), "batch rejected: too many items");
                return Err(BatchError::TooManyItems { max, got: raw_items.len() });
            }
        }

        let isolation = self.isolation.unwrap_or_else(|| self.schema.element_type().into());
        run(raw_items, &self.schema, isolation).map_err(BatchError::Item)
    }
}
