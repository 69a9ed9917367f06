use core::fmt::{self, Display};

/// Failure of a whole batch run through a [`BatchValidator`](crate::BatchValidator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchError<E> {
    /// The batch was rejected before any item was validated.
    TooManyItems { max: usize, got: usize },
    /// A failure the schema did not classify as a data problem.
    Item(E),
}

impl<E> BatchError<E> {
    /// Returns the propagated item error, if any.
    #[inline]
    pub fn into_item(self) -> Option<E> {
        match self {
            Self::Item(error) => Some(error),
            Self::TooManyItems { .. } => None,
        }
    }
}

impl<E: Display> Display for BatchError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyItems { max, got } => {
                write!(f, "too many items in batch: MAX={max} GOT={got}")
            }
            Self::Item(error) => write!(f, "batch aborted: {error}"),
        }
    }
}

impl<E> std::error::Error for BatchError<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Item(error) => Some(error),
            Self::TooManyItems { .. } => None,
        }
    }
}

/// Reasons [`LenientCollection::from_parts`](crate::LenientCollection::from_parts)
/// refuses a set of parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantError {
    /// `errors` and `original_error_indices` differ in length.
    IndexCountMismatch { errors: usize, indices: usize },
    /// Successes plus errors do not add up to the original length.
    LengthMismatch { original_len: usize, successes: usize, errors: usize },
    /// An index is not greater than the one before it.
    UnorderedIndex { position: usize, index: usize, previous: usize },
    /// An index points past the end of the original input.
    IndexOutOfRange { index: usize, original_len: usize },
}

impl Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexCountMismatch { errors, indices } => {
                write!(f, "{errors} errors but {indices} original indices")
            }
            Self::LengthMismatch { original_len, successes, errors } => write!(
                f,
                "original length {original_len} does not match {successes} successes + {errors} errors"
            ),
            Self::UnorderedIndex { position, index, previous } => write!(
                f,
                "original index {index} at position {position} does not follow {previous}"
            ),
            Self::IndexOutOfRange { index, original_len } => {
                write!(f, "original index {index} is out of range for length {original_len}")
            }
        }
    }
}

impl std::error::Error for InvariantError {}
