use core::iter::FusedIterator;

use crate::types::{ErrorVec, IndexVec};

/// Error of a collection paired with the position its item held in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexedError<'a, E> {
    pub original_index: usize,
    pub error: &'a E,
}

/// Iterator over [`IndexedError`]s, created by
/// [`LenientCollection::error_entries`](crate::LenientCollection::error_entries).
#[derive(Debug, Clone)]
pub struct ErrorEntries<'a, E> {
    inner: core::iter::Zip<core::slice::Iter<'a, usize>, core::slice::Iter<'a, E>>,
}

impl<'a, E> ErrorEntries<'a, E> {
    pub(crate) fn new(indices: &'a [usize], errors: &'a [E]) -> Self {
        Self { inner: indices.iter().zip(errors.iter()) }
    }
}

impl<'a, E> Iterator for ErrorEntries<'a, E> {
    type Item = IndexedError<'a, E>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(&original_index, error)| IndexedError { original_index, error })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<E> ExactSizeIterator for ErrorEntries<'_, E> {}
impl<E> FusedIterator for ErrorEntries<'_, E> {}

/// Input-ordered view over a collection, created by
/// [`LenientCollection::iter_with_errors`](crate::LenientCollection::iter_with_errors).
///
/// Keeps one cursor into the successes and one into the errors. An error is
/// emitted whenever its original index equals the number of items emitted so
/// far; otherwise the next success is emitted.
#[derive(Debug, Clone)]
pub struct WithErrors<'a, T, E> {
    successes: core::slice::Iter<'a, T>,
    errors: core::slice::Iter<'a, E>,
    indices: &'a [usize],
    position: usize,
}

impl<'a, T, E> WithErrors<'a, T, E> {
    pub(crate) fn new(successes: &'a [T], errors: &'a [E], indices: &'a [usize]) -> Self {
        Self { successes: successes.iter(), errors: errors.iter(), indices, position: 0 }
    }

    fn next_error(&mut self) -> Option<&'a E> {
        let error = self.errors.next()?;
        self.indices = self.indices.get(1..).unwrap_or_default();
        Some(error)
    }
}

impl<'a, T, E> Iterator for WithErrors<'a, T, E> {
    type Item = Result<&'a T, &'a E>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = match self.indices.first() {
            Some(&index) if index == self.position => self.next_error().map(Err),
            // Trailing errors are reached through the index check above; this
            // fallback only drains what is left.
            _ => self.successes.next().map(Ok).or_else(|| self.next_error().map(Err)),
        }?;
        self.position += 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.successes.len() + self.errors.len();
        (remaining, Some(remaining))
    }
}

impl<T, E> ExactSizeIterator for WithErrors<'_, T, E> {}
impl<T, E> FusedIterator for WithErrors<'_, T, E> {}

/// Owning input-ordered view, created by
/// [`LenientCollection::into_with_errors`](crate::LenientCollection::into_with_errors).
#[derive(Debug)]
pub struct IntoWithErrors<T, E> {
    successes: std::vec::IntoIter<T>,
    errors: smallvec::IntoIter<[E; 1]>,
    indices: smallvec::IntoIter<[usize; 1]>,
    next_index: Option<usize>,
    position: usize,
}

impl<T, E> IntoWithErrors<T, E> {
    pub(crate) fn new(successes: Vec<T>, errors: ErrorVec<E>, indices: IndexVec) -> Self {
        let mut indices = indices.into_iter();
        let next_index = indices.next();
        Self {
            successes: successes.into_iter(),
            errors: errors.into_iter(),
            indices,
            next_index,
            position: 0,
        }
    }

    fn next_error(&mut self) -> Option<E> {
        let error = self.errors.next()?;
        self.next_index = self.indices.next();
        Some(error)
    }
}

impl<T, E> Iterator for IntoWithErrors<T, E> {
    type Item = Result<T, E>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = match self.next_index {
            Some(index) if index == self.position => self.next_error().map(Err),
            _ => self.successes.next().map(Ok).or_else(|| self.next_error().map(Err)),
        }?;
        self.position += 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.successes.len() + self.errors.len();
        (remaining, Some(remaining))
    }
}

impl<T, E> ExactSizeIterator for IntoWithErrors<T, E> {}
impl<T, E> FusedIterator for IntoWithErrors<T, E> {}
