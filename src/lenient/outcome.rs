#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of validating one item: the value, or the captured error.
///
/// An outcome carries no position. The collector that consumes a stream of
/// outcomes is the only place original indices are assigned.
///
/// # Examples
///
/// ```
/// use lenient_rail::Outcome;
///
/// let ok: Outcome<i32, &str> = Outcome::Success(2);
/// assert_eq!(ok.map(|x| x * 10).into_result(), Ok(20));
///
/// let failed: Outcome<i32, &str> = Err("bad").into();
/// assert!(failed.is_failure());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum Outcome<T, E> {
    Success(T),
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Returns `true` if the item validated.
    ///
    /// # Examples
    ///
    /// ```
    /// use lenient_rail::Outcome;
    ///
    /// assert!(Outcome::<i32, &str>::Success(1).is_success());
    /// assert!(!Outcome::<i32, &str>::Failure("bad").is_success());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the item's error was captured.
    ///
    /// # Examples
    ///
    /// ```
    /// use lenient_rail::Outcome;
    ///
    /// assert!(Outcome::<i32, &str>::Failure("bad").is_failure());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Maps the validated value, leaving a failure untouched.
    ///
    /// # Arguments
    ///
    /// * `f` - Function applied to the success value
    ///
    /// # Examples
    ///
    /// ```
    /// use lenient_rail::Outcome;
    ///
    /// let doubled = Outcome::<i32, &str>::Success(21).map(|x| x * 2);
    /// assert_eq!(doubled, Outcome::Success(42));
    ///
    /// let failed = Outcome::<i32, &str>::Failure("bad").map(|x| x * 2);
    /// assert_eq!(failed, Outcome::Failure("bad"));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Maps the captured error, leaving a success untouched.
    ///
    /// # Arguments
    ///
    /// * `f` - Function applied to the error
    ///
    /// # Examples
    ///
    /// ```
    /// use lenient_rail::Outcome;
    ///
    /// let failed = Outcome::<i32, &str>::Failure("bad").map_err(str::len);
    /// assert_eq!(failed, Outcome::Failure(3));
    /// ```
    #[inline]
    pub fn map_err<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Borrows the contents, producing `Outcome<&T, &E>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lenient_rail::Outcome;
    ///
    /// let owned = Outcome::<String, String>::Success("ok".into());
    /// assert_eq!(owned.as_ref().success().map(String::as_str), Some("ok"));
    /// assert!(owned.is_success());
    /// ```
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Consumes the outcome, returning the value if the item validated.
    ///
    /// # Examples
    ///
    /// ```
    /// use lenient_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::Success(7).success(), Some(7));
    /// assert_eq!(Outcome::<i32, &str>::Failure("bad").success(), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Consumes the outcome, returning the error if it was captured.
    ///
    /// # Examples
    ///
    /// ```
    /// use lenient_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::Failure("bad").failure(), Some("bad"));
    /// assert_eq!(Outcome::<i32, &str>::Success(7).failure(), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn failure(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Converts into a standard `Result`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lenient_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::Success(1).into_result(), Ok(1));
    /// assert_eq!(Outcome::<i32, &str>::Failure("bad").into_result(), Err("bad"));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}
