use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The error reported when a checked accessor reads the side that is not
/// active.
///
/// Carries no payload; the only thing it can tell you is that the caller
/// asked for the wrong side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("accessed the inactive side of an outcome")]
pub struct AccessError;

/// Either a success payload or an error payload.
///
/// Exactly one of the two exists at any time. Which side is active is part
/// of the value: clones and moves preserve it, [`set_success`] and
/// [`set_error`] change it, and every checked accessor validates it before
/// handing the payload out.
///
/// ```
/// use outcome::Outcome;
///
/// let looked_up: Outcome<i32, &str> = 10.into();
/// assert_eq!(*looked_up.success(), 10);
/// ```
///
/// [`set_success`]: Outcome::set_success
/// [`set_error`]: Outcome::set_error
#[must_use]
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum Outcome<T, E> {
    Success(T),
    Error(E),
}

impl<T, E> Outcome<T, E> {
    /// Returns `true` iff the success side is active.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` iff the error side is active.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Converts from `&Outcome<T, E>` to `Outcome<&T, &E>`.
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Error(error) => Outcome::Error(error),
        }
    }

    /// Converts from `&mut Outcome<T, E>` to `Outcome<&mut T, &mut E>`.
    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Error(error) => Outcome::Error(error),
        }
    }

    // ========================================================================
    // Checked access
    // ========================================================================

    /// Borrows the success payload, or reports [`AccessError`] if the error
    /// side is active.
    pub fn try_success(&self) -> Result<&T, AccessError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Error(_) => Err(AccessError),
        }
    }

    /// Mutably borrows the success payload, or reports [`AccessError`] if
    /// the error side is active.
    pub fn try_success_mut(&mut self) -> Result<&mut T, AccessError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Error(_) => Err(AccessError),
        }
    }

    /// Takes ownership of the success payload, or reports [`AccessError`]
    /// if the error side is active.
    pub fn try_into_success(self) -> Result<T, AccessError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Error(_) => Err(AccessError),
        }
    }

    /// Borrows the error payload, or reports [`AccessError`] if the success
    /// side is active.
    pub fn try_error(&self) -> Result<&E, AccessError> {
        match self {
            Self::Success(_) => Err(AccessError),
            Self::Error(error) => Ok(error),
        }
    }

    /// Mutably borrows the error payload, or reports [`AccessError`] if the
    /// success side is active.
    pub fn try_error_mut(&mut self) -> Result<&mut E, AccessError> {
        match self {
            Self::Success(_) => Err(AccessError),
            Self::Error(error) => Ok(error),
        }
    }

    /// Takes ownership of the error payload, or reports [`AccessError`] if
    /// the success side is active.
    pub fn try_into_error(self) -> Result<E, AccessError> {
        match self {
            Self::Success(_) => Err(AccessError),
            Self::Error(error) => Ok(error),
        }
    }

    /// Borrows the success payload.
    ///
    /// Panics if the error side is active. Callers who cannot tolerate the
    /// panic check [`is_success`](Self::is_success) first, or use
    /// [`try_success`](Self::try_success) / [`success_or`](Self::success_or).
    #[must_use]
    pub fn success(&self) -> &T {
        match self.try_success() {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// Mutably borrows the success payload.
    ///
    /// Panics if the error side is active.
    #[must_use]
    pub fn success_mut(&mut self) -> &mut T {
        match self.try_success_mut() {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// Takes ownership of the success payload.
    ///
    /// Panics if the error side is active.
    #[must_use]
    pub fn into_success(self) -> T {
        match self.try_into_success() {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// Borrows the error payload.
    ///
    /// Panics if the success side is active.
    #[must_use]
    pub fn error(&self) -> &E {
        match self.try_error() {
            Ok(error) => error,
            Err(err) => panic!("{err}"),
        }
    }

    /// Mutably borrows the error payload.
    ///
    /// Panics if the success side is active.
    #[must_use]
    pub fn error_mut(&mut self) -> &mut E {
        match self.try_error_mut() {
            Ok(error) => error,
            Err(err) => panic!("{err}"),
        }
    }

    /// Takes ownership of the error payload.
    ///
    /// Panics if the success side is active.
    #[must_use]
    pub fn into_error(self) -> E {
        match self.try_into_error() {
            Ok(error) => error,
            Err(err) => panic!("{err}"),
        }
    }

    // ========================================================================
    // Default substitution
    // ========================================================================

    /// Returns the success payload, or `default` if the error side is
    /// active. Never fails; a success payload is moved out, not copied.
    #[must_use]
    pub fn success_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Error(_) => default,
        }
    }

    /// Returns the success payload, or builds the fallback from `default`
    /// if the error side is active.
    ///
    /// The closure builds a fresh success value; it is not given the error
    /// payload.
    #[must_use]
    pub fn success_or_else(self, default: impl FnOnce() -> T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Error(_) => default(),
        }
    }

    /// Returns the success payload, or `T::default()` if the error side is
    /// active.
    #[must_use]
    pub fn success_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Success(value) => value,
            Self::Error(_) => T::default(),
        }
    }

    // ========================================================================
    // Unchecked access
    // ========================================================================

    /// Borrows the success payload without checking which side is active.
    ///
    /// # Safety
    ///
    /// The success side must be active. Calling this on an error-active
    /// value is undefined behavior.
    #[must_use]
    pub unsafe fn success_unchecked(&self) -> &T {
        match self {
            Self::Success(value) => value,
            // SAFETY: the caller guarantees the success side is active.
            Self::Error(_) => unsafe { std::hint::unreachable_unchecked() },
        }
    }

    /// Mutably borrows the success payload without checking which side is
    /// active.
    ///
    /// # Safety
    ///
    /// The success side must be active. Calling this on an error-active
    /// value is undefined behavior.
    #[must_use]
    pub unsafe fn success_unchecked_mut(&mut self) -> &mut T {
        match self {
            Self::Success(value) => value,
            // SAFETY: the caller guarantees the success side is active.
            Self::Error(_) => unsafe { std::hint::unreachable_unchecked() },
        }
    }

    /// Takes ownership of the success payload without checking which side
    /// is active.
    ///
    /// # Safety
    ///
    /// The success side must be active. Calling this on an error-active
    /// value is undefined behavior.
    #[must_use]
    pub unsafe fn into_success_unchecked(self) -> T {
        match self {
            Self::Success(value) => value,
            // SAFETY: the caller guarantees the success side is active.
            Self::Error(_) => unsafe { std::hint::unreachable_unchecked() },
        }
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Replaces the contents with a success payload, whatever was there
    /// before. The previous payload is dropped. Returns `self` for
    /// chaining.
    pub fn set_success(&mut self, value: T) -> &mut Self {
        *self = Self::Success(value);
        self
    }

    /// Replaces the contents with an error payload, whatever was there
    /// before. The previous payload is dropped. Returns `self` for
    /// chaining.
    pub fn set_error(&mut self, error: E) -> &mut Self {
        *self = Self::Error(error);
        self
    }

    /// Exchanges the entire contents, active side included, with `other`.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }
}

/// Bare success conversion, so fallible helpers can `return value.into()`.
impl<T, E> From<T> for Outcome<T, E> {
    fn from(value: T) -> Self {
        Self::Success(value)
    }
}

/// Two outcomes are equal iff the same side is active and the matching
/// payloads compare equal. Mismatched sides are never equal, regardless of
/// the payloads.
///
/// The payload types of the two sides need not match as long as each pair
/// is comparable.
impl<T, E, T2, E2> PartialEq<Outcome<T2, E2>> for Outcome<T, E>
where
    T: PartialEq<T2>,
    E: PartialEq<E2>,
{
    fn eq(&self, other: &Outcome<T2, E2>) -> bool {
        match (self, other) {
            (Self::Success(a), Outcome::Success(b)) => a == b,
            (Self::Error(a), Outcome::Error(b)) => a == b,
            _ => false,
        }
    }
}

impl<T: Eq, E: Eq> Eq for Outcome<T, E> {}

/// Hashes the active side's tag followed by its payload, so a success and
/// an error holding bitwise-equal payloads hash apart and error-active
/// values hash deterministically. Consistent with [`PartialEq`].
impl<T: Hash, E: Hash> Hash for Outcome<T, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        mem::discriminant(self).hash(state);
        match self {
            Self::Success(value) => value.hash(state),
            Self::Error(error) => error.hash(state),
        }
    }
}

/// Diagnostic rendering: `Success(<payload>)` or `Error(<payload>)`. Not a
/// serialization format; use the serde impls for that.
impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(f, "Success({value})"),
            Self::Error(error) => write!(f, "Error({error})"),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
