use std::fmt;
use thiserror::Error;

/// Error returned when a [`Stack`](crate::Stack) is constructed with an
/// invalid capacity.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum ConfigError {
    /// The grow increment was zero.
    ///
    /// The increment doubles as the initial capacity, so it must be at
    /// least 1.
    #[error("grow increment must be at least 1")]
    ZeroGrowBy,

    /// The configured maximum capacity cannot be indexed.
    ///
    /// The product of the grow increment and the config's segment count
    /// must fit in half a word.
    #[error("a grow increment of {0} slots exceeds the addressable capacity")]
    CapacityTooLarge(usize),
}

/// Error returned by [`push`](crate::Stack::push) when the backing storage
/// cannot grow any further.
///
/// The rejected value is handed back to the caller.
#[derive(Clone, Eq, PartialEq, Error)]
#[error("stack is at maximum capacity")]
pub struct CapacityError<T>(pub T);

impl<T> fmt::Debug for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CapacityError(..)")
    }
}
