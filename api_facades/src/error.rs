//! Facade Errors
//!
//! One error type for callers of the facades, wrapping whatever the inner
//! layers report.

use entities_numeric::NumericError;
use entities_rounding::TrapError;
use infrastructure_bignum_encoding::{DecodeError, EncodeError};
use thiserror::Error;

use crate::rounding_facades::Discarded;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FacadeError {
    #[error(transparent)]
    Numeric(#[from] NumericError),
    /// A trapped condition; boxed because it carries a context snapshot.
    #[error(transparent)]
    Trap(Box<TrapError<Discarded>>),
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl From<TrapError<Discarded>> for FacadeError {
    fn from(err: TrapError<Discarded>) -> Self {
        FacadeError::Trap(Box::new(err))
    }
}

impl FacadeError {
    pub fn as_trap(&self) -> Option<&TrapError<Discarded>> {
        match self {
            FacadeError::Trap(trap) => Some(trap),
            _ => None,
        }
    }
}
