//! Trap Errors
//!
//! Raised when an operation signals a condition whose trap is enabled.

use thiserror::Error;

use crate::context::RoundingContext;
use crate::flags::Flags;

/// A trapped rounding condition.
///
/// `context` is an owned snapshot of the context at trap time (configuration
/// plus the untrapped flags already merged); later changes to the live
/// context never reach it. `result` is what the operation would have
/// returned had the trap been disabled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("rounding condition {flag} trapped")]
pub struct TrapError<T> {
    /// First trapped condition in canonical order.
    pub flag: Flags,
    /// Every raised condition whose trap was enabled.
    pub trapped: Flags,
    pub context: RoundingContext,
    pub result: T,
}

impl<T> TrapError<T> {
    /// Drop the snapshot and keep the would-be result.
    pub fn into_result(self) -> T {
        self.result
    }
}
