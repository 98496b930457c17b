//! Entities Layer: Rounding
//!
//! Provides the arithmetic context shared by rounding operations:
//! - Condition flags and their canonical order
//! - Rounding modes
//! - `RoundingContext` presets and builders
//! - The trap protocol and `TrapError`
//!
//! ## See Also
//!
//! - [`entities_numeric`](../entities_numeric/index.html): Numeric scalars

pub mod context;
pub mod flags;
pub mod rounding;
pub mod trap;

pub use context::RoundingContext;
pub use flags::Flags;
pub use rounding::Rounding;
pub use trap::TrapError;
