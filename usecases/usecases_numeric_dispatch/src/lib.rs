//! Use Cases Layer: Numeric Dispatch
//!
//! One capability set over every numeric representation a CBOR number can
//! take: native integers, big integers, single and double floats, extended
//! fractions and rationals.
//!
//! ## Modules
//!
//! - **[`kind`](kind/index.html)**: Representation tags
//! - **[`value`](value/index.html)**: `NumericValue` and its capabilities
//!
//! ## See Also
//!
//! - [`entities_numeric`](../../entities/entities_numeric/index.html): The
//!   underlying scalar types

mod float;
pub mod kind;
pub mod value;

pub use kind::NumericKind;
pub use value::NumericValue;
