//! Type-erased combinators for compositions only known at runtime.
//!
//! The static combinators in [`compose`](crate::compose) and
//! [`battery`](crate::battery) fix their shape in the type system. When the
//! list of stages comes from configuration or user input instead, this module
//! offers:
//!
//! - [`ErasedPipe`]: a pipe of boxed unary stages, shape-checked once at
//!   construction through [`TypeId`](std::any::TypeId) comparison.
//! - [`DynBattery`]: a fan-out over any number of closures that share one
//!   signature.

mod battery;
mod error;
mod pipe;

pub use battery::DynBattery;
pub use error::CompositionError;
pub use pipe::{ErasedPipe, ErasedStage};
