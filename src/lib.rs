//! # pipework
//!
//! Zero-cost combinators for building compound callables out of simple ones.
//!
//! ## Overview
//!
//! - **Pipe**: [`pipe`] chains callables left to right, feeding each output
//!   to the next stage.
//! - **Battery**: [`battery`] applies several callables to the same
//!   arguments and collects every result into a tuple.
//! - **Compose**: [`compose`] chains callables right to left, in
//!   mathematical order.
//! - **Auto-unpack**: [`auto_unpack`] spreads a tuple into separate
//!   parameters, so a stage returning several values can feed a stage taking
//!   several arguments.
//!
//! Every combinator is a plain generic struct. Composition is resolved at
//! compile time, and a stage that cannot take its predecessor's output is a
//! type error.
//!
//! All callables go through the [`Callable`] trait, which takes the
//! positional arguments as one tuple. Ordinary functions and closures of up
//! to twelve parameters implement it automatically.
//!
//! ## Feature Flags
//!
//! - `dynamic` (default): type-erased pipes and runtime-sized batteries
//! - `rayon`: [`ParallelBattery`](battery::ParallelBattery), which runs
//!   battery members on the rayon pool
//! - `tracing`: diagnostic events through the `tracing` crate
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use pipework::prelude::*;
//!
//! fn add(first: i32, second: i32) -> i32 { first + second }
//! fn mul(first: i32, second: i32) -> i32 { first * second }
//! fn divint(numerator: i32, denominator: i32) -> (i32, i32) {
//!     (numerator / denominator, numerator % denominator)
//! }
//!
//! assert_eq!(battery((add, mul)).invoke((3, 4)), (7, 12));
//! assert_eq!(pipe((divint, auto_unpack(add))).invoke((5, 2)), 3);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use pipework::prelude::*;
/// ```
pub mod prelude {
    pub use crate::battery::*;
    pub use crate::callable::*;
    pub use crate::compose::*;

    #[cfg(feature = "dynamic")]
    pub use crate::dynamic::*;
}

mod arity;
#[cfg(any(feature = "dynamic", feature = "rayon"))]
mod trace;

pub mod battery;
pub mod callable;
pub mod compose;

#[cfg(feature = "dynamic")]
pub mod dynamic;

pub use battery::{Battery, apply_tuple, battery};
pub use callable::{Callable, NoResult, apply, by_ref, owned};
pub use compose::{AutoUnpack, Compose, Pipe, auto_unpack, compose, pipe};

static_assertions::assert_eq_size!(Pipe<(fn(i32) -> i32, fn(i32) -> i32)>, [fn(i32) -> i32; 2]);
static_assertions::assert_eq_size!(AutoUnpack<fn(i32, i32) -> i32>, fn(i32, i32) -> i32);
static_assertions::assert_impl_all!(Pipe<(fn(u8) -> u8,)>: Send, Sync, Copy);
