//! Sequential composition of callables.
//!
//! - [`Pipe`] runs stages left to right: `pipe((f, g, h))` is `h(g(f(..)))`.
//! - [`Compose`] runs functions right to left: `compose((f, g, h))` is
//!   `f(g(h(..)))`.
//! - [`AutoUnpack`] spreads a tuple produced by one stage into the separate
//!   parameters of the next.
//!
//! All three are resolved entirely at compile time. Each wrapper stores its
//! callables by value in a flat tuple and calls them directly.
//!
//! # Examples
//!
//! ```
//! use pipework::callable::Callable;
//! use pipework::compose::{auto_unpack, compose, pipe};
//!
//! fn add(first: i32, second: i32) -> i32 { first + second }
//! fn divint(numerator: i32, denominator: i32) -> (i32, i32) {
//!     (numerator / denominator, numerator % denominator)
//! }
//! fn add3(value: i32) -> i32 { value + 3 }
//! fn mul3(value: i32) -> i32 { value * 3 }
//!
//! assert_eq!(pipe((add3, mul3)).invoke((2,)), 15);
//! assert_eq!(compose((add3, mul3)).invoke((2,)), 9);
//! assert_eq!(pipe((divint, auto_unpack(add))).invoke((5, 2)), 3);
//! ```
//!
//! # Laws
//!
//! - **Identity**: `pipe((f,)).invoke(a) == f(a)`
//! - **Chaining**: `pipe((f, g)).invoke(a) == g(f(a))`
//! - **Duality**: `pipe((f, g)).invoke(a) == compose((g, f)).invoke(a)`

mod composition;
mod pipe;
mod unpack;

pub use composition::{Compose, compose};
pub use pipe::{Pipe, pipe};
pub use unpack::{AutoUnpack, Spread, auto_unpack};
