//! The invocation seam shared by every combinator.
//!
//! Stable Rust does not allow user types to implement the `Fn*` traits, so
//! this crate routes every call through [`Callable`]. Arguments are always
//! passed as a tuple, one element per positional parameter:
//!
//! ```text
//! f()        ~ f.invoke(())
//! f(a)       ~ f.invoke((a,))
//! f(a, b)    ~ f.invoke((a, b))
//! ```
//!
//! Every `Fn` of arity 0 through 12 is a [`Callable`] through a blanket
//! implementation, and so is every wrapper type in this crate. That is what
//! lets a [`Pipe`](crate::compose::Pipe) take another pipe, or a
//! [`Battery`](crate::battery::Battery), as one of its stages.
//!
//! # Examples
//!
//! ```
//! use pipework::callable::{Callable, apply};
//!
//! fn add(first: i32, second: i32) -> i32 { first + second }
//!
//! assert_eq!(apply(&add, (3, 4)), 7);
//! assert_eq!(add.invoke((3, 4)), 7);
//! ```

mod invoke;
mod ownership;

pub use invoke::{NoResult, apply};
pub use ownership::{Borrowed, by_ref, owned};

use crate::arity::for_each_tuple;

/// A value that can be invoked with the positional argument tuple `Arguments`.
///
/// `Arguments` is `()` for nullary calls and `(A,)`, `(A, B)`, ... otherwise.
/// A callable whose Rust return type is `()` produces `()`, which is an
/// ordinary storable value (see [`NoResult`]).
///
/// # Examples
///
/// ```
/// use pipework::callable::Callable;
///
/// struct Scale(i32);
///
/// impl Callable<(i32,)> for Scale {
///     type Output = i32;
///
///     fn invoke(&self, (value,): (i32,)) -> i32 {
///         value * self.0
///     }
/// }
///
/// assert_eq!(Scale(3).invoke((4,)), 12);
/// ```
pub trait Callable<Arguments> {
    /// The value produced by one invocation.
    type Output;

    /// Invokes the callable once with `arguments`.
    fn invoke(&self, arguments: Arguments) -> Self::Output;
}

macro_rules! impl_callable_for_fn {
    ($($argument:ident $index:tt),*) => {
        impl<Function, Return, $($argument),*> Callable<($($argument,)*)> for Function
        where
            Function: Fn($($argument),*) -> Return + ?Sized,
        {
            type Output = Return;

            #[inline]
            #[allow(unused_variables)]
            fn invoke(&self, arguments: ($($argument,)*)) -> Return {
                self($(arguments.$index),*)
            }
        }
    };
}

for_each_tuple!(impl_callable_for_fn);
