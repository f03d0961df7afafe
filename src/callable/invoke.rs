//! Direct application of a callable to an argument tuple.

use super::Callable;

/// The value a callable with no meaningful result produces.
///
/// Rust's unit type is already a first-class value, so a function returning
/// `()` can occupy a slot of a result tuple like any other. The alias exists
/// to name that role in signatures and documentation.
///
/// # Examples
///
/// ```
/// use pipework::battery;
/// use pipework::callable::{Callable, NoResult};
///
/// let log = |_: i32| {};
/// let double = |value: i32| value * 2;
///
/// let results: (NoResult, i32) = battery((log, double)).invoke((4,));
/// assert_eq!(results, ((), 8));
/// ```
pub type NoResult = ();

/// Invokes `function` once with `arguments` and returns its result.
///
/// This is the pass-through every combinator bottoms out in. It never changes
/// the number or order of calls, and a `()`-returning callable yields
/// [`NoResult`].
///
/// # Examples
///
/// ```
/// use pipework::callable::apply;
///
/// fn divide(numerator: i32, denominator: i32) -> (i32, i32) {
///     (numerator / denominator, numerator % denominator)
/// }
///
/// assert_eq!(apply(&divide, (5, 2)), (2, 1));
/// ```
#[inline]
pub fn apply<Function, Arguments>(function: &Function, arguments: Arguments) -> Function::Output
where
    Function: Callable<Arguments> + ?Sized,
{
    function.invoke(arguments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn apply_calls_exactly_once() {
        let calls = Cell::new(0);
        let count = || calls.set(calls.get() + 1);

        apply(&count, ());

        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn apply_on_unit_returning_function_yields_no_result() {
        let ignore = |_: &str| {};
        let (): NoResult = apply(&ignore, ("discarded",));
    }

    #[rstest]
    fn apply_returns_result_unmodified() {
        let make = |length: usize| vec![0_u8; length];
        assert_eq!(apply(&make, (3,)), vec![0, 0, 0]);
    }
}
