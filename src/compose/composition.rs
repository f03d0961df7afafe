//! Right-to-left, mathematical composition.

use crate::arity::for_each_reverse_chain;
use crate::callable::Callable;

/// A fixed chain of functions applied right to left.
///
/// `Compose` is the mirror image of [`Pipe`](super::Pipe): the last function
/// receives the caller's arguments and the first function produces the
/// result.
///
/// ```text
/// compose((f, g, h)).invoke(args) == f(g(h(args)))
/// pipe((h, g, f)).invoke(args)    == f(g(h(args)))
/// ```
///
/// # Examples
///
/// ```
/// use pipework::callable::Callable;
/// use pipework::compose;
///
/// fn add_one(value: i32) -> i32 { value + 1 }
/// fn double(value: i32) -> i32 { value * 2 }
///
/// // add_one(double(5))
/// assert_eq!(compose((add_one, double)).invoke((5,)), 11);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Compose<Functions> {
    functions: Functions,
}

impl<Functions> Compose<Functions> {
    /// Creates a composition that owns `functions`.
    #[inline]
    pub const fn new(functions: Functions) -> Self {
        Self { functions }
    }

    /// Returns the functions in written order, outermost first.
    #[inline]
    pub const fn functions(&self) -> &Functions {
        &self.functions
    }

    /// Returns the functions for in-place replacement.
    #[inline]
    pub const fn functions_mut(&mut self) -> &mut Functions {
        &mut self.functions
    }

    /// Consumes the composition and returns its functions.
    #[inline]
    pub fn into_functions(self) -> Functions {
        self.functions
    }
}

macro_rules! impl_compose {
    (
        [$($function_type:ident),*] [$($output:ident),*]
        $innermost:ident $innermost_output:ident $innermost_index:tt;
        $($function:ident $function_output:ident $previous:ident $index:tt),*;
        $outermost_output:ident
    ) => {
        impl<Arguments, $($function_type,)* $($output,)*> Callable<Arguments>
            for Compose<($($function_type,)*)>
        where
            $innermost: Callable<Arguments, Output = $innermost_output>,
            $($function: Callable<($previous,), Output = $function_output>,)*
        {
            type Output = $outermost_output;

            #[inline]
            fn invoke(&self, arguments: Arguments) -> Self::Output {
                let value = self.functions.$innermost_index.invoke(arguments);
                $(let value = self.functions.$index.invoke((value,));)*
                value
            }
        }
    };
}

for_each_reverse_chain!(impl_compose);

/// Builds a [`Compose`] from a tuple of functions, outermost first.
#[inline]
pub const fn compose<Functions>(functions: Functions) -> Compose<Functions> {
    Compose::new(functions)
}

/// Builds a [`Compose`] from a list of functions, outermost first.
///
/// `compose![f, g, h]` is shorthand for `compose((f, g, h))`.
///
/// # Examples
///
/// ```
/// use pipework::callable::Callable;
///
/// fn add_one(value: i32) -> i32 { value + 1 }
/// fn double(value: i32) -> i32 { value * 2 }
/// fn square(value: i32) -> i32 { value * value }
///
/// // add_one(double(square(3)))
/// let composed = pipework::compose![add_one, double, square];
/// assert_eq!(composed.invoke((3,)), 19);
/// ```
#[macro_export]
macro_rules! compose {
    ($($function:expr),+ $(,)?) => {
        $crate::compose::Compose::new(($($function,)+))
    };
}
