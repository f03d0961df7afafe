//! Spreading a single tuple argument into positional arguments.

use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

use crate::arity::for_each_tuple;
use crate::callable::Callable;

/// A value that can stand in for a whole positional argument list.
///
/// Tuples spread into their elements, references to tuples spread into
/// references to their elements, and every other implementor spreads into
/// the one-element list `(self,)`.
///
/// Rust cannot tell "not a tuple" apart generically, so single values opt in
/// explicitly. The crate covers the primitive scalars, `String`, `Vec<T>`,
/// arrays, `Option<T>`, `Result<T, E>`, `Box<T>`, `Rc<T>`, `Arc<T>` and
/// `Cow<'_, B>`, each by value, by `&` and by `&mut`, plus `&str`,
/// `&mut str`, `&[T]` and `&mut [T]`. Other types register with
/// [`spread_as_single!`].
///
/// [`spread_as_single!`]: crate::spread_as_single
pub trait Spread {
    /// The positional argument tuple this value spreads into.
    type Arguments;

    /// Converts the value into its argument tuple.
    fn spread(self) -> Self::Arguments;
}

macro_rules! impl_spread_for_tuple {
    ($($element:ident $index:tt),*) => {
        impl<$($element),*> Spread for ($($element,)*) {
            type Arguments = Self;

            #[inline]
            fn spread(self) -> Self {
                self
            }
        }

        impl<'a, $($element),*> Spread for &'a ($($element,)*) {
            type Arguments = ($(&'a $element,)*);

            #[inline]
            #[allow(clippy::unused_unit)]
            fn spread(self) -> Self::Arguments {
                ($(&self.$index,)*)
            }
        }

        impl<'a, $($element),*> Spread for &'a mut ($($element,)*) {
            type Arguments = ($(&'a mut $element,)*);

            #[inline]
            #[allow(clippy::unused_unit)]
            fn spread(self) -> Self::Arguments {
                ($(&mut self.$index,)*)
            }
        }
    };
}

for_each_tuple!(impl_spread_for_tuple);

/// Registers types that [`AutoUnpack`](crate::compose::AutoUnpack) should
/// forward as a single argument.
///
/// Each listed type is registered by value, by shared reference and by
/// mutable reference.
///
/// # Examples
///
/// ```
/// use pipework::auto_unpack;
/// use pipework::callable::Callable;
///
/// #[derive(Debug, PartialEq)]
/// struct Meters(f64);
///
/// pipework::spread_as_single!(Meters);
///
/// let to_feet = auto_unpack(|length: Meters| length.0 * 3.28084);
/// assert!((to_feet.invoke((Meters(2.0),)) - 6.56168).abs() < 1e-9);
///
/// let measured = Meters(1.5);
/// let read = auto_unpack(|length: &Meters| length.0);
/// assert!((read.invoke((&measured,)) - 1.5).abs() < f64::EPSILON);
/// ```
#[macro_export]
macro_rules! spread_as_single {
    ($($value:ty),+ $(,)?) => {
        $(
            impl $crate::compose::Spread for $value {
                type Arguments = (Self,);

                #[inline]
                fn spread(self) -> Self::Arguments {
                    (self,)
                }
            }

            impl<'a> $crate::compose::Spread for &'a $value {
                type Arguments = (Self,);

                #[inline]
                fn spread(self) -> Self::Arguments {
                    (self,)
                }
            }

            impl<'a> $crate::compose::Spread for &'a mut $value {
                type Arguments = (Self,);

                #[inline]
                fn spread(self) -> Self::Arguments {
                    (self,)
                }
            }
        )+
    };
}

crate::spread_as_single!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, String
);

// Same as `spread_as_single!`, for types with generic parameters.
macro_rules! impl_spread_for_generic {
    ($([$($parameter:tt)*] $value:ty),+ $(,)?) => {
        $(
            impl<$($parameter)*> Spread for $value {
                type Arguments = (Self,);

                #[inline]
                fn spread(self) -> Self::Arguments {
                    (self,)
                }
            }

            impl<'a, $($parameter)*> Spread for &'a $value {
                type Arguments = (Self,);

                #[inline]
                fn spread(self) -> Self::Arguments {
                    (self,)
                }
            }

            impl<'a, $($parameter)*> Spread for &'a mut $value {
                type Arguments = (Self,);

                #[inline]
                fn spread(self) -> Self::Arguments {
                    (self,)
                }
            }
        )+
    };
}

impl_spread_for_generic!(
    [T] Vec<T>,
    [T, const N: usize] [T; N],
    [T] Option<T>,
    [T, E] Result<T, E>,
    [T: ?Sized] Box<T>,
    [T: ?Sized] Rc<T>,
    [T: ?Sized] Arc<T>,
    ['c, B: ToOwned + ?Sized] Cow<'c, B>,
);

impl<'a> Spread for &'a str {
    type Arguments = (Self,);

    #[inline]
    fn spread(self) -> Self::Arguments {
        (self,)
    }
}

impl<'a> Spread for &'a mut str {
    type Arguments = (Self,);

    #[inline]
    fn spread(self) -> Self::Arguments {
        (self,)
    }
}

impl<'a, T> Spread for &'a [T] {
    type Arguments = (Self,);

    #[inline]
    fn spread(self) -> Self::Arguments {
        (self,)
    }
}

impl<'a, T> Spread for &'a mut [T] {
    type Arguments = (Self,);

    #[inline]
    fn spread(self) -> Self::Arguments {
        (self,)
    }
}

/// A callable that unpacks a single tuple argument before delegating.
///
/// Invoked with one argument, `AutoUnpack` spreads it through [`Spread`]: a
/// tuple `(a, b)` becomes the call `f(a, b)`, while a single non-tuple value
/// `x` stays `f(x)`. Invoked with zero or several arguments, it forwards them
/// unchanged.
///
/// This bridges a stage that returns several values as a tuple and a stage
/// that takes them as separate parameters.
///
/// A borrowed tuple spreads into borrowed elements: `&(a, b)` becomes
/// `f(&a, &b)` and `&mut (a, b)` becomes `f(&mut a, &mut b)`. The wrapped
/// function must take reference parameters in that case; the elements are
/// never copied out of the tuple.
///
/// ```
/// use pipework::auto_unpack;
/// use pipework::callable::Callable;
///
/// let point = (3, 4);
/// let by_reference = auto_unpack(|x: &i32, y: &i32| x * y);
/// assert_eq!(by_reference.invoke((&point,)), 12);
///
/// let by_value = auto_unpack(|x: i32, y: i32| x * y);
/// assert_eq!(by_value.invoke((point,)), 12);
/// ```
///
/// ```compile_fail
/// use pipework::auto_unpack;
/// use pipework::callable::Callable;
///
/// let point = (3, 4);
/// // `&(i32, i32)` spreads into `(&i32, &i32)`, not `(i32, i32)`.
/// auto_unpack(|x: i32, y: i32| x * y).invoke((&point,));
/// ```
///
/// # Examples
///
/// ```
/// use pipework::callable::Callable;
/// use pipework::{auto_unpack, pipe};
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
/// fn divint(numerator: i32, denominator: i32) -> (i32, i32) {
///     (numerator / denominator, numerator % denominator)
/// }
///
/// assert_eq!(auto_unpack(add).invoke(((2, 1),)), 3);
/// assert_eq!(auto_unpack(add).invoke((2, 1)), 3);
/// assert_eq!(pipe((divint, auto_unpack(add))).invoke((5, 2)), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AutoUnpack<Function> {
    function: Function,
}

impl<Function> AutoUnpack<Function> {
    /// Wraps `function`.
    #[inline]
    pub const fn new(function: Function) -> Self {
        Self { function }
    }

    /// Returns the wrapped function.
    #[inline]
    pub const fn function(&self) -> &Function {
        &self.function
    }

    /// Consumes the wrapper and returns the wrapped function.
    #[inline]
    pub fn into_function(self) -> Function {
        self.function
    }
}

impl<Function, Value> Callable<(Value,)> for AutoUnpack<Function>
where
    Value: Spread,
    Function: Callable<Value::Arguments>,
{
    type Output = Function::Output;

    #[inline]
    fn invoke(&self, (value,): (Value,)) -> Self::Output {
        self.function.invoke(value.spread())
    }
}

macro_rules! impl_forwarding {
    // One argument is handled by the spreading implementation above.
    (T0 0) => {};
    ($($argument:ident $index:tt),*) => {
        impl<Function, $($argument),*> Callable<($($argument,)*)> for AutoUnpack<Function>
        where
            Function: Callable<($($argument,)*)>,
        {
            type Output = Function::Output;

            #[inline]
            fn invoke(&self, arguments: ($($argument,)*)) -> Self::Output {
                self.function.invoke(arguments)
            }
        }
    };
}

for_each_tuple!(impl_forwarding);

/// Wraps `function` in an [`AutoUnpack`].
#[inline]
pub const fn auto_unpack<Function>(function: Function) -> AutoUnpack<Function> {
    AutoUnpack::new(function)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn add(first: i32, second: i32) -> i32 {
        first + second
    }

    #[rstest]
    fn tuple_by_value_is_spread() {
        assert_eq!(auto_unpack(add).invoke(((2, 1),)), 3);
    }

    #[rstest]
    fn tuple_by_shared_reference_is_spread() {
        let pair = (4, 5);
        let add_references = |first: &i32, second: &i32| first + second;
        assert_eq!(auto_unpack(add_references).invoke((&pair,)), 9);
    }

    #[rstest]
    fn tuple_by_mutable_reference_is_spread() {
        let mut pair = (1, 10);
        let transfer = |from: &mut i32, to: &mut i32| {
            *to += *from;
            *from = 0;
        };

        auto_unpack(transfer).invoke((&mut pair,));

        assert_eq!(pair, (0, 11));
    }

    #[rstest]
    fn single_scalar_is_forwarded() {
        let double = |value: i32| value * 2;
        assert_eq!(auto_unpack(double).invoke((21_i32,)), 42);
    }

    #[rstest]
    fn single_string_slice_is_forwarded() {
        let length = |text: &str| text.len();
        assert_eq!(auto_unpack(length).invoke(("four",)), 4);
    }

    #[rstest]
    fn single_vector_is_forwarded() {
        let total = |values: Vec<u32>| values.into_iter().sum::<u32>();
        assert_eq!(auto_unpack(total).invoke((vec![1, 2, 3],)), 6);
    }

    #[rstest]
    fn several_arguments_are_forwarded() {
        assert_eq!(auto_unpack(add).invoke((2, 1)), 3);
    }

    #[rstest]
    fn zero_arguments_are_forwarded() {
        let constant = || 'x';
        assert_eq!(auto_unpack(constant).invoke(()), 'x');
    }

    #[rstest]
    fn empty_tuple_spreads_into_nullary_call() {
        let constant = || 5_u8;
        assert_eq!(auto_unpack(constant).invoke(((),)), 5);
    }

    #[rstest]
    fn one_element_tuple_spreads_into_its_element() {
        let negate = |value: i64| -value;
        assert_eq!(auto_unpack(negate).invoke(((8_i64,),)), -8);
    }
}
