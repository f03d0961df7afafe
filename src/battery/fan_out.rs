//! Applying every member of a tuple of callables to the same arguments.

use crate::arity::for_each_fan_out;
use crate::callable::Callable;

/// A tuple of callables that all accept `Arguments`.
///
/// Members are invoked once each, strictly in declaration order. Every
/// member except the last receives a clone of the arguments and the last
/// receives the original, so a one-member fan-out needs no `Clone`.
///
/// If a member panics, the members after it are not invoked and no result
/// tuple is produced. Side effects of the members that already ran are not
/// undone.
pub trait FanOut<Arguments> {
    /// The tuple of member results, in declaration order.
    type Outputs;

    /// Invokes every member with `arguments`.
    fn fan_out(&self, arguments: Arguments) -> Self::Outputs;
}

impl<Arguments> FanOut<Arguments> for () {
    type Outputs = ();

    #[inline]
    fn fan_out(&self, _arguments: Arguments) -> Self::Outputs {}
}

macro_rules! impl_fan_out {
    (; $last:ident $last_index:tt) => {
        impl<Arguments, $last> FanOut<Arguments> for ($last,)
        where
            $last: Callable<Arguments>,
        {
            type Outputs = ($last::Output,);

            #[inline]
            fn fan_out(&self, arguments: Arguments) -> Self::Outputs {
                (self.$last_index.invoke(arguments),)
            }
        }
    };
    ($($member:ident $index:tt),+; $last:ident $last_index:tt) => {
        impl<Arguments, $($member,)+ $last> FanOut<Arguments> for ($($member,)+ $last,)
        where
            Arguments: Clone,
            $($member: Callable<Arguments>,)+
            $last: Callable<Arguments>,
        {
            type Outputs = ($(<$member as Callable<Arguments>>::Output,)+ $last::Output,);

            #[inline]
            fn fan_out(&self, arguments: Arguments) -> Self::Outputs {
                (
                    $(self.$index.invoke(arguments.clone()),)+
                    self.$last_index.invoke(arguments),
                )
            }
        }
    };
}

for_each_fan_out!(impl_fan_out);

/// Invokes every callable of `members` with `arguments` and collects the
/// results in declaration order.
///
/// # Examples
///
/// ```
/// use pipework::battery::apply_tuple;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
/// fn mul(first: i32, second: i32) -> i32 { first * second }
///
/// assert_eq!(apply_tuple(&(add, mul), (3, 4)), (7, 12));
/// ```
#[inline]
pub fn apply_tuple<Members, Arguments>(members: &Members, arguments: Arguments) -> Members::Outputs
where
    Members: FanOut<Arguments> + ?Sized,
{
    members.fan_out(arguments)
}
