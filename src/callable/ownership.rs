//! Owning and borrowing callables.
//!
//! Combinators take their callables by value. [`owned`] produces the copy to
//! hand over when only a reference is at hand; [`by_ref`] goes the other way
//! and lets a combinator use a callable it does not own.

use std::fmt;

use super::Callable;

/// Returns an owned copy of `value`.
///
/// Useful when a combinator should own a callable that the caller only holds
/// by reference, such as one stored in a long-lived struct.
///
/// # Examples
///
/// ```
/// use pipework::callable::{Callable, owned};
/// use pipework::pipe;
///
/// let prefix = String::from("id-");
/// let tag = move |value: u32| format!("{prefix}{value}");
/// let length = |text: String| text.len();
///
/// let tagged = pipe((owned(&tag), length));
/// assert_eq!(tagged.invoke((42,)), 5);
/// assert_eq!(tag(7), "id-7");
/// ```
#[inline]
pub fn owned<T>(value: &T) -> T::Owned
where
    T: ToOwned + ?Sized,
{
    value.to_owned()
}

/// A non-owning handle to a callable.
///
/// `Borrowed` delegates every invocation to the referenced callable. It is
/// `Copy` regardless of the callable, so one callable can appear in several
/// combinators at once. The borrow checker keeps the referent alive for as
/// long as any combinator holding the handle.
///
/// # Examples
///
/// ```
/// use pipework::callable::{Callable, by_ref};
/// use pipework::{battery, pipe};
///
/// let add_three = |value: i32| value + 3;
/// let shared = pipe((add_three, |value: i32| value * 3));
///
/// let both = battery((by_ref(&shared), by_ref(&shared)));
/// assert_eq!(both.invoke((2,)), (15, 15));
/// assert_eq!(shared.invoke((0,)), 9);
/// ```
pub struct Borrowed<'a, C: ?Sized> {
    callable: &'a C,
}

impl<'a, C: ?Sized> Borrowed<'a, C> {
    /// Wraps a reference to `callable`.
    #[inline]
    pub const fn new(callable: &'a C) -> Self {
        Self { callable }
    }

    /// Returns the referenced callable.
    #[inline]
    #[must_use]
    pub const fn get(&self) -> &'a C {
        self.callable
    }
}

impl<C: ?Sized> Clone for Borrowed<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized> Copy for Borrowed<'_, C> {}

impl<C: fmt::Debug + ?Sized> fmt::Debug for Borrowed<'_, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Borrowed").field(&self.callable).finish()
    }
}

impl<C, Arguments> Callable<Arguments> for Borrowed<'_, C>
where
    C: Callable<Arguments> + ?Sized,
{
    type Output = C::Output;

    #[inline]
    fn invoke(&self, arguments: Arguments) -> Self::Output {
        self.callable.invoke(arguments)
    }
}

/// Wraps a reference to `callable` in a [`Borrowed`] handle.
#[inline]
pub const fn by_ref<C: ?Sized>(callable: &C) -> Borrowed<'_, C> {
    Borrowed::new(callable)
}
