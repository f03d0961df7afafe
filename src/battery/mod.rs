//! Fan-out of several callables over the same arguments.
//!
//! A [`Battery`] holds a tuple of callables. Invoking it calls each of them
//! with the same arguments and returns all the results as a tuple, in the
//! order the callables were given:
//!
//! ```text
//! battery((f, g)).invoke(args) == (f(args), g(args))
//! ```
//!
//! With the `rayon` feature, [`ParallelBattery`] runs the members on the
//! rayon pool instead of one after the other.
//!
//! # Examples
//!
//! ```
//! use pipework::battery;
//! use pipework::callable::Callable;
//!
//! fn add(first: i32, second: i32) -> i32 { first + second }
//! fn mul(first: i32, second: i32) -> i32 { first * second }
//!
//! let both = battery((add, mul));
//! let (sum, product) = both.invoke((3, 4));
//! assert_eq!(sum, 7);
//! assert_eq!(product, 12);
//! ```

mod fan_out;
#[cfg(feature = "rayon")]
mod parallel;

pub use fan_out::{FanOut, apply_tuple};
#[cfg(feature = "rayon")]
pub use parallel::{ParallelBattery, ParallelFanOut, parallel_battery};

use crate::callable::Callable;

/// A fixed collection of callables invoked with the same arguments.
///
/// Every member runs exactly once per invocation, in declaration order, and
/// the result tuple lists each member's result in that same order. A member
/// returning `()` contributes `()` to its slot, so the tuple always has one
/// element per member.
///
/// Arguments are cloned for every member but the last. To let several
/// members observe or change the same state, pass a shared reference to an
/// interior-mutable value such as a `Cell` or `RefCell`.
///
/// A panicking member stops the invocation: later members do not run and no
/// partial result is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Battery<Members> {
    members: Members,
}

impl<Members> Battery<Members> {
    /// Creates a battery that owns `members`.
    #[inline]
    pub const fn new(members: Members) -> Self {
        Self { members }
    }

    /// Returns the members in declaration order.
    #[inline]
    pub const fn members(&self) -> &Members {
        &self.members
    }

    /// Returns the members for in-place replacement.
    #[inline]
    pub const fn members_mut(&mut self) -> &mut Members {
        &mut self.members
    }

    /// Consumes the battery and returns its members.
    #[inline]
    pub fn into_members(self) -> Members {
        self.members
    }

    /// Converts the battery into one that runs its members in parallel.
    ///
    /// The result order is unchanged; the order of side effects becomes
    /// unspecified.
    #[cfg(feature = "rayon")]
    #[inline]
    pub fn into_parallel(self) -> ParallelBattery<Members> {
        ParallelBattery::new(self.members)
    }
}

impl<Members, Arguments> Callable<Arguments> for Battery<Members>
where
    Members: FanOut<Arguments>,
{
    type Output = Members::Outputs;

    #[inline]
    fn invoke(&self, arguments: Arguments) -> Self::Output {
        self.members.fan_out(arguments)
    }
}

/// Builds a [`Battery`] from a tuple of members.
#[inline]
pub const fn battery<Members>(members: Members) -> Battery<Members> {
    Battery::new(members)
}

/// Builds a [`Battery`] from a list of members.
///
/// `battery![f, g]` is shorthand for `battery((f, g))`.
///
/// # Examples
///
/// ```
/// use pipework::callable::Callable;
///
/// let stats = pipework::battery![
///     |values: &[i32]| values.len(),
///     |values: &[i32]| values.iter().sum::<i32>(),
/// ];
/// assert_eq!(stats.invoke((&[1, 2, 3][..],)), (3, 6));
/// ```
#[macro_export]
macro_rules! battery {
    ($($member:expr),* $(,)?) => {
        $crate::battery::Battery::new(($($member,)*))
    };
}

static_assertions::assert_eq_size!(Battery<(fn(i32) -> i32, fn(i32) -> i32)>, [fn(i32) -> i32; 2]);
static_assertions::assert_impl_all!(Battery<(fn(i32) -> i32,)>: Send, Sync, Copy);
