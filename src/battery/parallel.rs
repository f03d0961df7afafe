//! Fan-out across the rayon thread pool.

use crate::arity::for_each_tuple;
use crate::callable::Callable;
use crate::trace::trace_event;

/// A tuple of callables that can be invoked concurrently.
///
/// The result tuple keeps declaration order. The order in which members
/// actually run, and therefore the order of any side effects they have on
/// shared state, is unspecified.
pub trait ParallelFanOut<Arguments> {
    /// The tuple of member results, in declaration order.
    type Outputs;

    /// Invokes every member with its own clone of `arguments`, in parallel.
    fn par_fan_out(&self, arguments: Arguments) -> Self::Outputs;
}

macro_rules! join_members {
    ($members:ident, $arguments:ident; $index:tt) => {
        $members.$index.invoke($arguments)
    };
    ($members:ident, $arguments:ident; $index:tt, $($rest:tt),+) => {{
        let head_arguments = $arguments.clone();
        ::rayon::join(
            move || $members.$index.invoke(head_arguments),
            move || join_members!($members, $arguments; $($rest),+),
        )
    }};
}

macro_rules! nested_pattern {
    ($last:ident) => {
        $last
    };
    ($head:ident, $($rest:ident),+) => {
        ($head, nested_pattern!($($rest),+))
    };
}

macro_rules! impl_parallel_fan_out {
    () => {
        impl<Arguments> ParallelFanOut<Arguments> for () {
            type Outputs = ();

            #[inline]
            fn par_fan_out(&self, _arguments: Arguments) -> Self::Outputs {}
        }
    };
    ($member:ident $index:tt) => {
        impl<Arguments, $member> ParallelFanOut<Arguments> for ($member,)
        where
            $member: Callable<Arguments>,
        {
            type Outputs = ($member::Output,);

            #[inline]
            fn par_fan_out(&self, arguments: Arguments) -> Self::Outputs {
                (self.$index.invoke(arguments),)
            }
        }
    };
    ($($member:ident $index:tt),+) => {
        impl<Arguments, $($member),+> ParallelFanOut<Arguments> for ($($member,)+)
        where
            Arguments: Clone + Send,
            $(
                $member: Callable<Arguments> + Sync,
                <$member as Callable<Arguments>>::Output: Send,
            )+
        {
            type Outputs = ($(<$member as Callable<Arguments>>::Output,)+);

            #[allow(non_snake_case)]
            fn par_fan_out(&self, arguments: Arguments) -> Self::Outputs {
                let members = self;
                let nested_pattern!($($member),+) = join_members!(members, arguments; $($index),+);
                ($($member,)+)
            }
        }
    };
}

for_each_tuple!(impl_parallel_fan_out);

/// A battery whose members run concurrently on the rayon thread pool.
///
/// Results come back in declaration order, like [`Battery`](super::Battery).
/// Every member must be `Sync`, the arguments `Clone + Send` and every
/// output `Send`. A panicking member propagates its panic to the caller
/// once the other members have finished.
///
/// # Examples
///
/// ```
/// use pipework::battery::parallel_battery;
/// use pipework::callable::Callable;
///
/// let sum = |values: &[u64]| values.iter().sum::<u64>();
/// let max = |values: &[u64]| values.iter().copied().max();
///
/// let values = [3, 9, 4];
/// assert_eq!(parallel_battery((sum, max)).invoke((&values[..],)), (16, Some(9)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ParallelBattery<Members> {
    members: Members,
}

impl<Members> ParallelBattery<Members> {
    /// Creates a parallel battery that owns `members`.
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
}

impl<Members, Arguments> Callable<Arguments> for ParallelBattery<Members>
where
    Members: ParallelFanOut<Arguments>,
{
    type Output = Members::Outputs;

    fn invoke(&self, arguments: Arguments) -> Self::Output {
        trace_event!(
            members = std::any::type_name::<Members>(),
            "fanning battery out across the rayon pool"
        );
        self.members.par_fan_out(arguments)
    }
}

/// Builds a [`ParallelBattery`] from a tuple of members.
#[inline]
pub const fn parallel_battery<Members>(members: Members) -> ParallelBattery<Members> {
    ParallelBattery::new(members)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn add(first: i32, second: i32) -> i32 {
        first + second
    }

    fn mul(first: i32, second: i32) -> i32 {
        first * second
    }

    #[rstest]
    fn results_keep_declaration_order() {
        assert_eq!(parallel_battery((add, mul)).invoke((3, 4)), (7, 12));
    }

    #[rstest]
    fn every_member_runs_exactly_once() {
        let calls = AtomicUsize::new(0);
        let record = |value: usize| calls.fetch_add(value, Ordering::SeqCst);

        let battery = parallel_battery((record, record, record, record, record));
        battery.invoke((1,));

        assert_eq!(calls.load(Ordering::SeqCst), 5);
    }

    #[rstest]
    fn slow_members_do_not_reorder_results() {
        let slow = |value: u64| {
            std::thread::sleep(std::time::Duration::from_millis(20));
            value
        };
        let fast = |value: u64| value * 100;

        assert_eq!(parallel_battery((slow, fast)).invoke((2,)), (2, 200));
    }

    #[rstest]
    fn single_member_runs_inline() {
        let negate = |value: i32| -value;
        assert_eq!(parallel_battery((negate,)).invoke((5,)), (-5,));
    }

    #[rstest]
    fn members_mut_swaps_member_of_same_type() {
        let mut calculator =
            parallel_battery((add as fn(i32, i32) -> i32, mul as fn(i32, i32) -> i32));
        calculator.members_mut().0 = mul;
        assert_eq!(calculator.invoke((3, 4)), (12, 12));
        assert_eq!((calculator.members().1)(2, 5), 10);
    }

    #[rstest]
    fn empty_battery_yields_empty_tuple() {
        let () = parallel_battery(()).invoke(("ignored",));
    }

    #[rstest]
    #[should_panic(expected = "member failed")]
    fn panicking_member_propagates() {
        let fail = |_: i32| -> i32 { panic!("member failed") };
        parallel_battery((add_one, fail)).invoke((1,));

        fn add_one(value: i32) -> i32 {
            value + 1
        }
    }
}
