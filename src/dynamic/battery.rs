//! Runtime-sized fan-out over closures sharing one signature.

use std::fmt;

use crate::callable::Callable;

type Member<'a, Argument, Output> = Box<dyn Fn(Argument) -> Output + 'a>;

/// A battery whose members are added at runtime.
///
/// Unlike [`Battery`](crate::battery::Battery), every member has the same
/// signature `Fn(Argument) -> Output`, so the results come back as a `Vec`
/// in insertion order. Use a tuple `Argument` for several parameters.
///
/// # Examples
///
/// ```
/// use pipework::dynamic::DynBattery;
///
/// let checks = DynBattery::new()
///     .with(|text: &str| !text.is_empty())
///     .with(|text: &str| text.is_ascii())
///     .with(|text: &str| text.len() <= 8);
///
/// assert_eq!(checks.invoke("pipework"), vec![true, true, true]);
/// assert_eq!(checks.invoke("über-long-name"), vec![true, false, false]);
/// ```
pub struct DynBattery<'a, Argument, Output> {
    members: Vec<Member<'a, Argument, Output>>,
}

impl<'a, Argument, Output> DynBattery<'a, Argument, Output> {
    /// Creates a battery without members.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    /// Adds `member` and returns the battery.
    #[must_use]
    pub fn with<Function>(mut self, member: Function) -> Self
    where
        Function: Fn(Argument) -> Output + 'a,
    {
        self.push(member);
        self
    }

    /// Adds `member` after the existing members.
    pub fn push<Function>(&mut self, member: Function)
    where
        Function: Fn(Argument) -> Output + 'a,
    {
        self.members.push(Box::new(member));
    }

    /// Returns the number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the battery has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Invokes every member with `argument`, in insertion order.
    ///
    /// Every member but the last receives a clone of `argument`.
    pub fn invoke(&self, argument: Argument) -> Vec<Output>
    where
        Argument: Clone,
    {
        let Some((last, leading)) = self.members.split_last() else {
            return Vec::new();
        };

        let mut results = Vec::with_capacity(self.members.len());
        results.extend(leading.iter().map(|member| member(argument.clone())));
        results.push(last(argument));
        results
    }
}

impl<Argument, Output> Default for DynBattery<'_, Argument, Output> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Argument, Output> fmt::Debug for DynBattery<'_, Argument, Output> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("DynBattery")
            .field("members", &self.members.len())
            .finish()
    }
}

impl<Argument, Output> Callable<(Argument,)> for DynBattery<'_, Argument, Output>
where
    Argument: Clone,
{
    type Output = Vec<Output>;

    fn invoke(&self, (argument,): (Argument,)) -> Self::Output {
        Self::invoke(self, argument)
    }
}
