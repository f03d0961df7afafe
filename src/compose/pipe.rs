//! Left-to-right composition.

use crate::arity::for_each_chain;
use crate::callable::Callable;

/// A fixed chain of stages run left to right.
///
/// Invoking a `Pipe` calls the first stage with the caller's arguments, then
/// every following stage with the single output of the stage before it, and
/// returns the output of the last stage:
///
/// ```text
/// pipe((f, g, h)).invoke(args) == h(g(f(args)))
/// ```
///
/// Stages are stored as a flat tuple of 1 to 12 callables. Each stage after
/// the first must accept `(previous_output,)`. A mismatch is a type error at
/// the first place the pipe is invoked:
///
/// ```compile_fail
/// use pipework::callable::Callable;
/// use pipework::pipe;
///
/// let render = |value: i32| value.to_string();
/// let increment = |value: i32| value + 1;
///
/// // `increment` cannot take the `String` produced by `render`.
/// pipe((render, increment)).invoke((1,));
/// ```
///
/// A panic raised by a stage propagates to the caller and the remaining
/// stages do not run.
///
/// # Examples
///
/// ```
/// use pipework::callable::Callable;
/// use pipework::pipe;
///
/// fn add3(value: i32) -> i32 { value + 3 }
/// fn mul3(value: i32) -> i32 { value * 3 }
///
/// assert_eq!(pipe((add3, mul3)).invoke((2,)), 15);
/// assert_eq!(pipe((mul3, add3)).invoke((2,)), 9);
/// ```
///
/// The first stage may take any number of arguments:
///
/// ```
/// use pipework::callable::Callable;
/// use pipework::pipe;
///
/// let area = |width: u32, height: u32| width * height;
/// let describe = |area: u32| format!("{area} m2");
///
/// assert_eq!(pipe((area, describe)).invoke((3, 4)), "12 m2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pipe<Stages> {
    stages: Stages,
}

impl<Stages> Pipe<Stages> {
    /// Creates a pipe that owns `stages`.
    #[inline]
    pub const fn new(stages: Stages) -> Self {
        Self { stages }
    }

    /// Returns the stages in evaluation order.
    #[inline]
    pub const fn stages(&self) -> &Stages {
        &self.stages
    }

    /// Returns the stages for in-place replacement.
    ///
    /// A stage can only be swapped for another value of the same type, so
    /// the shape of the pipe never changes.
    ///
    /// # Examples
    ///
    /// ```
    /// use pipework::callable::Callable;
    /// use pipework::pipe;
    ///
    /// fn add3(value: i32) -> i32 { value + 3 }
    /// fn mul3(value: i32) -> i32 { value * 3 }
    ///
    /// let mut chain = pipe((add3 as fn(i32) -> i32, mul3 as fn(i32) -> i32));
    /// chain.stages_mut().0 = mul3;
    /// assert_eq!(chain.invoke((2,)), 18);
    /// ```
    #[inline]
    pub const fn stages_mut(&mut self) -> &mut Stages {
        &mut self.stages
    }

    /// Consumes the pipe and returns its stages.
    #[inline]
    pub fn into_stages(self) -> Stages {
        self.stages
    }
}

macro_rules! impl_pipe {
    (
        [$($stage_type:ident),*] [$($output:ident),*]
        $first:ident $first_output:ident $first_index:tt;
        $($stage:ident $stage_output:ident $previous:ident $index:tt),*;
        $last_output:ident
    ) => {
        impl<Arguments, $($stage_type,)* $($output,)*> Callable<Arguments> for Pipe<($($stage_type,)*)>
        where
            $first: Callable<Arguments, Output = $first_output>,
            $($stage: Callable<($previous,), Output = $stage_output>,)*
        {
            type Output = $last_output;

            #[inline]
            fn invoke(&self, arguments: Arguments) -> Self::Output {
                let value = self.stages.$first_index.invoke(arguments);
                $(let value = self.stages.$index.invoke((value,));)*
                value
            }
        }
    };
}

for_each_chain!(impl_pipe);

/// Builds a [`Pipe`] from a tuple of stages.
///
/// # Examples
///
/// ```
/// use pipework::callable::Callable;
/// use pipework::pipe;
///
/// let parse = |text: &str| text.trim().len();
/// let even = |length: usize| length.is_multiple_of(2);
///
/// assert!(pipe((parse, even)).invoke(("  four  ",)));
/// ```
#[inline]
pub const fn pipe<Stages>(stages: Stages) -> Pipe<Stages> {
    Pipe::new(stages)
}

/// Builds a [`Pipe`] from a list of stages.
///
/// `pipe![f, g, h]` is shorthand for `pipe((f, g, h))`.
///
/// # Examples
///
/// ```
/// use pipework::callable::Callable;
///
/// let chain = pipework::pipe![|value: i32| value + 1, |value: i32| value * 10];
/// assert_eq!(chain.invoke((4,)), 50);
/// ```
#[macro_export]
macro_rules! pipe {
    ($($stage:expr),+ $(,)?) => {
        $crate::compose::Pipe::new(($($stage,)+))
    };
}
