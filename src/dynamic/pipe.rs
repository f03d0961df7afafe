//! Runtime-shaped pipes over type-erased stages.

use std::any::{Any, TypeId, type_name};
use std::fmt;

use smallvec::SmallVec;

use super::CompositionError;
use crate::callable::Callable;
use crate::trace::{debug_event, trace_event};

type ErasedFunction<'a> = Box<dyn Fn(Box<dyn Any>) -> Result<Box<dyn Any>, CompositionError> + 'a>;

/// A unary callable with its input and output types recorded at runtime.
pub struct ErasedStage<'a> {
    function: ErasedFunction<'a>,
    input: TypeId,
    input_name: &'static str,
    output: TypeId,
    output_name: &'static str,
}

impl<'a> ErasedStage<'a> {
    /// Erases `function`, which must take exactly one argument.
    ///
    /// Any unary [`Callable`] works, including a statically typed
    /// [`Pipe`](crate::compose::Pipe).
    pub fn new<Input, Output, Function>(function: Function) -> Self
    where
        Input: 'static,
        Output: 'static,
        Function: Callable<(Input,), Output = Output> + 'a,
    {
        let erased = move |value: Box<dyn Any>| -> Result<Box<dyn Any>, CompositionError> {
            let input = value
                .downcast::<Input>()
                .map_err(|_| CompositionError::InputMismatch {
                    expected: type_name::<Input>(),
                    found: "a value of another type",
                })?;
            Ok(Box::new(function.invoke((*input,))) as Box<dyn Any>)
        };

        Self {
            function: Box::new(erased),
            input: TypeId::of::<Input>(),
            input_name: type_name::<Input>(),
            output: TypeId::of::<Output>(),
            output_name: type_name::<Output>(),
        }
    }

    /// Returns the name of the type this stage accepts.
    #[must_use]
    pub const fn input_type_name(&self) -> &'static str {
        self.input_name
    }

    /// Returns the name of the type this stage produces.
    #[must_use]
    pub const fn output_type_name(&self) -> &'static str {
        self.output_name
    }

    fn accepts_output_of(&self, previous: &Self) -> bool {
        self.input == previous.output
    }
}

impl fmt::Debug for ErasedStage<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ErasedStage")
            .field("input", &self.input_name)
            .field("output", &self.output_name)
            .finish_non_exhaustive()
    }
}

/// A pipe whose stages are only known at runtime.
///
/// The shape is checked once, when the pipe is built: every stage must accept
/// exactly the type the stage before it produces. Invocation checks the
/// caller's input and requested output types before running any stage.
///
/// # Examples
///
/// ```
/// use pipework::dynamic::{ErasedPipe, ErasedStage};
///
/// let pipe = ErasedPipe::new([
///     ErasedStage::new(|value: i32| value + 3),
///     ErasedStage::new(|value: i32| value * 3),
///     ErasedStage::new(|value: i32| value.to_string()),
/// ])?;
///
/// assert_eq!(pipe.invoke::<i32, String>(2)?, "15");
/// # Ok::<(), pipework::dynamic::CompositionError>(())
/// ```
///
/// A stage that cannot take its predecessor's output is rejected:
///
/// ```
/// use pipework::dynamic::{CompositionError, ErasedPipe, ErasedStage};
///
/// let result = ErasedPipe::new([
///     ErasedStage::new(|value: i32| value.to_string()),
///     ErasedStage::new(|value: i32| value + 1),
/// ]);
///
/// assert!(matches!(result, Err(CompositionError::StageMismatch { position: 1, .. })));
/// ```
pub struct ErasedPipe<'a> {
    stages: SmallVec<[ErasedStage<'a>; 4]>,
}

impl<'a> ErasedPipe<'a> {
    /// Builds a pipe from `stages`, checking that adjacent stages fit.
    ///
    /// # Errors
    ///
    /// Returns [`CompositionError::EmptyPipe`] when `stages` is empty and
    /// [`CompositionError::StageMismatch`] for the first stage that cannot
    /// accept its predecessor's output.
    pub fn new<Stages>(stages: Stages) -> Result<Self, CompositionError>
    where
        Stages: IntoIterator<Item = ErasedStage<'a>>,
    {
        let stages: SmallVec<[ErasedStage<'a>; 4]> = stages.into_iter().collect();

        if stages.is_empty() {
            debug_event!("rejected erased pipe without stages");
            return Err(CompositionError::EmptyPipe);
        }

        for (offset, pair) in stages.windows(2).enumerate() {
            if let [previous, next] = pair
                && !next.accepts_output_of(previous)
            {
                return Err(mismatch(offset + 1, previous, next));
            }
        }

        Ok(Self { stages })
    }

    /// Appends `stage`, checking that it accepts the current output.
    ///
    /// # Errors
    ///
    /// Returns [`CompositionError::StageMismatch`] when `stage` cannot accept
    /// the output of the current last stage.
    pub fn then(mut self, stage: ErasedStage<'a>) -> Result<Self, CompositionError> {
        if let Some(previous) = self.stages.last()
            && !stage.accepts_output_of(previous)
        {
            return Err(mismatch(self.stages.len(), previous, &stage));
        }
        self.stages.push(stage);
        Ok(self)
    }

    /// Returns the number of stages, which is never zero.
    #[must_use]
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Returns the name of the type the first stage accepts.
    #[must_use]
    pub fn input_type_name(&self) -> &'static str {
        self.stages
            .first()
            .map_or("()", ErasedStage::input_type_name)
    }

    /// Returns the name of the type the last stage produces.
    #[must_use]
    pub fn output_type_name(&self) -> &'static str {
        self.stages
            .last()
            .map_or("()", ErasedStage::output_type_name)
    }

    /// Runs `input` through every stage and returns the final value.
    ///
    /// # Errors
    ///
    /// Returns [`CompositionError::InputMismatch`] when `Input` is not the
    /// type the first stage accepts and [`CompositionError::OutputMismatch`]
    /// when `Output` is not the type the last stage produces. Both are
    /// detected before any stage runs.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub fn invoke<Input, Output>(&self, input: Input) -> Result<Output, CompositionError>
    where
        Input: 'static,
        Output: 'static,
    {
        let (Some(first), Some(last)) = (self.stages.first(), self.stages.last()) else {
            return Err(CompositionError::EmptyPipe);
        };

        if first.input != TypeId::of::<Input>() {
            debug_event!(
                expected = first.input_name,
                found = type_name::<Input>(),
                "erased pipe invoked with the wrong input type"
            );
            return Err(CompositionError::InputMismatch {
                expected: first.input_name,
                found: type_name::<Input>(),
            });
        }

        if last.output != TypeId::of::<Output>() {
            debug_event!(
                expected = last.output_name,
                found = type_name::<Output>(),
                "erased pipe asked for the wrong output type"
            );
            return Err(CompositionError::OutputMismatch {
                expected: last.output_name,
                found: type_name::<Output>(),
            });
        }

        let mut value: Box<dyn Any> = Box::new(input);
        for (position, stage) in self.stages.iter().enumerate() {
            trace_event!(
                position,
                input = stage.input_name,
                output = stage.output_name,
                "running erased stage"
            );
            value = (stage.function)(value)?;
        }

        value
            .downcast::<Output>()
            .map(|output| *output)
            .map_err(|_| CompositionError::OutputMismatch {
                expected: last.output_name,
                found: type_name::<Output>(),
            })
    }
}

fn mismatch(position: usize, previous: &ErasedStage<'_>, next: &ErasedStage<'_>) -> CompositionError {
    debug_event!(
        position,
        expected = next.input_name,
        found = previous.output_name,
        "rejected erased pipe with mismatched stages"
    );
    CompositionError::StageMismatch {
        position,
        expected: next.input_name,
        found: previous.output_name,
    }
}

impl fmt::Debug for ErasedPipe<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ErasedPipe")
            .field("stages", &self.stages)
            .finish()
    }
}
