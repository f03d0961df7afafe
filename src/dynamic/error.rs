//! Errors raised by the type-erased combinators.

/// A shape error detected when building or invoking an
/// [`ErasedPipe`](super::ErasedPipe).
///
/// The statically typed combinators never produce this error: there, the
/// same mistakes are compile errors.
///
/// # Examples
///
/// ```rust
/// use pipework::dynamic::CompositionError;
///
/// let error = CompositionError::StageMismatch {
///     position: 1,
///     expected: "alloc::string::String",
///     found: "i32",
/// };
/// assert_eq!(
///     format!("{}", error),
///     "stage 1 accepts `alloc::string::String` but the previous stage produces `i32`"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompositionError {
    /// A pipe was built without any stage.
    EmptyPipe,
    /// A stage cannot accept the output of the stage before it.
    StageMismatch {
        /// Index of the stage whose input does not match.
        position: usize,
        /// The input type of that stage.
        expected: &'static str,
        /// The output type of the previous stage.
        found: &'static str,
    },
    /// The pipe was invoked with a value of the wrong type.
    InputMismatch {
        /// The input type of the first stage.
        expected: &'static str,
        /// The type of the supplied value.
        found: &'static str,
    },
    /// The caller asked for a result type the pipe does not produce.
    OutputMismatch {
        /// The output type of the last stage.
        expected: &'static str,
        /// The type requested by the caller.
        found: &'static str,
    },
}

impl std::fmt::Display for CompositionError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyPipe => write!(formatter, "a pipe needs at least one stage"),
            Self::StageMismatch {
                position,
                expected,
                found,
            } => write!(
                formatter,
                "stage {position} accepts `{expected}` but the previous stage produces `{found}`"
            ),
            Self::InputMismatch { expected, found } => write!(
                formatter,
                "pipe accepts `{expected}` but was invoked with `{found}`"
            ),
            Self::OutputMismatch { expected, found } => write!(
                formatter,
                "pipe produces `{expected}` but `{found}` was requested"
            ),
        }
    }
}

impl std::error::Error for CompositionError {}
