//! Defines the `Error` and `Result` types that this crate uses.

use std::error::Error;
use std::fmt::Display;
use std::io::Error as IoError;

use matplotlib::Error as MplError;

/// The result type that uses [PlotError] as the error type.
pub type Result<T> = std::result::Result<T, PlotError>;

/// The error type for parsing and plotting the piped xy data.
///
/// None of these are recovered from; the binary lets them
/// terminate the run.
#[derive(Debug)]
pub enum PlotError {
    /// An input line does not hold exactly two valid
    /// floating-point columns. The line number is 1-based.
    Parse { line: usize, reason: String },

    /// Closing the path needs at least one point.
    EmptyInput,

    /// A [std::io::Error] encountered while reading standard input.
    Io(IoError),

    /// A [matplotlib::Error] encountered while drawing the figure
    /// or writing it to the output path.
    Render(MplError),
}

impl Error for PlotError {}

impl Display for PlotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlotError::Parse { line, reason } => {
                write!(f, "parse error on line {}: {}", line, reason)
            }
            PlotError::EmptyInput => {
                write!(f, "cannot close the path of an empty series")
            }
            PlotError::Io(error) => write!(f, "I/O error: {}", error),
            PlotError::Render(error) => write!(f, "render error: {}", error),
        }
    }
}

impl From<IoError> for PlotError {
    fn from(error: IoError) -> Self {
        PlotError::Io(error)
    }
}

impl From<MplError> for PlotError {
    fn from(error: MplError) -> Self {
        PlotError::Render(error)
    }
}
