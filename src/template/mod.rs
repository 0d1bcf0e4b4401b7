//! Template method: a fixed display skeleton with variant-supplied steps.
//!
//! [`Display::run`] is the only place the call sequence is spelled out:
//!
//! 1. open marker (fixed)
//! 2. [`DisplaySteps::after_open`]
//! 3. [`EMIT_REPETITIONS`] calls of [`DisplaySteps::emit`]
//! 4. [`DisplaySteps::before_close`]
//! 5. close marker (fixed)
//!
//! Variants implement [`DisplaySteps`] and cannot reorder or skip steps.

mod displays;

pub use displays::{CharDisplay, StringDisplay};

use std::fmt;
use std::io::{self, Write};

use thiserror::Error;
use tracing::{debug, trace};

/// Number of `emit` calls per run.
pub const EMIT_REPETITIONS: usize = 5;

/// Written by the fixed open step.
pub const OPEN_MARKER: &str = "Opening Display...\n";

/// Written by the fixed close step.
pub const CLOSE_MARKER: &str = "Closing Display...\nGoodbye!\n";

/// Position within the display skeleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Fixed opening announcement.
    Open,
    /// Variant hook after opening.
    AfterOpen,
    /// Variant body, with its 0-based repetition index.
    Emit(usize),
    /// Variant hook before closing.
    BeforeClose,
    /// Fixed closing announcement.
    Close,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Open => f.write_str("open"),
            Step::AfterOpen => f.write_str("after_open"),
            Step::Emit(round) => write!(f, "emit #{}", round + 1),
            Step::BeforeClose => f.write_str("before_close"),
            Step::Close => f.write_str("close"),
        }
    }
}

/// Errors raised while running a display.
#[derive(Debug, Error)]
pub enum DisplayError {
    /// A step failed to write; later steps were not run.
    #[error("display step {step} failed: {source}")]
    Step {
        /// Step that failed.
        step: Step,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// Rendered output was not valid UTF-8.
    #[error("display produced invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Variant-specific steps plugged into [`Display`].
pub trait DisplaySteps {
    /// Runs once, right after the open marker.
    fn after_open(&self, out: &mut dyn Write) -> io::Result<()>;

    /// Runs [`EMIT_REPETITIONS`] times; calls are independent of each other.
    fn emit(&self, out: &mut dyn Write) -> io::Result<()>;

    /// Runs once, right before the close marker.
    fn before_close(&self, out: &mut dyn Write) -> io::Result<()>;
}

impl<T: DisplaySteps + ?Sized> DisplaySteps for &T {
    fn after_open(&self, out: &mut dyn Write) -> io::Result<()> {
        (**self).after_open(out)
    }

    fn emit(&self, out: &mut dyn Write) -> io::Result<()> {
        (**self).emit(out)
    }

    fn before_close(&self, out: &mut dyn Write) -> io::Result<()> {
        (**self).before_close(out)
    }
}

impl<T: DisplaySteps + ?Sized> DisplaySteps for Box<T> {
    fn after_open(&self, out: &mut dyn Write) -> io::Result<()> {
        (**self).after_open(out)
    }

    fn emit(&self, out: &mut dyn Write) -> io::Result<()> {
        (**self).emit(out)
    }

    fn before_close(&self, out: &mut dyn Write) -> io::Result<()> {
        (**self).before_close(out)
    }
}

/// Orchestrator owning the fixed skeleton.
#[derive(Debug, Clone)]
pub struct Display<S> {
    steps: S,
}

impl<S: DisplaySteps> Display<S> {
    /// Wrap a set of variant steps.
    pub fn new(steps: S) -> Self {
        Self { steps }
    }

    /// Access the variant steps.
    pub fn steps(&self) -> &S {
        &self.steps
    }

    /// Execute the skeleton once, writing to `out`.
    ///
    /// A failing step aborts the run; output already written stays written.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<(), DisplayError> {
        debug!("display run started");

        perform(Step::Open, out.write_all(OPEN_MARKER.as_bytes()))?;
        perform(Step::AfterOpen, self.steps.after_open(out))?;
        for round in 0..EMIT_REPETITIONS {
            perform(Step::Emit(round), self.steps.emit(out))?;
        }
        perform(Step::BeforeClose, self.steps.before_close(out))?;
        perform(
            Step::Close,
            out.write_all(CLOSE_MARKER.as_bytes()).and_then(|()| out.flush()),
        )?;

        debug!("display run finished");
        Ok(())
    }

    /// Run into an in-memory buffer and return the text.
    pub fn render(&self) -> Result<String, DisplayError> {
        let mut buffer = Vec::new();
        self.run(&mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

fn perform(step: Step, result: io::Result<()>) -> Result<(), DisplayError> {
    trace!(%step, ok = result.is_ok(), "display step");
    result.map_err(|source| DisplayError::Step { step, source })
}
