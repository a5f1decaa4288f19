//! Progress reporting and cooperative cancellation
//!
//! The solver polls its sink every `report_interval` steps. A sink that
//! wants the run to stop returns `Err(Cancelled)` from `poll`; the solver
//! then returns immediately with an empty result instead of an error.

/// Marker returned by [`StatusSink::poll`] when the caller asked to stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

/// External observer of a long-running solve.
pub trait StatusSink {
    /// Check for a pending cancellation request.
    fn poll(&mut self) -> Result<(), Cancelled>;

    /// Report progress as a fraction in `[0, 1]` plus a short message.
    fn set_progress(&mut self, fraction: f64, message: &str);
}

/// Sink that never cancels and discards progress.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullStatus;

impl StatusSink for NullStatus {
    fn poll(&mut self) -> Result<(), Cancelled> {
        Ok(())
    }

    fn set_progress(&mut self, _fraction: f64, _message: &str) {}
}

impl<S: StatusSink + ?Sized> StatusSink for &mut S {
    fn poll(&mut self) -> Result<(), Cancelled> {
        (**self).poll()
    }

    fn set_progress(&mut self, fraction: f64, message: &str) {
        (**self).set_progress(fraction, message)
    }
}
