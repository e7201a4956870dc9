use super::Record;

/// Event emitted by the Newton solver after each step.
///
/// `exact` holds the unrounded step values and `rounded` the record that was
/// appended to the trace.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// Unrounded values of this step.
    pub exact: Record,

    /// The trace record for this step.
    pub rounded: &'a Record,
}

impl Event<'_> {
    /// Returns the iteration index (0-based).
    #[must_use]
    pub fn iter(&self) -> usize {
        self.exact.iter
    }
}
