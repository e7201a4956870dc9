use super::Record;

/// Event emitted by the secant solver after each step.
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
