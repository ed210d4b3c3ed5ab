/// Result of routing one input signal through a layout session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Signal was handled: selection or field text changed.
    Consumed,
    /// Signal did not affect the session.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}

impl From<bool> for EventResult {
    #[inline]
    fn from(handled: bool) -> Self {
        if handled { EventResult::Consumed } else { EventResult::Ignored }
    }
}
