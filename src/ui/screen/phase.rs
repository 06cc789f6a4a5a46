// SPDX-License-Identifier: MPL-2.0
//! Interaction phase of a sheet screen.

/// Where the screen is in its drag lifecycle.
///
/// `Idle -> Dragging -> {Closing, Cancelling} -> Idle`. A new grab may
/// interrupt `Cancelling`; `Closing` runs to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Dragging,
    Closing,
    Cancelling,
}

impl Phase {
    /// Whether a gesture begin may start a drag from this phase.
    #[must_use]
    pub fn accepts_drag(self) -> bool {
        matches!(self, Self::Idle | Self::Cancelling)
    }

    /// Whether springs released by the last drag are still running.
    #[must_use]
    pub fn is_settling(self) -> bool {
        matches!(self, Self::Closing | Self::Cancelling)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closing_rejects_new_drags() {
        assert!(Phase::Idle.accepts_drag());
        assert!(Phase::Cancelling.accepts_drag());
        assert!(!Phase::Closing.accepts_drag());
        assert!(!Phase::Dragging.accepts_drag());
    }

    #[test]
    fn only_release_phases_settle() {
        assert!(Phase::Closing.is_settling());
        assert!(Phase::Cancelling.is_settling());
        assert!(!Phase::Idle.is_settling());
        assert!(!Phase::Dragging.is_settling());
    }
}
