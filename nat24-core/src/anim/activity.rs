//! Shared "an animation is running" state

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How lifecycle notifications combine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ActivityMode {
    /// One bit: any start sets it, any stop clears it
    #[default]
    Flag,
    /// Active while more animations have started than stopped
    Counted,
}

/// Activity tracker read by the indicator renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Activity {
    mode: ActivityMode,
    active: u8,
}

impl Activity {
    /// Create an idle tracker
    pub const fn new(mode: ActivityMode) -> Self {
        Self { mode, active: 0 }
    }

    /// Combination mode
    pub fn mode(&self) -> ActivityMode {
        self.mode
    }

    /// A lifecycle-tracked animation started
    pub fn start(&mut self) {
        self.active = match self.mode {
            ActivityMode::Flag => 1,
            ActivityMode::Counted => self.active.saturating_add(1),
        };
    }

    /// A lifecycle-tracked animation stopped
    pub fn stop(&mut self) {
        self.active = match self.mode {
            ActivityMode::Flag => 0,
            ActivityMode::Counted => self.active.saturating_sub(1),
        };
    }

    /// Check if an animation is considered active
    pub fn is_active(&self) -> bool {
        self.active > 0
    }

    /// Number of tracked animations believed to be running
    pub fn active_count(&self) -> u8 {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_cleared_by_first_stop() {
        let mut activity = Activity::new(ActivityMode::Flag);
        activity.start();
        activity.start();
        assert!(activity.is_active());

        activity.stop();
        assert!(!activity.is_active());
    }

    #[test]
    fn test_counted_waits_for_last_stop() {
        let mut activity = Activity::new(ActivityMode::Counted);
        activity.start();
        activity.start();
        assert_eq!(activity.active_count(), 2);

        activity.stop();
        assert!(activity.is_active());

        activity.stop();
        assert!(!activity.is_active());

        // Unbalanced stop does not underflow
        activity.stop();
        assert_eq!(activity.active_count(), 0);
    }
}
