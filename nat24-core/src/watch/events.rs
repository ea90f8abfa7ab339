//! Face input events and dirty-layer tracking

use crate::angle::WallTime;

/// Input to the watch face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaceEvent {
    /// The time source ticked
    Tick(WallTime),
    /// Animation frame at a monotonic timestamp (ms)
    Frame(u64),
}

/// Set of layers that need repainting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Layers {
    /// Background and notch ring
    pub base: bool,
    /// Hour and minute indicators
    pub indicators: bool,
    /// Time label below the face
    pub label: bool,
}

impl Layers {
    pub const NONE: Self = Self {
        base: false,
        indicators: false,
        label: false,
    };

    pub const ALL: Self = Self {
        base: true,
        indicators: true,
        label: true,
    };

    /// Check if any layer is marked
    pub const fn any(&self) -> bool {
        self.base || self.indicators || self.label
    }

    /// Mark every layer set in `other`
    pub fn insert(&mut self, other: Layers) {
        self.base |= other.base;
        self.indicators |= other.indicators;
        self.label |= other.label;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_accumulates() {
        let mut dirty = Layers::NONE;
        assert!(!dirty.any());

        dirty.insert(Layers {
            indicators: true,
            ..Layers::NONE
        });
        dirty.insert(Layers {
            base: true,
            ..Layers::NONE
        });

        assert!(dirty.base && dirty.indicators && !dirty.label);
        dirty.insert(Layers::ALL);
        assert_eq!(dirty, Layers::ALL);
    }
}
