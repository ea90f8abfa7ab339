//! Animation-driven layout parameters

use crate::anim::{percentage_of, AnimationProgress};

/// Face radius at the start of the entrance
pub const START_RADIUS: u16 = 30;

/// Gap between the face edge and the indicator tips
pub const INDICATOR_INSET: u16 = 20;

/// Notch spacing divisor at the start of the entrance
pub const NOTCH_SCALE_MAX: u16 = 100;

/// Radii and spacing consumed by both renderers
///
/// Each field has a single writer: the entrance animation that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RenderScale {
    /// Radius of the fully grown face (half the layer width)
    pub watch_radius: u16,
    /// Current face radius
    pub animated_watch_radius: u16,
    /// Length of the hour indicator, and radius of the minute dot orbit
    pub indicator_length: u16,
    /// Divisor applied to notch radii, 1 when settled
    pub notch_scale: u16,
}

impl RenderScale {
    /// Scale at the first entrance frame for a face `width` pixels wide
    pub const fn entrance(width: u32) -> Self {
        let watch_radius = half_width(width);
        Self {
            watch_radius,
            animated_watch_radius: START_RADIUS,
            indicator_length: watch_radius.saturating_sub(INDICATOR_INSET),
            notch_scale: NOTCH_SCALE_MAX,
        }
    }

    /// Scale after the entrance has finished
    pub const fn settled(width: u32) -> Self {
        let watch_radius = half_width(width);
        Self {
            watch_radius,
            animated_watch_radius: watch_radius,
            indicator_length: watch_radius.saturating_sub(INDICATOR_INSET),
            notch_scale: 1,
        }
    }

    /// Grow the face from `START_RADIUS` to `watch_radius`
    pub fn apply_radius(&mut self, progress: AnimationProgress) {
        let growth = self.watch_radius as i32 - START_RADIUS as i32;
        let radius = percentage_of(progress, growth) + START_RADIUS as i32;

        self.animated_watch_radius = radius.clamp(0, u16::MAX as i32) as u16;
        self.indicator_length = self.animated_watch_radius.saturating_sub(INDICATOR_INSET);
    }

    /// Converge notch spacing from `NOTCH_SCALE_MAX` down to 1
    ///
    /// While the eased percentage is still 0 the previous scale is kept.
    pub fn apply_notch_spacing(&mut self, progress: AnimationProgress) {
        let pct = percentage_of(progress, NOTCH_SCALE_MAX as i32);
        if pct > 0 {
            self.notch_scale = (NOTCH_SCALE_MAX as i32 / pct) as u16;
        }
    }
}

const fn half_width(width: u32) -> u16 {
    let half = width / 2;
    if half > u16::MAX as u32 {
        u16::MAX
    } else {
        half as u16
    }
}
