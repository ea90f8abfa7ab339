//! Radial geometry
//!
//! Maps (center, angle, radial offset) to screen points. Angle 0 points up
//! and angles grow clockwise; screen y grows downward.

use crate::angle::{cos_lookup, normalize, sin_lookup, HALF_TURN, TRIG_MAX_RATIO};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    /// Top-left corner
    pub origin: Point,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            origin: Point::new(x, y),
            width,
            height,
        }
    }

    /// Center point, rounded toward the origin
    pub const fn center(&self) -> Point {
        Point::new(
            self.origin.x + (self.width / 2) as i32,
            self.origin.y + (self.height / 2) as i32,
        )
    }
}

/// A line segment with a stroke width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RadialLine {
    pub start: Point,
    pub end: Point,
    pub width: u8,
}

/// Point `offset` pixels from `center` in direction `angle`
pub fn point_at(center: Point, angle: i32, offset: i32) -> Point {
    let offset = offset as i64;
    let ratio = TRIG_MAX_RATIO as i64;

    Point {
        x: center.x + (sin_lookup(angle) as i64 * offset / ratio) as i32,
        y: center.y + (-(cos_lookup(angle) as i64) * offset / ratio) as i32,
    }
}

/// Segment along `angle` from radius `offset` to `offset + length`
///
/// A negative `offset` starts the segment on the opposite side of the
/// center, so the line passes through it.
pub fn radial_line(center: Point, angle: i32, width: u8, offset: i32, length: i32) -> RadialLine {
    let start = match offset {
        0 => center,
        o if o < 0 => point_at(center, normalize(angle) + HALF_TURN, -o),
        o => point_at(center, angle, o),
    };

    RadialLine {
        start,
        end: point_at(center, angle, offset + length),
        width,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::{QUARTER_TURN, TRIG_MAX_ANGLE};
    use proptest::prelude::*;

    const CENTER: Point = Point::new(72, 72);

    #[test]
    fn test_cardinal_directions() {
        assert_eq!(point_at(CENTER, 0, 10), Point::new(72, 62));
        assert_eq!(point_at(CENTER, QUARTER_TURN, 10), Point::new(82, 72));
        assert_eq!(point_at(CENTER, HALF_TURN, 10), Point::new(72, 82));
        assert_eq!(point_at(CENTER, 3 * QUARTER_TURN, 10), Point::new(62, 72));
    }

    #[test]
    fn test_rect_center() {
        assert_eq!(Rect::new(0, 0, 144, 144).center(), Point::new(72, 72));
        assert_eq!(Rect::new(10, 20, 5, 5).center(), Point::new(12, 22));
    }

    #[test]
    fn test_radial_line_from_center() {
        let line = radial_line(CENTER, 0, 6, 0, 52);
        assert_eq!(line.start, CENTER);
        assert_eq!(line.end, Point::new(72, 20));
        assert_eq!(line.width, 6);
    }

    #[test]
    fn test_radial_line_floating() {
        let line = radial_line(CENTER, QUARTER_TURN, 2, 40, 5);
        assert_eq!(line.start, Point::new(112, 72));
        assert_eq!(line.end, Point::new(117, 72));
    }

    #[test]
    fn test_radial_line_through_center() {
        let line = radial_line(CENTER, 0, 1, -4, 10);
        // Starts below the center, ends above it
        assert_eq!(line.start, Point::new(72, 76));
        assert_eq!(line.end, Point::new(72, 66));
    }

    proptest! {
        #[test]
        fn test_zero_offset_is_center(angle in any::<i32>()) {
            prop_assert_eq!(point_at(CENTER, angle, 0), CENTER);
        }

        #[test]
        fn test_periodic(angle in -TRIG_MAX_ANGLE..TRIG_MAX_ANGLE, offset in -500i32..500) {
            prop_assert_eq!(
                point_at(CENTER, angle, offset),
                point_at(CENTER, angle + TRIG_MAX_ANGLE, offset)
            );
        }

        #[test]
        fn test_stays_within_radius(angle in 0..TRIG_MAX_ANGLE, offset in 0i32..200) {
            let p = point_at(CENTER, angle, offset);
            prop_assert!((p.x - CENTER.x).abs() <= offset);
            prop_assert!((p.y - CENTER.y).abs() <= offset);
        }
    }
}
