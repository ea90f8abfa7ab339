//! Face renderer: the 24-notch ring

use crate::angle::{normalize, TRIG_MAX_ANGLE};
use crate::config::NotchStyle;
use crate::geometry::{point_at, radial_line, Point};
use crate::traits::{Canvas, CanvasExt, Color};

use super::scale::RenderScale;

/// Face background
pub const BACKGROUND: Color = Color::Black;

/// Notch color
pub const NOTCH_COLOR: Color = Color::LightGray;

/// One notch per hour of the 24-hour dial
pub const NOTCH_COUNT: i32 = 24;

/// Distance from the face edge to the notch ring
pub const NOTCH_INSET: i32 = 10;

/// Weight of a single notch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Notch {
    /// Hour index, `-12..=11`, 0 is noon
    pub index: i32,
    /// Extra radial offset (pixels)
    pub offset: i32,
    /// Dot diameter or tick length (pixels)
    pub length: u16,
    /// Tick stroke width
    pub width: u8,
}

/// Notch weight for an hour index
///
/// Noon stands out, midnight is marked, and every third and sixth hour is
/// heavier than the rest.
pub const fn notch(index: i32) -> Notch {
    let (offset, length, width) = if index == 0 {
        (3, 10, 5)
    } else if index == -12 {
        (0, 5, 5)
    } else if index % 6 == 0 {
        (0, 5, 3)
    } else if index % 3 == 0 {
        (0, 5, 2)
    } else {
        (0, 3, 1)
    };

    Notch {
        index,
        offset,
        length,
        width,
    }
}

/// Angle of the notch for an hour index
pub const fn notch_angle(index: i32) -> i32 {
    normalize(index * TRIG_MAX_ANGLE / NOTCH_COUNT)
}

/// All notches, midnight first
pub fn notches() -> impl Iterator<Item = Notch> {
    (-NOTCH_COUNT / 2..NOTCH_COUNT / 2).map(notch)
}

/// Radial distance of a notch for the current scale
fn notch_radius(notch: &Notch, scale: &RenderScale) -> i32 {
    let ring = scale.animated_watch_radius as i32 - NOTCH_INSET + notch.offset;
    ring / scale.notch_scale.max(1) as i32
}

/// Draw the base layer: background and notch ring
pub fn render_face<C: Canvas>(
    canvas: &mut C,
    center: Point,
    scale: &RenderScale,
    style: NotchStyle,
) -> Result<(), C::Error> {
    canvas.clear(BACKGROUND)?;

    canvas.set_fill_color(NOTCH_COLOR);
    canvas.set_stroke_color(NOTCH_COLOR);

    for notch in notches() {
        let angle = notch_angle(notch.index);
        let outer = notch_radius(&notch, scale);

        match style {
            NotchStyle::Dot => {
                canvas.fill_circle(point_at(center, angle, outer), notch.length / 2)?;
            }
            NotchStyle::Tick => {
                let length = notch.length as i32;
                canvas.stroke_radial_line(radial_line(
                    center,
                    angle,
                    notch.width,
                    outer - length,
                    length,
                ))?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::{HALF_TURN, QUARTER_TURN};
    use crate::render::recording::{Op, RecordingCanvas};

    const CENTER: Point = Point::new(72, 72);

    #[test]
    fn test_notch_table() {
        assert_eq!(notch(0), Notch { index: 0, offset: 3, length: 10, width: 5 });
        assert_eq!(notch(-12), Notch { index: -12, offset: 0, length: 5, width: 5 });
        assert_eq!(notch(6).width, 3);
        assert_eq!(notch(-6).width, 3);
        assert_eq!(notch(3).width, 2);
        assert_eq!(notch(-9).width, 2);
        assert_eq!(notch(1), Notch { index: 1, offset: 0, length: 3, width: 1 });
    }

    #[test]
    fn test_notch_angles() {
        assert_eq!(notch_angle(0), 0);
        assert_eq!(notch_angle(-12), HALF_TURN);
        assert_eq!(notch_angle(6), QUARTER_TURN);
        assert_eq!(notch_angle(-6), 3 * QUARTER_TURN);
        assert_eq!(notches().count(), 24);
        assert_eq!(notches().next().map(|n| n.index), Some(-12));
    }

    #[test]
    fn test_settled_dots() {
        let mut canvas = RecordingCanvas::new(144, 144);
        render_face(&mut canvas, CENTER, &RenderScale::settled(144), NotchStyle::Dot).unwrap();

        assert_eq!(canvas.ops[0], Op::Fill(BACKGROUND));
        assert_eq!(canvas.ops[1], Op::Rect(canvas.bounds));

        let circles: Vec<_> = canvas.circles().collect();
        assert_eq!(circles.len(), 24);
        // Midnight at the bottom, first in draw order
        assert_eq!(circles[0], (Point::new(72, 134), 2));
        // Noon pushed 3 px further out with a larger dot
        assert_eq!(circles[12], (Point::new(72, 7), 5));
        // 6 o'clock in the afternoon on the right
        assert_eq!(circles[18], (Point::new(134, 72), 2));
        // Light hour
        assert_eq!(circles[13].1, 1);
    }

    #[test]
    fn test_entrance_start_collapses_ring() {
        let mut canvas = RecordingCanvas::new(144, 144);
        render_face(&mut canvas, CENTER, &RenderScale::entrance(144), NotchStyle::Dot).unwrap();

        // (30 - 10) / 100 rounds to the center
        assert!(canvas.circles().all(|(c, _)| c == CENTER));
    }

    #[test]
    fn test_tick_style() {
        let mut canvas = RecordingCanvas::new(144, 144);
        render_face(&mut canvas, CENTER, &RenderScale::settled(144), NotchStyle::Tick).unwrap();

        assert_eq!(canvas.circles().count(), 0);
        let lines: Vec<_> = canvas.lines().collect();
        assert_eq!(lines.len(), 24);
        // Noon tick: 65 - 10 to 65, pointing up
        assert_eq!(lines[12], (Point::new(72, 17), Point::new(72, 7)));
        assert!(canvas.ops.contains(&Op::StrokeWidth(5)));
    }

    #[test]
    fn test_render_idempotent() {
        let mut canvas = RecordingCanvas::new(144, 144);
        let scale = RenderScale::settled(144);

        render_face(&mut canvas, CENTER, &scale, NotchStyle::Dot).unwrap();
        let first = canvas.take();
        render_face(&mut canvas, CENTER, &scale, NotchStyle::Dot).unwrap();

        assert_eq!(first, canvas.ops);
    }
}
