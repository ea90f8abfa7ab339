//! Indicator renderer: hour tick and minute dot

use crate::anim::Activity;
use crate::angle::ClockTime;
use crate::geometry::{point_at, radial_line, Point};
use crate::traits::{Canvas, CanvasExt, Color};

use super::scale::RenderScale;

/// Indicator color
pub const INDICATOR_COLOR: Color = Color::White;

/// Stroke width of the hour indicator
pub const HOUR_INDICATOR_WIDTH: u8 = 6;

/// Radius of the minute dot
pub const MINUTE_DOT_RADIUS: u16 = 3;

/// Angle the hour indicator is drawn at
///
/// While a lifecycle-tracked animation is active the sweep angle wins over
/// the live time.
pub fn hour_indicator_angle(time: &ClockTime, animated_hour_angle: i32, activity: Activity) -> i32 {
    if activity.is_active() {
        animated_hour_angle
    } else {
        time.hour_angle
    }
}

/// Draw the indicator layer
pub fn render_indicators<C: Canvas>(
    canvas: &mut C,
    center: Point,
    time: &ClockTime,
    scale: &RenderScale,
    animated_hour_angle: i32,
    activity: Activity,
) -> Result<(), C::Error> {
    let length = scale.indicator_length as i32;
    canvas.set_antialiased(true);

    canvas.set_fill_color(INDICATOR_COLOR);
    canvas.fill_circle(point_at(center, time.minute_angle, length), MINUTE_DOT_RADIUS)?;

    canvas.set_stroke_color(INDICATOR_COLOR);
    let angle = hour_indicator_angle(time, animated_hour_angle, activity);
    canvas.stroke_radial_line(radial_line(center, angle, HOUR_INDICATOR_WIDTH, 0, length))
}
