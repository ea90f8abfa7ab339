//! Fixed-point trigonometry
//!
//! Angles are integers where one full turn is [`TRIG_MAX_ANGLE`]. Sine and
//! cosine are returned scaled to [`TRIG_MAX_RATIO`], read from a quarter-wave
//! table with linear interpolation between entries.

/// One full turn in fixed-point angle units
pub const TRIG_MAX_ANGLE: i32 = 0x10000;

/// Scale of the values returned by [`sin_lookup`] and [`cos_lookup`]
pub const TRIG_MAX_RATIO: i32 = 0xffff;

/// Half a turn (180°)
pub const HALF_TURN: i32 = TRIG_MAX_ANGLE / 2;

/// A quarter turn (90°)
pub const QUARTER_TURN: i32 = TRIG_MAX_ANGLE / 4;

/// Number of table segments covering a quarter turn
const TABLE_STEPS: usize = 256;

/// Angle units per table segment
const STEP_ANGLE: i32 = QUARTER_TURN / TABLE_STEPS as i32;

/// `round(sin(i / 256 * 90°) * 0xffff)` for `i` in `0..=256`
#[rustfmt::skip]
static QUARTER_SINE: [u16; TABLE_STEPS + 1] = [
    0, 402, 804, 1206, 1608, 2010, 2412, 2814, 3216, 3617,
    4019, 4420, 4821, 5222, 5623, 6023, 6424, 6824, 7223, 7623,
    8022, 8421, 8820, 9218, 9616, 10014, 10411, 10808, 11204, 11600,
    11996, 12391, 12785, 13179, 13573, 13966, 14359, 14751, 15142, 15533,
    15924, 16313, 16703, 17091, 17479, 17866, 18253, 18639, 19024, 19408,
    19792, 20175, 20557, 20939, 21319, 21699, 22078, 22456, 22834, 23210,
    23586, 23960, 24334, 24707, 25079, 25450, 25820, 26189, 26557, 26925,
    27291, 27656, 28020, 28383, 28745, 29106, 29465, 29824, 30181, 30538,
    30893, 31247, 31600, 31952, 32302, 32651, 32999, 33346, 33692, 34036,
    34379, 34721, 35061, 35400, 35738, 36074, 36409, 36743, 37075, 37406,
    37736, 38064, 38390, 38715, 39039, 39361, 39682, 40001, 40319, 40635,
    40950, 41263, 41575, 41885, 42194, 42500, 42806, 43109, 43411, 43712,
    44011, 44308, 44603, 44897, 45189, 45479, 45768, 46055, 46340, 46624,
    46905, 47185, 47464, 47740, 48014, 48287, 48558, 48827, 49095, 49360,
    49624, 49885, 50145, 50403, 50659, 50913, 51166, 51416, 51664, 51911,
    52155, 52398, 52638, 52877, 53113, 53348, 53580, 53811, 54039, 54266,
    54490, 54713, 54933, 55151, 55367, 55582, 55794, 56003, 56211, 56417,
    56620, 56822, 57021, 57218, 57413, 57606, 57797, 57985, 58171, 58356,
    58537, 58717, 58895, 59070, 59243, 59414, 59582, 59749, 59913, 60075,
    60234, 60391, 60546, 60699, 60850, 60998, 61144, 61287, 61429, 61567,
    61704, 61838, 61970, 62100, 62227, 62352, 62475, 62595, 62713, 62829,
    62942, 63053, 63161, 63267, 63371, 63472, 63571, 63668, 63762, 63853,
    63943, 64030, 64114, 64196, 64276, 64353, 64428, 64500, 64570, 64638,
    64703, 64765, 64826, 64883, 64939, 64992, 65042, 65090, 65136, 65179,
    65219, 65258, 65293, 65327, 65357, 65386, 65412, 65435, 65456, 65475,
    65491, 65504, 65515, 65524, 65530, 65534, 65535,
];

/// Reduce an angle into `0..TRIG_MAX_ANGLE`
#[inline]
pub const fn normalize(angle: i32) -> i32 {
    angle.rem_euclid(TRIG_MAX_ANGLE)
}

/// Sine over the first quadrant, `angle` in `0..=QUARTER_TURN`
fn quarter_sine(angle: i32) -> i32 {
    let index = (angle / STEP_ANGLE) as usize;
    if index >= TABLE_STEPS {
        return QUARTER_SINE[TABLE_STEPS] as i32;
    }

    let frac = angle % STEP_ANGLE;
    let lo = QUARTER_SINE[index] as i32;
    let hi = QUARTER_SINE[index + 1] as i32;
    lo + (hi - lo) * frac / STEP_ANGLE
}

/// Fixed-point sine
///
/// Returns a value in `-TRIG_MAX_RATIO..=TRIG_MAX_RATIO`. Any angle is
/// accepted and reduced modulo one turn first.
pub fn sin_lookup(angle: i32) -> i32 {
    let angle = normalize(angle);
    let within = angle % QUARTER_TURN;

    match angle / QUARTER_TURN {
        0 => quarter_sine(within),
        1 => quarter_sine(QUARTER_TURN - within),
        2 => -quarter_sine(within),
        _ => -quarter_sine(QUARTER_TURN - within),
    }
}

/// Fixed-point cosine, see [`sin_lookup`]
pub fn cos_lookup(angle: i32) -> i32 {
    sin_lookup(normalize(angle) + QUARTER_TURN)
}
