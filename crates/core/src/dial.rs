//! Analog dial geometry.
//!
//! Angles are in degrees, measured clockwise from twelve o'clock. Offsets are
//! returned in screen orientation: x grows to the right, y grows downward.

use serde::Serialize;

/// Degrees the second and minute hands move per unit.
const DEG_PER_SECOND: f32 = 6.0;
const DEG_PER_MINUTE: f32 = 6.0;
/// Degrees the hour hand moves per hour on a twelve hour dial.
const DEG_PER_HOUR: f32 = 30.0;

/// Angles of the three hands.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct HandAngles {
    pub hour: f32,
    pub minute: f32,
    pub second: f32,
}

/// Hand angles for a time of day.
///
/// The minute hand creeps with the seconds and the hour hand with the
/// minutes, so neither jumps at the top of the minute or hour.
pub fn hand_angles(hours: u32, minutes: u32, seconds: u32) -> HandAngles {
    let s = seconds as f32;
    let m = minutes as f32;
    let h = (hours % 12) as f32;
    HandAngles {
        hour: h * DEG_PER_HOUR + m * (DEG_PER_HOUR / 60.0),
        minute: m * DEG_PER_MINUTE + s * (DEG_PER_MINUTE / 60.0),
        second: s * DEG_PER_SECOND,
    }
}

/// Offset from the dial center for a point at `angle_deg` and `length`.
pub fn polar_offset(angle_deg: f32, length: f32) -> (f32, f32) {
    let rad = angle_deg.to_radians();
    (rad.sin() * length, -rad.cos() * length)
}

/// A tick mark on the dial rim.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourMarker {
    pub angle: f32,
    /// Quarter-hour markers are drawn heavier.
    pub major: bool,
}

/// The twelve hour markers, starting at twelve o'clock.
pub const HOUR_MARKERS: [HourMarker; 12] = [
    HourMarker { angle: 0.0, major: true },
    HourMarker { angle: 30.0, major: false },
    HourMarker { angle: 60.0, major: false },
    HourMarker { angle: 90.0, major: true },
    HourMarker { angle: 120.0, major: false },
    HourMarker { angle: 150.0, major: false },
    HourMarker { angle: 180.0, major: true },
    HourMarker { angle: 210.0, major: false },
    HourMarker { angle: 240.0, major: false },
    HourMarker { angle: 270.0, major: true },
    HourMarker { angle: 300.0, major: false },
    HourMarker { angle: 330.0, major: false },
];

/// Numerals printed inside the rim at the quarter hours.
pub const DIAL_NUMERALS: [(&str, f32); 4] = [("12", 0.0), ("3", 90.0), ("6", 180.0), ("9", 270.0)];

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn midnight_points_everything_up() {
        let a = hand_angles(0, 0, 0);
        assert_eq!(a, HandAngles::default());
    }

    #[test]
    fn three_oclock_hour_hand_is_horizontal() {
        let a = hand_angles(15, 0, 0);
        assert!(close(a.hour, 90.0));
        assert!(close(a.minute, 0.0));
    }

    #[test]
    fn minute_hand_creeps_with_seconds() {
        let a = hand_angles(0, 10, 30);
        assert!(close(a.minute, 63.0));
        assert!(close(a.second, 180.0));
    }

    #[test]
    fn hour_hand_creeps_with_minutes() {
        let a = hand_angles(6, 30, 0);
        assert!(close(a.hour, 195.0));
    }

    #[test]
    fn polar_offset_uses_screen_orientation() {
        let (x, y) = polar_offset(0.0, 10.0);
        assert!(close(x, 0.0) && close(y, -10.0));
        let (x, y) = polar_offset(90.0, 10.0);
        assert!(close(x, 10.0) && close(y, 0.0));
        let (x, y) = polar_offset(180.0, 10.0);
        assert!(close(x, 0.0) && close(y, 10.0));
    }

    #[test]
    fn markers_are_evenly_spaced() {
        assert_eq!(HOUR_MARKERS.iter().filter(|m| m.major).count(), 4);
        for (i, m) in HOUR_MARKERS.iter().enumerate() {
            assert!(close(m.angle, i as f32 * 30.0));
        }
    }
}
