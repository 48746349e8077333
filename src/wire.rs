//! Text formatting of arm state for the serial stream.
//!
//! One line per arm per change:
//!
//! ```text
//! $<arm>:<a1>:<c1>:<a2>:<c2>:<a3>:<c3>:<a4>:<c4>:<a5>:<c5>
//! ```
//!
//! Angles are shifted by +90 so the wire carries 0..=180 (0 = hard left,
//! 90 = straight up, 180 = hard right); colors are lowercase `#rrggbb`.

use egui::Color32;

use crate::constants::JOINT_COUNT;
use crate::kinematics::JointAngles;

/// Formats one arm's full state. Pure; does no I/O.
pub fn state_line(arm_id: u8, angles: &JointAngles, colors: &[Color32; JOINT_COUNT]) -> String {
    let mut line = format!("${arm_id}");
    for (angle, color) in angles.iter().zip(colors) {
        line.push_str(&format!(":{}:{}", (angle + 90.0) as i32, color_hex(*color)));
    }
    line
}

/// Lowercase `#rrggbb`, alpha ignored.
pub fn color_hex(c: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r(), c.g(), c.b())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rest_pose_formats_midpoint_angles() {
        let line = state_line(1, &[0.0; 5], &[Color32::BLACK; 5]);
        assert_eq!(
            line,
            "$1:90:#000000:90:#000000:90:#000000:90:#000000:90:#000000"
        );
    }

    #[test]
    fn angles_shift_into_wire_range_and_truncate() {
        let angles = [-90.0, 90.0, 0.0, 45.5, -45.5];
        let line = state_line(2, &angles, &[Color32::BLACK; 5]);
        let fields: Vec<&str> = line[1..].split(':').collect();
        assert_eq!(fields[0], "2");
        assert_eq!(fields[1], "0");
        assert_eq!(fields[3], "180");
        assert_eq!(fields[5], "90");
        // Fractional degrees truncate toward zero on the wire.
        assert_eq!(fields[7], "135");
        assert_eq!(fields[9], "44");
    }

    #[test]
    fn colors_render_as_lowercase_hex() {
        let mut colors = [Color32::BLACK; 5];
        colors[0] = Color32::from_rgb(0xff, 0x00, 0xaa);
        colors[4] = Color32::from_rgb(0x2d, 0xd4, 0xbf);
        let line = state_line(1, &[0.0; 5], &colors);
        assert!(line.contains(":#ff00aa:"));
        assert!(line.ends_with(":#2dd4bf"));
    }

    #[test]
    fn line_has_no_trailing_separator() {
        let line = state_line(1, &[0.0; 5], &[Color32::BLACK; 5]);
        assert!(!line.ends_with(':'));
        assert_eq!(line.matches(':').count(), 10);
    }
}
