//! Application constants and configuration

pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Joints per arm. The whole model is sized by this.
pub const JOINT_COUNT: usize = 5;

/// Every arm segment is the same length, in canvas pixels.
pub const LINK_LENGTH: f32 = 80.0;

/// Scene-space base pivot of arm 1. Arm 2 sits `ARM_BASE_SPACING` to the right.
pub const ARM_BASE_X: f32 = 400.0;
pub const ARM_BASE_Y: f32 = 500.0;
pub const ARM_BASE_SPACING: f32 = 100.0;

/// Scene footprint the canvas reserves for the two arms.
pub const SCENE_WIDTH: f32 = 900.0;
pub const SCENE_HEIGHT: f32 = 520.0;

/// Pointer must be within this many pixels of a pivot to grab it.
pub const JOINT_HIT_RADIUS: f32 = 10.0;

/// Joint angle limits in degrees, enforced on every write into the model.
pub const ANGLE_MIN: f32 = -90.0;
pub const ANGLE_MAX: f32 = 90.0;

pub const DEFAULT_BAUD_RATE: u32 = 9600;

/// Baud rates offered in the serial settings dialog.
pub const BAUD_RATES: [u32; 5] = [9600, 19200, 38400, 57600, 115_200];
