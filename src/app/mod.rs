//! App module - contains the main application state and logic

mod canvas;
mod controls;
mod serial_modal;

use std::path::PathBuf;

use eframe::egui;
use tracing::debug;

use crate::config::{Config, WindowConfig};
use crate::constants::{ARM_BASE_SPACING, ARM_BASE_X, ARM_BASE_Y, JOINT_COUNT};
use crate::kinematics::Arm;
use crate::serial::SerialLink;
use crate::theme;
use crate::types::{ArmId, Grab};
use crate::wire;

// ============================================================================
// APP STATE
// ============================================================================

/// One arm plus its per-segment paint colors.
pub struct ArmState {
    pub arm: Arm,
    pub colors: [egui::Color32; JOINT_COUNT],
}

impl ArmState {
    fn new(id: ArmId) -> Self {
        let base = egui::pos2(
            ARM_BASE_X + id.index() as f32 * ARM_BASE_SPACING,
            ARM_BASE_Y,
        );
        Self {
            arm: Arm::new(base),
            colors: [egui::Color32::BLACK; JOINT_COUNT],
        }
    }
}

pub struct App {
    pub(crate) arms: [ArmState; 2],
    pub(crate) sync_arms: bool,
    pub(crate) duplicate_colors: bool,
    pub(crate) grab: Option<Grab>,
    pub(crate) serial: SerialLink,
    pub(crate) config: Config,
    pub(crate) config_path: PathBuf,
    // Full-arm flood color, one draft per arm
    pub(crate) full_color_draft: [egui::Color32; 2],
    // Serial settings dialog
    pub(crate) show_serial_modal: bool,
    pub(crate) available_ports: Vec<String>,
    pub(crate) selected_port: String,
    pub(crate) selected_baud: u32,
    // Window geometry tracking for saving on exit
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
}

// ============================================================================
// APP INITIALIZATION & STATE TRANSITIONS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: Config,
        config_path: PathBuf,
        serial: SerialLink,
    ) -> Self {
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        let mut arms = [ArmState::new(ArmId::One), ArmState::new(ArmId::Two)];
        for state in &mut arms {
            state.arm.set_angles(config.robot_arm.initial_angles);
        }

        let selected_port = config.serial.port.clone();
        let selected_baud = config.serial.baudrate;

        Self {
            arms,
            sync_arms: false,
            duplicate_colors: false,
            grab: None,
            serial,
            config,
            config_path,
            full_color_draft: [egui::Color32::BLACK; 2],
            show_serial_modal: false,
            available_ports: Vec::new(),
            selected_port,
            selected_baud,
            window_pos: None,
            window_size: None,
        }
    }

    /// Streams one arm's current state over serial and to the log.
    pub(crate) fn emit_state(&mut self, id: ArmId) {
        let state = &self.arms[id.index()];
        let line = wire::state_line(id.wire_id(), &state.arm.angles, &state.colors);
        debug!(arm = id.wire_id(), line = %line, "Arm state");
        self.serial.send_line(&line);
    }

    /// Writes one joint angle (clamped). With sync on, the same joint on
    /// the other arm gets the negated value. Emits state for every arm
    /// that actually changed.
    pub(crate) fn set_joint(&mut self, id: ArmId, joint: usize, degrees: f32) {
        let state = &mut self.arms[id.index()];
        let before = state.arm.angles[joint];
        state.arm.set_angle(joint, degrees);
        if state.arm.angles[joint] == before {
            return;
        }
        self.emit_state(id);

        if self.sync_arms {
            let mirrored = -self.arms[id.index()].arm.angles[joint];
            let other = id.other();
            self.arms[other.index()].arm.set_angle(joint, mirrored);
            self.emit_state(other);
        }
    }

    /// Mirrors arm 1 onto arm 2; runs once when sync is switched on.
    pub(crate) fn sync_now(&mut self) {
        let mirrored = self.arms[ArmId::One.index()].arm.mirrored();
        self.arms[ArmId::Two.index()].arm.set_angles(mirrored);
        self.emit_state(ArmId::Two);
    }

    pub(crate) fn set_segment_color(&mut self, id: ArmId, joint: usize, color: egui::Color32) {
        self.arms[id.index()].colors[joint] = color;
        self.emit_state(id);

        if self.duplicate_colors {
            let other = id.other();
            self.arms[other.index()].colors[joint] = color;
            self.emit_state(other);
        }
    }

    /// Floods every segment of one arm with the same color.
    pub(crate) fn set_full_arm_color(&mut self, id: ArmId, color: egui::Color32) {
        self.arms[id.index()].colors = [color; JOINT_COUNT];
        self.emit_state(id);
    }

    /// Reopens the serial link against the dialog's port/baud selection
    /// and persists the choice.
    pub(crate) fn reconnect_serial(&mut self) {
        self.serial = SerialLink::connect(&self.selected_port, self.selected_baud);
        self.config.serial.port = self.selected_port.clone();
        self.config.serial.baudrate = self.selected_baud;
        self.config.save(&self.config_path);
    }

    pub(crate) fn save_config(&mut self) {
        self.config.window = WindowConfig {
            x: self.window_pos.map(|p| p.x),
            y: self.window_pos.map(|p| p.y),
            w: self.window_size.map(|s| s.x),
            h: self.window_size.map(|s| s.y),
        };
        self.config.save(&self.config_path);
    }

    /// First grabbed pivot under the pointer, arm 1 checked first.
    pub(crate) fn hit_test(&self, pointer: egui::Pos2) -> Option<Grab> {
        for id in ArmId::ALL {
            let positions = self.arms[id.index()].arm.joint_positions();
            if let Some(joint) = crate::kinematics::joint_at(&positions, pointer) {
                return Some(Grab { arm: id, joint });
            }
        }
        None
    }
}
