//! Arm viewport: scene painting and pointer-driven posing.

use eframe::egui;

use crate::constants::{JOINT_COUNT, SCENE_HEIGHT, SCENE_WIDTH};
use crate::kinematics::angle_from_pointer;
use crate::theme;
use crate::types::{ArmId, Grab};

use super::App;

impl App {
    pub(crate) fn render_canvas(&mut self, ui: &mut egui::Ui) {
        let rect = ui.available_rect_before_wrap();
        let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());

        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 6.0, theme::CANVAS_BG);
        painter.rect_stroke(
            rect,
            6.0,
            egui::Stroke::new(1.0, theme::CANVAS_BORDER),
            egui::StrokeKind::Inside,
        );

        // Scene -> screen: centered horizontally, scene bottom pinned to
        // the bottom of the viewport. Arm bases live in scene coordinates.
        let origin = egui::vec2(
            rect.min.x + ((rect.width() - SCENE_WIDTH) / 2.0).max(0.0),
            rect.max.y - SCENE_HEIGHT.min(rect.height()),
        );

        // Input first so the frame paints the pose it just produced.
        let pointer_scene = response.interact_pointer_pos().map(|p| p - origin);

        if response.drag_started() {
            if let Some(pointer) = pointer_scene {
                self.grab = self.hit_test(pointer);
            }
        }
        if response.dragged() {
            if let (Some(grab), Some(pointer)) = (self.grab, pointer_scene) {
                let positions = self.arms[grab.arm.index()].arm.joint_positions();
                let degrees = angle_from_pointer(&positions, grab.joint, pointer);
                self.set_joint(grab.arm, grab.joint, degrees);
            }
        }
        if response.drag_stopped() {
            self.grab = None;
        }

        if let Some(hover) = response.hover_pos() {
            if self.grab.is_some() {
                ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
            } else if self.hit_test(hover - origin).is_some() {
                ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
            }
        }

        for id in ArmId::ALL {
            let state = &self.arms[id.index()];
            let positions = state.arm.joint_positions();

            for i in 0..JOINT_COUNT {
                painter.line_segment(
                    [positions[i] + origin, positions[i + 1] + origin],
                    egui::Stroke::new(theme::SEGMENT_STROKE, state.colors[i]),
                );
            }

            for (i, p) in positions[..JOINT_COUNT].iter().enumerate() {
                let grabbed = self.grab == Some(Grab { arm: id, joint: i });
                let fill = if grabbed {
                    theme::JOINT_GRABBED
                } else {
                    theme::JOINT_PIVOT
                };
                painter.circle_filled(*p + origin, theme::JOINT_DOT_RADIUS, fill);
            }

            painter.circle_filled(
                positions[JOINT_COUNT] + origin,
                theme::JOINT_DOT_RADIUS,
                theme::JOINT_EFFECTOR,
            );

            painter.text(
                positions[0] + origin + egui::vec2(0.0, 14.0),
                egui::Align2::CENTER_TOP,
                format!("Arm {}", id.wire_id()),
                egui::FontId::proportional(12.0),
                theme::CANVAS_BORDER,
            );
        }
    }
}
