//! Reusable UI components

use eframe::egui;

use crate::constants::{ANGLE_MAX, ANGLE_MIN};
use crate::theme;

/// Single-handle joint slider over -90..=90 in whole degrees.
/// Returns true when the value changed this frame.
pub fn angle_slider(ui: &mut egui::Ui, value: &mut f32, width: f32) -> bool {
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(width, theme::SLIDER_HEIGHT),
        egui::Sense::click_and_drag(),
    );
    if response.hovered() || response.dragged() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    let track_y = rect.center().y;
    let track_left = rect.left() + theme::SLIDER_HANDLE_RADIUS;
    let track_right = rect.right() - theme::SLIDER_HANDLE_RADIUS;
    let track_width = track_right - track_left;

    let t = (*value - ANGLE_MIN) / (ANGLE_MAX - ANGLE_MIN);
    let handle_x = track_left + t.clamp(0.0, 1.0) * track_width;
    let center_x = track_left + 0.5 * track_width;

    let painter = ui.painter();
    painter.line_segment(
        [
            egui::pos2(track_left, track_y),
            egui::pos2(track_right, track_y),
        ],
        egui::Stroke::new(4.0, theme::BORDER_SUBTLE),
    );
    // Trail runs from the zero mark to the handle so deflection reads at
    // a glance.
    painter.line_segment(
        [egui::pos2(center_x, track_y), egui::pos2(handle_x, track_y)],
        egui::Stroke::new(4.0, theme::SLIDER_TRAIL),
    );
    painter.circle_filled(
        egui::pos2(handle_x, track_y),
        theme::SLIDER_HANDLE_RADIUS,
        theme::SLIDER_HEAD,
    );

    let mut changed = false;
    if response.dragged() || response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            let rel = ((pos.x - track_left) / track_width).clamp(0.0, 1.0);
            let new_value = (ANGLE_MIN + rel * (ANGLE_MAX - ANGLE_MIN)).round();
            if new_value != *value {
                *value = new_value;
                changed = true;
            }
        }
    }
    changed
}

/// Custom-painted rectangular button. Returns true if clicked.
pub fn painted_button(ui: &mut egui::Ui, label: &str, size: egui::Vec2, fill: egui::Color32) -> bool {
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    let (fill, draw_rect) = theme::button_visual(&response, fill, rect);
    ui.painter().rect_filled(draw_rect, 4.0, fill);
    ui.painter().text(
        draw_rect.center(),
        egui::Align2::CENTER_CENTER,
        label,
        egui::FontId::proportional(13.0),
        egui::Color32::WHITE,
    );
    response.clicked()
}
