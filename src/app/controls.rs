//! Control panel: per-joint sliders, segment colors, sync toggles and
//! the serial status row.

use eframe::egui;

use crate::constants::JOINT_COUNT;
use crate::theme;
use crate::types::ArmId;
use crate::ui::components;

use super::App;

impl App {
    pub(crate) fn render_controls(&mut self, ui: &mut egui::Ui) {
        ui.add_space(theme::SPACING_MD);
        ui.columns(2, |cols| {
            self.render_arm_column(&mut cols[0], ArmId::One);
            self.render_arm_column(&mut cols[1], ArmId::Two);
        });

        ui.add_space(theme::SPACING_MD);
        ui.columns(2, |cols| {
            self.render_toggles(&mut cols[0]);
            self.render_serial_status(&mut cols[1]);
        });
    }

    fn render_arm_column(&mut self, ui: &mut egui::Ui, id: ArmId) {
        theme::section_frame().show(ui, |ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(format!("ARM {}", id.wire_id()))
                        .color(theme::TEXT_DIM)
                        .size(11.0),
                )
                .selectable(false),
            );
            ui.add_space(theme::SPACING_SM);

            let mut joint_edits: Vec<(usize, f32)> = Vec::new();
            let mut color_edits: Vec<(usize, egui::Color32)> = Vec::new();

            for joint in 0..JOINT_COUNT {
                let mut angle = self.arms[id.index()].arm.angles[joint];
                let color = self.arms[id.index()].colors[joint];

                ui.horizontal(|ui| {
                    // Fixed-width label so the sliders stay aligned while
                    // the angle text changes.
                    let (label_rect, _) = ui.allocate_exact_size(
                        egui::vec2(150.0, theme::SLIDER_HEIGHT),
                        egui::Sense::hover(),
                    );
                    ui.painter().text(
                        label_rect.left_center(),
                        egui::Align2::LEFT_CENTER,
                        format!(
                            "Arm {} - Joint {}: {}°",
                            id.wire_id(),
                            joint + 1,
                            angle.round() as i32
                        ),
                        egui::FontId::proportional(12.0),
                        theme::TEXT_SECONDARY,
                    );

                    let slider_width =
                        (ui.available_width() - theme::SWATCH_SIZE - 8.0).max(60.0);
                    if components::angle_slider(ui, &mut angle, slider_width) {
                        joint_edits.push((joint, angle));
                    }

                    let mut picked = color;
                    if ui.color_edit_button_srgba(&mut picked).changed() {
                        color_edits.push((joint, picked));
                    }
                });
            }

            ui.add_space(theme::SPACING_SM);
            ui.horizontal(|ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(format!(
                            "{} Full arm color",
                            egui_phosphor::regular::PAINT_BUCKET
                        ))
                        .size(12.0)
                        .color(theme::TEXT_MUTED),
                    )
                    .selectable(false),
                );
                let mut draft = self.full_color_draft[id.index()];
                if ui.color_edit_button_srgba(&mut draft).changed() {
                    self.full_color_draft[id.index()] = draft;
                    self.set_full_arm_color(id, draft);
                }
            });

            for (joint, angle) in joint_edits {
                self.set_joint(id, joint, angle);
            }
            for (joint, color) in color_edits {
                self.set_segment_color(id, joint, color);
            }
        });
    }

    fn render_toggles(&mut self, ui: &mut egui::Ui) {
        if theme::checkbox_row(ui, self.sync_arms, "Sync arms (mirrored)") {
            self.sync_arms = !self.sync_arms;
            if self.sync_arms {
                self.sync_now();
            }
        }
        if theme::checkbox_row(ui, self.duplicate_colors, "Duplicate colors") {
            self.duplicate_colors = !self.duplicate_colors;
        }
    }

    fn render_serial_status(&mut self, ui: &mut egui::Ui) {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .add(egui::Button::new(egui_phosphor::regular::GEAR).frame(false))
                .on_hover_text("Serial settings")
                .clicked()
            {
                self.available_ports = crate::serial::available_port_names();
                self.show_serial_modal = true;
            }

            let (icon, text, color) = if self.serial.is_connected() {
                (
                    egui_phosphor::regular::PLUGS_CONNECTED,
                    self.serial.port_name().to_string(),
                    theme::STATUS_SUCCESS,
                )
            } else {
                (
                    egui_phosphor::regular::PLUGS,
                    "no serial port".to_string(),
                    theme::TEXT_DIM,
                )
            };
            ui.add(
                egui::Label::new(
                    egui::RichText::new(format!("{icon} {text}"))
                        .size(12.0)
                        .color(color),
                )
                .selectable(false),
            );
        });
    }
}
