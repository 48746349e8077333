//! Serial settings dialog: port selection, baud rate, reconnect.

use eframe::egui;

use crate::constants::BAUD_RATES;
use crate::theme;
use crate::ui::components;

use super::App;

impl App {
    pub(crate) fn render_serial_modal(&mut self, ctx: &egui::Context) {
        if !self.show_serial_modal {
            return;
        }

        let modal_response = egui::Modal::new(egui::Id::new("serial_modal"))
            .backdrop_color(egui::Color32::from_black_alpha(120))
            .frame(
                egui::Frame::new()
                    .fill(egui::Color32::from_rgb(0x1a, 0x1a, 0x1e))
                    .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(0x2a, 0x2a, 0x2e)))
                    .corner_radius(8.0)
                    .inner_margin(egui::Margin::same(20)),
            )
            .show(ctx, |ui| {
                ui.set_width(320.0);

                // Title bar with close button
                ui.horizontal(|ui| {
                    ui.add(
                        egui::Label::new(egui::RichText::new("Serial Port").size(16.0).strong())
                            .selectable(false),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let close_size = 24.0;
                        let (rect, response) = ui.allocate_exact_size(
                            egui::vec2(close_size, close_size),
                            egui::Sense::click(),
                        );
                        let close_color = if response.hovered() {
                            ui.painter().rect_filled(rect, 4.0, theme::BG_SURFACE);
                            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                            theme::STATUS_ERROR
                        } else {
                            theme::TEXT_DIM
                        };
                        ui.painter().text(
                            rect.center(),
                            egui::Align2::CENTER_CENTER,
                            egui_phosphor::regular::X,
                            egui::FontId::proportional(16.0),
                            close_color,
                        );
                        if response.clicked() {
                            self.show_serial_modal = false;
                        }
                    });
                });
                ui.add_space(4.0);
                ui.separator();
                ui.add_space(theme::SPACING_SM);

                // — Port —
                ui.horizontal(|ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new("Port").size(13.0).color(theme::ACCENT),
                        )
                        .selectable(false),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .add(
                                egui::Button::new(egui_phosphor::regular::ARROWS_CLOCKWISE)
                                    .frame(false),
                            )
                            .on_hover_text("Rescan ports")
                            .clicked()
                        {
                            self.available_ports = crate::serial::available_port_names();
                        }
                    });
                });
                ui.add_space(2.0);

                if self.available_ports.is_empty() {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new("No ports found")
                                .size(12.0)
                                .color(theme::TEXT_DIM),
                        )
                        .selectable(false),
                    );
                }
                for port in self.available_ports.clone() {
                    let selected = port == self.selected_port;
                    let fill = if selected {
                        theme::TOGGLE_SELECTED
                    } else {
                        theme::TOGGLE_UNSELECTED
                    };
                    let (rect, response) = ui.allocate_exact_size(
                        egui::vec2(ui.available_width(), 24.0),
                        egui::Sense::click(),
                    );
                    if response.hovered() {
                        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                    }
                    let (fill, draw_rect) = theme::button_visual(&response, fill, rect);
                    ui.painter().rect_filled(draw_rect, 4.0, fill);
                    ui.painter().text(
                        draw_rect.left_center() + egui::vec2(8.0, 0.0),
                        egui::Align2::LEFT_CENTER,
                        &port,
                        egui::FontId::proportional(13.0),
                        egui::Color32::WHITE,
                    );
                    if response.clicked() {
                        self.selected_port = port.clone();
                    }
                }

                // Manual entry for ports the scan does not list
                ui.add_space(4.0);
                egui::Frame::new()
                    .fill(egui::Color32::from_rgb(0x14, 0x14, 0x18))
                    .stroke(egui::Stroke::new(1.0, theme::BORDER_SUBTLE))
                    .corner_radius(4.0)
                    .inner_margin(egui::Margin::symmetric(6, 4))
                    .show(ui, |ui| {
                        ui.add(
                            egui::TextEdit::singleline(&mut self.selected_port)
                                .frame(false)
                                .hint_text("/dev/ttyUSB0")
                                .font(egui::FontId::proportional(13.0))
                                .desired_width(ui.available_width()),
                        );
                    });

                ui.add_space(theme::SPACING_MD);
                ui.separator();
                ui.add_space(theme::SPACING_SM);

                // — Baud rate —
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Baud rate")
                            .size(13.0)
                            .color(theme::ACCENT),
                    )
                    .selectable(false),
                );
                ui.add_space(2.0);
                let btn_width = ((ui.available_width()
                    - 4.0 * (BAUD_RATES.len() - 1) as f32)
                    / BAUD_RATES.len() as f32)
                    .floor();
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = 4.0;
                    for baud in BAUD_RATES {
                        let fill = if self.selected_baud == baud {
                            theme::TOGGLE_SELECTED
                        } else {
                            theme::TOGGLE_UNSELECTED
                        };
                        let (rect, response) = ui
                            .allocate_exact_size(egui::vec2(btn_width, 24.0), egui::Sense::click());
                        if response.hovered() {
                            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                        }
                        let (fill, draw_rect) = theme::button_visual(&response, fill, rect);
                        ui.painter().rect_filled(draw_rect, 4.0, fill);
                        ui.painter().text(
                            draw_rect.center(),
                            egui::Align2::CENTER_CENTER,
                            baud.to_string(),
                            egui::FontId::proportional(11.0),
                            egui::Color32::WHITE,
                        );
                        if response.clicked() {
                            self.selected_baud = baud;
                        }
                    }
                });

                // — Connect —
                ui.add_space(theme::SPACING_MD);
                let label = format!("{} Connect", egui_phosphor::regular::PLUGS_CONNECTED);
                if components::painted_button(
                    ui,
                    &label,
                    egui::vec2(ui.available_width(), theme::BUTTON_HEIGHT),
                    theme::BTN_DEFAULT,
                ) {
                    self.reconnect_serial();
                }

                ui.add_space(4.0);
                let (text, color) = if self.serial.is_connected() {
                    (
                        format!("Connected to {}", self.serial.port_name()),
                        theme::STATUS_SUCCESS,
                    )
                } else if !self.serial.port_name().is_empty() {
                    (
                        format!("Could not open {}", self.serial.port_name()),
                        theme::STATUS_ERROR,
                    )
                } else {
                    ("Not connected".to_string(), theme::TEXT_DIM)
                };
                ui.add(
                    egui::Label::new(egui::RichText::new(text).size(12.0).color(color))
                        .selectable(false),
                );
            });

        if modal_response.should_close() {
            self.show_serial_modal = false;
        }
    }
}
