// ui.rs - egui front end for the LED matrix

use eframe::egui;
use egui::{Color32, Pos2, Rect, Stroke, Vec2};
use led_matrix::config::CELL_SIZE_RANGE;
use led_matrix::grid::{CELL_COUNT, COLS, ROWS};
use led_matrix::patterns;

use crate::LedMatrixApp;

/// Cell under `pos`, given the grid's top-left corner. Gaps between cells hit nothing.
pub fn cell_at(origin: Pos2, pos: Pos2, cell_size: f32, spacing: f32) -> Option<(usize, usize)> {
    let offset = pos - origin;
    if offset.x < 0.0 || offset.y < 0.0 {
        return None;
    }
    let pitch = cell_size + spacing;
    if pitch <= 0.0 {
        return None;
    }
    let col = (offset.x / pitch) as usize;
    let row = (offset.y / pitch) as usize;
    if row >= ROWS || col >= COLS {
        return None;
    }
    if offset.x - col as f32 * pitch > cell_size || offset.y - row as f32 * pitch > cell_size {
        return None;
    }
    Some((row, col))
}

/// Largest cell edge, up to `max_cell`, that fits the whole grid in `available`.
pub fn fit_cell_size(max_cell: f32, spacing: f32, available: Vec2) -> f32 {
    let fit_width = (available.x + spacing) / COLS as f32 - spacing;
    let fit_height = (available.y + spacing) / ROWS as f32 - spacing;
    max_cell.min(fit_width).min(fit_height).max(CELL_SIZE_RANGE.0)
}

impl eframe::App for LedMatrixApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Words go in a bottom panel so the grid only gets the space left over
        egui::TopBottomPanel::bottom("words_panel")
            .resizable(false)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.words_ui(ui);
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(format!("{}x{} LED Matrix", ROWS, COLS));

            // Presets
            ui.horizontal(|ui| {
                if ui.button("Fill All").clicked() {
                    self.fill_all();
                }
                if ui.button("Clear All").clicked() {
                    self.clear_all();
                }
                if ui.button("Checkerboard").clicked() {
                    self.checkerboard();
                }

                ui.separator();

                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(self.selected_pattern_name())
                    .show_ui(ui, |ui| {
                        for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });
                if ui.button("Apply Pattern").clicked() {
                    self.apply_selected_pattern();
                }
            });

            ui.horizontal(|ui| {
                ui.label("Lit:");
                ui.color_edit_button_srgba(&mut self.lit_color);
                ui.label("Dark:");
                ui.color_edit_button_srgba(&mut self.dark_color);
            });

            ui.separator();
            ui.label("Click on LEDs to toggle them on/off");

            // Leave a row under the grid for the lit count
            let mut available = ui.available_size();
            available.y -= ui.spacing().interact_size.y + ui.spacing().item_spacing.y;
            let spacing = self.spacing;
            let box_size = fit_cell_size(self.cell_size, spacing, available);
            let total_size = Vec2::new(
                (box_size + spacing) * COLS as f32 - spacing,
                (box_size + spacing) * ROWS as f32 - spacing,
            );

            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
            let start_pos = response.rect.min;

            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    if let Some((row, col)) = cell_at(start_pos, pos, box_size, spacing) {
                        self.toggle_cell(row, col);
                    }
                }
            }

            for row in 0..ROWS {
                for col in 0..COLS {
                    let x = start_pos.x + col as f32 * (box_size + spacing);
                    let y = start_pos.y + row as f32 * (box_size + spacing);
                    let rect = Rect::from_min_size(egui::pos2(x, y), Vec2::splat(box_size));

                    let color = if self.grid.get(row, col) {
                        self.lit_color
                    } else {
                        self.dark_color
                    };
                    painter.rect_filled(rect, 0.0, color);
                    painter.rect_stroke(rect, 0.0, Stroke::new(1.0, Color32::GRAY));
                }
            }

            let lit = self.grid.lit_count();
            ui.label(format!("Lit LEDs: {} / {}", lit, CELL_COUNT));
        });
    }
}

impl LedMatrixApp {
    fn words_ui(&mut self, ui: &mut egui::Ui) {
        if ui.button("Show lit LEDs in maxWrite() format").clicked() {
            self.show_words();
        }
        if self.result_stale {
            ui.colored_label(Color32::YELLOW, "Grid changed since these words were generated");
        }
        ui.add(
            egui::TextEdit::multiline(&mut self.result.as_str())
                .font(egui::FontId::monospace(20.0))
                .desired_rows(led_matrix::WORD_COUNT),
        );

        ui.separator();

        // Paste words back in
        ui.label("Load words:");
        ui.add(
            egui::TextEdit::multiline(&mut self.words_input)
                .font(egui::TextStyle::Monospace)
                .hint_text("0x00000000,\n0x00000000,\n0x00000000,\n0x00000000")
                .desired_rows(led_matrix::WORD_COUNT),
        );
        if ui.button("Load").clicked() {
            self.load_words();
        }
        if let Some(error) = &self.load_error {
            ui.colored_label(Color32::RED, error.as_str());
        }
    }
}
