// main.rs - LED matrix editor: click LEDs, read back the maxWrite() words

use anyhow::anyhow;
use eframe::egui;
use egui::Color32;
use log::{info, warn};
use std::path::Path;

use led_matrix::config::{AppConfig, CONFIG_FILE, Rgba};
use led_matrix::{LedGrid, array_literal, decode, hex_words, parse_hex_words, patterns};

mod ui;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let config = AppConfig::load_or_default(Path::new(CONFIG_FILE));
    info!("Starting LED matrix editor ({}x{} LEDs)", led_matrix::ROWS, led_matrix::COLS);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size),
        ..Default::default()
    };

    eframe::run_native(
        "LED Matrix",
        options,
        Box::new(move |_cc| Box::new(LedMatrixApp::new(&config))),
    )
    .map_err(|e| anyhow!("LED matrix window failed: {e}"))
}

fn to_color32(Rgba(r, g, b, a): Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

pub struct LedMatrixApp {
    pub grid: LedGrid,
    pub lit_color: Color32,
    pub dark_color: Color32,
    pub cell_size: f32,
    pub spacing: f32,
    pub selected_pattern: usize,

    /// Last computed words; only refreshed by `show_words`.
    pub result: String,
    pub result_stale: bool,

    pub words_input: String,
    pub load_error: Option<String>,
}

impl Default for LedMatrixApp {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

impl LedMatrixApp {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            grid: LedGrid::new(),
            lit_color: to_color32(config.lit_color),
            dark_color: to_color32(config.dark_color),
            cell_size: config.cell_size,
            spacing: config.spacing,
            selected_pattern: 0,
            result: String::new(),
            result_stale: false,
            words_input: String::new(),
            load_error: None,
        }
    }

    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        self.grid.toggle(row, col);
        self.mark_changed();
    }

    pub fn show_words(&mut self) {
        self.result = array_literal(&hex_words(&self.grid));
        self.result_stale = false;
        info!("Words for {} lit LEDs:\n{}", self.grid.lit_count(), self.result);
    }

    pub fn load_words(&mut self) {
        match parse_hex_words(&self.words_input) {
            Ok(words) => {
                self.grid = decode(&words);
                self.load_error = None;
                self.mark_changed();
            }
            Err(e) => {
                warn!("Rejected pasted words: {:#}", e);
                self.load_error = Some(format!("{:#}", e));
            }
        }
    }

    pub fn fill_all(&mut self) {
        self.grid.fill();
        self.mark_changed();
    }

    pub fn clear_all(&mut self) {
        self.grid.clear();
        self.mark_changed();
    }

    pub fn checkerboard(&mut self) {
        patterns::apply_checkerboard(&mut self.grid);
        self.mark_changed();
    }

    pub fn apply_selected_pattern(&mut self) {
        if let Some(pattern) = patterns::PATTERNS.get(self.selected_pattern) {
            patterns::apply_pattern(&mut self.grid, pattern);
            self.mark_changed();
        }
    }

    pub fn selected_pattern_name(&self) -> &'static str {
        patterns::PATTERNS
            .get(self.selected_pattern)
            .map_or("", |pattern| pattern.name)
    }

    fn mark_changed(&mut self) {
        if !self.result.is_empty() {
            self.result_stale = true;
        }
    }
}
