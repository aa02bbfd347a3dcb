// lib.rs - LED matrix state and bitfield encoding, independent of the UI

pub mod config;   // Display settings
pub mod encoder;  // Grid <-> 32-bit words
pub mod grid;     // Grid types and constants
pub mod patterns; // Preset LED patterns

pub use encoder::{array_literal, decode, encode, hex_words, parse_hex_words};
pub use grid::{COLS, LedGrid, ROWS, TWords, WORD_COUNT};
