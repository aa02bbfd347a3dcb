// encoder.rs - LED grid <-> 32-bit words

//! Packs the LED grid into 32-bit words for firmware tables, and back.
//!
//! Cell `(row, col)` lands in word `i / 32`, bit `i % 32`, where
//! `i = row * COLS + col`. Word 3 only carries indices 96..104, so its upper
//! 24 bits are always zero.

use anyhow::{Context, anyhow, bail};
use log::{debug, warn};

use crate::grid::{CELL_COUNT, LedGrid, TWords, WORD_BITS, WORD_COUNT};

/// Packs every lit cell into its word/bit slot.
pub fn encode(grid: &LedGrid) -> TWords {
    let mut words: TWords = [0; WORD_COUNT];
    for (index, &lit) in grid.bits().iter().enumerate() {
        if lit {
            words[index / WORD_BITS] |= 1 << (index % WORD_BITS);
        }
    }
    debug!("Encoded {} lit LEDs into {:08X?}", grid.lit_count(), words);
    words
}

/// Inverse of [`encode`]. Bits past the last LED are dropped.
pub fn decode(words: &TWords) -> LedGrid {
    let unused = words[WORD_COUNT - 1] >> (CELL_COUNT % WORD_BITS);
    if CELL_COUNT % WORD_BITS != 0 && unused != 0 {
        warn!(
            "Ignoring bits past LED {} in last word: {:#010X}",
            CELL_COUNT - 1,
            words[WORD_COUNT - 1]
        );
    }

    let mut cells = [false; CELL_COUNT];
    for (index, cell) in cells.iter_mut().enumerate() {
        *cell = (words[index / WORD_BITS] >> (index % WORD_BITS)) & 1 == 1;
    }
    LedGrid::from_bits(cells)
}

/// `0x` followed by 8 uppercase hex digits.
pub fn format_hex_word(word: u32) -> String {
    format!("0x{:08X}", word)
}

pub fn hex_words(grid: &LedGrid) -> [String; WORD_COUNT] {
    encode(grid).map(format_hex_word)
}

/// One word per line, comma after every word but the last, ready to paste
/// into a C array initializer.
pub fn array_literal<S: AsRef<str>>(words: &[S]) -> String {
    let last = words.len().saturating_sub(1);
    words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            if i < last {
                format!("{},", word.as_ref())
            } else {
                word.as_ref().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parses words pasted back from [`array_literal`] or from firmware source.
///
/// Tokens may be separated by commas and/or whitespace, the `0x` prefix is
/// optional and digits are case-insensitive. Enclosing `{}`/`[]` and a
/// trailing `;` are stripped.
pub fn parse_hex_words(text: &str) -> anyhow::Result<TWords> {
    let body = text
        .trim()
        .trim_end_matches(';')
        .trim()
        .trim_start_matches(['{', '['])
        .trim_end_matches(['}', ']']);

    let tokens: Vec<&str> = body
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .collect();

    if tokens.len() != WORD_COUNT {
        bail!("expected {} hex words, found {}", WORD_COUNT, tokens.len());
    }

    let mut words: TWords = [0; WORD_COUNT];
    for (i, token) in tokens.iter().enumerate() {
        let digits = token
            .strip_prefix("0x")
            .or_else(|| token.strip_prefix("0X"))
            .unwrap_or(token);
        if digits.is_empty() {
            return Err(anyhow!("word {} has no digits", i));
        }
        // from_str_radix would also take a sign
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            bail!("word {} ({:?}) contains non-hex characters", i, token);
        }
        words[i] = u32::from_str_radix(digits, 16)
            .with_context(|| format!("word {} ({:?}) is not a 32-bit hex value", i, token))?;
    }
    Ok(words)
}
