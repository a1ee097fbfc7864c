//! Benchmark profiles for glyphgrid.
//!
//! Provides deterministic input texts for benchmarking:
//!
//! - [`rectangle`]: a full `width x height` block
//! - [`ragged`]: rows whose lengths cycle between 1 and `max_width`
//! - [`reference_text`]: 100x100 block (10K cells)

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Characters used to fill benchmark texts.
const PALETTE: &[char] = &['#', '.', '.', '.', '~', '^', '.', 'o'];

fn glyph(x: usize, y: usize, seed: u64) -> char {
    let h = (x as u64)
        .wrapping_mul(31)
        .wrapping_add((y as u64).wrapping_mul(17))
        .wrapping_add(seed);
    PALETTE[(h % PALETTE.len() as u64) as usize]
}

/// A `width x height` block of text, deterministic in `seed`.
pub fn rectangle(width: usize, height: usize, seed: u64) -> String {
    let mut out = String::with_capacity((width + 1) * height);
    for y in 0..height {
        if y > 0 {
            out.push('\n');
        }
        out.extend((0..width).map(|x| glyph(x, y, seed)));
    }
    out
}

/// `height` rows with lengths cycling through `1..=max_width`.
pub fn ragged(max_width: usize, height: usize, seed: u64) -> String {
    let max_width = max_width.max(1);
    let mut out = String::new();
    for y in 0..height {
        if y > 0 {
            out.push('\n');
        }
        let width = 1 + (y * 7 + seed as usize) % max_width;
        out.extend((0..width).map(|x| glyph(x, y, seed)));
    }
    out
}

/// Reference profile: 100x100 block (10K cells).
pub fn reference_text(seed: u64) -> String {
    rectangle(100, 100, seed)
}
