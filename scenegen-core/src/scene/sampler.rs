//! Context-window sampling over a corpus.
//!
//! A window is a contiguous slice around a random anchor line. It is split
//! evenly around the anchor, and any shortfall at one corpus edge is taken
//! from the other side, so a window of `n <= len` lines always fits.

use crate::config::SamplingMode;
use rand::Rng;

/// Lines around `anchor`, at most `size` of them, clipped to the corpus.
/// Never wraps around.
pub fn context_window<'a>(lines: &'a [String], anchor: usize, size: usize) -> &'a [String] {
    if lines.is_empty() || size == 0 {
        return &[];
    }
    let anchor = anchor.min(lines.len() - 1);
    let wanted = size - 1;

    let before = (wanted / 2).min(anchor);
    let after = (wanted - before).min(lines.len() - anchor - 1);
    let before = (wanted - after).min(anchor);

    &lines[anchor - before..=anchor + after]
}

/// One contiguous window of `min(requested, len)` lines around a random anchor
pub fn sample_window<R: Rng + ?Sized>(
    lines: &[String],
    requested: usize,
    rng: &mut R,
) -> Vec<String> {
    if requested == 0 || lines.is_empty() {
        return Vec::new();
    }
    if requested >= lines.len() {
        return lines.to_vec();
    }

    let anchor = rng.gen_range(0..lines.len());
    context_window(lines, anchor, requested).to_vec()
}

/// Accumulate windows in shrinking batches until `requested` lines are
/// gathered. Each batch is at most half of what is still missing and has its
/// own anchor, so the result is a series of contiguous runs.
pub fn sample_chunked<R: Rng + ?Sized>(
    lines: &[String],
    requested: usize,
    rng: &mut R,
) -> Vec<String> {
    if requested == 0 || lines.is_empty() {
        return Vec::new();
    }
    if requested >= lines.len() {
        return lines.to_vec();
    }

    let mut result = Vec::with_capacity(requested);
    while result.len() < requested {
        let remaining = requested - result.len();
        let batch = remaining.min((remaining / 2).max(1));
        let anchor = rng.gen_range(0..lines.len());
        result.extend_from_slice(context_window(lines, anchor, batch));
    }

    result.truncate(requested);
    result
}

/// Sample with the configured strategy
pub fn sample<R: Rng + ?Sized>(
    mode: SamplingMode,
    lines: &[String],
    requested: usize,
    rng: &mut R,
) -> Vec<String> {
    match mode {
        SamplingMode::Window => sample_window(lines, requested, rng),
        SamplingMode::Chunked => sample_chunked(lines, requested, rng),
    }
}
