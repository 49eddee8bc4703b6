//! Textual progress bar, redrawn in place with a carriage return.

use std::io::Write;

use crate::error::{BenchError, BenchResult};

/// Position of `size` within `min..=max` as a fraction in `[0, 1]`.
///
/// A single-size range counts as complete.
pub fn progress_fraction(size: usize, min: usize, max: usize) -> f64 {
    if max <= min {
        return 1.0;
    }
    let position = size.clamp(min, max) - min;
    position as f64 / (max - min) as f64
}

/// Render a bar of `width` cells, the filled part proportional to `fraction`
pub fn render_bar(fraction: f64, width: usize) -> String {
    let fraction = fraction.clamp(0.0, 1.0);
    let filled = ((fraction * width as f64) as usize).min(width);
    format!("\r[{}{}]", ">".repeat(filled), " ".repeat(width - filled))
}

/// Progress bar drawing into any writer, usually stdout
#[derive(Debug)]
pub struct ProgressBar<W: Write> {
    out: W,
    width: usize,
    enabled: bool,
}

impl<W: Write> ProgressBar<W> {
    pub fn new(out: W, width: usize) -> Self {
        Self {
            out,
            width,
            enabled: true,
        }
    }

    /// A bar that never writes anything
    pub fn hidden(out: W) -> Self {
        Self {
            out,
            width: 0,
            enabled: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Redraw the bar at `fraction`
    pub fn update(&mut self, fraction: f64) -> BenchResult<()> {
        if !self.enabled {
            return Ok(());
        }
        let bar = render_bar(fraction, self.width);
        self.out
            .write_all(bar.as_bytes())
            .and_then(|_| self.out.flush())
            .map_err(|e| BenchError::io("Failed to draw progress bar", e))
    }

    /// End the bar's line
    pub fn finish(&mut self) -> BenchResult<()> {
        if !self.enabled {
            return Ok(());
        }
        writeln!(self.out)
            .and_then(|_| self.out.flush())
            .map_err(|e| BenchError::io("Failed to finish progress bar", e))
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
