//! Context window usage meter.
//!
//! Shows how much of the context window is used, scaled so that the enforced
//! limit reads as 100%.

use statusline_git::style::{colors, paint};

/// Number of bar segments.
const SEGMENTS: usize = 10;
const FILLED: char = '\u{2588}';
const EMPTY: char = '\u{2591}';

/// Scaled usage, 0 to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextMeter {
    used: u32,
}

impl ContextMeter {
    /// Build from the remaining percentage reported by the host.
    pub fn from_remaining(remaining: f64, limit_percent: f64) -> Self {
        let raw_used = (100.0 - remaining.round()).clamp(0.0, 100.0);
        let scaled = (raw_used / limit_percent * 100.0).round();
        Self {
            used: scaled.clamp(0.0, 100.0) as u32,
        }
    }

    pub fn used(&self) -> u32 {
        self.used
    }

    /// Ten-segment bar, one filled segment per full 10%.
    pub fn bar(&self) -> String {
        let filled = (self.used as usize / 10).min(SEGMENTS);
        let mut bar = String::new();
        bar.extend(std::iter::repeat_n(FILLED, filled));
        bar.extend(std::iter::repeat_n(EMPTY, SEGMENTS - filled));
        bar
    }

    pub fn render(&self) -> String {
        let text = format!("{} {}%", self.bar(), self.used);
        match self.used {
            0..63 => paint(colors::GREEN, &text),
            63..81 => paint(colors::YELLOW, &text),
            81..95 => paint(colors::ORANGE, &text),
            _ => paint(colors::ALERT, &format!("\u{1F480} {}", text)),
        }
    }
}
