//! ANSI color helpers.

/// ANSI reset escape code.
pub const RESET: &str = "\x1b[0m";

/// ANSI codes of the 8-color theme.
pub mod colors {
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    /// 256-color orange.
    pub const ORANGE: &str = "\x1b[38;5;208m";
    /// Blinking red.
    pub const ALERT: &str = "\x1b[5;31m";
}

/// Wrap `text` in a color code and a reset.
pub fn paint(color: &str, text: &str) -> String {
    format!("{}{}{}", color, text, RESET)
}

/// Convert a color name or hex value to an ANSI escape code.
///
/// Accepts space-separated modifiers such as `"blue bold"`. Unknown words are
/// ignored, so an entirely unknown name yields an empty string.
pub fn color_to_ansi(color: &str) -> String {
    let mut codes = Vec::new();

    for part in color.split_whitespace() {
        let code = match part.to_lowercase().as_str() {
            "black" => "\x1b[30m",
            "red" => "\x1b[31m",
            "green" => "\x1b[32m",
            "yellow" => "\x1b[33m",
            "blue" => "\x1b[34m",
            "purple" | "magenta" => "\x1b[35m",
            "cyan" => "\x1b[36m",
            "white" => "\x1b[37m",
            "orange" => colors::ORANGE,
            "bold" => "\x1b[1m",
            "dim" => "\x1b[2m",
            "italic" => "\x1b[3m",
            "underline" => "\x1b[4m",
            "blink" => "\x1b[5m",
            hex if hex.starts_with('#') => {
                codes.push(hex_to_ansi(hex));
                continue;
            }
            _ => "",
        };
        if !code.is_empty() {
            codes.push(code.to_string());
        }
    }

    codes.join("")
}

/// Convert hex color (#RRGGBB) to ANSI 24-bit color escape code.
fn hex_to_ansi(hex: &str) -> String {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return String::new();
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Some(r), Some(g), Some(b)) => format!("\x1b[38;2;{};{};{}m", r, g, b),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint() {
        assert_eq!(paint(colors::GREEN, "main"), "\x1b[32mmain\x1b[0m");
    }

    #[test]
    fn test_named_colors() {
        assert_eq!(color_to_ansi("green"), colors::GREEN);
        assert_eq!(color_to_ansi("Dim"), colors::DIM);
        assert_eq!(color_to_ansi("bold yellow"), "\x1b[1m\x1b[33m");
        assert_eq!(color_to_ansi("orange"), colors::ORANGE);
        assert_eq!(color_to_ansi("nope"), "");
    }

    #[test]
    fn test_hex_colors() {
        assert_eq!(color_to_ansi("#ff8800"), "\x1b[38;2;255;136;0m");
        assert_eq!(color_to_ansi("#fff"), "");
        assert_eq!(color_to_ansi("#gg0000"), "");
    }
}
