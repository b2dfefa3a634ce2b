//! Stage-to-mark styling.

use hypnos_chain::SleepStage;
use plotters::style::RGBColor;

use crate::error::RenderError;

/// Glyph drawn for one epoch in the abstract-art grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Circle,
    Square,
    Diamond,
    Triangle,
}

/// Fill color and glyph for a single sleep stage.
#[derive(Debug, Clone, Copy)]
pub struct StageStyle {
    /// Fill color of the mark.
    pub color: RGBColor,
    /// Glyph shape of the mark.
    pub glyph: Glyph,
}

/// Default per-stage styling.
///
/// Awake is a warm yellow circle, Light a sky-blue square, Deep a
/// near-black diamond, REM a magenta triangle.
pub fn stage_style(stage: SleepStage) -> StageStyle {
    match stage {
        SleepStage::Awake => StageStyle {
            color: RGBColor(0xF6, 0xC9, 0x0E),
            glyph: Glyph::Circle,
        },
        SleepStage::Light => StageStyle {
            color: RGBColor(0x5B, 0xC0, 0xEB),
            glyph: Glyph::Square,
        },
        SleepStage::Deep => StageStyle {
            color: RGBColor(0x1B, 0x26, 0x3B),
            glyph: Glyph::Diamond,
        },
        SleepStage::Rem => StageStyle {
            color: RGBColor(0xE8, 0x3F, 0x6F),
            glyph: Glyph::Triangle,
        },
    }
}

/// Parses a `#RRGGBB` hex color.
pub(crate) fn parse_hex_color(hex: &str) -> Result<RGBColor, RenderError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(RenderError::InvalidLayout {
            reason: format!("color must be #RRGGBB, got {hex:?}"),
        });
    }
    let r = u8::from_str_radix(&digits[0..2], 16).expect("hex digits validated above");
    let g = u8::from_str_radix(&digits[2..4], 16).expect("hex digits validated above");
    let b = u8::from_str_radix(&digits[4..6], 16).expect("hex digits validated above");
    Ok(RGBColor(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_stage_has_a_distinct_glyph() {
        let glyphs: Vec<Glyph> = SleepStage::ALL
            .iter()
            .map(|&s| stage_style(s).glyph)
            .collect();
        for (i, a) in glyphs.iter().enumerate() {
            for b in glyphs.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn every_stage_has_a_distinct_color() {
        let colors: Vec<RGBColor> = SleepStage::ALL
            .iter()
            .map(|&s| stage_style(s).color)
            .collect();
        for (i, a) in colors.iter().enumerate() {
            for b in colors.iter().skip(i + 1) {
                assert!(a.0 != b.0 || a.1 != b.1 || a.2 != b.2);
            }
        }
    }

    fn rgb(c: RGBColor) -> (u8, u8, u8) {
        (c.0, c.1, c.2)
    }

    #[test]
    fn default_palette() {
        assert_eq!(rgb(stage_style(SleepStage::Awake).color), (0xF6, 0xC9, 0x0E));
        assert_eq!(stage_style(SleepStage::Rem).glyph, Glyph::Triangle);
    }

    #[test]
    fn parse_hex_ok() {
        assert_eq!(rgb(parse_hex_color("#0F0F10").unwrap()), (0x0F, 0x0F, 0x10));
        assert_eq!(rgb(parse_hex_color("ffffff").unwrap()), (255, 255, 255));
    }

    #[test]
    fn parse_hex_bad() {
        assert!(parse_hex_color("#fff").is_err());
        assert!(parse_hex_color("#GGGGGG").is_err());
        assert!(parse_hex_color("").is_err());
    }
}
