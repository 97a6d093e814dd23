//! Piece colors and shapes
//!
//! Presentation owns the drawing; this module only names the values and
//! carries the hex codes the renderer is expected to use.

use serde::{Deserialize, Serialize};

/// Game piece colors (high contrast against a dark background)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceColor {
    Red,
    Blue,
    Green,
    Yellow,
    /// Tier 3+
    Purple,
    /// Tier 4
    Orange,
}

impl PieceColor {
    pub const ALL: [PieceColor; 6] = [
        PieceColor::Red,
        PieceColor::Blue,
        PieceColor::Green,
        PieceColor::Yellow,
        PieceColor::Purple,
        PieceColor::Orange,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceColor::Red => "red",
            PieceColor::Blue => "blue",
            PieceColor::Green => "green",
            PieceColor::Yellow => "yellow",
            PieceColor::Purple => "purple",
            PieceColor::Orange => "orange",
        }
    }

    /// Display hex value
    pub fn hex(&self) -> &'static str {
        match self {
            PieceColor::Red => "#FF4444",
            PieceColor::Blue => "#4488FF",
            PieceColor::Green => "#44DD44",
            PieceColor::Yellow => "#FFDD44",
            PieceColor::Purple => "#AA44FF",
            PieceColor::Orange => "#FF8844",
        }
    }
}

/// Option shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    #[default]
    Circle,
    Square,
    Triangle,
    Diamond,
}

impl Shape {
    pub const ALL: [Shape; 4] = [Shape::Circle, Shape::Square, Shape::Triangle, Shape::Diamond];

    /// Shape every option takes when shape carries no information (tier 1)
    pub const DEFAULT: Shape = Shape::Circle;

    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::Circle => "circle",
            Shape::Square => "square",
            Shape::Triangle => "triangle",
            Shape::Diamond => "diamond",
        }
    }
}

/// UI accent colors used alongside the pieces
pub mod ui {
    pub const SUCCESS: &str = "#00FF88";
    pub const WARNING: &str = "#FFB800";
    pub const ERROR: &str = "#FF3366";
}

/// Timer bar color for the remaining-time fraction (1.0 = full time)
pub fn timer_color(progress: f32) -> &'static str {
    if progress > 0.5 {
        ui::SUCCESS
    } else if progress > 0.25 {
        ui::WARNING
    } else {
        ui::ERROR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_color_bands() {
        assert_eq!(timer_color(1.0), ui::SUCCESS);
        assert_eq!(timer_color(0.51), ui::SUCCESS);
        assert_eq!(timer_color(0.5), ui::WARNING);
        assert_eq!(timer_color(0.26), ui::WARNING);
        assert_eq!(timer_color(0.25), ui::ERROR);
        assert_eq!(timer_color(0.0), ui::ERROR);
    }

    #[test]
    fn test_serde_names_are_lowercase() {
        let json = serde_json::to_string(&(PieceColor::Purple, Shape::Diamond)).unwrap();
        assert_eq!(json, r#"["purple","diamond"]"#);
        for color in PieceColor::ALL {
            assert_eq!(serde_json::to_string(&color).unwrap(), format!("\"{}\"", color.as_str()));
        }
    }

    #[test]
    fn test_hex_codes() {
        let hexes: Vec<&str> = PieceColor::ALL.iter().map(|c| c.hex()).collect();
        assert_eq!(
            hexes,
            vec!["#FF4444", "#4488FF", "#44DD44", "#FFDD44", "#AA44FF", "#FF8844"]
        );
    }

    #[test]
    fn test_default_shape() {
        assert_eq!(Shape::default(), Shape::DEFAULT);
    }
}
