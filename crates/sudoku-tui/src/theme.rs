use crossterm::style::Color;

/// Color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color
    pub bg: Color,
    /// Default text color
    pub fg: Color,
    /// Grid border color
    pub border: Color,
    /// Box border color (thicker 3x3 separators)
    pub box_border: Color,
    /// Given (puzzle) cell color
    pub given: Color,
    /// User-entered value color
    pub filled: Color,
    /// Selected cell background
    pub selected_bg: Color,
    /// Error/conflict color
    pub error: Color,
    /// Success/complete color
    pub success: Color,
    /// Timer/info text color
    pub info: Color,
    /// Key binding text color
    pub key: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb { r: 16, g: 18, b: 26 },
            fg: Color::Rgb { r: 220, g: 222, b: 232 },
            border: Color::Rgb { r: 64, g: 68, b: 84 },
            box_border: Color::Rgb { r: 120, g: 130, b: 160 },
            given: Color::Rgb { r: 250, g: 250, b: 250 },
            filled: Color::Rgb { r: 96, g: 170, b: 250 },
            selected_bg: Color::Rgb { r: 60, g: 82, b: 130 },
            error: Color::Rgb { r: 240, g: 84, b: 84 },
            success: Color::Rgb { r: 96, g: 230, b: 130 },
            info: Color::Rgb { r: 150, g: 156, b: 178 },
            key: Color::Rgb { r: 240, g: 200, b: 96 },
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            bg: Color::Rgb { r: 246, g: 246, b: 250 },
            fg: Color::Rgb { r: 32, g: 32, b: 44 },
            border: Color::Rgb { r: 176, g: 176, b: 190 },
            box_border: Color::Rgb { r: 64, g: 64, b: 86 },
            given: Color::Rgb { r: 10, g: 10, b: 10 },
            filled: Color::Rgb { r: 34, g: 96, b: 190 },
            selected_bg: Color::Rgb { r: 186, g: 204, b: 250 },
            error: Color::Rgb { r: 210, g: 54, b: 54 },
            success: Color::Rgb { r: 44, g: 150, b: 64 },
            info: Color::Rgb { r: 96, g: 96, b: 116 },
            key: Color::Rgb { r: 190, g: 116, b: 24 },
        }
    }
}
