use ratatui::style::Color;

/// Page colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub fg1: Color,
    pub grey0: Color,
    pub grey1: Color,

    // Brand colors
    pub emerald: Color,
    pub teal: Color,
    pub gold: Color,

    // Semantic colors
    pub selection: Color,
    pub error: Color,
    pub success: Color,
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // ByteForge dark
        Self {
            bg0: Color::Rgb(0x05, 0x0b, 0x0a),
            bg1: Color::Rgb(0x0b, 0x16, 0x14),
            bg2: Color::Rgb(0x13, 0x24, 0x21),
            fg0: Color::Rgb(0xe2, 0xe8, 0xf0),
            fg1: Color::Rgb(0xf8, 0xfa, 0xfc),
            grey0: Color::Rgb(0x47, 0x55, 0x69),
            grey1: Color::Rgb(0x94, 0xa3, 0xb8),
            emerald: Color::Rgb(0x10, 0xb9, 0x81),
            teal: Color::Rgb(0x2d, 0xd4, 0xbf),
            gold: Color::Rgb(0xfb, 0xbf, 0x24),
            selection: Color::Rgb(0x06, 0x4e, 0x3b),
            error: Color::Rgb(0xf8, 0x71, 0x71),
            success: Color::Rgb(0x34, 0xd3, 0x99),
            accent: Color::Rgb(0x10, 0xb9, 0x81),
        }
    }
}
