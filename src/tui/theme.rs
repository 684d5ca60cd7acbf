use ratatui::style::Color;

// Picker colors (256-color palette)
pub const ACCENT_PINK: Color = Color::Indexed(212);
pub const DELTA_GRAY: Color = Color::Indexed(240);

// Help line colors
pub const TEXT_DIM: Color = Color::Rgb(136, 136, 136);        // #888888
pub const TEXT_WHITE: Color = Color::Rgb(255, 255, 255);      // #FFFFFF
pub const SEPARATOR_GRAY: Color = Color::Rgb(88, 88, 88);     // #585858
