use ratatui::style::Color;

// Palette lifted from the storefront page: warm amber accents over a light
// ground, near-black ink, gray secondary text.

pub const BG_PRIMARY: Color = Color::Rgb(255, 255, 255);
pub const FG_PRIMARY: Color = Color::Rgb(17, 24, 39);
pub const FG_DIM: Color = Color::Rgb(107, 114, 128);

pub const BORDER_IDLE: Color = Color::Rgb(229, 231, 235);
pub const BORDER_FOCUS: Color = Color::Rgb(217, 119, 6);

pub const BRAND_BG: Color = Color::Rgb(253, 230, 138);
pub const BRAND_FG: Color = Color::Rgb(17, 24, 39);

pub const BUTTON_ACTIVE_BG: Color = Color::Rgb(17, 24, 39);
pub const BUTTON_ACTIVE_FG: Color = Color::Rgb(255, 255, 255);

pub const BADGE_BG: Color = Color::Rgb(253, 230, 138);
pub const BADGE_FG: Color = Color::Rgb(120, 53, 15);

pub const TOAST_BG: Color = Color::Rgb(17, 24, 39);
pub const TOAST_FG: Color = Color::Rgb(255, 255, 255);
