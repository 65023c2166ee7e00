use colored::Color;

pub const PRIMARY: Color = Color::TrueColor {
    r: 255,
    g: 135,
    b: 0,
};
pub const ACCENT: Color = Color::BrightWhite;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const MUTED: Color = Color::BrightBlack;

pub const ACCESSIBLE: Color = Color::BrightGreen;
pub const EMPTY: Color = Color::BrightYellow;
pub const PROBLEM: Color = Color::BrightRed;
