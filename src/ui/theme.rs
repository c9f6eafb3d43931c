use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x7c, 0x4d, 0xff);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const BUTTON_TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const PARITY_EVEN: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const PARITY_ODD: Color = Color::Rgb(0xf5, 0x9e, 0x0b);
