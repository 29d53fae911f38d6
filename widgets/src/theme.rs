use sdl2::pixels::Color;

pub const BACKGROUND: Color = Color::RGB(255, 255, 255);
pub const SIDEBAR_BACKGROUND: Color = Color::RGB(240, 242, 246);
pub const TEXT: Color = Color::RGB(49, 51, 63);
pub const MUTED_TEXT: Color = Color::RGB(128, 132, 149);
pub const PRIMARY: Color = Color::RGB(255, 75, 75);
pub const PRIMARY_HOVER: Color = Color::RGB(255, 43, 43);
pub const PRIMARY_PRESSED: Color = Color::RGB(200, 30, 30);
pub const TRACK: Color = Color::RGB(212, 214, 220);
pub const INFO_BACKGROUND: Color = Color::RGB(225, 238, 252);
pub const INFO_TEXT: Color = Color::RGB(0, 66, 128);
