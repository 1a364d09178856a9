pub const UTF8_SPACE: u8 = 32;
pub const UTF8_DASH: u8 = 45;
