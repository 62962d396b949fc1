use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0xa8, 0x55, 0xf7);
pub const DANGER: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const SUCCESS: Color = Color::Rgb(0x22, 0xc5, 0x5e);

/// Colors for one theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub panel: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub focus_border: Color,
    pub highlight: Color,
    pub code: Color,
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(0x03, 0x07, 0x12),
            panel: Color::Rgb(0x11, 0x18, 0x27),
            text: Color::Rgb(0xe5, 0xe7, 0xeb),
            muted: Color::Rgb(0x9c, 0xa3, 0xaf),
            border: Color::Rgb(0x37, 0x41, 0x51),
            focus_border: ACCENT,
            highlight: Color::Rgb(0x3b, 0x1f, 0x5c),
            code: Color::Rgb(0xf9, 0xa8, 0xd4),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::Rgb(0xff, 0xff, 0xff),
            panel: Color::Rgb(0xf9, 0xfa, 0xfb),
            text: Color::Rgb(0x11, 0x18, 0x27),
            muted: Color::Rgb(0x6b, 0x72, 0x80),
            border: Color::Rgb(0xe5, 0xe7, 0xeb),
            focus_border: ACCENT,
            highlight: Color::Rgb(0xf3, 0xe8, 0xff),
            code: Color::Rgb(0xbe, 0x18, 0x5d),
        }
    }

    pub fn for_mode(dark: bool) -> Self {
        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

/// Parse `#rrggbb` into a terminal color.
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
