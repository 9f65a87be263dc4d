use crate::geometry::Color;

pub const TEXT_COLOR: Color = Color::new(0x8b, 0x4b, 0x62);
pub const BUTTON_BACKGROUND: Color = Color::new(0xe9, 0xa9, 0xc4);
pub const BUTTON_HOVER: Color = Color::new(0xff, 0x69, 0xb4);
pub const DONE_TEXT_COLOR: Color = Color::new(0xd8, 0xa0, 0xb5);
pub const INPUT_TEXT_COLOR: Color = Color::new(0x33, 0x33, 0x33);
pub const LIST_BACKGROUND: Color = Color::with_alpha(255, 255, 255, 153);
pub const DELETE_HOVER: Color = Color::new(0xff, 0x00, 0x00);

/// Colors the runtime CSS is rendered from. Background and border follow
/// config; the rest are fixed accents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiPalette {
    pub background: Color,
    pub border: Color,
    pub text: Color,
    pub button_background: Color,
    pub button_hover: Color,
    pub done_text: Color,
    pub input_text: Color,
    pub list_background: Color,
    pub delete_hover: Color,
}

impl UiPalette {
    pub const fn new(background: Color, border: Color) -> Self {
        Self {
            background,
            border,
            text: TEXT_COLOR,
            button_background: BUTTON_BACKGROUND,
            button_hover: BUTTON_HOVER,
            done_text: DONE_TEXT_COLOR,
            input_text: INPUT_TEXT_COLOR,
            list_background: LIST_BACKGROUND,
            delete_hover: DELETE_HOVER,
        }
    }
}

/// CSS color literal; translucent colors use `rgba()` so GTK parses them.
pub fn css_color(color: Color) -> String {
    if color.a == 255 {
        color.to_hex()
    } else {
        format!(
            "rgba({}, {}, {}, {:.2})",
            color.r,
            color.g,
            color.b,
            f64::from(color.a) / 255.0
        )
    }
}
