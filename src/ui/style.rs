/// Compile-time layout tokens, not user-overridable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleTokens {
    pub spacing_2: i32,
    pub spacing_4: i32,
    pub spacing_5: i32,
    pub spacing_10: i32,
    pub spacing_12: i32,
    pub spacing_15: i32,
    pub window_width: i32,
    pub window_height: i32,
    pub avatar_size: i32,
    pub close_button_size: i32,
    pub delete_button_size: i32,
    pub check_indicator_size: u16,
    pub check_border_width: u16,
    pub skin_scale: u32,
    pub clock_font_size: u16,
    pub date_font_size: u16,
    pub heading_font_size: u16,
    pub body_font_size: u16,
    pub clock_refresh_secs: u32,
}

pub const LAYOUT_TOKENS: StyleTokens = StyleTokens {
    spacing_2: 2,
    spacing_4: 4,
    spacing_5: 5,
    spacing_10: 10,
    spacing_12: 12,
    spacing_15: 15,
    window_width: 400,
    window_height: 560,
    avatar_size: 60,
    close_button_size: 24,
    delete_button_size: 20,
    check_indicator_size: 18,
    check_border_width: 3,
    skin_scale: 2,
    clock_font_size: 18,
    date_font_size: 9,
    heading_font_size: 8,
    body_font_size: 7,
    clock_refresh_secs: 1,
};

pub const PIXEL_FONT_FAMILY: &str = "'Press Start 2P', monospace";

#[cfg(test)]
mod tests {
    use super::LAYOUT_TOKENS;

    #[test]
    fn layout_tokens_keep_note_dimensions() {
        assert_eq!(LAYOUT_TOKENS.window_width, 400);
        assert_eq!(LAYOUT_TOKENS.window_height, 560);
    }

    #[test]
    fn clock_refreshes_every_second() {
        assert_eq!(LAYOUT_TOKENS.clock_refresh_secs, 1);
    }
}
