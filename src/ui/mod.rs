pub mod palette;
pub mod style;
pub mod widgets;

pub use palette::{css_color, UiPalette};
pub use style::{StyleTokens, LAYOUT_TOKENS, PIXEL_FONT_FAMILY};
pub use widgets::{styled_label, text_button};
