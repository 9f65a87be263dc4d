use crate::skin::StoredSkin;
use crate::ui::{css_color, StyleTokens, UiPalette, PIXEL_FONT_FAMILY};
use gtk4::prelude::*;
use gtk4::CssProvider;

/// Generated assets as the stylesheet references them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct SkinCss {
    pub(super) frame_uri: String,
    pub(super) tick_uri: String,
    pub(super) slice_margin: u32,
}

impl SkinCss {
    pub(super) fn from_stored(stored: &StoredSkin) -> Self {
        Self {
            frame_uri: gtk4::gio::File::for_path(&stored.frame_path).uri().to_string(),
            tick_uri: gtk4::gio::File::for_path(&stored.tick_path).uri().to_string(),
            slice_margin: stored.slice_margin,
        }
    }
}

/// Border declarations for a frame-skinned panel: the pixel frame as a
/// border image when available, a flat border of the same color otherwise.
fn panel_border_css(tokens: StyleTokens, palette: &UiPalette, skin: Option<&SkinCss>) -> String {
    match skin {
        Some(skin) => {
            let width = skin.slice_margin.saturating_mul(tokens.skin_scale);
            format!(
                "border-style: solid;
  border-width: {width}px;
  border-image-source: url(\"{uri}\");
  border-image-slice: {slice} fill;
  border-image-width: {width}px;
  border-image-repeat: stretch;",
                uri = skin.frame_uri,
                slice = skin.slice_margin,
            )
        }
        None => format!(
            "border: {width}px solid {color};",
            width = tokens.check_border_width,
            color = css_color(palette.border),
        ),
    }
}

fn checked_indicator_css(skin: Option<&SkinCss>) -> String {
    match skin {
        Some(skin) => format!("-gtk-icon-source: url(\"{}\");", skin.tick_uri),
        None => String::new(),
    }
}

pub(super) fn render_runtime_css(
    tokens: StyleTokens,
    palette: &UiPalette,
    skin: Option<&SkinCss>,
) -> String {
    let panel_border = panel_border_css(tokens, palette, skin);
    let checked_indicator = checked_indicator_css(skin);
    format!(
        "
window.pixnote-root {{
  background: transparent;
}}
.pixnote-root label,
.pixnote-root button,
.pixnote-root entry {{
  font-family: {font_family};
}}
.note-frame {{
  background-color: {background};
  padding: {spacing_15}px;
  {panel_border}
}}
label.note-clock {{
  color: {text};
  font-size: {clock_font_size}pt;
}}
label.note-date {{
  color: {text};
  font-size: {date_font_size}pt;
}}
button.note-close {{
  min-width: {close_size}px;
  min-height: {close_size}px;
  margin-top: {spacing_5}px;
  padding: 0;
  border-radius: 0;
  border: 2px solid {border};
  background: {button_background};
  color: {border};
  font-size: 10px;
}}
button.note-close:hover {{
  background: {button_hover};
  color: white;
}}
label.note-heading {{
  color: white;
  background: {border};
  padding: 8px;
  margin-top: {spacing_5}px;
  border: 2px solid {border};
  font-size: {heading_font_size}pt;
}}
.task-panel {{
  background-color: {list_background};
  padding: {spacing_5}px;
  {panel_border}
}}
.task-panel scrolledwindow,
.task-panel viewport {{
  background: transparent;
  border: none;
}}
entry.task-entry {{
  background-color: white;
  color: {input_text};
  padding: {spacing_5}px {spacing_10}px;
  font-size: {body_font_size}pt;
  border-radius: 0;
  box-shadow: none;
  {panel_border}
}}
.task-row {{
  padding: {spacing_4}px 0;
}}
.task-row checkbutton {{
  color: {text};
  font-size: {body_font_size}pt;
}}
.task-row checkbutton check {{
  min-width: {indicator_size}px;
  min-height: {indicator_size}px;
  border-radius: 0;
  border: {check_border}px solid {border};
  background: white;
  background-image: none;
  margin-right: {spacing_12}px;
}}
.task-row checkbutton check:checked {{
  background: white;
  color: {border};
  {checked_indicator}
}}
.task-row.task-done checkbutton label {{
  color: {done_text};
  text-decoration-line: line-through;
}}
button.task-delete {{
  min-width: {delete_size}px;
  min-height: {delete_size}px;
  padding: 0;
  border: none;
  background: transparent;
  color: {border};
  font-weight: bold;
}}
button.task-delete:hover {{
  color: {delete_hover};
}}
",
        font_family = PIXEL_FONT_FAMILY,
        background = css_color(palette.background),
        border = css_color(palette.border),
        text = css_color(palette.text),
        button_background = css_color(palette.button_background),
        button_hover = css_color(palette.button_hover),
        done_text = css_color(palette.done_text),
        input_text = css_color(palette.input_text),
        list_background = css_color(palette.list_background),
        delete_hover = css_color(palette.delete_hover),
        spacing_4 = tokens.spacing_4,
        spacing_5 = tokens.spacing_5,
        spacing_10 = tokens.spacing_10,
        spacing_12 = tokens.spacing_12,
        spacing_15 = tokens.spacing_15,
        clock_font_size = tokens.clock_font_size,
        date_font_size = tokens.date_font_size,
        heading_font_size = tokens.heading_font_size,
        body_font_size = tokens.body_font_size,
        close_size = tokens.close_button_size,
        delete_size = tokens.delete_button_size,
        indicator_size = tokens.check_indicator_size,
        check_border = tokens.check_border_width,
    )
}

pub(super) fn install_runtime_css(tokens: StyleTokens, palette: &UiPalette, skin: Option<&SkinCss>) {
    let css = render_runtime_css(tokens, palette, skin);

    let provider = CssProvider::new();
    provider.load_from_data(&css);
    if let Some(display) = gtk4::gdk::Display::default() {
        gtk4::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    } else {
        tracing::warn!("no display available; runtime css not installed");
    }
}
