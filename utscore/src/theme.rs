//! UTS theme
//!
//! Dark blue header, light gray keypad tray, white keys. Rounded corners
//! everywhere, no shadows.

use egui::{Color32, FontFamily, FontId, Margin, Rounding, Stroke, Style, TextStyle, Visuals};

/// The app palette.
pub struct UtsColors;

impl UtsColors {
    pub const DARK_BLUE: Color32 = Color32::from_rgb(0x01, 0x36, 0x74);
    pub const BUTTON_LIGHT_GRAY: Color32 = Color32::from_rgb(0xE8, 0xED, 0xF2);
    pub const KEYPAD_GRAY: Color32 = Color32::from_rgb(0xF5, 0xF7, 0xF8);
    pub const WHITE: Color32 = Color32::WHITE;
    pub const BLACK: Color32 = Color32::BLACK;
    /// White at 70% opacity, used for secondary text on dark blue.
    pub const WHITE_DIMMED: Color32 = Color32::from_rgba_premultiplied(179, 179, 179, 179);
}

/// Theme configuration for UTS apps
pub struct UtsTheme {
    pub font_size_body: f32,
    pub font_size_heading: f32,
    pub font_size_small: f32,
    pub window_padding: f32,
    pub item_spacing: f32,
    pub rounding: f32,
}

impl Default for UtsTheme {
    fn default() -> Self {
        Self {
            font_size_body: 15.0,
            font_size_heading: 22.0,
            font_size_small: 12.0,
            window_padding: 8.0,
            item_spacing: 6.0,
            rounding: 12.0,
        }
    }
}

impl UtsTheme {
    /// Apply the theme to an egui context
    pub fn apply(&self, ctx: &egui::Context) {
        ctx.set_style(self.style());
    }

    /// Build the style without touching a context.
    pub fn style(&self) -> Style {
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_small, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_heading, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = Visuals::light();

        visuals.window_fill = UtsColors::WHITE;
        visuals.panel_fill = UtsColors::KEYPAD_GRAY;
        visuals.extreme_bg_color = UtsColors::WHITE;

        visuals.window_rounding = Rounding::same(self.rounding);
        visuals.menu_rounding = Rounding::same(self.rounding / 2.0);

        let rounding = Rounding::same(self.rounding);
        let soft = |ws: &mut egui::style::WidgetVisuals| {
            ws.bg_stroke = Stroke::NONE;
            ws.fg_stroke = Stroke::new(1.0, UtsColors::BLACK);
            ws.rounding = rounding;
        };
        soft(&mut visuals.widgets.noninteractive);
        soft(&mut visuals.widgets.inactive);
        soft(&mut visuals.widgets.hovered);
        soft(&mut visuals.widgets.active);
        soft(&mut visuals.widgets.open);

        visuals.window_shadow = egui::epaint::Shadow::NONE;
        visuals.popup_shadow = egui::epaint::Shadow::NONE;

        style.visuals = visuals;

        style.spacing.window_margin = Margin::same(self.window_padding);
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);

        style
    }

    /// Header frame: dark blue, generous padding.
    pub fn header_frame() -> egui::Frame {
        egui::Frame::none()
            .fill(UtsColors::DARK_BLUE)
            .inner_margin(Margin::symmetric(24.0, 16.0))
    }

    /// Tray frame: light gray with rounded top corners only.
    pub fn tray_frame(&self) -> egui::Frame {
        egui::Frame::none()
            .fill(UtsColors::KEYPAD_GRAY)
            .rounding(Rounding {
                nw: self.rounding * 2.0,
                ne: self.rounding * 2.0,
                sw: 0.0,
                se: 0.0,
            })
            .inner_margin(Margin {
                left: 16.0,
                right: 16.0,
                top: 16.0,
                bottom: 24.0,
            })
    }
}

/// Menu bar styling helper
pub fn menu_bar<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> egui::InnerResponse<R> {
    let frame_resp = egui::Frame::none()
        .fill(UtsColors::WHITE)
        .inner_margin(Margin::symmetric(4.0, 2.0))
        .show(ui, |ui| ui.horizontal(add_contents).inner);
    egui::InnerResponse {
        inner: frame_resp.inner,
        response: frame_resp.response,
    }
}

/// Drop Cmd+/Cmd-/Cmd= key events so egui does not zoom the window.
pub fn consume_zoom_keys(ctx: &egui::Context) {
    ctx.input_mut(|i| {
        i.events.retain(|event| {
            !matches!(event,
                egui::Event::Key { key, modifiers, .. }
                    if modifiers.command
                        && matches!(key, egui::Key::Plus | egui::Key::Minus | egui::Key::Equals))
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_uses_palette() {
        let style = UtsTheme::default().style();
        assert_eq!(style.visuals.panel_fill, UtsColors::KEYPAD_GRAY);
        assert_eq!(style.visuals.window_rounding, Rounding::same(12.0));
    }

    #[test]
    fn test_body_font_size() {
        let theme = UtsTheme { font_size_body: 18.0, ..Default::default() };
        let style = theme.style();
        assert_eq!(style.text_styles[&TextStyle::Body].size, 18.0);
    }

    fn key_event(key: egui::Key, modifiers: egui::Modifiers) -> egui::Event {
        egui::Event::Key { key, physical_key: None, pressed: true, repeat: false, modifiers }
    }

    #[test]
    fn test_zoom_keys_are_dropped() {
        let ctx = egui::Context::default();
        let raw = egui::RawInput {
            events: vec![
                key_event(egui::Key::Plus, egui::Modifiers::COMMAND),
                key_event(egui::Key::Minus, egui::Modifiers::COMMAND),
                key_event(egui::Key::Equals, egui::Modifiers::COMMAND),
                key_event(egui::Key::Minus, egui::Modifiers::NONE),
                egui::Event::Text("+".into()),
            ],
            ..Default::default()
        };
        ctx.begin_frame(raw);
        consume_zoom_keys(&ctx);
        let events = ctx.input(|i| i.events.clone());
        let _ = ctx.end_frame();
        assert_eq!(
            events,
            vec![key_event(egui::Key::Minus, egui::Modifiers::NONE), egui::Event::Text("+".into())]
        );
    }
}
