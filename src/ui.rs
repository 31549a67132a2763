use eframe::egui::{self, Color32, FontId, Stroke, Style, TextStyle, Theme, style::Selection};

const ACCENT_LIGHT: (u8, u8, u8) = (172, 196, 160);
const ACCENT_DARK: (u8, u8, u8) = (112, 138, 102);
const BODY_FONT_SIZE: f32 = 16.0;
const BUTTON_FONT_SIZE: f32 = 15.0;

pub fn setup_custom_style(ctx: &egui::Context) {
    ctx.style_mut_of(Theme::Light, |style| apply_style(style, ACCENT_LIGHT));
    ctx.style_mut_of(Theme::Dark, |style| apply_style(style, ACCENT_DARK));
}

fn apply_style(style: &mut Style, accent: (u8, u8, u8)) {
    let accent = Color32::from_rgb(accent.0, accent.1, accent.2);

    style
        .text_styles
        .insert(TextStyle::Body, FontId::proportional(BODY_FONT_SIZE));
    style
        .text_styles
        .insert(TextStyle::Button, FontId::proportional(BUTTON_FONT_SIZE));

    style.visuals.selection = Selection {
        bg_fill: accent,
        stroke: Stroke::new(1.0, style.visuals.strong_text_color()),
    };
    style.visuals.widgets.hovered.weak_bg_fill = accent;
    if style.visuals.dark_mode {
        style.visuals.widgets.inactive.weak_bg_fill = style.visuals.faint_bg_color;
    }
}
