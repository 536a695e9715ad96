// crates/gifcount-ui/src/theme.rs
//
// egui's stock dark visuals with a teal accent and slightly roomier widgets.

use egui::{Color32, Context, CornerRadius, Stroke, Theme, Visuals};

pub const ACCENT:        Color32 = Color32::from_rgb( 64, 196, 180);
pub const DARK_TEXT_DIM: Color32 = Color32::from_rgb(140, 146, 156);
/// Header strip behind the file picker buttons.
pub const HEADER_FILL:   Color32 = Color32::from_rgb( 34,  38,  44);
pub const NOTICE:        Color32 = Color32::from_rgb(236, 190,  80);
pub const SKIPPED:       Color32 = Color32::from_rgb(222,  96,  96);

pub fn configure_style(ctx: &Context) {
    let mut v = Visuals::dark();
    v.hyperlink_color    = ACCENT;
    v.selection.bg_fill  = ACCENT.gamma_multiply(0.45);
    v.selection.stroke   = Stroke::new(1.0, ACCENT);
    v.widgets.hovered.bg_stroke = Stroke::new(1.0, ACCENT);
    for w in [&mut v.widgets.inactive, &mut v.widgets.hovered, &mut v.widgets.active] {
        w.corner_radius = CornerRadius::same(6);
    }
    ctx.set_visuals_of(Theme::Dark, v);

    ctx.style_mut_of(Theme::Dark, |style| {
        style.spacing.button_padding = egui::vec2(10.0, 5.0);
        style.spacing.item_spacing   = egui::vec2(8.0, 6.0);
    });
}
