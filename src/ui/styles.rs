use eframe::egui;

/// Monospace text styles suited to data-dense tables. Optional; hosts
/// call this once at startup if they want the look.
pub fn setup_styles(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    for (text_style, size) in [
        (egui::TextStyle::Body, 11.0),
        (egui::TextStyle::Button, 11.0),
        (egui::TextStyle::Monospace, 11.0),
        (egui::TextStyle::Heading, 14.0),
        (egui::TextStyle::Small, 9.0),
    ] {
        style.text_styles.insert(
            text_style,
            egui::FontId::new(size, egui::FontFamily::Monospace),
        );
    }

    ctx.set_style(style);
}
