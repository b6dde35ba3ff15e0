use crate::config::TableConfig;
use crate::pager::Pager;
use eframe::egui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationEvent {
    /// Jump to page 1 (the `<<` control).
    FullPrevious,
    Previous,
    /// 1-based page picked from the link strip.
    PageSelected(usize),
    Next,
    /// Jump to the last page (the `>>` control).
    FullNext,
}

/// The pagination strip: results summary on the left, `<< < 1 2 … > >>`
/// controls on the right. Pure rendering; all state lives in the
/// [`Pager`].
pub struct PaginationControls;

impl PaginationControls {
    pub fn new() -> Self {
        Self
    }

    pub fn show(
        &self,
        ui: &mut egui::Ui,
        pager: &Pager,
        config: &TableConfig,
    ) -> Option<PaginationEvent> {
        let mut event = None;

        let on_first = pager.current_page() == 1;
        let on_last = pager.current_page() == pager.total_pages();

        ui.horizontal(|ui| {
            ui.label(config.results_message_text(&pager.results_range()));

            ui.separator();

            if Self::edge_button(ui, &config.text_full_previous, !on_first) {
                event = Some(PaginationEvent::FullPrevious);
            }
            if Self::edge_button(ui, &config.text_previous, !on_first) {
                event = Some(PaginationEvent::Previous);
            }

            for page_index in pager.visible_pages() {
                let page = page_index + 1;
                let active = page == pager.current_page();
                let label = egui::RichText::new(page.to_string());
                let button = if active {
                    egui::Button::new(label.color(egui::Color32::WHITE))
                        .fill(config.active_page_color)
                } else {
                    egui::Button::new(label).frame(false)
                };
                if ui.add(button).clicked() && !active {
                    event = Some(PaginationEvent::PageSelected(page));
                }
            }

            if Self::edge_button(ui, &config.text_next, !on_last) {
                event = Some(PaginationEvent::Next);
            }
            if Self::edge_button(ui, &config.text_full_next, !on_last) {
                event = Some(PaginationEvent::FullNext);
            }
        });

        event
    }

    fn edge_button(ui: &mut egui::Ui, text: &str, enabled: bool) -> bool {
        ui.add_enabled(enabled, egui::Button::new(text).frame(false))
            .clicked()
    }
}

impl Default for PaginationControls {
    fn default() -> Self {
        Self::new()
    }
}
