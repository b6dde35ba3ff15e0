use crate::error::ConfigError;
use crate::pager::{ResultsRange, DEFAULT_MAX_VISIBLE_PAGE_LINKS, DEFAULT_ROWS_PER_PAGE};
use eframe::egui;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const DEFAULT_EMPTY_MESSAGE: &str = "Results not found.";

/// Default results-summary text, also the fallback when no custom
/// renderer is configured.
pub fn default_results_message(results: &ResultsRange) -> String {
    format!(
        "Showing from {} to {} of {} results",
        results.start, results.end, results.total
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableTheme {
    Default,
    Striped,
    Dark,
}

impl TableTheme {
    pub fn striped(&self) -> bool {
        !matches!(self, TableTheme::Default)
    }

    pub fn header_color(&self) -> Option<egui::Color32> {
        match self {
            TableTheme::Dark => Some(egui::Color32::from_rgb(220, 220, 220)),
            _ => None,
        }
    }
}

/// Tint of the loading spinner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoaderTheme {
    Dark,
    Light,
}

impl LoaderTheme {
    pub fn color(&self) -> egui::Color32 {
        match self {
            LoaderTheme::Dark => egui::Color32::from_rgb(80, 80, 80),
            LoaderTheme::Light => egui::Color32::from_rgb(230, 230, 230),
        }
    }
}

pub type EmptyMessageFn = Arc<dyn Fn() -> egui::WidgetText + Send + Sync>;
pub type ResultsMessageFn = Arc<dyn Fn(&ResultsRange) -> egui::WidgetText + Send + Sync>;

/// Widget configuration. Every field is optional in spirit:
/// `TableConfig::default()` reproduces the stock table.
#[derive(Clone)]
pub struct TableConfig {
    /// Rows shown per page. Must be greater than zero.
    pub rows_per_page: usize,
    /// Upper bound on the number of page links drawn. Must be greater
    /// than zero.
    pub max_visible_page_links: usize,
    /// Show the loading spinner instead of the table body.
    pub loading: bool,
    /// Make headers clickable, toggling the whole-dataset sort.
    pub sort_enabled: bool,
    pub theme: TableTheme,
    pub loader_theme: LoaderTheme,
    pub text_previous: String,
    pub text_next: String,
    pub text_full_previous: String,
    pub text_full_next: String,
    pub active_page_color: egui::Color32,
    /// Custom "no rows" content; defaults to [`DEFAULT_EMPTY_MESSAGE`].
    pub empty_message: Option<EmptyMessageFn>,
    /// Custom results summary; defaults to [`default_results_message`].
    pub results_message: Option<ResultsMessageFn>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            max_visible_page_links: DEFAULT_MAX_VISIBLE_PAGE_LINKS,
            loading: false,
            sort_enabled: false,
            theme: TableTheme::Default,
            loader_theme: LoaderTheme::Dark,
            text_previous: "<".to_string(),
            text_next: ">".to_string(),
            text_full_previous: "<<".to_string(),
            text_full_next: ">>".to_string(),
            active_page_color: egui::Color32::from_rgb(0x50, 0x50, 0x50),
            empty_message: None,
            results_message: None,
        }
    }
}

impl TableConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows_per_page == 0 {
            return Err(ConfigError::InvalidRowsPerPage);
        }
        if self.max_visible_page_links == 0 {
            return Err(ConfigError::InvalidMaxVisiblePageLinks);
        }
        Ok(())
    }

    pub fn with_empty_message(
        mut self,
        message: impl Fn() -> egui::WidgetText + Send + Sync + 'static,
    ) -> Self {
        self.empty_message = Some(Arc::new(message));
        self
    }

    pub fn with_results_message(
        mut self,
        message: impl Fn(&ResultsRange) -> egui::WidgetText + Send + Sync + 'static,
    ) -> Self {
        self.results_message = Some(Arc::new(message));
        self
    }

    pub(crate) fn empty_message_text(&self) -> egui::WidgetText {
        match &self.empty_message {
            Some(message) => message(),
            None => DEFAULT_EMPTY_MESSAGE.into(),
        }
    }

    pub(crate) fn results_message_text(&self, results: &ResultsRange) -> egui::WidgetText {
        match &self.results_message {
            Some(message) => message(results),
            None => egui::RichText::new(default_results_message(results))
                .weak()
                .into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_values() {
        let config = TableConfig::default();
        assert_eq!(config.rows_per_page, 10);
        assert_eq!(config.max_visible_page_links, 10);
        assert!(!config.loading);
        assert!(!config.sort_enabled);
        assert_eq!(config.text_previous, "<");
        assert_eq!(config.text_next, ">");
        assert_eq!(config.text_full_previous, "<<");
        assert_eq!(config.text_full_next, ">>");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_rows_per_page_is_rejected() {
        let config = TableConfig { rows_per_page: 0, ..Default::default() };
        assert_eq!(config.validate(), Err(ConfigError::InvalidRowsPerPage));
    }

    #[test]
    fn test_zero_page_links_is_rejected() {
        let config = TableConfig { max_visible_page_links: 0, ..Default::default() };
        assert_eq!(config.validate(), Err(ConfigError::InvalidMaxVisiblePageLinks));
    }

    #[test]
    fn test_message_fallbacks_and_overrides() {
        let config = TableConfig::default();
        assert_eq!(config.empty_message_text().text(), DEFAULT_EMPTY_MESSAGE);

        let results = ResultsRange { start: 1, end: 10, total: 27 };
        assert_eq!(
            config.results_message_text(&results).text(),
            "Showing from 1 to 10 of 27 results"
        );

        let config = config
            .with_empty_message(|| "nothing here".into())
            .with_results_message(|r| format!("{} total", r.total).into());
        assert_eq!(config.empty_message_text().text(), "nothing here");
        assert_eq!(config.results_message_text(&results).text(), "27 total");
    }
}
