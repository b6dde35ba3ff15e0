use thiserror::Error;

/// Rejected table configuration. Raised when the widget or pager is
/// (re)configured, never during rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("rows_per_page must be greater than zero")]
    InvalidRowsPerPage,
    #[error("max_visible_page_links must be greater than zero")]
    InvalidMaxVisiblePageLinks,
}
