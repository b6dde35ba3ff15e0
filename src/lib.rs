//! Paginated, optionally sortable data-table widget for egui.
//!
//! The host application owns the dataset (a slice of schema-free JSON
//! records) and passes it in every frame together with an ordered
//! column schema; [`DataTable`] derives the pagination state from what
//! it is given and reports interactions back as [`TableEvent`]s.
//!
//! ```no_run
//! use egui_datatable::{Column, DataTable, Record, TableConfig, TableEvent};
//!
//! let mut table = DataTable::new(TableConfig::default())?;
//! let columns = vec![Column::new("id", "Id").emphasized(), Column::new("name", "Name")];
//! # let data: Vec<Record> = vec![];
//! # let run = |ui: &mut eframe::egui::Ui, table: &mut DataTable| {
//! if let Some(TableEvent::RowClicked { record, row_index }) = table.show(ui, &data, &columns) {
//!     println!("row {row_index}: {record:?}");
//! }
//! # };
//! # Ok::<(), egui_datatable::ConfigError>(())
//! ```

mod config;
mod error;
mod models;
mod pager;
mod ui;

pub use config::{
    default_results_message, EmptyMessageFn, LoaderTheme, ResultsMessageFn, TableConfig,
    TableTheme, DEFAULT_EMPTY_MESSAGE,
};
pub use error::ConfigError;
pub use models::{cell_text, descending_order, CellFormatter, Column, HeaderAlign, Record};
pub use pager::{
    Pager, PaginationState, ResultsRange, DEFAULT_MAX_VISIBLE_PAGE_LINKS, DEFAULT_ROWS_PER_PAGE,
};
pub use ui::components::{DataTable, PaginationControls, PaginationEvent, TableEvent};
pub use ui::setup_styles;
