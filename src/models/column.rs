use crate::models::Record;
use eframe::egui;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Custom cell renderer. Receives the cell value looked up by the
/// column key (None when the key is absent or empty), the whole record,
/// and the row index within the current page.
pub type CellFormatter =
    Arc<dyn Fn(Option<&Value>, &Record, usize) -> egui::WidgetText + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeaderAlign {
    Left,
    Center,
    Right,
}

/// One table column. Column order is display order.
#[derive(Clone)]
pub struct Column {
    /// Record key the cell value is read from. May be empty when the
    /// column exists purely for a formatter-driven synthetic cell.
    pub key: String,
    pub header: String,
    pub hidden: bool,
    /// Render this column's cells strong, like a row-scoped header.
    pub emphasized: bool,
    pub header_align: HeaderAlign,
    pub formatter: Option<CellFormatter>,
}

impl Column {
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            hidden: false,
            emphasized: false,
            header_align: HeaderAlign::Left,
            formatter: None,
        }
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn emphasized(mut self) -> Self {
        self.emphasized = true;
        self
    }

    pub fn header_align(mut self, align: HeaderAlign) -> Self {
        self.header_align = align;
        self
    }

    pub fn with_formatter(
        mut self,
        formatter: impl Fn(Option<&Value>, &Record, usize) -> egui::WidgetText + Send + Sync + 'static,
    ) -> Self {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    /// Cell content for `record`, as the renderer draws it: formatter
    /// output when present, otherwise the raw value's display text.
    pub fn cell_content(&self, record: &Record, row_index: usize) -> egui::WidgetText {
        let value = if self.key.is_empty() {
            None
        } else {
            record.get(&self.key)
        };
        match &self.formatter {
            Some(formatter) => formatter(value, record, row_index),
            None => value.map(crate::models::cell_text).unwrap_or_default().into(),
        }
    }
}
