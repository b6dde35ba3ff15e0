mod column;
mod record;

pub use column::{CellFormatter, Column, HeaderAlign};
pub use record::{cell_text, descending_order, Record};
