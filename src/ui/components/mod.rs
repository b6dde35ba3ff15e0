mod pagination;
mod table;

pub use pagination::{PaginationControls, PaginationEvent};
pub use table::{DataTable, TableEvent};
