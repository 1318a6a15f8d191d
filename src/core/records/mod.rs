//! Creature records: model, view state, derivations and fetch lifecycle.

pub mod controller;
pub mod model;
pub mod pagination;
pub mod query;
pub mod state;

pub use controller::RecordsController;
pub use model::{Record, RecordId};
pub use pagination::{PageSize, PAGE_SIZE_OPTIONS};
pub use query::{filter_records, page_slice, table_body, TableBody};
pub use state::ViewState;
