pub mod pagination;
pub mod search_input;

pub use pagination::{Pagination, PaginationEvent};
pub use search_input::SearchInput;
