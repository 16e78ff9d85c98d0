//! Shared domain types.

mod page;
mod rating;
mod status;
mod tag;

pub use page::Pagination;
pub use rating::Rating;
pub use status::OrderStatus;
pub use tag::ProductTag;
