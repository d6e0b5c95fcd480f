pub mod aggregate;

pub use aggregate::{Category, CategoryId, CategoryListItem};
