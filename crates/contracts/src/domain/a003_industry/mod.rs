pub mod aggregate;

pub use aggregate::{Industry, IndustryId, IndustryListItem};
