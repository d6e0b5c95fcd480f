pub mod aggregate;

pub use aggregate::{Partner, PartnerId, PartnerListItem};
