pub mod aggregate;
pub mod from_api;

pub use aggregate::{
    FollowUp, MessageKind, QueryMessage, QueryPriority, QueryStatus, SenderType, VendorQuery,
};
pub use from_api::{decode_queries, RawQueryRecord};
