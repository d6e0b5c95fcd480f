pub mod aggregate;

pub use aggregate::{Order, OrderId, OrderListItem, OrderStatus};
