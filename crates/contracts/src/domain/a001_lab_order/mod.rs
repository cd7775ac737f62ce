pub mod aggregate;

pub use aggregate::{find_order, LabOrder, OrderDetails};
