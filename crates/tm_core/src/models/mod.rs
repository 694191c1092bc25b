pub mod transfer;

pub use transfer::{SearchField, SortField, TransferRecord};
