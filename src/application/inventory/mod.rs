mod errors;
mod inventory_service;

pub use errors::{InventoryError, Result};
pub use inventory_service::{
    BorrowOutcome, ReturnOutcome, ServiceDependencies, add_stock, borrow_book, list_available,
    return_book,
};
