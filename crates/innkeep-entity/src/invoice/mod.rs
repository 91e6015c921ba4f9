//! Invoice domain entities.

pub mod model;
pub mod status;

pub use model::{CreateInvoice, Invoice};
pub use status::InvoiceStatus;
