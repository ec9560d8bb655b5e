//! Dated documents (invoices and receipts), their shared rendering capability
//! and the fixed sample catalog.

pub mod catalog;
pub mod display;
pub mod record;

pub use catalog::{sample_documents, sort_by_date};
pub use display::{format_amount, DisplayLocale, Displayable};
pub use record::{DocumentHeader, DocumentKind, DocumentRecord, Invoice, Receipt};
