use chrono::{Duration, NaiveDateTime};
use rust_decimal::Decimal;

use super::record::{DocumentRecord, Invoice, Receipt};

/// Builds the fixed four-document set, each one a day older than the last.
pub fn sample_documents(now: NaiveDateTime) -> [DocumentRecord; 4] {
    [
        Invoice::new("Invoice 1", now, Decimal::new(10050, 2)).into(),
        Receipt::new("Receipt 1", now - Duration::days(1), "Company A").into(),
        Invoice::new("Invoice 2", now - Duration::days(2), Decimal::new(20075, 2)).into(),
        Receipt::new("Receipt 2", now - Duration::days(3), "Company B").into(),
    ]
}

/// Orders documents from the oldest to the newest timestamp.
pub fn sort_by_date(documents: &mut [DocumentRecord]) {
    documents.sort_by_key(DocumentRecord::date);
}
