use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::display::{format_amount, DisplayLocale, Displayable};

/// Fields every document carries regardless of its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentHeader {
    pub id: Uuid,
    pub title: String,
    pub date: NaiveDateTime,
}

impl DocumentHeader {
    pub fn new(title: impl Into<String>, date: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            date,
        }
    }

    /// `Title:` and `Date:` lines, each newline terminated.
    pub fn render(&self, locale: &DisplayLocale) -> String {
        format!(
            "Title: {}\nDate: {}\n",
            self.title,
            locale.format_datetime(self.date)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoice {
    pub header: DocumentHeader,
    pub amount: Decimal,
}

impl Invoice {
    pub fn new(title: impl Into<String>, date: NaiveDateTime, amount: Decimal) -> Self {
        Self {
            header: DocumentHeader::new(title, date),
            amount,
        }
    }
}

impl Displayable for Invoice {
    fn header(&self) -> &DocumentHeader {
        &self.header
    }

    fn show(&self, locale: &DisplayLocale) -> String {
        let mut out = self.header.render(locale);
        out.push_str(&format!("Amount: {}\n", format_amount(locale, self.amount)));
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub header: DocumentHeader,
    pub issuer: String,
}

impl Receipt {
    pub fn new(title: impl Into<String>, date: NaiveDateTime, issuer: impl Into<String>) -> Self {
        Self {
            header: DocumentHeader::new(title, date),
            issuer: issuer.into(),
        }
    }
}

impl Displayable for Receipt {
    fn header(&self) -> &DocumentHeader {
        &self.header
    }

    fn show(&self, locale: &DisplayLocale) -> String {
        let mut out = self.header.render(locale);
        out.push_str(&format!("Issuer: {}\n", self.issuer));
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Invoice,
    Receipt,
}

/// A document of one of the two supported kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentRecord {
    Invoice(Invoice),
    Receipt(Receipt),
}

impl DocumentRecord {
    pub fn kind(&self) -> DocumentKind {
        match self {
            DocumentRecord::Invoice(_) => DocumentKind::Invoice,
            DocumentRecord::Receipt(_) => DocumentKind::Receipt,
        }
    }

    pub fn title(&self) -> &str {
        &self.header().title
    }

    pub fn date(&self) -> NaiveDateTime {
        self.header().date
    }
}

impl Displayable for DocumentRecord {
    fn header(&self) -> &DocumentHeader {
        match self {
            DocumentRecord::Invoice(invoice) => invoice.header(),
            DocumentRecord::Receipt(receipt) => receipt.header(),
        }
    }

    fn show(&self, locale: &DisplayLocale) -> String {
        match self {
            DocumentRecord::Invoice(invoice) => invoice.show(locale),
            DocumentRecord::Receipt(receipt) => receipt.show(locale),
        }
    }
}

impl From<Invoice> for DocumentRecord {
    fn from(invoice: Invoice) -> Self {
        DocumentRecord::Invoice(invoice)
    }
}

impl From<Receipt> for DocumentRecord {
    fn from(receipt: Receipt) -> Self {
        DocumentRecord::Receipt(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .unwrap()
    }

    #[test]
    fn header_lines_come_first() {
        let record: DocumentRecord = Receipt::new("Receipt 9", noon(), "Company Z").into();
        let text = record.show(&DisplayLocale::default());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "Title: Receipt 9",
                "Date: 01.05.2024 12:00:00",
                "Issuer: Company Z"
            ]
        );
    }

    #[test]
    fn record_exposes_kind_and_shared_fields() {
        let record: DocumentRecord = Invoice::new("Invoice 9", noon(), dec!(1.5)).into();
        assert_eq!(record.kind(), DocumentKind::Invoice);
        assert_eq!(record.title(), "Invoice 9");
        assert_eq!(record.date(), noon());
    }

    #[test]
    fn every_header_gets_a_distinct_id() {
        let a = DocumentHeader::new("A", noon());
        let b = DocumentHeader::new("A", noon());
        assert_ne!(a.id, b.id);
    }
}
