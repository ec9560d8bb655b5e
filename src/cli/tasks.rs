use std::io::{BufRead, Write};

use chrono::NaiveDateTime;

use super::io::{parse_date_fields, parse_int, LineReader};
use super::output::{MessageKind, Styler};
use super::strings;
use crate::calendar::{max_day_gap, sort_chronologically, CalendarDate};
use crate::document::{
    sample_documents, sort_by_date, DisplayLocale, Displayable, DocumentRecord,
};
use crate::errors::CliError;

/// Upper bound on the up-front reservation; the count is user input.
const MAX_PREALLOCATED_DATES: usize = 1024;

/// What the date task computed, for callers that want more than the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateReport {
    pub sorted: Vec<CalendarDate>,
    pub max_gap_days: i64,
}

/// Reads a count and that many dates, prints them in ascending order and the
/// largest day gap between any two of them.
///
/// The first out-of-range field aborts the task before anything is sorted.
pub fn run_date_task<R, W>(
    input: &mut LineReader<R>,
    out: &mut W,
    styler: &Styler,
) -> Result<DateReport, CliError>
where
    R: BufRead,
    W: Write,
{
    writeln!(out, "{}", styler.paint(MessageKind::Prompt, strings::ASK_DATE_COUNT))?;
    let count: usize = parse_int(&input.next_line()?)?;
    tracing::debug!(count, "date task started");

    let mut dates = Vec::with_capacity(count.min(MAX_PREALLOCATED_DATES));
    for index in 1..=count {
        writeln!(out, "{}", styler.paint(MessageKind::Prompt, strings::ask_date(index)))?;
        let (day, month, year) = parse_date_fields(&input.next_line()?)?;
        dates.push(CalendarDate::new(day, month, year)?);
    }

    let sorted = sort_chronologically(&dates)?;
    writeln!(out, "{}", styler.paint(MessageKind::Heading, strings::SORTED_DATES))?;
    for date in &sorted {
        writeln!(out, "{}", date.short_form())?;
    }

    let max_gap_days = max_day_gap(&dates)?;
    writeln!(out, "{}", strings::max_gap_line(max_gap_days))?;

    Ok(DateReport {
        sorted,
        max_gap_days,
    })
}

/// Builds the sample documents around `now`, sorts them by date and shows
/// each one followed by a blank line.
pub fn run_document_task<W: Write>(
    out: &mut W,
    styler: &Styler,
    locale: &DisplayLocale,
    now: NaiveDateTime,
) -> Result<Vec<DocumentRecord>, CliError> {
    let mut documents = sample_documents(now);
    sort_by_date(&mut documents);
    tracing::debug!(count = documents.len(), %now, "documents sorted");

    writeln!(out, "{}", styler.paint(MessageKind::Heading, strings::SORTED_DOCUMENTS))?;
    for document in &documents {
        write!(out, "{}", document.show(locale))?;
        writeln!(out)?;
    }
    Ok(Vec::from(documents))
}
