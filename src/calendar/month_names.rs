/// Word appended after the year in the long form ("of the year").
pub const YEAR_SUFFIX: &str = "року";

const GENITIVE_MONTHS: [&str; 12] = [
    "січня",
    "лютого",
    "березня",
    "квітня",
    "травня",
    "червня",
    "липня",
    "серпня",
    "вересня",
    "жовтня",
    "листопада",
    "грудня",
];

/// Ukrainian month name in the genitive case, as used after a day number.
pub fn month_name_genitive(month: i32) -> Option<&'static str> {
    usize::try_from(month)
        .ok()
        .and_then(|m| m.checked_sub(1))
        .and_then(|idx| GENITIVE_MONTHS.get(idx).copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_every_month() {
        assert_eq!(month_name_genitive(1), Some("січня"));
        assert_eq!(month_name_genitive(9), Some("вересня"));
        assert_eq!(month_name_genitive(12), Some("грудня"));
    }

    #[test]
    fn rejects_out_of_table_values() {
        assert_eq!(month_name_genitive(0), None);
        assert_eq!(month_name_genitive(13), None);
        assert_eq!(month_name_genitive(-1), None);
    }
}
