//! Literal UI text. The wording is data: output-matching callers rely on it
//! byte for byte.

pub const MENU_TITLE: &str = "Виберіть завдання для виконання:";
pub const MENU_DATES: &str = "1. Опрацювання дат";
pub const MENU_DOCUMENTS: &str = "2. Робота з документами";
pub const INVALID_CHOICE: &str = "Невірний вибір завдання.";

pub const ASK_DATE_COUNT: &str = "Введіть кількість дат:";
pub const SORTED_DATES: &str = "Дати впорядковані за зростанням:";
pub const MAX_GAP_LABEL: &str = "Найбільша кількість днів між датами:";

pub const SORTED_DOCUMENTS: &str = "Sorted Array:";

pub const ERROR_PREFIX: &str = "Помилка:";

/// Prompt for the `index`-th date, counting from one.
pub fn ask_date(index: usize) -> String {
    format!("Введіть дату {index} (день місяць рік через пробіл):")
}

pub fn max_gap_line(days: i64) -> String {
    format!("{MAX_GAP_LABEL} {days}")
}
