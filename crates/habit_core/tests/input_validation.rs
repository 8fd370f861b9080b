use chrono::NaiveDate;
use habit_core::format_date;
use habit_core::input::{
    parse_date, parse_positive_int, read_date, read_edit_field, read_entry_id, read_non_blank,
    read_quantity, require_non_blank, sanitize_date, sanitize_quantity, EditField, Prompted,
    Prompter,
};
use std::collections::{HashSet, VecDeque};

/// Feeds canned lines and records everything said to the operator.
struct ScriptedPrompter {
    lines: VecDeque<String>,
    said: Vec<String>,
}

impl ScriptedPrompter {
    fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|line| line.to_string()).collect(),
            said: Vec::new(),
        }
    }

    fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn say(&mut self, message: &str) {
        self.said.push(message.to_string());
    }

    fn read_line(&mut self) -> Option<String> {
        self.lines.pop_front()
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn both_layouts_normalize_to_month_first_canonical_form() {
    let month_first = parse_date("08-01-2023").unwrap();
    let day_first = parse_date("25-12-2023").unwrap();

    assert_eq!(format_date(month_first), "08-01-2023");
    assert_eq!(format_date(day_first), "12-25-2023");
    assert!(parse_date("01-08-2023").is_some());
    assert!(parse_date("2023-08-01").is_none());
}

#[test]
fn sanitize_date_reprompts_until_valid() {
    let mut prompter = ScriptedPrompter::new(&["", "01-08-2023"]);

    let result = sanitize_date(&mut prompter, "2023-08-01".to_string());

    assert_eq!(result, Prompted::Value(date(2023, 1, 8)));
    assert_eq!(prompter.remaining(), 0);
    assert!(prompter.said.len() >= 3);
}

#[test]
fn sanitize_date_honors_sentinel_in_retry_loop() {
    let mut prompter = ScriptedPrompter::new(&["e", "08-01-2023"]);

    let result = sanitize_date(&mut prompter, "not a date".to_string());

    assert_eq!(result, Prompted::Cancelled);
    assert_eq!(prompter.remaining(), 1);
}

#[test]
fn positive_int_parsing() {
    assert_eq!(parse_positive_int("0"), None);
    assert_eq!(parse_positive_int("-5"), None);
    assert_eq!(parse_positive_int("abc"), None);
    assert_eq!(parse_positive_int("27"), Some(27));
}

#[test]
fn sanitize_quantity_retries_past_invalid_values() {
    let mut prompter = ScriptedPrompter::new(&["-5", "abc", "27"]);

    let result = sanitize_quantity(&mut prompter, "0".to_string());

    assert_eq!(result, Prompted::Value(27));
    assert_eq!(prompter.said.len(), 3);
}

#[test]
fn read_quantity_cancels_on_sentinel_or_end_of_input() {
    let mut prompter = ScriptedPrompter::new(&["E"]);
    assert!(read_quantity(&mut prompter, "Quantity?").is_cancelled());

    let mut prompter = ScriptedPrompter::new(&["x"]);
    assert!(read_quantity(&mut prompter, "Quantity?").is_cancelled());
}

#[test]
fn require_non_blank_does_not_interpret_sentinel() {
    let mut prompter = ScriptedPrompter::new(&["   ", "E"]);

    let result = require_non_blank(&mut prompter, Some(String::new()));

    assert_eq!(result, Prompted::Value("E".to_string()));
}

#[test]
fn read_non_blank_layers_sentinel_check() {
    let mut prompter = ScriptedPrompter::new(&["", "e"]);
    assert!(read_non_blank(&mut prompter, "Name?").is_cancelled());

    let mut prompter = ScriptedPrompter::new(&["  swimming  "]);
    assert_eq!(
        read_non_blank(&mut prompter, "Name?"),
        Prompted::Value("swimming".to_string())
    );
    assert_eq!(prompter.said, vec!["Name?".to_string()]);
}

#[test]
fn read_date_cancels_on_first_answer() {
    let mut prompter = ScriptedPrompter::new(&["E", "08-01-2023"]);

    assert!(read_date(&mut prompter, "Date?").is_cancelled());
    assert_eq!(prompter.remaining(), 1);
}

#[test]
fn edit_field_accepts_single_digit_or_sentinel() {
    let mut prompter = ScriptedPrompter::new(&["5", "01", "2"]);
    assert_eq!(
        read_edit_field(&mut prompter, "Field?"),
        Prompted::Value(EditField::Quantity)
    );

    let mut prompter = ScriptedPrompter::new(&["9", "E"]);
    assert!(read_edit_field(&mut prompter, "Field?").is_cancelled());
}

#[test]
fn entry_id_must_be_known() {
    let known: HashSet<i64> = [3, 7].into_iter().collect();

    let mut prompter = ScriptedPrompter::new(&["4", "seven", "7"]);
    assert_eq!(
        read_entry_id(&mut prompter, "Id?", &known),
        Prompted::Value(7)
    );

    let mut prompter = ScriptedPrompter::new(&["4", "e"]);
    assert!(read_entry_id(&mut prompter, "Id?", &known).is_cancelled());
}
