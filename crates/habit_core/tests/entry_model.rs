use chrono::NaiveDate;
use habit_core::{Entry, EntryValidationError, NewEntry};

#[test]
fn with_id_keeps_all_data_fields() {
    let draft = NewEntry::new(
        NaiveDate::from_ymd_opt(2021, 9, 30).unwrap(),
        "biking",
        4,
        "miles",
    )
    .unwrap();

    let entry = draft.clone().with_id(12);
    assert_eq!(entry.id, 12);
    assert_eq!(entry.to_new_entry(), draft);
}

#[test]
fn serialization_uses_canonical_date_form() {
    let entry = NewEntry::new(
        NaiveDate::from_ymd_opt(2023, 7, 3).unwrap(),
        "swimming",
        15,
        "miles",
    )
    .unwrap()
    .with_id(2);

    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["id"], 2);
    assert_eq!(json["date"], "07-03-2023");
    assert_eq!(json["habit_name"], "swimming");
    assert_eq!(json["quantity"], 15);
    assert_eq!(json["units"], "miles");

    let decoded: Entry = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, entry);
}

#[test]
fn deserialize_rejects_non_canonical_date() {
    let value = serde_json::json!({
        "id": 1,
        "date": "2023-07-03",
        "habit_name": "swimming",
        "quantity": 15,
        "units": "miles"
    });

    let err = serde_json::from_value::<Entry>(value).unwrap_err();
    assert!(err.to_string().contains("MM-DD-YYYY"), "unexpected error: {err}");
}

#[test]
fn validate_catches_mutated_entries() {
    let mut entry = NewEntry::new(
        NaiveDate::from_ymd_opt(2023, 9, 1).unwrap(),
        "drink water",
        7,
        "glasses",
    )
    .unwrap()
    .with_id(3);

    entry.quantity = -1;
    assert_eq!(
        entry.validate().unwrap_err(),
        EntryValidationError::NonPositiveQuantity(-1)
    );
}
