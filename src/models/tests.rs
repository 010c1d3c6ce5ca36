use super::{Location, RawTable, Record, Status};

use std::str::FromStr;

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn create_record(doctor: Option<&str>, amount: &str) -> Result<Record> {
    Ok(Record {
        amount: Some(Decimal::from_str(amount)?),
        doctor: doctor.map(str::to_string),
        ..Record::default()
    })
}

#[test]
fn test_status_recognizes_buckets_with_decorations() {
    assert_eq!(Status::from_label("Pending"), Status::Pending);
    assert_eq!(Status::from_label("✓ Paid"), Status::Paid);
    assert_eq!(Status::from_label("⏳ Pending"), Status::Pending);
    assert_eq!(Status::from_label("📊 Projected "), Status::Projected);
    assert_eq!(Status::from_label("Pending ⏳"), Status::Pending);
    assert_eq!(Status::from_label("✓ Paid ✓"), Status::Paid);
    assert_eq!(Status::from_label("Auto-Logged"), Status::Other("Auto-Logged".to_string()));
    assert_eq!(Status::from_label("pending"), Status::Other("pending".to_string()));
}

#[test]
fn test_status_displays_its_label() {
    assert_eq!(Status::Projected.to_string(), "Projected");
    assert_eq!(Status::Other("Cancelled".to_string()).to_string(), "Cancelled");
}

#[test]
fn test_raw_table_from_grid_splits_header_row() {
    let grid = vec![
        vec!["Date".to_string(), "Amount".to_string()],
        vec!["18/11/2025".to_string(), "770".to_string()],
    ];
    let table = RawTable::from_grid(grid);

    assert_eq!(table.headers, vec!["Date", "Amount"]);
    assert_eq!(table.rows.len(), 1);
    assert!(RawTable::from_grid(Vec::new()).is_empty());
}

#[test]
fn test_record_month_membership_requires_a_date() -> Result<()> {
    let day = NaiveDate::from_ymd_opt(2025, 11, 30).ok_or_else(|| anyhow!("invalid date"))?;
    let mut record = create_record(None, "10")?;

    assert!(!record.is_in_month_of(day));

    record.date = NaiveDate::from_ymd_opt(2025, 11, 1);
    assert!(record.is_in_month_of(day));

    record.date = NaiveDate::from_ymd_opt(2024, 11, 1);
    assert!(!record.is_in_month_of(day));

    Ok(())
}

#[test]
fn test_location_filter_keeps_member_doctors_only() -> Result<()> {
    let kitchener = Location::new("Kitchener", ["Dr. Tripic"]);
    let records = vec![
        create_record(Some("Dr. Tripic"), "770")?,
        create_record(Some("Dr. Cartagena"), "900")?,
        create_record(Some("Dr. Tripic"), "840")?,
    ];

    let filtered = kitchener.filter(&records);

    assert_eq!(filtered.len(), 2);
    assert!(filtered.iter().all(|record| record.doctor.as_deref() == Some("Dr. Tripic")));

    Ok(())
}

#[test]
fn test_location_filter_is_idempotent() -> Result<()> {
    let location = Location::new("Waterloo", ["Dr. Cartagena", "Dr. Singh"]);
    let records = vec![
        create_record(Some("Dr. Tripic"), "1")?,
        create_record(Some("Dr. Singh"), "2")?,
        create_record(None, "3")?,
        create_record(Some("Dr. Cartagena"), "4")?,
    ];

    let once = location.filter(&records);
    let twice = location.filter(&once);

    assert_eq!(once, twice);

    Ok(())
}

#[test]
fn test_location_filter_fails_open_without_doctor_field() -> Result<()> {
    let location = Location::new("Kitchener", ["Dr. Tripic"]);
    let records = vec![create_record(None, "720")?, create_record(None, "660")?];

    assert_eq!(location.filter(&records), records);

    Ok(())
}
