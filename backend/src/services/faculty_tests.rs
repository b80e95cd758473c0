use super::*;
use crate::error::Error;
use crate::sources::LocalFacultySource;
use serde_json::{json, Value};

fn record(value: Value) -> FacultyRecord {
    serde_json::from_value(value).unwrap()
}

fn departments(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| id.to_string()).collect()
}

fn names(records: &[FacultyRecord]) -> Vec<&str> {
    records
        .iter()
        .map(|r| r.get("Name").and_then(Value::as_str).unwrap())
        .collect()
}

#[test]
fn test_encode_image() {
    assert_eq!(encode_image(b"hello"), "data:image/png;base64,aGVsbG8=");
    assert_eq!(encode_image(&[]), "data:image/png;base64,");
}

#[tokio::test]
async fn test_aggregate_preserves_department_order() {
    let source = LocalFacultySource::new()
        .with_department("A", vec![record(json!({"Name": "a1"})), record(json!({"Name": "a2"}))])
        .with_department("B", vec![record(json!({"Name": "b1"}))]);

    let records = aggregate_faculty(&source, &departments(&["A", "B"])).await.unwrap();
    assert_eq!(names(&records), vec!["a1", "a2", "b1"]);

    let records = aggregate_faculty(&source, &departments(&["B", "A"])).await.unwrap();
    assert_eq!(names(&records), vec!["b1", "a1", "a2"]);
}

#[tokio::test]
async fn test_aggregate_inlines_photos() {
    let bytes = vec![0x89, b'P', b'N', b'G', 13, 10];
    let source = LocalFacultySource::new()
        .with_department(
            "301",
            vec![
                record(json!({"Name": "with photo", "ImagePath": "/img/1.png"})),
                record(json!({"Name": "no path"})),
                record(json!({"Name": "empty path", "ImagePath": ""})),
                record(json!({"Name": "broken photo", "ImagePath": "/img/missing.png"})),
            ],
        )
        .with_image("/img/1.png", bytes.clone());

    let records = aggregate_faculty(&source, &departments(&["301"])).await.unwrap();
    let images: Vec<&str> = records
        .iter()
        .map(|r| r.get("ImagePath").and_then(Value::as_str).unwrap())
        .collect();

    assert!(images[0].starts_with(DATA_URI_PREFIX));
    let encoded = &images[0][DATA_URI_PREFIX.len()..];
    assert_eq!(B64.decode(encoded).unwrap(), bytes);
    assert_eq!(images[1], "");
    assert_eq!(images[2], "");
    assert_eq!(images[3], "");
}

#[tokio::test]
async fn test_aggregate_keeps_upstream_fields() {
    let source = LocalFacultySource::new().with_department(
        "301",
        vec![record(json!({"Name": "a", "Email": "a@example.edu", "Ext": 204}))],
    );

    let records = aggregate_faculty(&source, &departments(&["301"])).await.unwrap();
    assert_eq!(
        serde_json::to_value(&records[0]).unwrap(),
        json!({"Name": "a", "Email": "a@example.edu", "Ext": 204, "ImagePath": ""})
    );
}

#[tokio::test]
async fn test_aggregate_fails_when_any_department_fails() {
    let source = LocalFacultySource::new().with_department("301", vec![record(json!({"Name": "a"}))]);

    let err = aggregate_faculty(&source, &departments(&["301", "999"]))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Unavailable(_)));
}

#[tokio::test]
async fn test_aggregate_no_departments() {
    let source = LocalFacultySource::new();
    let records = aggregate_faculty(&source, &[]).await.unwrap();
    assert!(records.is_empty());
}
