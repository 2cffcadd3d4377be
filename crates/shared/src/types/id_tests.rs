use super::*;
use std::str::FromStr;
use uuid::Uuid;

#[test]
fn test_new_ids_are_distinct() {
    assert_ne!(TransactionId::new(), TransactionId::new());
}

#[test]
fn test_from_uuid_round_trips_inner() {
    let uuid = Uuid::new_v4();
    assert_eq!(TransactionId::from_uuid(uuid).into_inner(), uuid);
}

#[test]
fn test_display_matches_uuid() {
    let uuid = Uuid::new_v4();
    assert_eq!(TransactionId::from_uuid(uuid).to_string(), uuid.to_string());
}

#[test]
fn test_from_str_trims_whitespace() {
    let uuid = Uuid::new_v4();
    let id = TransactionId::from_str(&format!("  {uuid} ")).unwrap();
    assert_eq!(id.into_inner(), uuid);
}

#[test]
fn test_from_str_rejects_garbage() {
    assert!(TransactionId::from_str("12").is_err());
}

#[test]
fn test_serializes_transparently() {
    let uuid = Uuid::new_v4();
    let json = serde_json::to_string(&TransactionId::from_uuid(uuid)).unwrap();
    assert_eq!(json, format!("\"{uuid}\""));
}
