//! File tables surviving a reopen.

use super::helpers::{at, state_for, temp_data, TempData};
use rstest::rstest;
use washbook::{
    error::ErrorKind,
    machine::{domain::MachineId, services::RegisterMachineRequest},
    reservation::{domain::Occupancy, services::BookReservationRequest},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn machines_and_reservations_survive_reopen(temp_data: TempData) {
    {
        let state = state_for(&temp_data.open_store());
        state
            .registry
            .register(RegisterMachineRequest::new(7).with_id(1))
            .await
            .expect("registration should succeed");
        state
            .ledger
            .book(BookReservationRequest::new(1, "2024-01-01T10:00:00.900", "Ana"))
            .await
            .expect("booking should succeed");
    }

    let reopened = state_for(&temp_data.open_store());

    let machine = reopened
        .registry
        .get(MachineId::new(1))
        .await
        .expect("machine should persist");
    assert_eq!(machine.capacity().kilograms(), 7);
    let status = reopened
        .ledger
        .status_at(MachineId::new(1), at("2024-01-01T10:00:59"))
        .await
        .expect("status should resolve");
    assert!(!status.is_available());
    assert_ne!(status, Occupancy::Available);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tables_use_flat_rows(temp_data: TempData) {
    let state = state_for(&temp_data.open_store());
    state
        .registry
        .register(RegisterMachineRequest::new(10).with_id(3))
        .await
        .expect("registration should succeed");
    state
        .ledger
        .book(BookReservationRequest::new(3, "2024-06-01 07:30", " Ben "))
        .await
        .expect("booking should succeed");

    let machines: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(temp_data.dir.path().join("machines.json"))
            .expect("read machines table"),
    )
    .expect("machines table is JSON");
    let reservations: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(temp_data.dir.path().join("reservations.json"))
            .expect("read reservations table"),
    )
    .expect("reservations table is JSON");

    assert_eq!(
        machines,
        serde_json::json!([{ "id": 3, "capacity_kg": 10 }])
    );
    assert_eq!(
        reservations,
        serde_json::json!([{
            "machine_id": 3,
            "timestamp": "2024-06-01T07:30:00",
            "customer": "Ben"
        }])
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rows_written_by_hand_are_read_back(temp_data: TempData) {
    std::fs::write(
        temp_data.dir.path().join("machines.json"),
        r#"[{"id": 5, "capacity_kg": 8}]"#,
    )
    .expect("write machines table");
    std::fs::write(
        temp_data.dir.path().join("reservations.json"),
        r#"[{"machine_id": 5, "timestamp": "2024-01-02T09:00:00", "customer": "Cy"}]"#,
    )
    .expect("write reservations table");

    let state = state_for(&temp_data.open_store());

    let status = state
        .ledger
        .status_at(MachineId::new(5), at("2024-01-02T09:00:10"))
        .await
        .expect("status should resolve");
    assert!(matches!(status, Occupancy::Occupied { ref customer } if customer.as_str() == "Cy"));
}

#[rstest]
#[case::malformed_timestamp(
    r#"[{"machine_id": 1, "timestamp": "soon", "customer": "Ana"}]"#
)]
#[case::blank_customer(
    r#"[{"machine_id": 1, "timestamp": "2024-01-02T09:00:00", "customer": "  "}]"#
)]
#[tokio::test(flavor = "multi_thread")]
async fn corrupt_reservation_rows_are_internal(temp_data: TempData, #[case] rows: &str) {
    std::fs::write(
        temp_data.dir.path().join("machines.json"),
        r#"[{"id": 1, "capacity_kg": 8}]"#,
    )
    .expect("write machines table");
    std::fs::write(temp_data.dir.path().join("reservations.json"), rows)
        .expect("write reservations table");
    let state = state_for(&temp_data.open_store());

    let status = state
        .ledger
        .status_at(MachineId::new(1), at("2024-01-02T09:00:00"))
        .await
        .expect_err("status should fail");
    let lookup = state
        .ledger
        .reservations_for(MachineId::new(1))
        .await
        .expect_err("lookup should fail");
    let booking = state
        .ledger
        .book(BookReservationRequest::new(1, "2024-01-03T09:00:00", "Ben"))
        .await
        .expect_err("booking should fail");

    assert_eq!(status.kind(), ErrorKind::Internal);
    assert_eq!(lookup.kind(), ErrorKind::Internal);
    assert_eq!(booking.kind(), ErrorKind::Internal);
    let on_disk = std::fs::read_to_string(temp_data.dir.path().join("reservations.json"))
        .expect("read reservations table");
    assert_eq!(on_disk, rows);
}
