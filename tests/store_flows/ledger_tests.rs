//! Ledger flows through a store.

use super::helpers::{at, memory_state, state_for, temp_data, TempData};
use rstest::rstest;
use washbook::{
    api::AppState,
    error::ErrorKind,
    machine::{domain::MachineId, services::RegisterMachineRequest},
    reservation::{domain::Occupancy, services::BookReservationRequest},
};

async fn register(state: &AppState, id: u32) {
    state
        .registry
        .register(RegisterMachineRequest::new(7).with_id(id))
        .await
        .expect("registration should succeed");
}

async fn assert_booking_flow(state: AppState) {
    register(&state, 1).await;
    state
        .ledger
        .book(BookReservationRequest::new(1, "2024-01-01T10:00:00", "Ana"))
        .await
        .expect("booking should succeed");

    let conflict = state
        .ledger
        .book(BookReservationRequest::new(1, "2024-01-01T10:00:00", "Ben"))
        .await
        .expect_err("double booking should fail");
    assert_eq!(conflict.kind(), ErrorKind::Conflict);

    let during = state
        .ledger
        .status_at(MachineId::new(1), at("2024-01-01T10:00:30"))
        .await
        .expect("status should resolve");
    assert!(matches!(during, Occupancy::Occupied { ref customer } if customer.as_str() == "Ana"));

    let after = state
        .ledger
        .status_at(MachineId::new(1), at("2024-01-01T10:01:00"))
        .await
        .expect("status should resolve");
    assert_eq!(after, Occupancy::Available);

    let reservations = state
        .ledger
        .reservations_for(MachineId::new(1))
        .await
        .expect("lookup should succeed");
    assert_eq!(reservations.len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn in_memory_booking_flow(memory_state: AppState) {
    assert_booking_flow(memory_state).await;
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn file_backed_booking_flow(temp_data: TempData) {
    assert_booking_flow(state_for(&temp_data.open_store())).await;
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn removed_machine_keeps_its_reservations(memory_state: AppState) {
    register(&memory_state, 2).await;
    memory_state
        .ledger
        .book(BookReservationRequest::new(2, "2024-03-01T08:00", "Ana"))
        .await
        .expect("booking should succeed");

    memory_state
        .registry
        .remove(MachineId::new(2))
        .await
        .expect("removal should succeed");

    let reservations = memory_state
        .ledger
        .reservations_for(MachineId::new(2))
        .await
        .expect("lookup should succeed");
    assert_eq!(reservations.len(), 1);

    let err = memory_state
        .ledger
        .book(BookReservationRequest::new(2, "2024-03-01T09:00", "Ben"))
        .await
        .expect_err("booking a removed machine should fail");
    assert_eq!(err.kind(), ErrorKind::NotFound);
}
