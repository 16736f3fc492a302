//! Registry flows through a store.

use super::helpers::{memory_state, temp_data, state_for, TempData};
use rstest::rstest;
use washbook::{
    api::AppState,
    error::ErrorKind,
    machine::{
        domain::MachineId,
        services::{MachineSeed, RegisterMachineRequest},
    },
};

fn seeds() -> [MachineSeed; 3] {
    [
        MachineSeed {
            id: 1,
            capacity_kg: 7,
        },
        MachineSeed {
            id: 2,
            capacity_kg: 10,
        },
        MachineSeed {
            id: 3,
            capacity_kg: 15,
        },
    ]
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn seeded_registry_lists_sample_machines(memory_state: AppState) {
    memory_state
        .registry
        .seed_if_empty(&seeds())
        .await
        .expect("seeding should succeed");

    let capacities: Vec<u32> = memory_state
        .registry
        .list()
        .await
        .expect("listing should succeed")
        .iter()
        .map(|machine| machine.capacity().kilograms())
        .collect();

    assert_eq!(capacities, vec![7, 10, 15]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn seeding_skips_a_populated_registry(memory_state: AppState) {
    memory_state
        .registry
        .register(RegisterMachineRequest::new(5).with_id(8))
        .await
        .expect("registration should succeed");

    let written = memory_state
        .registry
        .seed_if_empty(&seeds())
        .await
        .expect("seeding should succeed");

    assert_eq!(written, 0);
    assert_eq!(memory_state.registry.list().await.expect("listing").len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn file_registry_rejects_duplicate_id(temp_data: TempData) {
    let state = state_for(&temp_data.open_store());
    state
        .registry
        .register(RegisterMachineRequest::new(7).with_id(1))
        .await
        .expect("first registration should succeed");

    let err = state
        .registry
        .register(RegisterMachineRequest::new(9).with_id(1))
        .await
        .expect_err("duplicate should fail");

    assert_eq!(err.kind(), ErrorKind::Conflict);
    let machine = state
        .registry
        .get(MachineId::new(1))
        .await
        .expect("lookup should succeed");
    assert_eq!(machine.capacity().kilograms(), 7);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn file_registry_seed_duplicates_write_nothing(temp_data: TempData) {
    let state = state_for(&temp_data.open_store());
    let duplicated = [
        MachineSeed {
            id: 4,
            capacity_kg: 7,
        },
        MachineSeed {
            id: 4,
            capacity_kg: 8,
        },
    ];

    let err = state
        .registry
        .seed_if_empty(&duplicated)
        .await
        .expect_err("duplicate seeds should fail");

    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert!(!temp_data.dir.path().join("machines.json").exists());
}
