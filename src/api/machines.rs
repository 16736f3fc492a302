//! Machine registry handlers.

use super::{
    AppState,
    error::ApiError,
    models::{CreateMachine, MachineResponse, UpdateMachine},
};
use crate::machine::{domain::MachineId, services::RegisterMachineRequest};
use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};

/// Extracts the `{id}` segment and records it on the handler span.
fn machine_id(path: Result<Path<u32>, PathRejection>) -> Result<MachineId, ApiError> {
    let Path(id) = path?;
    tracing::Span::current().record("machine_id", id);
    Ok(MachineId::new(id))
}

#[tracing::instrument(skip_all)]
pub(super) async fn list_machines(
    State(state): State<AppState>,
) -> Result<Json<Vec<MachineResponse>>, ApiError> {
    let machines = state.registry.list().await?;
    Ok(Json(machines.iter().map(MachineResponse::from).collect()))
}

#[tracing::instrument(skip_all, fields(machine_id))]
pub(super) async fn get_machine(
    State(state): State<AppState>,
    path: Result<Path<u32>, PathRejection>,
) -> Result<Json<MachineResponse>, ApiError> {
    let machine = state.registry.get(machine_id(path)?).await?;
    Ok(Json(MachineResponse::from(&machine)))
}

#[tracing::instrument(skip_all)]
pub(super) async fn create_machine(
    State(state): State<AppState>,
    body: Result<Json<CreateMachine>, JsonRejection>,
) -> Result<Json<MachineResponse>, ApiError> {
    let Json(payload) = body?;
    let mut request = RegisterMachineRequest::new(payload.capacity_kg);
    if let Some(id) = payload.id {
        request = request.with_id(id);
    }
    let machine = state.registry.register(request).await?;
    Ok(Json(MachineResponse::from(&machine)))
}

#[tracing::instrument(skip_all, fields(machine_id))]
pub(super) async fn update_machine(
    State(state): State<AppState>,
    path: Result<Path<u32>, PathRejection>,
    body: Result<Json<UpdateMachine>, JsonRejection>,
) -> Result<Json<MachineResponse>, ApiError> {
    let id = machine_id(path)?;
    let Json(payload) = body?;
    let machine = state
        .registry
        .update_capacity(id, payload.capacity_kg)
        .await?;
    Ok(Json(MachineResponse::from(&machine)))
}

#[tracing::instrument(skip_all, fields(machine_id))]
pub(super) async fn delete_machine(
    State(state): State<AppState>,
    path: Result<Path<u32>, PathRejection>,
) -> Result<Json<MachineResponse>, ApiError> {
    let machine = state.registry.remove(machine_id(path)?).await?;
    Ok(Json(MachineResponse::from(&machine)))
}
