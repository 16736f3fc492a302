//! Occupancy handler.

use super::{
    AppState,
    error::ApiError,
    models::{StatusQuery, StatusResponse},
};
use crate::machine::domain::MachineId;
use crate::reservation::{domain::BookingTime, services::ReservationLedgerError};
use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
};

#[tracing::instrument(skip_all, fields(machine_id))]
pub(super) async fn machine_status(
    State(state): State<AppState>,
    path: Result<Path<u32>, PathRejection>,
    query: Result<Query<StatusQuery>, QueryRejection>,
) -> Result<Json<StatusResponse>, ApiError> {
    let Path(machine_id) = path?;
    let Query(query) = query?;
    tracing::Span::current().record("machine_id", machine_id);

    let id = MachineId::new(machine_id);
    let occupancy = match query.at.as_deref() {
        Some(raw) => {
            let instant = BookingTime::parse(raw).map_err(ReservationLedgerError::from)?;
            state.ledger.status_at(id, instant.as_naive()).await?
        }
        None => state.ledger.status_now(id).await?,
    };
    Ok(Json(StatusResponse::from(occupancy)))
}
