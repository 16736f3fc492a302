//! Reservation ledger handlers.

use super::{
    AppState,
    error::ApiError,
    models::{CreateReservation, ReservationResponse, ReservationsQuery},
};
use crate::machine::domain::MachineId;
use crate::reservation::services::BookReservationRequest;
use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};

#[tracing::instrument(skip_all, fields(machine_id))]
pub(super) async fn list_reservations(
    State(state): State<AppState>,
    query: Result<Query<ReservationsQuery>, QueryRejection>,
) -> Result<Json<Vec<ReservationResponse>>, ApiError> {
    let Query(query) = query?;
    let reservations = match query.machine_id {
        Some(id) => {
            tracing::Span::current().record("machine_id", id);
            state.ledger.reservations_for(MachineId::new(id)).await?
        }
        None => state.ledger.list().await?,
    };
    Ok(Json(
        reservations.iter().map(ReservationResponse::from).collect(),
    ))
}

#[tracing::instrument(skip_all)]
pub(super) async fn create_reservation(
    State(state): State<AppState>,
    body: Result<Json<CreateReservation>, JsonRejection>,
) -> Result<Json<ReservationResponse>, ApiError> {
    let Json(payload) = body?;
    let request =
        BookReservationRequest::new(payload.machine_id, payload.timestamp, payload.customer);
    let reservation = state.ledger.book(request).await?;
    Ok(Json(ReservationResponse::from(&reservation)))
}
