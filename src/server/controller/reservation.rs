use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        reservation::{CreateReservationDto, ReservationCreatedDto, ReservationDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::reservation::{parse_status, CreateReservationParams},
        service::reservation::ReservationService,
        state::AppState,
    },
};

/// Tag for grouping reservation endpoints in OpenAPI documentation
pub static RESERVATION_TAG: &str = "reservation";

#[derive(Deserialize)]
pub struct StatusFilter {
    /// Optional status filter: "PENDING", "CANCELLED" or "COMPLETED".
    #[serde(default)]
    pub status: Option<String>,
}

impl StatusFilter {
    fn parse(&self) -> Result<Option<entity::reservation::ReservationStatus>, AppError> {
        self.status.as_deref().map(parse_status).transpose()
    }
}

/// Book a room.
///
/// The stay must start today or later and end after it starts. The new
/// reservation begins in the PENDING state.
///
/// # Returns
/// - `201 Created` - Reservation created
/// - `400 Bad Request` - Invalid date range
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - No room with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/reservations",
    tag = RESERVATION_TAG,
    request_body = CreateReservationDto,
    responses(
        (status = 201, description = "Reservation created", body = ReservationCreatedDto),
        (status = 400, description = "Invalid date range", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = ReservationService::new(&state.db);

    let reservation = service
        .create(CreateReservationParams {
            room_id: payload.room_id,
            user_id: user.id,
            start_date: payload.start_date,
            end_date: payload.end_date,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ReservationCreatedDto {
            id: reservation.id,
        }),
    ))
}

/// Get an own reservation's detail.
///
/// Only the booking user can read a reservation, and only while it is
/// still pending and not past its end date.
///
/// # Returns
/// - `200 OK` - Reservation detail
/// - `400 Bad Request` - Reservation not pending, or expired
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Booked by another user
/// - `404 Not Found` - No reservation with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/reservations/{id}",
    tag = RESERVATION_TAG,
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Reservation detail", body = ReservationDto),
        (status = 400, description = "Reservation not pending or expired", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Booked by another user", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reservation(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = ReservationService::new(&state.db);

    let context = service.get_detail(user.id, id).await?;

    Ok(Json(context.into_dto()))
}

/// List the requesting user's reservations.
///
/// # Returns
/// - `200 OK` - The user's reservations, newest first
/// - `400 Bad Request` - Unknown status filter value
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/reservations",
    tag = RESERVATION_TAG,
    params(
        ("status" = Option<String>, Query, description = "Optional status filter")
    ),
    responses(
        (status = 200, description = "The user's reservations", body = [ReservationDto]),
        (status = 400, description = "Unknown status value", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_reservations(
    State(state): State<AppState>,
    session: Session,
    Query(filter): Query<StatusFilter>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = ReservationService::new(&state.db);

    let reservations = service.list_for_user(user.id, filter.parse()?).await?;

    Ok(Json(
        reservations
            .into_iter()
            .map(|r| r.into_dto())
            .collect::<Vec<_>>(),
    ))
}

/// Cancel an own pending reservation.
///
/// # Returns
/// - `200 OK` - Reservation cancelled
/// - `400 Bad Request` - Reservation is not pending
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Booked by another user
/// - `404 Not Found` - No reservation with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/reservations/{id}/cancel",
    tag = RESERVATION_TAG,
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Reservation cancelled", body = ReservationCreatedDto),
        (status = 400, description = "Reservation is not pending", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Booked by another user", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_reservation(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = ReservationService::new(&state.db);

    let cancelled = service.cancel(user.id, id).await?;

    Ok(Json(ReservationCreatedDto { id: cancelled.id }))
}

/// List reservations across the requesting CEO's hotels.
///
/// Includes the booking user's name for each reservation.
///
/// # Access Control
/// - `Ceo` - Only CEO accounts can list incoming reservations
///
/// # Returns
/// - `200 OK` - Reservations in the CEO's hotels, newest first
/// - `400 Bad Request` - Unknown status filter value
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not a CEO account
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/ceo/reservations",
    tag = RESERVATION_TAG,
    params(
        ("status" = Option<String>, Query, description = "Optional status filter")
    ),
    responses(
        (status = 200, description = "Reservations in owned hotels", body = [ReservationDto]),
        (status = 400, description = "Unknown status value", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a CEO account", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_owner_reservations(
    State(state): State<AppState>,
    session: Session,
    Query(filter): Query<StatusFilter>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Ceo])
        .await?;

    let service = ReservationService::new(&state.db);

    let reservations = service.list_for_owner(user.id, filter.parse()?).await?;

    Ok(Json(
        reservations
            .into_iter()
            .map(|r| r.into_dto())
            .collect::<Vec<_>>(),
    ))
}
