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
        hotel::{CreateHotelDto, HotelDto, HotelListItemDto, PaginatedHotelsDto, UpdateHotelDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::hotel::{CreateHotelParams, UpdateHotelParams},
        service::hotel::HotelService,
        state::AppState,
    },
};

/// Tag for grouping hotel endpoints in OpenAPI documentation
pub static HOTEL_TAG: &str = "hotel";

#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    10
}

/// List hotels for public browsing.
///
/// Returns a page of hotels ordered by name. No authentication required.
///
/// # Returns
/// - `200 OK` - Page of hotels
/// - `400 Bad Request` - Zero page size
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/hotels",
    tag = HOTEL_TAG,
    params(
        ("page" = u64, Query, description = "Zero-based page number"),
        ("entries" = u64, Query, description = "Hotels per page, defaults to 10")
    ),
    responses(
        (status = 200, description = "Page of hotels", body = PaginatedHotelsDto),
        (status = 400, description = "Zero page size", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_hotels(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = HotelService::new(&state.db);

    let page = service.get_paginated(params.page, params.entries).await?;

    Ok(Json(page.into_dto()))
}

/// Get a hotel's detail page with its rooms.
///
/// No authentication required.
///
/// # Returns
/// - `200 OK` - Hotel with rooms
/// - `404 Not Found` - No hotel with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/hotels/{id}",
    tag = HOTEL_TAG,
    params(
        ("id" = i32, Path, description = "Hotel ID")
    ),
    responses(
        (status = 200, description = "Hotel with rooms", body = HotelDto),
        (status = 404, description = "Hotel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_hotel(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = HotelService::new(&state.db);

    let hotel = service.get_by_id(id).await?;

    Ok(Json(hotel.into_dto()))
}

/// List the hotels owned by the requesting CEO.
///
/// # Access Control
/// - `Ceo` - Only CEO accounts can manage hotels
///
/// # Returns
/// - `200 OK` - The CEO's hotels
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not a CEO account
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/ceo/hotels",
    tag = HOTEL_TAG,
    responses(
        (status = 200, description = "Owned hotels", body = [HotelListItemDto]),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a CEO account", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_owned_hotels(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Ceo])
        .await?;

    let service = HotelService::new(&state.db);

    let hotels = service.get_by_owner(user.id).await?;

    Ok(Json(
        hotels
            .into_iter()
            .map(|h| h.into_dto())
            .collect::<Vec<_>>(),
    ))
}

/// Create a hotel.
///
/// # Access Control
/// - `Ceo` - Only CEO accounts can create hotels
///
/// # Returns
/// - `201 Created` - Hotel created
/// - `400 Bad Request` - Image count outside 5 to 9
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not a CEO account
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/ceo/hotels",
    tag = HOTEL_TAG,
    request_body = CreateHotelDto,
    responses(
        (status = 201, description = "Hotel created", body = HotelDto),
        (status = 400, description = "Invalid hotel data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a CEO account", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_hotel(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateHotelDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Ceo])
        .await?;

    let service = HotelService::new(&state.db);

    let params = CreateHotelParams::from_dto(user.id, payload);
    let hotel = service.create(params).await?;

    // Freshly created hotels have no rooms yet.
    let detail = service.get_by_id(hotel.id).await?;

    Ok((StatusCode::CREATED, Json(detail.into_dto())))
}

/// Update an owned hotel.
///
/// # Access Control
/// - `Ceo` - Only the hotel's owner can update it
///
/// # Returns
/// - `200 OK` - Hotel updated
/// - `400 Bad Request` - Image count outside 5 to 9
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not a CEO account, or not this hotel's owner
/// - `404 Not Found` - No hotel with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/ceo/hotels/{id}",
    tag = HOTEL_TAG,
    params(
        ("id" = i32, Path, description = "Hotel ID")
    ),
    request_body = UpdateHotelDto,
    responses(
        (status = 200, description = "Hotel updated", body = HotelDto),
        (status = 400, description = "Invalid hotel data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the hotel's owner", body = ErrorDto),
        (status = 404, description = "Hotel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_hotel(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateHotelDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Ceo])
        .await?;

    let service = HotelService::new(&state.db);

    let params = UpdateHotelParams::from_dto(id, user.id, payload);
    service.update(params).await?;

    let detail = service.get_by_id(id).await?;

    Ok(Json(detail.into_dto()))
}

/// Delete an owned hotel and its rooms.
///
/// # Access Control
/// - `Ceo` - Only the hotel's owner can delete it
///
/// # Returns
/// - `204 No Content` - Hotel deleted
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not a CEO account, or not this hotel's owner
/// - `404 Not Found` - No hotel with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/ceo/hotels/{id}",
    tag = HOTEL_TAG,
    params(
        ("id" = i32, Path, description = "Hotel ID")
    ),
    responses(
        (status = 204, description = "Hotel deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the hotel's owner", body = ErrorDto),
        (status = 404, description = "Hotel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_hotel(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Ceo])
        .await?;

    let service = HotelService::new(&state.db);

    service.delete(id, user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
