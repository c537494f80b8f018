use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, hotel::HotelListItemDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, service::wish::WishService, state::AppState,
    },
};

/// Tag for grouping wishlist endpoints in OpenAPI documentation
pub static WISH_TAG: &str = "wish";

/// List the requesting user's wished hotels.
///
/// # Returns
/// - `200 OK` - Wished hotels, most recently added first
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/wishes",
    tag = WISH_TAG,
    responses(
        (status = 200, description = "Wished hotels", body = [HotelListItemDto]),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_wishes(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = WishService::new(&state.db);

    let hotels = service.list(user.id).await?;

    Ok(Json(
        hotels
            .into_iter()
            .map(|h| h.into_dto())
            .collect::<Vec<_>>(),
    ))
}

/// Add a hotel to the wishlist.
///
/// # Returns
/// - `201 Created` - Hotel added
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - No hotel with that id
/// - `409 Conflict` - Hotel already on the wishlist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/wishes/{hotel_id}",
    tag = WISH_TAG,
    params(
        ("hotel_id" = i32, Path, description = "Hotel ID")
    ),
    responses(
        (status = 201, description = "Hotel added to wishlist"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Hotel not found", body = ErrorDto),
        (status = 409, description = "Hotel already on the wishlist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_wish(
    State(state): State<AppState>,
    session: Session,
    Path(hotel_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = WishService::new(&state.db);

    service.add(user.id, hotel_id).await?;

    Ok(StatusCode::CREATED)
}

/// Remove a hotel from the wishlist.
///
/// # Returns
/// - `204 No Content` - Hotel removed
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Hotel was not on the wishlist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/wishes/{hotel_id}",
    tag = WISH_TAG,
    params(
        ("hotel_id" = i32, Path, description = "Hotel ID")
    ),
    responses(
        (status = 204, description = "Hotel removed from wishlist"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Hotel not on the wishlist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_wish(
    State(state): State<AppState>,
    session: Session,
    Path(hotel_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = WishService::new(&state.db);

    service.remove(user.id, hotel_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
