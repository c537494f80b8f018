use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        room::{CreateRoomDto, RoomDto, UpdateRoomDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::room::{CreateRoomParams, UpdateRoomParams},
        service::room::RoomService,
        state::AppState,
    },
};

/// Tag for grouping room endpoints in OpenAPI documentation
pub static ROOM_TAG: &str = "room";

/// List a hotel's rooms.
///
/// Rooms come back cheapest first. No authentication required.
///
/// # Returns
/// - `200 OK` - The hotel's rooms
/// - `404 Not Found` - No hotel with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/hotels/{hotel_id}/rooms",
    tag = ROOM_TAG,
    params(
        ("hotel_id" = i32, Path, description = "Hotel ID")
    ),
    responses(
        (status = 200, description = "The hotel's rooms", body = [RoomDto]),
        (status = 404, description = "Hotel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_rooms(
    State(state): State<AppState>,
    Path(hotel_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = RoomService::new(&state.db);

    let rooms = service.get_by_hotel(hotel_id).await?;

    Ok(Json(
        rooms.into_iter().map(|r| r.into_dto()).collect::<Vec<_>>(),
    ))
}

/// Create a room in an owned hotel.
///
/// # Access Control
/// - `Ceo` - Only the hotel's owner can add rooms
///
/// # Returns
/// - `201 Created` - Room created
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not a CEO account, or not this hotel's owner
/// - `404 Not Found` - No hotel with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/ceo/hotels/{hotel_id}/rooms",
    tag = ROOM_TAG,
    params(
        ("hotel_id" = i32, Path, description = "Hotel ID")
    ),
    request_body = CreateRoomDto,
    responses(
        (status = 201, description = "Room created", body = RoomDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the hotel's owner", body = ErrorDto),
        (status = 404, description = "Hotel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_room(
    State(state): State<AppState>,
    session: Session,
    Path(hotel_id): Path<i32>,
    Json(payload): Json<CreateRoomDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Ceo])
        .await?;

    let service = RoomService::new(&state.db);

    let params = CreateRoomParams::from_dto(hotel_id, payload);
    let room = service.create(user.id, params).await?;

    Ok((StatusCode::CREATED, Json(room.into_dto())))
}

/// Update a room in an owned hotel.
///
/// # Access Control
/// - `Ceo` - Only the room's hotel owner can update it
///
/// # Returns
/// - `200 OK` - Room updated
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not a CEO account, or not this hotel's owner
/// - `404 Not Found` - No room with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/ceo/rooms/{id}",
    tag = ROOM_TAG,
    params(
        ("id" = i32, Path, description = "Room ID")
    ),
    request_body = UpdateRoomDto,
    responses(
        (status = 200, description = "Room updated", body = RoomDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the hotel's owner", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_room(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateRoomDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Ceo])
        .await?;

    let service = RoomService::new(&state.db);

    let params = UpdateRoomParams::from_dto(id, payload);
    let room = service.update(user.id, params).await?;

    Ok(Json(room.into_dto()))
}

/// Delete a room in an owned hotel.
///
/// # Access Control
/// - `Ceo` - Only the room's hotel owner can delete it
///
/// # Returns
/// - `204 No Content` - Room deleted
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not a CEO account, or not this hotel's owner
/// - `404 Not Found` - No room with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/ceo/rooms/{id}",
    tag = ROOM_TAG,
    params(
        ("id" = i32, Path, description = "Room ID")
    ),
    responses(
        (status = 204, description = "Room deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the hotel's owner", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_room(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Ceo])
        .await?;

    let service = RoomService::new(&state.db);

    service.delete(user.id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
