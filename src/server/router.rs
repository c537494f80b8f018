use axum::{
    routing::{delete, get, post, put},
    Router,
};
use utoipa::OpenApi;

use crate::server::{
    controller::{auth, hotel, reservation, room, wish},
    state::AppState,
};

/// OpenAPI document covering every API endpoint.
#[derive(OpenApi)]
#[openapi(
    paths(
        auth::register,
        auth::login,
        auth::logout,
        auth::current_user,
        hotel::list_hotels,
        hotel::get_hotel,
        hotel::list_owned_hotels,
        hotel::create_hotel,
        hotel::update_hotel,
        hotel::delete_hotel,
        room::list_rooms,
        room::create_room,
        room::update_room,
        room::delete_room,
        reservation::create_reservation,
        reservation::get_reservation,
        reservation::list_reservations,
        reservation::cancel_reservation,
        reservation::list_owner_reservations,
        wish::list_wishes,
        wish::add_wish,
        wish::remove_wish,
    ),
    tags(
        (name = "auth", description = "Account registration, login and sessions"),
        (name = "hotel", description = "Hotel browsing and CEO-side management"),
        (name = "room", description = "Room listing and CEO-side management"),
        (name = "reservation", description = "Booking, listing and cancellation"),
        (name = "wish", description = "Wishlist management"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/user", get(auth::current_user))
        .route("/api/hotels", get(hotel::list_hotels))
        .route("/api/hotels/{id}", get(hotel::get_hotel))
        .route("/api/hotels/{hotel_id}/rooms", get(room::list_rooms))
        .route(
            "/api/ceo/hotels",
            get(hotel::list_owned_hotels).post(hotel::create_hotel),
        )
        .route(
            "/api/ceo/hotels/{id}",
            put(hotel::update_hotel).delete(hotel::delete_hotel),
        )
        .route("/api/ceo/hotels/{hotel_id}/rooms", post(room::create_room))
        .route(
            "/api/ceo/rooms/{id}",
            put(room::update_room).delete(room::delete_room),
        )
        .route(
            "/api/reservations",
            get(reservation::list_reservations).post(reservation::create_reservation),
        )
        .route("/api/reservations/{id}", get(reservation::get_reservation))
        .route(
            "/api/reservations/{id}/cancel",
            post(reservation::cancel_reservation),
        )
        .route(
            "/api/ceo/reservations",
            get(reservation::list_owner_reservations),
        )
        .route("/api/wishes", get(wish::list_wishes))
        .route(
            "/api/wishes/{hotel_id}",
            post(wish::add_wish).delete(wish::remove_wish),
        )
}
