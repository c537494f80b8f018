//! Reservation data repository.
//!
//! Listing queries enrich each reservation with room and hotel names so
//! the API can render them without further lookups. The owner-facing
//! listing walks owner -> hotels -> rooms -> reservations and additionally
//! resolves guest names.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::reservation::{
    CreateReservationParams, Reservation, ReservationWithContext,
};
use entity::reservation::ReservationStatus;

pub struct ReservationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a reservation. New reservations always start out pending.
    pub async fn create(&self, params: CreateReservationParams) -> Result<Reservation, DbErr> {
        let entity = entity::reservation::ActiveModel {
            room_id: ActiveValue::Set(params.room_id),
            user_id: ActiveValue::Set(params.user_id),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            status: ActiveValue::Set(ReservationStatus::Pending),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Reservation::from_entity(entity))
    }

    /// Gets a reservation by id.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Reservation>, DbErr> {
        let entity = entity::prelude::Reservation::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Reservation::from_entity))
    }

    /// Gets a reservation together with its room and hotel names.
    pub async fn get_with_context(
        &self,
        id: i32,
    ) -> Result<Option<ReservationWithContext>, DbErr> {
        let Some((reservation, room)) = entity::prelude::Reservation::find_by_id(id)
            .find_also_related(entity::prelude::Room)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };
        let Some(room) = room else {
            return Ok(None);
        };

        let Some(hotel) = entity::prelude::Hotel::find_by_id(room.hotel_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(Some(ReservationWithContext {
            reservation: Reservation::from_entity(reservation),
            room_name: room.name,
            hotel_name: hotel.name,
            guest_name: None,
        }))
    }

    /// Gets a user's reservations, newest first, optionally filtered by
    /// status.
    pub async fn get_by_user(
        &self,
        user_id: i32,
        status: Option<ReservationStatus>,
    ) -> Result<Vec<ReservationWithContext>, DbErr> {
        let mut query = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::UserId.eq(user_id));
        if let Some(status) = status {
            query = query.filter(entity::reservation::Column::Status.eq(status));
        }
        let reservations = query
            .order_by_desc(entity::reservation::Column::Id)
            .all(self.db)
            .await?;

        self.enrich(reservations, false).await
    }

    /// Gets every reservation in hotels owned by a user, newest first,
    /// optionally filtered by status. Guest names are included.
    pub async fn get_for_owner(
        &self,
        owner_id: i32,
        status: Option<ReservationStatus>,
    ) -> Result<Vec<ReservationWithContext>, DbErr> {
        let hotel_ids: Vec<i32> = entity::prelude::Hotel::find()
            .filter(entity::hotel::Column::UserId.eq(owner_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|h| h.id)
            .collect();
        if hotel_ids.is_empty() {
            return Ok(Vec::new());
        }

        let room_ids: Vec<i32> = entity::prelude::Room::find()
            .filter(entity::room::Column::HotelId.is_in(hotel_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|r| r.id)
            .collect();
        if room_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut query = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::RoomId.is_in(room_ids));
        if let Some(status) = status {
            query = query.filter(entity::reservation::Column::Status.eq(status));
        }
        let reservations = query
            .order_by_desc(entity::reservation::Column::Id)
            .all(self.db)
            .await?;

        self.enrich(reservations, true).await
    }

    /// Sets a reservation's status.
    pub async fn update_status(
        &self,
        id: i32,
        status: ReservationStatus,
    ) -> Result<Reservation, DbErr> {
        let entity = entity::prelude::Reservation::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Reservation with id {} not found",
                id
            )))?;

        let mut active_model: entity::reservation::ActiveModel = entity.into();
        active_model.status = ActiveValue::Set(status);

        let entity = active_model.update(self.db).await?;

        Ok(Reservation::from_entity(entity))
    }

    /// Resolves room, hotel and optionally guest names for a batch of
    /// reservations, preserving their order.
    async fn enrich(
        &self,
        reservations: Vec<entity::reservation::Model>,
        with_guest_names: bool,
    ) -> Result<Vec<ReservationWithContext>, DbErr> {
        if reservations.is_empty() {
            return Ok(Vec::new());
        }

        let room_ids: Vec<i32> = reservations.iter().map(|r| r.room_id).collect();
        let rooms: HashMap<i32, entity::room::Model> = entity::prelude::Room::find()
            .filter(entity::room::Column::Id.is_in(room_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|r| (r.id, r))
            .collect();

        let hotel_ids: Vec<i32> = rooms.values().map(|r| r.hotel_id).collect();
        let hotels: HashMap<i32, String> = entity::prelude::Hotel::find()
            .filter(entity::hotel::Column::Id.is_in(hotel_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|h| (h.id, h.name))
            .collect();

        let guests: HashMap<i32, String> = if with_guest_names {
            let user_ids: Vec<i32> = reservations.iter().map(|r| r.user_id).collect();
            entity::prelude::User::find()
                .filter(entity::user::Column::Id.is_in(user_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|u| (u.id, u.name))
                .collect()
        } else {
            HashMap::new()
        };

        Ok(reservations
            .into_iter()
            .filter_map(|reservation| {
                let room = rooms.get(&reservation.room_id)?;
                let hotel_name = hotels.get(&room.hotel_id)?.clone();
                let guest_name = if with_guest_names {
                    guests.get(&reservation.user_id).cloned()
                } else {
                    None
                };
                Some(ReservationWithContext {
                    room_name: room.name.clone(),
                    hotel_name,
                    guest_name,
                    reservation: Reservation::from_entity(reservation),
                })
            })
            .collect())
    }
}
