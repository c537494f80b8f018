//! Hotel data repository.
//!
//! Tag lists are encoded into the delimited `info` column on the way in and
//! decoded on the way out; the nine image columns are mapped from and to the
//! ordered image list. Callers guarantee the image list holds five to nine
//! entries.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::hotel::{
    tags_to_delimited, CreateHotelParams, Hotel, HotelListItem, HotelWithRooms, UpdateHotelParams,
};
use crate::server::model::room::Room;

pub struct HotelRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HotelRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new hotel for the given owner.
    pub async fn create(&self, params: CreateHotelParams) -> Result<Hotel, DbErr> {
        let mut images = params.images.into_iter();

        let entity = entity::hotel::ActiveModel {
            user_id: ActiveValue::Set(params.owner_id),
            name: ActiveValue::Set(params.name),
            intro: ActiveValue::Set(params.intro),
            info: ActiveValue::Set(tags_to_delimited(&params.tags)),
            postcode: ActiveValue::Set(params.postcode),
            address: ActiveValue::Set(params.address),
            img_path1: ActiveValue::Set(images.next().unwrap_or_default()),
            img_path2: ActiveValue::Set(images.next().unwrap_or_default()),
            img_path3: ActiveValue::Set(images.next().unwrap_or_default()),
            img_path4: ActiveValue::Set(images.next().unwrap_or_default()),
            img_path5: ActiveValue::Set(images.next().unwrap_or_default()),
            img_path6: ActiveValue::Set(images.next()),
            img_path7: ActiveValue::Set(images.next()),
            img_path8: ActiveValue::Set(images.next()),
            img_path9: ActiveValue::Set(images.next()),
            contact_url: ActiveValue::Set(params.contact_url),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Hotel::from_entity(entity))
    }

    /// Gets a hotel by id.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Hotel>, DbErr> {
        let entity = entity::prelude::Hotel::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Hotel::from_entity))
    }

    /// Gets a hotel by id together with its rooms.
    pub async fn get_with_rooms(&self, id: i32) -> Result<Option<HotelWithRooms>, DbErr> {
        let Some(entity) = entity::prelude::Hotel::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let rooms = entity::prelude::Room::find()
            .filter(entity::room::Column::HotelId.eq(id))
            .order_by_asc(entity::room::Column::Price)
            .all(self.db)
            .await?;

        Ok(Some(HotelWithRooms {
            hotel: Hotel::from_entity(entity),
            rooms: rooms.into_iter().map(Room::from_entity).collect(),
        }))
    }

    /// Gets a page of hotels ordered by name.
    ///
    /// # Returns
    /// - `Ok((hotels, total))` - Page contents and the total hotel count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<HotelListItem>, u64), DbErr> {
        let paginator = entity::prelude::Hotel::find()
            .order_by_asc(entity::hotel::Column::Name)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let hotels = paginator.fetch_page(page).await?;

        Ok((
            hotels
                .into_iter()
                .map(|h| Hotel::from_entity(h).into_list_item())
                .collect(),
            total,
        ))
    }

    /// Gets all hotels owned by a user, ordered by name.
    pub async fn get_by_owner(&self, owner_id: i32) -> Result<Vec<HotelListItem>, DbErr> {
        let hotels = entity::prelude::Hotel::find()
            .filter(entity::hotel::Column::UserId.eq(owner_id))
            .order_by_asc(entity::hotel::Column::Name)
            .all(self.db)
            .await?;

        Ok(hotels
            .into_iter()
            .map(|h| Hotel::from_entity(h).into_list_item())
            .collect())
    }

    /// Updates a hotel's descriptive fields and image set.
    pub async fn update(&self, params: UpdateHotelParams) -> Result<Hotel, DbErr> {
        let entity = entity::prelude::Hotel::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Hotel with id {} not found",
                params.id
            )))?;

        let mut images = params.images.into_iter();

        let mut active_model: entity::hotel::ActiveModel = entity.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.intro = ActiveValue::Set(params.intro);
        active_model.info = ActiveValue::Set(tags_to_delimited(&params.tags));
        active_model.postcode = ActiveValue::Set(params.postcode);
        active_model.address = ActiveValue::Set(params.address);
        active_model.img_path1 = ActiveValue::Set(images.next().unwrap_or_default());
        active_model.img_path2 = ActiveValue::Set(images.next().unwrap_or_default());
        active_model.img_path3 = ActiveValue::Set(images.next().unwrap_or_default());
        active_model.img_path4 = ActiveValue::Set(images.next().unwrap_or_default());
        active_model.img_path5 = ActiveValue::Set(images.next().unwrap_or_default());
        active_model.img_path6 = ActiveValue::Set(images.next());
        active_model.img_path7 = ActiveValue::Set(images.next());
        active_model.img_path8 = ActiveValue::Set(images.next());
        active_model.img_path9 = ActiveValue::Set(images.next());
        active_model.contact_url = ActiveValue::Set(params.contact_url);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Hotel::from_entity(entity))
    }

    /// Deletes a hotel. Rooms are removed by the cascading foreign key.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Hotel::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    /// Checks if a hotel exists and is owned by the given user.
    pub async fn exists_with_owner(&self, id: i32, owner_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Hotel::find()
            .filter(entity::hotel::Column::Id.eq(id))
            .filter(entity::hotel::Column::UserId.eq(owner_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
