//! Hotel factory for creating test hotel entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test hotels with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::hotel::HotelFactory;
///
/// let hotel = HotelFactory::new(&db, ceo.id)
///     .name("Harbor View")
///     .info(",ocean,breakfast,")
///     .build()
///     .await?;
/// ```
pub struct HotelFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    name: String,
    intro: String,
    info: String,
    postcode: String,
    address: String,
    contact_url: Option<String>,
}

impl<'a> HotelFactory<'a> {
    /// Creates a new HotelFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Hotel {id}"` where id is auto-incremented
    /// - intro: `"Test hotel intro"`
    /// - info: `",wifi,parking,"` (delimited tag string)
    /// - postcode / address: fixed test values
    /// - image paths 1-5 filled, 6-9 empty
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Owning CEO user ID
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            name: format!("Hotel {}", id),
            intro: "Test hotel intro".to_string(),
            info: ",wifi,parking,".to_string(),
            postcode: "04524".to_string(),
            address: format!("{} Test Street", id),
            contact_url: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn intro(mut self, intro: impl Into<String>) -> Self {
        self.intro = intro.into();
        self
    }

    /// Sets the raw delimited tag string stored in the `info` column.
    pub fn info(mut self, info: impl Into<String>) -> Self {
        self.info = info.into();
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn contact_url(mut self, contact_url: Option<String>) -> Self {
        self.contact_url = contact_url;
        self
    }

    /// Inserts the hotel into the database.
    ///
    /// # Returns
    /// - `Ok(entity::hotel::Model)` - The created hotel
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::hotel::Model, DbErr> {
        entity::hotel::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            name: ActiveValue::Set(self.name),
            intro: ActiveValue::Set(self.intro),
            info: ActiveValue::Set(self.info),
            postcode: ActiveValue::Set(self.postcode),
            address: ActiveValue::Set(self.address),
            img_path1: ActiveValue::Set("/img/1.jpg".to_string()),
            img_path2: ActiveValue::Set("/img/2.jpg".to_string()),
            img_path3: ActiveValue::Set("/img/3.jpg".to_string()),
            img_path4: ActiveValue::Set("/img/4.jpg".to_string()),
            img_path5: ActiveValue::Set("/img/5.jpg".to_string()),
            img_path6: ActiveValue::Set(None),
            img_path7: ActiveValue::Set(None),
            img_path8: ActiveValue::Set(None),
            img_path9: ActiveValue::Set(None),
            contact_url: ActiveValue::Set(self.contact_url),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a hotel with default values for the given owner.
pub async fn create_hotel(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::hotel::Model, DbErr> {
    HotelFactory::new(db, user_id).build().await
}
