use sea_orm::entity::prelude::*;

/// Hotel listing owned by a CEO user.
///
/// The `info` column stores the hotel's descriptive tags as a single
/// comma-delimited string; the domain layer exposes it as a tag list.
/// Image paths 1-5 are required, 6-9 are optional.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "hotel")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub intro: String,
    pub info: String,
    pub postcode: String,
    pub address: String,
    pub img_path1: String,
    pub img_path2: String,
    pub img_path3: String,
    pub img_path4: String,
    pub img_path5: String,
    pub img_path6: Option<String>,
    pub img_path7: Option<String>,
    pub img_path8: Option<String>,
    pub img_path9: Option<String>,
    pub contact_url: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::room::Entity")]
    Room,
    #[sea_orm(has_many = "super::wish::Entity")]
    Wish,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Room.def()
    }
}

impl Related<super::wish::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Wish.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
