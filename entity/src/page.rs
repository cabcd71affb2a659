use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pages")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    #[sea_orm(column_name = "urlSlug", column_type = "Text", unique)]
    pub url_slug: String,
    /// RFC 3339 timestamp set when the page was last published.
    #[sea_orm(column_name = "publishedTimestamp", column_type = "Text", nullable)]
    pub published_timestamp: Option<String>,
    /// `drafted` or `published`.
    #[sea_orm(column_type = "Text")]
    pub status: String,
    #[sea_orm(column_name = "creatorId")]
    pub creator_id: i32,
    /// JSON array of user ids.
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub contributors: Option<Json>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatorId",
        to = "super::user::Column::Id"
    )]
    Creator,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Creator.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
