//! `posts` table. Rows go away with their author.

use chirp_core::domain::Post;
use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
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
    Author,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Post {
    fn from(row: Model) -> Self {
        let Model {
            id,
            user_id,
            content,
            created_at,
            updated_at,
        } = row;
        Post {
            id,
            user_id,
            content,
            created_at: created_at.to_utc(),
            updated_at: updated_at.to_utc(),
        }
    }
}

impl From<Post> for ActiveModel {
    fn from(post: Post) -> Self {
        let Post {
            id,
            user_id,
            content,
            created_at,
            updated_at,
        } = post;
        ActiveModel {
            id: Set(id),
            user_id: Set(user_id),
            content: Set(content),
            created_at: Set(created_at.fixed_offset()),
            updated_at: Set(updated_at.fixed_offset()),
        }
    }
}
