//! `users` table. Login name and profile slug are both unique.

use chirp_core::domain::User;
use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    pub email: String,
    pub password_hash: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::post::Entity")]
    Posts,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Posts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for User {
    fn from(row: Model) -> Self {
        let Model {
            id,
            username,
            email,
            password_hash,
            slug,
            created_at,
            updated_at,
        } = row;
        User {
            id,
            username,
            email,
            password_hash,
            slug,
            created_at: created_at.to_utc(),
            updated_at: updated_at.to_utc(),
        }
    }
}

impl From<User> for ActiveModel {
    fn from(user: User) -> Self {
        let User {
            id,
            username,
            email,
            password_hash,
            slug,
            created_at,
            updated_at,
        } = user;
        ActiveModel {
            id: Set(id),
            username: Set(username),
            email: Set(email),
            password_hash: Set(password_hash),
            slug: Set(slug),
            created_at: Set(created_at.fixed_offset()),
            updated_at: Set(updated_at.fixed_offset()),
        }
    }
}
