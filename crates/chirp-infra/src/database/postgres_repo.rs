//! Entity-specific finders on top of `PostgresBaseRepository`.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Select};
use uuid::Uuid;

use chirp_core::domain::{Post, User};
use chirp_core::error::RepoError;
use chirp_core::ports::{PostRepository, UserRepository};

use super::entity::post::{self, Entity as PostEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::postgres_base::{PostgresBaseRepository, read_err};

pub type PostgresUserRepository = PostgresBaseRepository<UserEntity>;
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

impl PostgresUserRepository {
    async fn find_one_where(&self, column: user::Column, value: &str) -> Result<Option<User>, RepoError> {
        let model = UserEntity::find()
            .filter(column.eq(value))
            .one(self.conn())
            .await
            .map_err(read_err)?;
        Ok(model.map(User::from))
    }
}

impl PostgresPostRepository {
    /// Run `query` with the feed ordering, oldest first.
    async fn feed(&self, query: Select<PostEntity>) -> Result<Vec<Post>, RepoError> {
        let models = query
            .order_by_asc(post::Column::CreatedAt)
            .all(self.conn())
            .await
            .map_err(read_err)?;
        Ok(models.into_iter().map(Post::from).collect())
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        tracing::debug!(%username, "Finding user by username");
        self.find_one_where(user::Column::Username, username).await
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<User>, RepoError> {
        self.find_one_where(user::Column::Slug, slug).await
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        self.feed(PostEntity::find()).await
    }

    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<Post>, RepoError> {
        self.feed(PostEntity::find().filter(post::Column::UserId.eq(user_id)))
            .await
    }
}
