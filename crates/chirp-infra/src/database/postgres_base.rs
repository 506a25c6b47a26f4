//! CRUD shared by every SeaORM-backed repository.

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DbConn, DbErr, EntityTrait, IntoActiveModel,
    PrimaryKeyTrait, SqlErr,
};

use chirp_core::error::RepoError;
use chirp_core::ports::BaseRepository;

/// Repository over one SeaORM entity `E`; finders live in `postgres_repo`.
pub struct PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    db: Arc<DbConn>,
    _entity: PhantomData<E>,
}

impl<E> PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    /// Accepts an owned connection or one shared with other repositories.
    pub fn new(db: impl Into<Arc<DbConn>>) -> Self {
        Self {
            db: db.into(),
            _entity: PhantomData,
        }
    }

    pub(crate) fn conn(&self) -> &DbConn {
        &self.db
    }
}

/// Map a read failure. Lost connections are reported separately from bad queries.
pub(crate) fn read_err(err: DbErr) -> RepoError {
    match err {
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        err => RepoError::Query(err.to_string()),
    }
}

/// Map a write failure. Unique violations on username or slug become
/// `RepoError::Constraint`.
pub(crate) fn map_write_err(err: DbErr) -> RepoError {
    if matches!(err, DbErr::RecordNotUpdated) {
        return RepoError::NotFound;
    }
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => RepoError::Constraint(detail),
        _ => read_err(err),
    }
}

#[async_trait]
impl<E, T, ID> BaseRepository<T, ID> for PostgresBaseRepository<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync + Send,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = ID>,
    ID: Send + Sync + Into<sea_orm::Value> + Clone + Copy + 'static,
    T: From<E::Model> + Into<E::ActiveModel> + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError> {
        let model = E::find_by_id(id).one(self.conn()).await.map_err(read_err)?;
        Ok(model.map(T::from))
    }

    async fn insert(&self, entity: T) -> Result<T, RepoError> {
        let row: E::ActiveModel = entity.into();
        row.insert(self.conn())
            .await
            .map(T::from)
            .map_err(map_write_err)
    }

    async fn update(&self, entity: T) -> Result<T, RepoError> {
        let row: E::ActiveModel = entity.into();
        row.update(self.conn())
            .await
            .map(T::from)
            .map_err(map_write_err)
    }

    async fn delete(&self, id: ID) -> Result<(), RepoError> {
        let deleted = E::delete_by_id(id)
            .exec(self.conn())
            .await
            .map_err(map_write_err)?
            .rows_affected;

        match deleted {
            0 => Err(RepoError::NotFound),
            _ => Ok(()),
        }
    }
}
