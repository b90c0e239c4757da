//! Query operations for SeaOrmStorage
//!
//! Read-only database operations. Errors are propagated, not swallowed.

use sea_orm::{
    ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use tracing::{debug, error};

use super::converters::{model_to_exercise, model_to_user};
use super::{ExerciseFilter, SeaOrmStorage};
use crate::errors::{Result, ShortrackError};
use crate::storage::{Exercise, User};

use migration::entities::{exercise, user};

impl SeaOrmStorage {
    pub async fn get_user(&self, id: &str) -> Result<Option<User>> {
        let model = user::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to query user {}: {}", id, e);
                ShortrackError::database_operation(format!("Failed to query user: {}", e))
            })?;

        Ok(model.map(model_to_user))
    }

    pub async fn list_users(&self) -> Result<Vec<User>> {
        let models = user::Entity::find()
            .order_by_asc(user::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                ShortrackError::database_operation(format!("Failed to list users: {}", e))
            })?;

        debug!("Loaded {} users", models.len());
        Ok(models.into_iter().map(model_to_user).collect())
    }

    pub async fn count_users(&self) -> Result<u64> {
        user::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| ShortrackError::database_operation(format!("Failed to count users: {}", e)))
    }

    /// 按用户和日期区间查询运动记录（日期升序，同日按写入顺序）
    pub async fn list_exercises(
        &self,
        user_id: &str,
        filter: &ExerciseFilter,
    ) -> Result<Vec<Exercise>> {
        let mut condition = Condition::all().add(exercise::Column::UserId.eq(user_id));

        if let Some(from) = filter.from {
            condition = condition.add(exercise::Column::Date.gte(from));
        }
        if let Some(to) = filter.to {
            condition = condition.add(exercise::Column::Date.lte(to));
        }

        let mut query = exercise::Entity::find()
            .filter(condition)
            .order_by_asc(exercise::Column::Date)
            .order_by_asc(exercise::Column::CreatedAt);

        if let Some(limit) = filter.limit {
            query = query.limit(limit);
        }

        let models = query.all(&self.db).await.map_err(|e| {
            error!("Failed to query exercises for {}: {}", user_id, e);
            ShortrackError::database_operation(format!("Failed to query exercises: {}", e))
        })?;

        Ok(models.into_iter().map(model_to_exercise).collect())
    }
}
