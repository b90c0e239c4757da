//! Mutation operations for SeaOrmStorage
//!
//! Records are insert-only; nothing is updated or deleted.

use sea_orm::EntityTrait;
use tracing::info;

use super::SeaOrmStorage;
use super::converters::{exercise_to_active_model, user_to_active_model};
use crate::errors::{Result, ShortrackError};
use crate::storage::{Exercise, User};

use migration::entities::{exercise, user};

impl SeaOrmStorage {
    pub async fn insert_user(&self, user: &User) -> Result<()> {
        user::Entity::insert(user_to_active_model(user))
            .exec(&self.db)
            .await
            .map_err(|e| {
                ShortrackError::database_operation(format!(
                    "Failed to insert user '{}': {}",
                    user.username, e
                ))
            })?;

        info!("User created: {} ({})", user.username, user.id);
        Ok(())
    }

    pub async fn insert_exercise(&self, entry: &Exercise) -> Result<()> {
        exercise::Entity::insert(exercise_to_active_model(entry))
            .exec(&self.db)
            .await
            .map_err(|e| {
                ShortrackError::database_operation(format!(
                    "Failed to insert exercise for user {}: {}",
                    entry.user_id, e
                ))
            })?;

        info!(
            "Exercise logged for {}: {} ({} on {})",
            entry.user_id, entry.description, entry.duration, entry.date
        );
        Ok(())
    }
}
