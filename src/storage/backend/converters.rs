use crate::storage::{Exercise, User};
use migration::entities::{exercise, user};

/// 将 Sea-ORM Model 转换为 User
pub fn model_to_user(model: user::Model) -> User {
    User {
        id: model.id,
        username: model.username,
        created_at: model.created_at,
    }
}

/// 将 User 转换为 ActiveModel（仅用于插入）
pub fn user_to_active_model(user: &User) -> user::ActiveModel {
    use sea_orm::ActiveValue::Set;

    user::ActiveModel {
        id: Set(user.id.clone()),
        username: Set(user.username.clone()),
        created_at: Set(user.created_at),
    }
}

/// 将 Sea-ORM Model 转换为 Exercise
pub fn model_to_exercise(model: exercise::Model) -> Exercise {
    Exercise {
        id: model.id,
        user_id: model.user_id,
        description: model.description,
        duration: model.duration,
        date: model.date,
        created_at: model.created_at,
    }
}

/// 将 Exercise 转换为 ActiveModel（仅用于插入）
pub fn exercise_to_active_model(entry: &Exercise) -> exercise::ActiveModel {
    use sea_orm::ActiveValue::Set;

    exercise::ActiveModel {
        id: Set(entry.id.clone()),
        user_id: Set(entry.user_id.clone()),
        description: Set(entry.description.clone()),
        duration: Set(entry.duration),
        date: Set(entry.date),
        created_at: Set(entry.created_at),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use sea_orm::ActiveValue;

    #[test]
    fn test_model_to_exercise() {
        let now = Utc::now();
        let model = exercise::Model {
            id: "e1".to_string(),
            user_id: "u1".to_string(),
            description: "run".to_string(),
            duration: 30,
            date: NaiveDate::from_ymd_opt(2020, 5, 1).unwrap(),
            created_at: now,
        };

        let entry = model_to_exercise(model);
        assert_eq!(entry.id, "e1");
        assert_eq!(entry.user_id, "u1");
        assert_eq!(entry.duration, 30);
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2020, 5, 1).unwrap());
        assert_eq!(entry.created_at, now);
    }

    #[test]
    fn test_user_to_active_model_sets_all_columns() {
        let user = User {
            id: "u1".to_string(),
            username: "fcc_test".to_string(),
            created_at: Utc::now(),
        };

        let active = user_to_active_model(&user);
        assert_eq!(active.id, ActiveValue::Set("u1".to_string()));
        assert_eq!(active.username, ActiveValue::Set("fcc_test".to_string()));
        assert!(matches!(active.created_at, ActiveValue::Set(_)));
    }
}
