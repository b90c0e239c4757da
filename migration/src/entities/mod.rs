pub mod exercise;
pub mod user;

pub use exercise::Entity as ExerciseEntity;
pub use user::Entity as UserEntity;
