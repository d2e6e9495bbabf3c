pub mod comments;
pub mod health;
pub mod point_a;
pub mod progress;
pub mod scoring;
pub mod trainings;
pub mod users;
