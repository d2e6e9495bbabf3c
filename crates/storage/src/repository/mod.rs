pub mod comment;
pub mod point_a;
pub mod progress;
pub mod training;
pub mod user;
