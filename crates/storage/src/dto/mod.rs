pub mod comment;
pub mod common;
pub mod dashboard;
pub mod grade;
pub mod point_a;
pub mod progress;
pub mod scoring;
pub mod training;
pub mod user;
