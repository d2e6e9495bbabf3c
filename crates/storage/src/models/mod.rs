mod coach_comment;
mod metrics;
mod point_a;
mod progress_snapshot;
mod training;
mod user;

pub use coach_comment::CoachComment;
pub use metrics::{Better, Metric, Metrics};
pub use point_a::PointA;
pub use progress_snapshot::ProgressSnapshot;
pub use training::Training;
pub use user::{Role, User};
