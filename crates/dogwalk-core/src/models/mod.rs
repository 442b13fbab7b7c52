//! Data models for the dog walk logger

mod stats;
mod walk_log;

pub use stats::WalkStats;
pub use walk_log::{
    BathroomActivity, ParseTagError, QualityColor, WalkLog, WalkLogId, WalkQuality,
    DEFAULT_USER_NAME,
};
