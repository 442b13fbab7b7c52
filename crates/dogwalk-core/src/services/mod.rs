//! Services shared by every front end.

mod walk_log_service;

pub use walk_log_service::{
    SyncOperation, SyncOutcome, WalkLogService, LOGS_KEY, USER_NAME_KEY,
};
