//! Post identifier assignment.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

use inkpost_core::domain::PostId;

/// Hands out millisecond-timestamp ids that are strictly increasing.
///
/// Two ids requested within the same millisecond get consecutive values
/// instead of colliding.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicI64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Never hand out an id at or below `floor` from now on.
    pub fn observe(&self, floor: PostId) {
        self.last.fetch_max(floor, Ordering::SeqCst);
    }

    /// The next id, or `None` once an id of `PostId::MAX` has been handed out
    /// or observed.
    pub fn next_id(&self) -> Option<PostId> {
        let now = Utc::now().timestamp_millis();
        self.last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last.checked_add(1)?))
            })
            .ok()
            .map(|previous| now.max(previous + 1))
    }
}
