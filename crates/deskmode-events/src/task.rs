use serde::{Deserialize, Serialize};

use crate::reasons::{MinimizeReason, UnminimizeReason};
use crate::wire::{UNSET_MINIMIZE_REASON, UNSET_UNMINIMIZE_REASON};

/// Describes a task position and dimensions at the time of an update.
///
/// Geometry is in pixels and is forwarded as given; `task_x`/`task_y` are the
/// top-left corner of the task bounds. The two reasons are independent: an
/// update may carry either, both, or neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskUpdate {
    /// Instance id of the task
    pub instance_id: i32,
    /// Uid of the app associated with the task
    pub uid: i32,
    pub task_height: i32,
    pub task_width: i32,
    pub task_x: i32,
    pub task_y: i32,
    #[serde(default)]
    pub minimize_reason: Option<MinimizeReason>,
    #[serde(default)]
    pub unminimize_reason: Option<UnminimizeReason>,
    /// Number of visible tasks when the update was emitted
    pub visible_task_count: i32,
}

impl TaskUpdate {
    pub fn new(
        instance_id: i32,
        uid: i32,
        task_height: i32,
        task_width: i32,
        task_x: i32,
        task_y: i32,
        visible_task_count: i32,
    ) -> Self {
        Self {
            instance_id,
            uid,
            task_height,
            task_width,
            task_x,
            task_y,
            minimize_reason: None,
            unminimize_reason: None,
            visible_task_count,
        }
    }

    pub fn with_minimize_reason(mut self, reason: MinimizeReason) -> Self {
        self.minimize_reason = Some(reason);
        self
    }

    pub fn with_unminimize_reason(mut self, reason: UnminimizeReason) -> Self {
        self.unminimize_reason = Some(reason);
        self
    }

    /// Wire code for the minimize reason, or [`UNSET_MINIMIZE_REASON`]
    pub fn minimize_reason_code(&self) -> i32 {
        self.minimize_reason
            .map_or(UNSET_MINIMIZE_REASON, MinimizeReason::code)
    }

    /// Wire code for the unminimize reason, or [`UNSET_UNMINIMIZE_REASON`]
    pub fn unminimize_reason_code(&self) -> i32 {
        self.unminimize_reason
            .map_or(UNSET_UNMINIMIZE_REASON, UnminimizeReason::code)
    }
}
