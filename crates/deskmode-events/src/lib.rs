//! # deskmode-events
//!
//! Encodes desktop mode lifecycle events into fixed-schema metrics records.
//!
//! ## Key Types
//!
//! - [`DesktopModeEventLogger`] - Translates session and task events into records
//! - [`TaskUpdate`] - Task geometry and ownership snapshot supplied by the caller
//! - [`SessionRecord`] / [`TaskUpdateRecord`] - The two record families
//! - [`TraceSink`] / [`MetricsSink`] - Injected collaborators
//!
//! ## Records
//!
//! - Session records (atom 818): `event, enter_reason, exit_reason, session_id`
//! - Task update records (atom 819): `task_event, instance_id, uid, height, width,
//!   x, y, session_id, minimize_reason, unminimize_reason, visible_task_count`

mod encoder;
mod reasons;
mod record;
mod sink;
mod task;
pub mod wire;

pub use encoder::DesktopModeEventLogger;
pub use reasons::{EnterReason, ExitReason, MinimizeReason, ParseReasonError, UnminimizeReason};
pub use record::{AtomRecord, SessionEvent, SessionRecord, TaskEvent, TaskUpdateRecord};
pub use sink::{MetricsSink, NoopMetricsSink, NoopTraceSink, TraceSink, DESKTOP_MODE_LOG_GROUP};
pub use task::TaskUpdate;
pub use wire::{
    DESKTOP_MODE_SESSION_TASK_UPDATE_ATOM_ID, DESKTOP_MODE_UI_CHANGED_ATOM_ID,
    SESSION_REASON_NOT_APPLICABLE, UNSET_MINIMIZE_REASON, UNSET_UNMINIMIZE_REASON,
};
