//! Wire constants owned by the desktop mode metrics schema.
//!
//! These values mirror the atom definitions consumed by the ingestion
//! pipeline and must not be renumbered here.

/// Atom carrying session enter/exit records.
pub const DESKTOP_MODE_UI_CHANGED_ATOM_ID: i32 = 818;

/// Atom carrying per-task update records.
pub const DESKTOP_MODE_SESSION_TASK_UPDATE_ATOM_ID: i32 = 819;

/// Written in the reason slot that does not apply to a session record.
pub const SESSION_REASON_NOT_APPLICABLE: i32 = 0;

/// Minimize reason code for a task update that was not a minimize.
pub const UNSET_MINIMIZE_REASON: i32 = 0;

/// Unminimize reason code for a task update that was not an unminimize.
pub const UNSET_UNMINIMIZE_REASON: i32 = 0;

pub(crate) const SESSION_EVENT_ENTER: i32 = 1;
pub(crate) const SESSION_EVENT_EXIT: i32 = 2;

pub(crate) const TASK_EVENT_ADDED: i32 = 1;
pub(crate) const TASK_EVENT_REMOVED: i32 = 2;
pub(crate) const TASK_EVENT_INFO_CHANGED: i32 = 3;
