//! Fixed-arity records forwarded to the metrics sink.

use serde::Serialize;

use crate::task::TaskUpdate;
use crate::wire::{
    DESKTOP_MODE_SESSION_TASK_UPDATE_ATOM_ID, DESKTOP_MODE_UI_CHANGED_ATOM_ID,
    SESSION_EVENT_ENTER, SESSION_EVENT_EXIT, TASK_EVENT_ADDED, TASK_EVENT_INFO_CHANGED,
    TASK_EVENT_REMOVED,
};

/// Discriminant of a session record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionEvent {
    Enter,
    Exit,
}

impl SessionEvent {
    pub fn code(self) -> i32 {
        match self {
            SessionEvent::Enter => SESSION_EVENT_ENTER,
            SessionEvent::Exit => SESSION_EVENT_EXIT,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SessionEvent::Enter => "ENTER",
            SessionEvent::Exit => "EXIT",
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            SESSION_EVENT_ENTER => Some(SessionEvent::Enter),
            SESSION_EVENT_EXIT => Some(SessionEvent::Exit),
            _ => None,
        }
    }
}

/// Discriminant of a task update record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TaskEvent {
    #[serde(rename = "TASK_ADDED")]
    Added,
    #[serde(rename = "TASK_REMOVED")]
    Removed,
    #[serde(rename = "TASK_INFO_CHANGED")]
    InfoChanged,
}

impl TaskEvent {
    pub fn code(self) -> i32 {
        match self {
            TaskEvent::Added => TASK_EVENT_ADDED,
            TaskEvent::Removed => TASK_EVENT_REMOVED,
            TaskEvent::InfoChanged => TASK_EVENT_INFO_CHANGED,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TaskEvent::Added => "TASK_ADDED",
            TaskEvent::Removed => "TASK_REMOVED",
            TaskEvent::InfoChanged => "TASK_INFO_CHANGED",
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            TASK_EVENT_ADDED => Some(TaskEvent::Added),
            TASK_EVENT_REMOVED => Some(TaskEvent::Removed),
            TASK_EVENT_INFO_CHANGED => Some(TaskEvent::InfoChanged),
            _ => None,
        }
    }
}

/// Session enter/exit record. Exactly one reason slot is meaningful; the
/// other holds [`crate::SESSION_REASON_NOT_APPLICABLE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionRecord {
    pub event: SessionEvent,
    pub enter_reason_code: i32,
    pub exit_reason_code: i32,
    pub session_id: i32,
}

impl SessionRecord {
    pub const ATOM_ID: i32 = DESKTOP_MODE_UI_CHANGED_ATOM_ID;
    pub const ARITY: usize = 4;

    /// Field values in wire order
    pub fn fields(&self) -> [i32; Self::ARITY] {
        [
            self.event.code(),
            self.enter_reason_code,
            self.exit_reason_code,
            self.session_id,
        ]
    }

    pub fn from_fields(fields: &[i32]) -> Option<Self> {
        let &[event, enter_reason_code, exit_reason_code, session_id] = fields else {
            return None;
        };
        Some(Self {
            event: SessionEvent::from_code(event)?,
            enter_reason_code,
            exit_reason_code,
            session_id,
        })
    }
}

/// Per-task geometry and ownership snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaskUpdateRecord {
    pub task_event: TaskEvent,
    pub instance_id: i32,
    pub uid: i32,
    pub task_height: i32,
    pub task_width: i32,
    pub task_x: i32,
    pub task_y: i32,
    pub session_id: i32,
    pub minimize_reason_code: i32,
    pub unminimize_reason_code: i32,
    pub visible_task_count: i32,
}

impl TaskUpdateRecord {
    pub const ATOM_ID: i32 = DESKTOP_MODE_SESSION_TASK_UPDATE_ATOM_ID;
    pub const ARITY: usize = 11;

    /// Builds the record, resolving absent reasons to their sentinels.
    pub fn new(task_event: TaskEvent, session_id: i32, update: &TaskUpdate) -> Self {
        Self {
            task_event,
            instance_id: update.instance_id,
            uid: update.uid,
            task_height: update.task_height,
            task_width: update.task_width,
            task_x: update.task_x,
            task_y: update.task_y,
            session_id,
            minimize_reason_code: update.minimize_reason_code(),
            unminimize_reason_code: update.unminimize_reason_code(),
            visible_task_count: update.visible_task_count,
        }
    }

    /// Field values in wire order
    pub fn fields(&self) -> [i32; Self::ARITY] {
        [
            self.task_event.code(),
            self.instance_id,
            self.uid,
            self.task_height,
            self.task_width,
            self.task_x,
            self.task_y,
            self.session_id,
            self.minimize_reason_code,
            self.unminimize_reason_code,
            self.visible_task_count,
        ]
    }

    pub fn from_fields(fields: &[i32]) -> Option<Self> {
        let &[
            task_event,
            instance_id,
            uid,
            task_height,
            task_width,
            task_x,
            task_y,
            session_id,
            minimize_reason_code,
            unminimize_reason_code,
            visible_task_count,
        ] = fields
        else {
            return None;
        };
        Some(Self {
            task_event: TaskEvent::from_code(task_event)?,
            instance_id,
            uid,
            task_height,
            task_width,
            task_x,
            task_y,
            session_id,
            minimize_reason_code,
            unminimize_reason_code,
            visible_task_count,
        })
    }
}

/// Either record family, tagged by atom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "atom", rename_all = "snake_case")]
pub enum AtomRecord {
    Session(SessionRecord),
    TaskUpdate(TaskUpdateRecord),
}

impl AtomRecord {
    pub fn atom_id(&self) -> i32 {
        match self {
            AtomRecord::Session(_) => SessionRecord::ATOM_ID,
            AtomRecord::TaskUpdate(_) => TaskUpdateRecord::ATOM_ID,
        }
    }

    pub fn fields(&self) -> Vec<i32> {
        match self {
            AtomRecord::Session(r) => r.fields().to_vec(),
            AtomRecord::TaskUpdate(r) => r.fields().to_vec(),
        }
    }

    /// Recover a typed record from what a metrics sink received.
    ///
    /// Returns `None` for an unknown atom, the wrong number of fields, or an
    /// unknown event discriminant.
    pub fn decode(atom_id: i32, fields: &[i32]) -> Option<Self> {
        match atom_id {
            SessionRecord::ATOM_ID => SessionRecord::from_fields(fields).map(AtomRecord::Session),
            TaskUpdateRecord::ATOM_ID => {
                TaskUpdateRecord::from_fields(fields).map(AtomRecord::TaskUpdate)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reasons::{MinimizeReason, UnminimizeReason};
    use crate::wire::{UNSET_MINIMIZE_REASON, UNSET_UNMINIMIZE_REASON};

    #[test]
    fn test_session_fields_order() {
        let record = SessionRecord {
            event: SessionEvent::Exit,
            enter_reason_code: 0,
            exit_reason_code: 6,
            session_id: 42,
        };
        assert_eq!(record.fields(), [2, 0, 6, 42]);
    }

    #[test]
    fn test_task_update_fields_order() {
        let update = TaskUpdate::new(3, 1000, 800, 600, 10, 20, 2)
            .with_unminimize_reason(UnminimizeReason::TaskbarTap);
        let record = TaskUpdateRecord::new(TaskEvent::InfoChanged, 7, &update);
        assert_eq!(
            record.fields(),
            [3, 3, 1000, 800, 600, 10, 20, 7, UNSET_MINIMIZE_REASON, 2, 2]
        );
    }

    #[test]
    fn test_task_record_keeps_both_reasons() {
        let update = TaskUpdate::new(1, 1, 1, 1, 1, 1, 1)
            .with_minimize_reason(MinimizeReason::TaskLimit)
            .with_unminimize_reason(UnminimizeReason::TaskLaunch);
        let record = TaskUpdateRecord::new(TaskEvent::Removed, 1, &update);
        assert_eq!(record.minimize_reason_code, MinimizeReason::TaskLimit.code());
        assert_eq!(record.unminimize_reason_code, UnminimizeReason::TaskLaunch.code());
        assert_ne!(record.unminimize_reason_code, UNSET_UNMINIMIZE_REASON);
    }

    #[test]
    fn test_decode_matches_fields() {
        let record = AtomRecord::Session(SessionRecord {
            event: SessionEvent::Enter,
            enter_reason_code: 1,
            exit_reason_code: 0,
            session_id: 42,
        });
        let decoded = AtomRecord::decode(record.atom_id(), &record.fields());
        assert_eq!(decoded, Some(record));
    }

    #[test]
    fn test_decode_rejects_bad_input() {
        assert_eq!(AtomRecord::decode(1, &[1, 1, 0, 42]), None);
        assert_eq!(AtomRecord::decode(SessionRecord::ATOM_ID, &[1, 1, 0]), None);
        assert_eq!(AtomRecord::decode(SessionRecord::ATOM_ID, &[9, 1, 0, 42]), None);
        assert_eq!(AtomRecord::decode(TaskUpdateRecord::ATOM_ID, &[1, 1, 0, 42]), None);
    }

    #[test]
    fn test_atom_ids_are_distinct() {
        assert_ne!(SessionRecord::ATOM_ID, TaskUpdateRecord::ATOM_ID);
    }
}
