use crate::reasons::{EnterReason, ExitReason};
use crate::record::{SessionEvent, SessionRecord, TaskEvent, TaskUpdateRecord};
use crate::sink::{MetricsSink, TraceSink, DESKTOP_MODE_LOG_GROUP};
use crate::task::TaskUpdate;
use crate::wire::SESSION_REASON_NOT_APPLICABLE;

/// Event logger for desktop mode session and task events.
///
/// Every operation emits one trace line and then forwards one record to the
/// metrics sink. The logger holds no state of its own beyond the two sinks.
pub struct DesktopModeEventLogger<T, M> {
    trace: T,
    metrics: M,
}

impl<T: TraceSink, M: MetricsSink> DesktopModeEventLogger<T, M> {
    pub fn new(trace: T, metrics: M) -> Self {
        Self { trace, metrics }
    }

    pub fn trace_sink(&self) -> &T {
        &self.trace
    }

    pub fn metrics_sink(&self) -> &M {
        &self.metrics
    }

    /// Logs entering desktop mode for session `session_id`
    pub fn log_session_enter(&self, session_id: i32, enter_reason: EnterReason) {
        self.trace.trace(
            DESKTOP_MODE_LOG_GROUP,
            format_args!(
                "DesktopModeLogger: Logging session enter, session: {} reason: {}",
                session_id,
                enter_reason.name()
            ),
        );
        self.write_session(SessionRecord {
            event: SessionEvent::Enter,
            enter_reason_code: enter_reason.code(),
            exit_reason_code: SESSION_REASON_NOT_APPLICABLE,
            session_id,
        });
    }

    /// Logs exiting desktop mode for session `session_id`
    pub fn log_session_exit(&self, session_id: i32, exit_reason: ExitReason) {
        self.trace.trace(
            DESKTOP_MODE_LOG_GROUP,
            format_args!(
                "DesktopModeLogger: Logging session exit, session: {} reason: {}",
                session_id,
                exit_reason.name()
            ),
        );
        self.write_session(SessionRecord {
            event: SessionEvent::Exit,
            enter_reason_code: SESSION_REASON_NOT_APPLICABLE,
            exit_reason_code: exit_reason.code(),
            session_id,
        });
    }

    /// Logs that a task was added in session `session_id`
    pub fn log_task_added(&self, session_id: i32, task_update: &TaskUpdate) {
        self.trace_task("added", session_id, task_update);
        self.write_task_update(TaskEvent::Added, session_id, task_update);
    }

    /// Logs that a task was removed from session `session_id`
    pub fn log_task_removed(&self, session_id: i32, task_update: &TaskUpdate) {
        self.trace_task("remove", session_id, task_update);
        self.write_task_update(TaskEvent::Removed, session_id, task_update);
    }

    /// Logs that a task in session `session_id` had its info changed
    pub fn log_task_info_changed(&self, session_id: i32, task_update: &TaskUpdate) {
        self.trace_task("info changed", session_id, task_update);
        self.write_task_update(TaskEvent::InfoChanged, session_id, task_update);
    }

    fn trace_task(&self, action: &str, session_id: i32, task_update: &TaskUpdate) {
        self.trace.trace(
            DESKTOP_MODE_LOG_GROUP,
            format_args!(
                "DesktopModeLogger: Logging task {}, session: {} taskId: {}",
                action, session_id, task_update.instance_id
            ),
        );
    }

    fn write_session(&self, record: SessionRecord) {
        self.metrics.write(SessionRecord::ATOM_ID, &record.fields());
    }

    fn write_task_update(&self, task_event: TaskEvent, session_id: i32, task_update: &TaskUpdate) {
        let record = TaskUpdateRecord::new(task_event, session_id, task_update);
        self.metrics.write(TaskUpdateRecord::ATOM_ID, &record.fields());
    }
}
