use colored::Colorize;
use deskmode_events::{
    AtomRecord, EnterReason, ExitReason, MinimizeReason, SessionEvent, SessionRecord,
    TaskUpdateRecord, UnminimizeReason,
};

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable format with colors and named fields
    #[default]
    Pretty,
    /// JSON lines format for machine consumption
    Json,
    /// Compact single-line format
    Compact,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            "compact" => Ok(LogFormat::Compact),
            _ => Err(format!("Unknown log format: {}", s)),
        }
    }
}

/// JSON view of a forwarded record, with the decoded record when the atom is known
pub fn record_json(atom_id: i32, fields: &[i32]) -> serde_json::Value {
    let record = AtomRecord::decode(atom_id, fields)
        .and_then(|r| serde_json::to_value(r).ok())
        .unwrap_or(serde_json::Value::Null);
    serde_json::json!({
        "atom_id": atom_id,
        "fields": fields,
        "record": record,
    })
}

/// Add a timestamp to serialize with the record
pub fn record_json_with_timestamp(atom_id: i32, fields: &[i32]) -> serde_json::Value {
    let mut value = record_json(atom_id, fields);
    if let Some(obj) = value.as_object_mut() {
        obj.insert(
            "timestamp".to_string(),
            serde_json::Value::String(chrono::Utc::now().to_rfc3339()),
        );
    }
    value
}

/// Render a record as a single line in the given format
pub fn render(format: LogFormat, atom_id: i32, fields: &[i32]) -> String {
    match format {
        LogFormat::Json => record_json(atom_id, fields).to_string(),
        LogFormat::Compact => render_compact(atom_id, fields),
        LogFormat::Pretty => render_pretty(atom_id, fields),
    }
}

fn render_compact(atom_id: i32, fields: &[i32]) -> String {
    let timestamp = chrono::Utc::now().format("%H:%M:%S");
    let joined = fields
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(",");
    format!("[{}] atom:{} {}", timestamp, atom_id, joined)
}

fn render_pretty(atom_id: i32, fields: &[i32]) -> String {
    match AtomRecord::decode(atom_id, fields) {
        Some(AtomRecord::Session(record)) => pretty_session(&record),
        Some(AtomRecord::TaskUpdate(record)) => pretty_task(&record),
        None => format!(
            "{} {} {:?}",
            "?".bright_yellow(),
            format!("atom {}", atom_id).dimmed(),
            fields
        ),
    }
}

fn pretty_session(record: &SessionRecord) -> String {
    let (marker, reason) = match record.event {
        SessionEvent::Enter => (
            "▶".bright_green(),
            EnterReason::from_code(record.enter_reason_code).map(EnterReason::name),
        ),
        SessionEvent::Exit => (
            "◀".bright_red(),
            ExitReason::from_code(record.exit_reason_code).map(ExitReason::name),
        ),
    };
    format!(
        "{} {} {} {}  {} {}",
        marker,
        format!("DESKTOP MODE {}", record.event.name()).bold(),
        "session".dimmed(),
        record.session_id,
        "reason".dimmed(),
        reason.unwrap_or("?"),
    )
}

fn pretty_task(record: &TaskUpdateRecord) -> String {
    let mut line = format!(
        "  {} {} {} {}  {} {} {}  {}x{} @ {},{}  {} {}",
        "•".bright_cyan(),
        record.task_event.name().bright_cyan().bold(),
        "session".dimmed(),
        record.session_id,
        "task".dimmed(),
        record.instance_id,
        format!("(uid {})", record.uid).dimmed(),
        record.task_width,
        record.task_height,
        record.task_x,
        record.task_y,
        "visible".dimmed(),
        record.visible_task_count,
    );
    if let Some(reason) = MinimizeReason::from_code(record.minimize_reason_code) {
        line.push_str(&format!("  {}", format!("minimized: {}", reason).yellow()));
    }
    if let Some(reason) = UnminimizeReason::from_code(record.unminimize_reason_code) {
        line.push_str(&format!("  {}", format!("unminimized: {}", reason).green()));
    }
    line
}
