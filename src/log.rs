use serde_json::{Map, Number, Value};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            _ => None,
        }
    }
}

pub fn log_event(threshold: LogLevel, level: LogLevel, event: &str, fields: Value) {
    if let Some(line) = format_event(threshold, level, event, fields, now_unix_millis()) {
        emit(&line);
    }
}

fn format_event(
    threshold: LogLevel,
    level: LogLevel,
    event: &str,
    fields: Value,
    ts: u64,
) -> Option<String> {
    if level < threshold {
        return None;
    }

    let mut payload = Map::new();
    payload.insert("ts".to_string(), Value::Number(Number::from(ts)));
    payload.insert("level".to_string(), Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), Value::String(event.to_string()));

    if let Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    Some(Value::Object(payload).to_string())
}

#[cfg(target_arch = "wasm32")]
fn emit(line: &str) {
    gloo::console::log!(line);
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(line: &str) {
    eprintln!("{line}");
}

#[cfg(target_arch = "wasm32")]
fn now_unix_millis() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_unix_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn debug_events_are_dropped_at_info_threshold() {
        let line = format_event(LogLevel::Info, LogLevel::Debug, "scroll_target_pending", json!({}), 1);
        assert!(line.is_none());
    }

    #[test]
    fn event_fields_are_merged_after_envelope() {
        let line = format_event(
            LogLevel::Debug,
            LogLevel::Info,
            "theme_changed",
            json!({ "theme": "light" }),
            42,
        )
        .expect("info passes debug threshold");
        let parsed: Value = serde_json::from_str(&line).expect("valid json line");

        assert_eq!(parsed["ts"], 42);
        assert_eq!(parsed["level"], "info");
        assert_eq!(parsed["event"], "theme_changed");
        assert_eq!(parsed["theme"], "light");
    }

    #[test]
    fn level_parse_ignores_case_and_rejects_unknown() {
        assert_eq!(LogLevel::parse(" DEBUG "), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse("info"), Some(LogLevel::Info));
        assert_eq!(LogLevel::parse("trace"), None);
    }
}
