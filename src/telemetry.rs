use std::cmp::Ordering;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
                LogLevel::Warn => 2,
                LogLevel::Error => 3,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

/// Builds the JSON line for one event, or `None` when `level` is below `min_level`.
pub fn event_payload(
    min_level: LogLevel,
    level: LogLevel,
    event: &str,
    ts: u64,
    fields: serde_json::Value,
) -> Option<serde_json::Value> {
    if level < min_level {
        return None;
    }

    let mut payload = serde_json::Map::new();
    payload.insert(
        "ts".to_string(),
        serde_json::Value::Number(serde_json::Number::from(ts)),
    );
    payload.insert("level".to_string(), serde_json::Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), serde_json::Value::String(event.to_string()));

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    Some(serde_json::Value::Object(payload))
}

pub fn log_event(min_level: LogLevel, level: LogLevel, event: &str, fields: serde_json::Value) {
    let Some(payload) = event_payload(min_level, level, event, now_unix_seconds(), fields) else {
        return;
    };

    emit(level, &payload.to_string());
}

#[cfg(target_arch = "wasm32")]
fn emit(level: LogLevel, line: &str) {
    let line = wasm_bindgen::JsValue::from_str(line);
    match level {
        LogLevel::Error => web_sys::console::error_1(&line),
        LogLevel::Warn => web_sys::console::warn_1(&line),
        LogLevel::Info | LogLevel::Debug => web_sys::console::log_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(level: LogLevel, line: &str) {
    match level {
        LogLevel::Error | LogLevel::Warn => eprintln!("{line}"),
        LogLevel::Info | LogLevel::Debug => println!("{line}"),
    }
}

#[cfg(target_arch = "wasm32")]
fn now_unix_seconds() -> u64 {
    (js_sys::Date::now() / 1_000.0) as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_unix_seconds() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_below_minimum_level_are_dropped() {
        let payload = event_payload(
            LogLevel::Info,
            LogLevel::Debug,
            "filter_applied",
            1_700_000_000,
            serde_json::json!({ "tag": "CSS" }),
        );

        assert!(payload.is_none());
    }

    #[test]
    fn payload_merges_fields_after_envelope() {
        let payload = event_payload(
            LogLevel::Info,
            LogLevel::Error,
            "catalog_load_failed",
            1_700_000_000,
            serde_json::json!({ "reason": "request failed", "path": "data/proyectos.json" }),
        )
        .expect("error events pass an info threshold");

        assert_eq!(payload["ts"], 1_700_000_000);
        assert_eq!(payload["level"], "error");
        assert_eq!(payload["event"], "catalog_load_failed");
        assert_eq!(payload["reason"], "request failed");
        assert_eq!(payload["path"], "data/proyectos.json");
    }

    #[test]
    fn non_object_fields_are_ignored() {
        let payload = event_payload(
            LogLevel::Debug,
            LogLevel::Info,
            "app_start",
            1,
            serde_json::Value::Null,
        )
        .expect("info passes a debug threshold");

        assert_eq!(payload.as_object().map(|object| object.len()), Some(3));
    }

    #[test]
    fn level_names_round_trip_case_insensitively() {
        assert_eq!(LogLevel::from_str(" WARN "), Some(LogLevel::Warn));
        assert_eq!(LogLevel::from_str("warning"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::from_str("trace"), None);
        assert!(LogLevel::Debug < LogLevel::Error);
    }
}
