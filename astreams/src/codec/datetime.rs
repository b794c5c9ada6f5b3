use chrono::{DateTime, FixedOffset, SecondsFormat};

use crate::CodecError;

const LABEL: &str = "xsd:dateTime";

pub(crate) fn decode(raw: &serde_json::Value) -> Result<DateTime<FixedOffset>, CodecError> {
	let text = raw.as_str().ok_or(CodecError::Shape(LABEL))?;
	if let Ok(x) = DateTime::parse_from_rfc3339(text) {
		return Ok(x);
	}
	// minute precision, without seconds: still valid ISO 8601 and some servers emit it
	let normalized = match text.strip_suffix('Z') {
		Some(head) => format!("{head}+00:00"),
		None => text.to_string(),
	};
	DateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M%:z")
		.map_err(|_| CodecError::Shape(LABEL))
}

pub(crate) fn encode(value: &DateTime<FixedOffset>) -> serde_json::Value {
	serde_json::Value::String(value.to_rfc3339_opts(SecondsFormat::AutoSi, true))
}
