//! `xsd:duration`, e.g. `PT5S` or `-P1DT2H30M`.
//!
//! Calendar components have no fixed length, so a year counts as 365 days and a month as 30.
//! Encoding always uses days and time components only.

use std::fmt::Write;

use chrono::TimeDelta;

use crate::CodecError;

const LABEL: &str = "xsd:duration";

const DAY: i64 = 24 * 60 * 60;
const DATE: [(char, i64); 3] = [('Y', 365 * DAY), ('M', 30 * DAY), ('D', DAY)];
const TIME: [(char, i64); 3] = [('H', 60 * 60), ('M', 60), ('S', 1)];

pub(crate) fn decode(raw: &serde_json::Value) -> Result<TimeDelta, CodecError> {
	raw.as_str()
		.and_then(parse)
		.ok_or(CodecError::Shape(LABEL))
}

pub(crate) fn encode(value: &TimeDelta) -> serde_json::Value {
	serde_json::Value::String(format(value))
}

#[derive(Default)]
struct Total {
	seconds: i64,
	nanos: u32,
	components: usize,
}

pub(crate) fn parse(text: &str) -> Option<TimeDelta> {
	let (negative, text) = match text.strip_prefix('-') {
		Some(rest) => (true, rest),
		None => (false, text),
	};
	let text = text.strip_prefix('P')?;
	let (date, time) = match text.split_once('T') {
		Some((date, time)) => (date, Some(time)),
		None => (text, None),
	};

	let mut total = Total::default();
	accumulate(date, &DATE, &mut total)?;
	if let Some(time) = time {
		let before = total.components;
		accumulate(time, &TIME, &mut total)?;
		if total.components == before {
			return None; // 'T' must introduce at least one time component
		}
	}
	if total.components == 0 {
		return None;
	}

	let delta = TimeDelta::new(total.seconds, total.nanos)?;
	Some(if negative { -delta } else { delta })
}

fn accumulate(mut text: &str, units: &[(char, i64)], total: &mut Total) -> Option<()> {
	let mut units = units.iter();
	while !text.is_empty() {
		let end = text.find(|c: char| !c.is_ascii_digit() && c != '.')?;
		let (number, tail) = text.split_at(end);
		let symbol = tail.chars().next()?;
		// designators must come in order and at most once
		let &(_, seconds) = units.by_ref().find(|&&(s, _)| s == symbol)?;

		let (whole, fraction) = match number.split_once('.') {
			Some((whole, fraction)) => (whole, Some(fraction)),
			None => (number, None),
		};
		let whole: i64 = whole.parse().ok()?;
		total.seconds = total.seconds.checked_add(whole.checked_mul(seconds)?)?;

		if let Some(fraction) = fraction {
			if seconds != 1 || fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
				return None;
			}
			let digits = &fraction[..fraction.len().min(9)];
			let scale = 10u32.pow(9 - digits.len() as u32);
			total.nanos = digits.parse::<u32>().ok()? * scale;
		}

		total.components += 1;
		text = &tail[symbol.len_utf8()..];
	}
	Some(())
}

pub(crate) fn format(value: &TimeDelta) -> String {
	let negative = *value < TimeDelta::zero();
	let value = if negative { -*value } else { *value };

	let total = value.num_seconds();
	let nanos = value.subsec_nanos();
	let days = total / DAY;
	let hours = (total % DAY) / 3600;
	let minutes = (total % 3600) / 60;
	let seconds = total % 60;

	let mut out = String::from(if negative { "-P" } else { "P" });
	if days > 0 {
		let _ = write!(out, "{days}D");
	}
	if hours > 0 || minutes > 0 || seconds > 0 || nanos > 0 || days == 0 {
		out.push('T');
		if hours > 0 {
			let _ = write!(out, "{hours}H");
		}
		if minutes > 0 {
			let _ = write!(out, "{minutes}M");
		}
		if nanos > 0 {
			let fraction = format!("{nanos:09}");
			let _ = write!(out, "{seconds}.{}S", fraction.trim_end_matches('0'));
		} else if seconds > 0 || (hours == 0 && minutes == 0) {
			let _ = write!(out, "{seconds}S");
		}
	}
	out
}
