//! Scalar codecs: conversions between a json scalar and a typed literal, one per primitive kind
//! the vocabulary uses.
//!
//! Decoding never coerces: a raw value whose shape does not fit the kind fails with
//! [`CodecError::Shape`], so callers may try the next kind. Encoding a decoded literal always
//! yields a value the same codec accepts again.

mod datetime;
mod duration;
mod iri;

pub use iri::{Iri, IriSyntaxError};

use crate::CodecError;

crate::strenum! {
	pub enum Kind {
		String = "xsd:string",
		LangString = "rdf:langString",
		Float = "xsd:float",
		Boolean = "xsd:boolean",
		DateTime = "xsd:dateTime",
		Duration = "xsd:duration",
		AnyUri = "xsd:anyURI",
		MediaType = "mime",
		NonNegativeInteger = "xsd:nonNegativeInteger",
		Bcp47 = "bcp47";
	};
}

/// A decoded primitive value, tagged with the kind it was decoded as.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
	String(String),
	/// plain string standing for the default language of a natural language value
	LangString(String),
	Float(f64),
	Boolean(bool),
	DateTime(chrono::DateTime<chrono::FixedOffset>),
	Duration(chrono::TimeDelta),
	AnyUri(Iri),
	MediaType(String),
	NonNegativeInteger(u64),
	Bcp47(String),
}

impl Literal {
	pub fn kind(&self) -> Kind {
		match self {
			Literal::String(_) => Kind::String,
			Literal::LangString(_) => Kind::LangString,
			Literal::Float(_) => Kind::Float,
			Literal::Boolean(_) => Kind::Boolean,
			Literal::DateTime(_) => Kind::DateTime,
			Literal::Duration(_) => Kind::Duration,
			Literal::AnyUri(_) => Kind::AnyUri,
			Literal::MediaType(_) => Kind::MediaType,
			Literal::NonNegativeInteger(_) => Kind::NonNegativeInteger,
			Literal::Bcp47(_) => Kind::Bcp47,
		}
	}

	/// textual content of string-like kinds (including any-URI)
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Literal::String(x) | Literal::LangString(x) | Literal::MediaType(x) | Literal::Bcp47(x) => Some(x),
			Literal::AnyUri(x) => Some(x.as_str()),
			_ => None,
		}
	}

	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Literal::Float(x) => Some(*x),
			_ => None,
		}
	}

	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Literal::Boolean(x) => Some(*x),
			_ => None,
		}
	}

	pub fn as_u64(&self) -> Option<u64> {
		match self {
			Literal::NonNegativeInteger(x) => Some(*x),
			_ => None,
		}
	}

	pub fn as_date_time(&self) -> Option<chrono::DateTime<chrono::FixedOffset>> {
		match self {
			Literal::DateTime(x) => Some(*x),
			_ => None,
		}
	}

	pub fn as_duration(&self) -> Option<chrono::TimeDelta> {
		match self {
			Literal::Duration(x) => Some(*x),
			_ => None,
		}
	}
}

impl From<&str> for Literal {
	fn from(value: &str) -> Self {
		Literal::String(value.to_string())
	}
}

impl From<String> for Literal {
	fn from(value: String) -> Self {
		Literal::String(value)
	}
}

impl From<f64> for Literal {
	fn from(value: f64) -> Self {
		Literal::Float(value)
	}
}

impl From<bool> for Literal {
	fn from(value: bool) -> Self {
		Literal::Boolean(value)
	}
}

impl From<u64> for Literal {
	fn from(value: u64) -> Self {
		Literal::NonNegativeInteger(value)
	}
}

impl From<chrono::DateTime<chrono::FixedOffset>> for Literal {
	fn from(value: chrono::DateTime<chrono::FixedOffset>) -> Self {
		Literal::DateTime(value)
	}
}

impl From<chrono::DateTime<chrono::Utc>> for Literal {
	fn from(value: chrono::DateTime<chrono::Utc>) -> Self {
		Literal::DateTime(value.fixed_offset())
	}
}

impl From<chrono::TimeDelta> for Literal {
	fn from(value: chrono::TimeDelta) -> Self {
		Literal::Duration(value)
	}
}

impl From<Iri> for Literal {
	fn from(value: Iri) -> Self {
		Literal::AnyUri(value)
	}
}

pub fn decode(kind: Kind, raw: &serde_json::Value) -> Result<Literal, CodecError> {
	match kind {
		Kind::String => text(kind, raw).map(Literal::String),
		Kind::LangString => text(kind, raw).map(Literal::LangString),
		Kind::MediaType => text(kind, raw).map(Literal::MediaType),
		Kind::Bcp47 => text(kind, raw).map(Literal::Bcp47),
		Kind::Float => raw.as_f64()
			.map(Literal::Float)
			.ok_or(CodecError::Shape(kind.as_str())),
		Kind::Boolean => raw.as_bool()
			.map(Literal::Boolean)
			.ok_or(CodecError::Shape(kind.as_str())),
		Kind::NonNegativeInteger => non_negative_integer(raw)
			.map(Literal::NonNegativeInteger)
			.ok_or(CodecError::Shape(kind.as_str())),
		Kind::DateTime => datetime::decode(raw).map(Literal::DateTime),
		Kind::Duration => duration::decode(raw).map(Literal::Duration),
		Kind::AnyUri => Iri::decode(raw).map(Literal::AnyUri),
	}
}

/// Returns `None` only for floats json has no representation for (NaN and infinities).
pub fn encode(literal: &Literal) -> Option<serde_json::Value> {
	use serde_json::Value;
	match literal {
		Literal::String(x) | Literal::LangString(x) | Literal::MediaType(x) | Literal::Bcp47(x) =>
			Some(Value::String(x.clone())),
		Literal::Float(x) => serde_json::Number::from_f64(*x).map(Value::Number),
		Literal::Boolean(x) => Some(Value::Bool(*x)),
		Literal::NonNegativeInteger(x) => Some(Value::Number((*x).into())),
		Literal::DateTime(x) => Some(datetime::encode(x)),
		Literal::Duration(x) => Some(duration::encode(x)),
		Literal::AnyUri(x) => Some(x.encode()),
	}
}

fn text(kind: Kind, raw: &serde_json::Value) -> Result<String, CodecError> {
	raw.as_str()
		.map(|x| x.to_string())
		.ok_or(CodecError::Shape(kind.as_str()))
}

fn non_negative_integer(raw: &serde_json::Value) -> Option<u64> {
	if let Some(x) = raw.as_u64() {
		return Some(x);
	}
	// some producers serialize counters as floats
	let x = raw.as_f64()?;
	if x >= 0.0 && x.fract() == 0.0 && x <= u64::MAX as f64 {
		Some(x as u64)
	} else {
		None
	}
}

#[cfg(test)]
mod test {
	use super::{decode, encode, Kind, Literal};

	#[test]
	fn float_refuses_objects_instead_of_defaulting() {
		let err = decode(Kind::Float, &serde_json::json!({ "foo": "bar" })).unwrap_err();
		assert!(err.is_shape_mismatch());
		assert_eq!(decode(Kind::Float, &serde_json::json!(3)).unwrap(), Literal::Float(3.0));
	}

	#[test]
	fn strings_decode_as_every_string_like_kind() {
		let raw = serde_json::json!("hello");
		assert_eq!(decode(Kind::String, &raw).unwrap(), Literal::String("hello".into()));
		assert_eq!(decode(Kind::LangString, &raw).unwrap(), Literal::LangString("hello".into()));
		assert_eq!(decode(Kind::MediaType, &raw).unwrap(), Literal::MediaType("hello".into()));
		assert!(decode(Kind::Boolean, &raw).is_err());
		assert!(decode(Kind::NonNegativeInteger, &raw).is_err());
	}

	#[test]
	fn non_negative_integers_accept_integral_floats_only() {
		assert_eq!(decode(Kind::NonNegativeInteger, &serde_json::json!(12)).unwrap(), Literal::NonNegativeInteger(12));
		assert_eq!(decode(Kind::NonNegativeInteger, &serde_json::json!(12.0)).unwrap(), Literal::NonNegativeInteger(12));
		assert!(decode(Kind::NonNegativeInteger, &serde_json::json!(-1)).is_err());
		assert!(decode(Kind::NonNegativeInteger, &serde_json::json!(1.5)).is_err());
	}

	#[test]
	fn encoded_literals_decode_back_to_themselves() {
		let literals = [
			Literal::String("content".into()),
			Literal::Float(12.5),
			Literal::Boolean(false),
			Literal::NonNegativeInteger(42),
			decode(Kind::DateTime, &serde_json::json!("2024-06-04T17:09:20+02:00")).unwrap(),
			decode(Kind::Duration, &serde_json::json!("P1DT2H")).unwrap(),
			decode(Kind::AnyUri, &serde_json::json!("https://example.com/x")).unwrap(),
		];
		for literal in literals {
			let raw = encode(&literal).unwrap();
			assert_eq!(decode(literal.kind(), &raw).unwrap(), literal);
		}
	}

	#[test]
	fn non_finite_floats_have_no_encoding() {
		assert!(encode(&Literal::Float(f64::NAN)).is_none());
		assert!(encode(&Literal::Float(f64::INFINITY)).is_none());
	}

	#[test]
	fn kinds_are_named_after_their_xsd_types() {
		assert_eq!(Kind::DateTime.as_ref(), "xsd:dateTime");
		assert_eq!(Kind::try_from("rdf:langString").unwrap(), Kind::LangString);
		assert!(Kind::try_from("xsd:decimal").is_err());
	}
}
