#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("property '{property}' cannot hold a json object: {value}")]
	UnexpectedObject {
		property: &'static str,
		value: serde_json::Value,
	},

	#[error("malformed iri '{value}': {source}")]
	MalformedIri {
		value: String,
		source: crate::codec::IriSyntaxError,
	},

	#[error("embedded entities nested deeper than {0} levels")]
	NestingTooDeep(usize),

	#[error("expected a json object, got {0}")]
	NotAnObject(serde_json::Value),

	#[error("no registered type among {0:?}")]
	UnresolvedType(Vec<String>),

	#[error("type '{entity}' does not declare property '{property}'")]
	Undeclared {
		property: &'static str,
		entity: &'static str,
	},

	#[error("property '{property}' does not accept {variant}")]
	OutOfRange {
		property: &'static str,
		variant: String,
	},

	#[error("property '{property}' holds a float json cannot represent")]
	NonFiniteFloat {
		property: &'static str,
	},
}

pub type VocabResult<T> = Result<T, Error>;

/// Outcome of a failed scalar decode.
///
/// `Shape` only means "not this kind", and slot resolution moves on to the next candidate.
/// `Malformed` is a definite rejection of a value that had the right shape.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
	#[error("value does not have the shape of {0}")]
	Shape(&'static str),

	#[error("malformed iri '{value}': {source}")]
	Malformed {
		value: String,
		source: crate::codec::IriSyntaxError,
	},
}

impl CodecError {
	pub fn is_shape_mismatch(&self) -> bool {
		matches!(self, CodecError::Shape(_))
	}
}
