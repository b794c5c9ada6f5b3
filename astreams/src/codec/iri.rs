use crate::CodecError;

const LABEL: &str = "IRI";

/// Why a string that names a scheme is still not a usable IRI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IriSyntaxError {
	#[error("character {0:?} is not allowed")]
	InvalidCharacter(char),

	#[error("'%' must be followed by two hex digits")]
	InvalidEscape,

	#[error("ip literal is missing its closing ']'")]
	UnterminatedIpLiteral,

	#[error("port must be made of digits")]
	InvalidPort,
}

/// An IRI reference, absolute or relative, kept exactly as it was written.
///
/// Comparison and serialization use the original text, so values survive a round trip even
/// when the parsed form would be normalized (e.g. a trailing slash on bare hosts).
#[derive(Debug, Clone)]
pub struct Iri {
	raw: String,
	url: Option<url::Url>,
}

impl Iri {
	/// Parses an absolute or relative reference.
	///
	/// Text without a scheme that is not reference syntax (prose, the empty string) fails with
	/// [`CodecError::Shape`]. Text with a scheme fails with [`CodecError::Malformed`] only when it
	/// breaks the generic reference grammar: references the web URL parser refuses for stricter
	/// reasons, like an empty host or an out of range port, are still accepted.
	pub fn parse(text: &str) -> Result<Self, CodecError> {
		match url::Url::parse(text) {
			Ok(url) => Ok(Iri { raw: text.to_string(), url: Some(url) }),
			Err(url::ParseError::RelativeUrlWithoutBase) => match check(text) {
				Ok(()) if !text.is_empty() => Ok(Iri { raw: text.to_string(), url: None }),
				_ => Err(CodecError::Shape(LABEL)),
			},
			Err(e) => match check(text) {
				Ok(()) => {
					tracing::trace!("keeping '{text}' unparsed: {e}");
					Ok(Iri { raw: text.to_string(), url: None })
				},
				Err(source) => Err(CodecError::Malformed { value: text.to_string(), source }),
			},
		}
	}

	pub(crate) fn decode(raw: &serde_json::Value) -> Result<Self, CodecError> {
		match raw {
			serde_json::Value::String(text) => Iri::parse(text),
			_ => Err(CodecError::Shape(LABEL)),
		}
	}

	pub(crate) fn encode(&self) -> serde_json::Value {
		serde_json::Value::String(self.raw.clone())
	}

	pub fn as_str(&self) -> &str {
		&self.raw
	}

	/// parsed form, only for absolute references the web URL parser accepts
	pub fn as_url(&self) -> Option<&url::Url> {
		self.url.as_ref()
	}

	pub fn scheme(&self) -> Option<&str> {
		self.raw.split_once(':')
			.map(|(scheme, _)| scheme)
			.filter(|x| is_scheme(x))
	}

	pub fn is_relative(&self) -> bool {
		self.scheme().is_none()
	}
}

fn is_scheme(text: &str) -> bool {
	let mut chars = text.chars();
	chars.next().is_some_and(|c| c.is_ascii_alphabetic())
		&& chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

fn allowed(c: char) -> bool {
	if c.is_ascii() {
		c.is_ascii_alphanumeric() || "-._~:/?#[]@!$&'()*+,;=%".contains(c)
	} else {
		!c.is_control() && !c.is_whitespace()
	}
}

/// generic reference grammar: allowed characters, escapes, and the authority's host and port
fn check(text: &str) -> Result<(), IriSyntaxError> {
	if let Some(c) = text.chars().find(|c| !allowed(*c)) {
		return Err(IriSyntaxError::InvalidCharacter(c));
	}

	let bytes = text.as_bytes();
	for (i, _) in text.match_indices('%') {
		let escape = bytes.get(i + 1..i + 3);
		if !escape.is_some_and(|x| x.iter().all(u8::is_ascii_hexdigit)) {
			return Err(IriSyntaxError::InvalidEscape);
		}
	}

	let rest = match text.split_once(':') {
		Some((scheme, rest)) if is_scheme(scheme) => rest,
		_ => text,
	};
	let Some(rest) = rest.strip_prefix("//") else {
		return Ok(());
	};
	let authority = &rest[..rest.find(['/', '?', '#']).unwrap_or(rest.len())];
	let host = authority.rsplit_once('@').map_or(authority, |(_, x)| x);

	let port = match host.strip_prefix('[') {
		Some(literal) => {
			let (_, tail) = literal.split_once(']').ok_or(IriSyntaxError::UnterminatedIpLiteral)?;
			match tail {
				"" => None,
				x => Some(x.strip_prefix(':').ok_or(IriSyntaxError::InvalidPort)?),
			}
		},
		None => {
			if let Some(c) = host.chars().find(|c| matches!(c, '[' | ']')) {
				return Err(IriSyntaxError::InvalidCharacter(c));
			}
			host.split_once(':').map(|(_, port)| port)
		},
	};
	if port.is_some_and(|x| !x.bytes().all(|b| b.is_ascii_digit())) {
		return Err(IriSyntaxError::InvalidPort);
	}
	Ok(())
}

impl PartialEq for Iri {
	fn eq(&self, other: &Self) -> bool {
		self.raw == other.raw
	}
}

impl Eq for Iri {}

impl std::hash::Hash for Iri {
	fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
		self.raw.hash(state);
	}
}

impl std::fmt::Display for Iri {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.raw)
	}
}

impl std::str::FromStr for Iri {
	type Err = CodecError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Iri::parse(s)
	}
}

impl TryFrom<&str> for Iri {
	type Error = CodecError;

	fn try_from(value: &str) -> Result<Self, Self::Error> {
		Iri::parse(value)
	}
}

impl From<url::Url> for Iri {
	fn from(url: url::Url) -> Self {
		Iri { raw: url.to_string(), url: Some(url) }
	}
}

impl AsRef<str> for Iri {
	fn as_ref(&self) -> &str {
		&self.raw
	}
}
