use serde_json::Value;

use crate::{
	codec::{self, Iri, Kind, Literal},
	registry::Decoder,
	schema::{PropertySpec, TypeSchema},
	CodecError, Entity, Error, VocabResult,
};

/// One occurrence of a property value.
///
/// The variant is fixed at construction: a value is either an embedded entity (tagged with the
/// capability it was resolved as), a scalar literal, a bare IRI reference, or a raw json value
/// that matched none of the property's declared variants and is carried verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
	Entity(&'static TypeSchema, Box<Entity>),
	Literal(Literal),
	Iri(Iri),
	Unknown(Value),
}

impl Node {
	/// Resolves one raw value against the declared range of `property`.
	///
	/// Objects are matched against embedded entity variants through the registry, in declared
	/// order; other non-null values against literal kinds, in declared order, and then as an IRI.
	/// Whatever is left is kept as [`Node::Unknown`]. Errors only come from objects given to
	/// properties that cannot embed entities, malformed IRIs, and nesting past the depth limit.
	pub(crate) fn decode(property: &'static PropertySpec, raw: &Value, decoder: &Decoder) -> VocabResult<Node> {
		if let Value::Object(map) = raw {
			if property.capabilities().next().is_none() {
				return Err(Error::UnexpectedObject { property: property.name, value: raw.clone() });
			}

			let candidates = crate::entity::type_names(map);
			if candidates.is_empty() {
				tracing::debug!("untyped object in '{}' kept as unknown", property.name);
				return Ok(Node::Unknown(raw.clone()));
			}

			for capability in property.capabilities() {
				if let Some(schema) = decoder.registry.resolve_as(&candidates, capability) {
					let mut entity = Entity::new(schema);
					entity.decode_map(map, &decoder.nested()?)?;
					return Ok(Node::Entity(capability, Box::new(entity)));
				}
			}

			tracing::debug!("no variant of '{}' matches types {candidates:?}, kept as unknown", property.name);
			return Ok(Node::Unknown(raw.clone()));
		}

		if !raw.is_null() {
			for kind in property.kinds() {
				if let Ok(literal) = codec::decode(kind, raw) {
					return Ok(Node::Literal(literal));
				}
			}
			match Iri::decode(raw) {
				Ok(iri) => return Ok(Node::Iri(iri)),
				Err(CodecError::Malformed { value, source }) => return Err(Error::MalformedIri { value, source }),
				Err(CodecError::Shape(_)) => {},
			}
		}

		tracing::debug!("value of '{}' matches no variant, kept as unknown", property.name);
		Ok(Node::Unknown(raw.clone()))
	}

	pub(crate) fn encode(&self, property: &'static str) -> VocabResult<Value> {
		match self {
			Node::Entity(_, entity) => Ok(Value::Object(entity.serialize()?)),
			Node::Literal(literal) => codec::encode(literal).ok_or(Error::NonFiniteFloat { property }),
			Node::Iri(iri) => Ok(iri.encode()),
			Node::Unknown(value) => Ok(value.clone()),
		}
	}

	/// Wraps an entity for `property`, tagged with the first declared capability it satisfies.
	pub(crate) fn embed(property: &'static PropertySpec, entity: Entity) -> VocabResult<Node> {
		match property.capability_for(entity.schema()) {
			Some(capability) => Ok(Node::Entity(capability, Box::new(entity))),
			None => Err(Error::OutOfRange {
				property: property.name,
				variant: format!("an embedded {}", entity.schema().name),
			}),
		}
	}

	pub(crate) fn describe(&self) -> String {
		match self {
			Node::Entity(capability, entity) => format!("an embedded {} as {}", entity.schema().name, capability.name),
			Node::Literal(literal) => format!("a {} literal", literal.kind()),
			Node::Iri(_) => "an IRI".to_string(),
			Node::Unknown(_) => "an unknown value".to_string(),
		}
	}

	pub fn is_entity(&self) -> bool {
		matches!(self, Node::Entity(..))
	}

	/// true if this is an embedded entity resolved as exactly `capability`
	pub fn is_entity_as(&self, capability: &TypeSchema) -> bool {
		matches!(self, Node::Entity(c, _) if *c == capability)
	}

	pub fn capability(&self) -> Option<&'static TypeSchema> {
		match self {
			Node::Entity(capability, _) => Some(*capability),
			_ => None,
		}
	}

	pub fn entity(&self) -> Option<&Entity> {
		match self {
			Node::Entity(_, entity) => Some(entity.as_ref()),
			_ => None,
		}
	}

	pub fn entity_mut(&mut self) -> Option<&mut Entity> {
		match self {
			Node::Entity(_, entity) => Some(entity.as_mut()),
			_ => None,
		}
	}

	pub fn is_literal(&self) -> bool {
		matches!(self, Node::Literal(_))
	}

	pub fn is_kind(&self, kind: Kind) -> bool {
		matches!(self, Node::Literal(x) if x.kind() == kind)
	}

	pub fn literal(&self) -> Option<&Literal> {
		match self {
			Node::Literal(x) => Some(x),
			_ => None,
		}
	}

	pub fn is_iri(&self) -> bool {
		matches!(self, Node::Iri(_))
	}

	pub fn iri(&self) -> Option<&Iri> {
		match self {
			Node::Iri(x) => Some(x),
			_ => None,
		}
	}

	pub fn is_unknown(&self) -> bool {
		matches!(self, Node::Unknown(_))
	}

	pub fn unknown(&self) -> Option<&Value> {
		match self {
			Node::Unknown(x) => Some(x),
			_ => None,
		}
	}

	/// Identifier this value points at: the IRI itself, an any-URI literal, or the `id` of an
	/// embedded entity.
	pub fn id(&self) -> Option<&str> {
		match self {
			Node::Iri(iri) | Node::Literal(Literal::AnyUri(iri)) => Some(iri.as_str()),
			Node::Entity(_, entity) => entity
				.functional
				.get(crate::types::property::ID.name)
				.and_then(Node::id),
			Node::Literal(_) | Node::Unknown(_) => None,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		self.literal().and_then(Literal::as_str)
	}

	pub fn as_f64(&self) -> Option<f64> {
		self.literal().and_then(Literal::as_f64)
	}

	pub fn as_bool(&self) -> Option<bool> {
		self.literal().and_then(Literal::as_bool)
	}

	pub fn as_u64(&self) -> Option<u64> {
		self.literal().and_then(Literal::as_u64)
	}

	pub fn as_date_time(&self) -> Option<chrono::DateTime<chrono::FixedOffset>> {
		self.literal().and_then(Literal::as_date_time)
	}

	pub fn as_duration(&self) -> Option<chrono::TimeDelta> {
		self.literal().and_then(Literal::as_duration)
	}
}

impl From<Iri> for Node {
	fn from(value: Iri) -> Self {
		Node::Iri(value)
	}
}

impl From<Literal> for Node {
	fn from(value: Literal) -> Self {
		Node::Literal(value)
	}
}
