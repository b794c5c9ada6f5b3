use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::{
	adapter::{LangMap, Single, SingleMut, Values, ValuesMut},
	registry::{Decoder, Registry},
	schema::{Functionality, PropertySpec, TypeSchema},
	Error, Node, VocabResult,
};

const TYPE: &str = "type";
const CONTEXT: &str = "@context";

/// One entry of an entity's `type`.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeName {
	Name(String),
	/// non-string entries are carried as they were
	Unknown(Value),
}

impl TypeName {
	pub fn as_str(&self) -> Option<&str> {
		match self {
			TypeName::Name(x) => Some(x),
			TypeName::Unknown(_) => None,
		}
	}

	fn decode_all(raw: &Value) -> Vec<TypeName> {
		match raw {
			Value::Array(xs) => xs.iter().map(TypeName::decode).collect(),
			x => vec![TypeName::decode(x)],
		}
	}

	fn decode(raw: &Value) -> TypeName {
		match raw {
			Value::String(x) => TypeName::Name(x.clone()),
			x => TypeName::Unknown(x.clone()),
		}
	}

	fn encode(&self) -> Value {
		match self {
			TypeName::Name(x) => Value::String(x.clone()),
			TypeName::Unknown(x) => x.clone(),
		}
	}
}

impl From<&str> for TypeName {
	fn from(value: &str) -> Self {
		TypeName::Name(value.to_string())
	}
}

/// string entries of the `type` key, in order
pub(crate) fn type_names(map: &Map<String, Value>) -> Vec<&str> {
	match map.get(TYPE) {
		Some(Value::String(x)) => vec![x.as_str()],
		Some(Value::Array(xs)) => xs.iter().filter_map(Value::as_str).collect(),
		_ => Vec::new(),
	}
}

/// An instance of a vocabulary type.
///
/// Holds the values of the properties its type declares, the `type` entries it was declared
/// with, and an unknown bucket keeping every other key verbatim so nothing is lost on a round
/// trip.
#[derive(Debug, Clone)]
pub struct Entity {
	pub(crate) schema: &'static TypeSchema,
	pub(crate) types: Vec<TypeName>,
	pub(crate) functional: BTreeMap<&'static str, Node>,
	pub(crate) values: BTreeMap<&'static str, Vec<Node>>,
	pub(crate) lang_maps: BTreeMap<&'static str, LangMap>,
	pub(crate) unknown: Map<String, Value>,
}

impl Entity {
	pub fn new(schema: &'static TypeSchema) -> Self {
		Entity {
			schema,
			types: Vec::new(),
			functional: BTreeMap::new(),
			values: BTreeMap::new(),
			lang_maps: BTreeMap::new(),
			unknown: Map::new(),
		}
	}

	pub fn schema(&self) -> &'static TypeSchema {
		self.schema
	}

	/// canonical type name, always present once serialized
	pub fn type_name(&self) -> &'static str {
		self.schema.name
	}

	pub fn is_a(&self, schema: &TypeSchema) -> bool {
		self.schema.is_a(schema)
	}

	pub fn types(&self) -> &[TypeName] {
		&self.types
	}

	pub fn types_mut(&mut self) -> &mut Vec<TypeName> {
		&mut self.types
	}

	pub fn values(&self, property: &'static PropertySpec) -> Values<'_> {
		let nodes = self.values.get(property.name).map(Vec::as_slice).unwrap_or_default();
		Values::new(property, nodes)
	}

	pub fn values_mut(&mut self, property: &'static PropertySpec) -> ValuesMut<'_> {
		ValuesMut::new(property, self)
	}

	pub fn single(&self, property: &'static PropertySpec) -> Single<'_> {
		Single::new(property, self.functional.get(property.name))
	}

	pub fn single_mut(&mut self, property: &'static PropertySpec) -> SingleMut<'_> {
		SingleMut::new(property, self)
	}

	pub fn lang_map(&self, property: &'static PropertySpec) -> Option<&LangMap> {
		self.lang_maps.get(property.name)
	}

	/// Language map of `property`, created empty if missing. A present map is serialized even
	/// when empty.
	pub fn lang_map_mut(&mut self, property: &'static PropertySpec) -> VocabResult<&mut LangMap> {
		if !self.schema.declares(property) {
			return Err(Error::Undeclared { property: property.name, entity: self.schema.name });
		}
		Ok(self.lang_maps.entry(property.name).or_default())
	}

	pub fn remove_lang_map(&mut self, property: &'static PropertySpec) -> Option<LangMap> {
		self.lang_maps.remove(property.name)
	}

	/// value of a key outside this entity's vocabulary
	pub fn extension(&self, key: &str) -> Option<&Value> {
		self.unknown.get(key)
	}

	/// Sets or, with `None`, removes a key outside this entity's vocabulary. Keys that collide
	/// with declared properties or `type` are shadowed by them when serializing.
	pub fn set_extension(&mut self, key: &str, value: Option<Value>) -> Option<Value> {
		match value {
			Some(x) => self.unknown.insert(key.to_string(), x),
			None => self.unknown.remove(key),
		}
	}

	pub fn extensions(&self) -> &Map<String, Value> {
		&self.unknown
	}

	/// Encodes the entity into a json object.
	///
	/// Single values are written bare, longer sequences as arrays. The canonical type name is
	/// added to `type` in the output when the entity does not already declare it, so repeated
	/// calls give the same result.
	pub fn serialize(&self) -> VocabResult<Map<String, Value>> {
		let mut out = self.unknown.clone();

		for (name, node) in &self.functional {
			out.insert(name.to_string(), node.encode(*name)?);
		}

		for (name, nodes) in &self.values {
			let value = match nodes.as_slice() {
				[] => continue,
				[node] => match node.encode(*name)? {
					// a lone array would read back as that many values
					Value::Array(x) => Value::Array(vec![Value::Array(x)]),
					x => x,
				},
				nodes => Value::Array(
					nodes.iter()
						.map(|x| x.encode(*name))
						.collect::<VocabResult<Vec<Value>>>()?
				),
			};
			out.insert(name.to_string(), value);
		}

		for (name, map) in &self.lang_maps {
			out.insert(name.to_string(), map.encode());
		}

		out.insert(TYPE.to_string(), self.encode_types());
		Ok(out)
	}

	pub fn to_value(&self) -> VocabResult<Value> {
		Ok(Value::Object(self.serialize()?))
	}

	/// Fills the entity from a json object, resolving embedded entities through the global
	/// registry.
	///
	/// Only keys present in `map` are replaced. On error the entity may be left partially
	/// updated.
	pub fn deserialize(&mut self, map: &Map<String, Value>) -> VocabResult<()> {
		self.deserialize_with(map, Registry::global())
	}

	pub fn deserialize_with(&mut self, map: &Map<String, Value>, registry: &Registry) -> VocabResult<()> {
		self.decode_map(map, &Decoder::new(registry))
	}

	/// builds an entity of the type named by the value's own `type`
	pub fn from_value(value: &Value) -> VocabResult<Entity> {
		Registry::global().resolve_value(value)
	}

	pub(crate) fn decode_map(&mut self, map: &Map<String, Value>, decoder: &Decoder) -> VocabResult<()> {
		let properties = self.schema.all_properties();
		for (key, raw) in map {
			if key == CONTEXT {
				continue;
			}
			if key == TYPE {
				self.types = TypeName::decode_all(raw);
				continue;
			}

			let Some(property) = properties.iter().copied().find(|p| p.name == key) else {
				tracing::debug!("'{key}' is not a property of {}, kept as extension", self.schema.name);
				self.unknown.insert(key.clone(), raw.clone());
				continue;
			};

			match property.functionality {
				Functionality::Functional => {
					let node = Node::decode(property, raw, decoder)?;
					self.functional.insert(property.name, node);
					self.unknown.remove(key);
				},
				Functionality::NonFunctional => {
					let nodes = match raw {
						Value::Array(xs) => xs.iter()
							.map(|x| Node::decode(property, x, decoder))
							.collect::<VocabResult<Vec<Node>>>()?,
						x => vec![Node::decode(property, x, decoder)?],
					};
					self.values.insert(property.name, nodes);
					self.unknown.remove(key);
				},
				Functionality::LanguageMap => match raw {
					Value::Object(x) => {
						self.lang_maps.insert(property.name, LangMap::decode(x));
						self.unknown.remove(key);
					},
					x => {
						tracing::debug!("'{key}' is not a language map, kept as extension");
						self.lang_maps.remove(property.name);
						self.unknown.insert(key.clone(), x.clone());
					},
				},
			}
		}
		Ok(())
	}

	fn encode_types(&self) -> Value {
		let mut types: Vec<Value> = self.types.iter().map(TypeName::encode).collect();
		if !self.types.iter().any(|x| x.as_str() == Some(self.schema.name)) {
			types.push(Value::String(self.schema.name.to_string()));
		}
		match types.len() {
			1 => types.remove(0),
			_ => Value::Array(types),
		}
	}
}

// empty value sequences mean the same as absent ones
impl PartialEq for Entity {
	fn eq(&self, other: &Self) -> bool {
		fn populated<'a>(
			values: &'a BTreeMap<&'static str, Vec<Node>>,
		) -> impl Iterator<Item = (&'a &'static str, &'a Vec<Node>)> {
			values.iter().filter(|(_, nodes)| !nodes.is_empty())
		}

		self.schema == other.schema
			&& self.types == other.types
			&& self.functional == other.functional
			&& self.lang_maps == other.lang_maps
			&& self.unknown == other.unknown
			&& populated(&self.values).eq(populated(&other.values))
	}
}

impl serde::Serialize for Entity {
	fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let map = Entity::serialize(self).map_err(serde::ser::Error::custom)?;
		serde::Serialize::serialize(&map, serializer)
	}
}

impl<'de> serde::Deserialize<'de> for Entity {
	fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let value = <Value as serde::Deserialize>::deserialize(deserializer)?;
		Entity::from_value(&value).map_err(serde::de::Error::custom)
	}
}
