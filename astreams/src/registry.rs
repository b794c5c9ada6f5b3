use std::collections::HashMap;
use std::sync::OnceLock;

use crate::{config::RegistryConfig, schema::TypeSchema, Entity, Error, VocabResult};

pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Maps type names to vocabulary types.
///
/// A registry is filled once and then only read: lookups never mutate it, so a single registry
/// can be shared by any number of concurrent decoders.
#[derive(Debug, Clone)]
pub struct Registry {
	types: HashMap<String, &'static TypeSchema>,
	max_depth: usize,
}

impl Default for Registry {
	fn default() -> Self {
		Registry::builtin()
	}
}

impl Registry {
	pub fn empty() -> Self {
		Registry { types: HashMap::new(), max_depth: DEFAULT_MAX_DEPTH }
	}

	/// every type of the built-in vocabulary, under its own name
	pub fn builtin() -> Self {
		let mut registry = Registry::empty();
		for schema in crate::types::BUILTIN.iter().copied() {
			registry.register(schema);
		}
		registry
	}

	pub fn from_config(config: &RegistryConfig) -> Self {
		let mut registry = Registry::builtin().with_max_depth(config.max_depth);
		for (alias, target) in &config.aliases {
			if !registry.alias(alias, target) {
				tracing::warn!("ignoring alias '{alias}': '{target}' is not a registered type");
			}
		}
		registry
	}

	/// process-wide default, used by the `serde` integration and [`Entity::deserialize`]
	pub fn global() -> &'static Registry {
		static GLOBAL: OnceLock<Registry> = OnceLock::new();
		GLOBAL.get_or_init(Registry::builtin)
	}

	pub fn register(&mut self, schema: &'static TypeSchema) {
		self.types.insert(schema.name.to_string(), schema);
	}

	/// Makes `alias` resolve to the type already registered as `target`. Returns false, leaving
	/// the registry untouched, if `target` is unknown.
	pub fn alias(&mut self, alias: &str, target: &str) -> bool {
		match self.types.get(target).copied() {
			Some(schema) => {
				self.types.insert(alias.to_string(), schema);
				true
			},
			None => false,
		}
	}

	pub fn with_max_depth(mut self, max_depth: usize) -> Self {
		self.max_depth = max_depth;
		self
	}

	pub fn max_depth(&self) -> usize {
		self.max_depth
	}

	pub fn resolve(&self, name: &str) -> Option<&'static TypeSchema> {
		self.types.get(name).copied()
	}

	/// a new empty entity of the named type
	pub fn construct(&self, name: &str) -> Option<Entity> {
		self.resolve(name).map(Entity::new)
	}

	/// First candidate, in the order given, naming a registered type usable as `capability`.
	/// Unregistered names and types lacking the capability are skipped.
	pub fn resolve_as(&self, candidates: &[&str], capability: &TypeSchema) -> Option<&'static TypeSchema> {
		for name in candidates {
			match self.resolve(name) {
				Some(schema) if schema.is_a(capability) => {
					tracing::trace!("resolved '{name}' as {}", capability.name);
					return Some(schema);
				},
				Some(_) => tracing::trace!("'{name}' is not usable as {}", capability.name),
				None => tracing::trace!("'{name}' is not registered"),
			}
		}
		None
	}

	/// Builds an entity of the first registered type named by the object's `type` and fills it.
	pub fn resolve_value(&self, value: &serde_json::Value) -> VocabResult<Entity> {
		let serde_json::Value::Object(map) = value else {
			return Err(Error::NotAnObject(value.clone()));
		};
		let candidates = crate::entity::type_names(map);
		let Some(schema) = candidates.iter().find_map(|name| self.resolve(name)) else {
			return Err(Error::UnresolvedType(candidates.iter().map(|x| x.to_string()).collect()));
		};
		let mut entity = Entity::new(schema);
		entity.decode_map(map, &Decoder::new(self))?;
		Ok(entity)
	}
}

/// Registry plus the current nesting depth of one deserialization.
pub(crate) struct Decoder<'r> {
	pub(crate) registry: &'r Registry,
	depth: usize,
}

impl<'r> Decoder<'r> {
	pub(crate) fn new(registry: &'r Registry) -> Self {
		Decoder { registry, depth: 0 }
	}

	/// decoder for the properties of an entity embedded one level deeper
	pub(crate) fn nested(&self) -> VocabResult<Decoder<'r>> {
		if self.depth >= self.registry.max_depth {
			return Err(Error::NestingTooDeep(self.registry.max_depth));
		}
		Ok(Decoder { registry: self.registry, depth: self.depth + 1 })
	}
}
