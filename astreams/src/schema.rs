use crate::{Error, Kind, Node, VocabResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Functionality {
	/// at most one value
	Functional,
	/// ordered sequence of values, duplicates allowed
	NonFunctional,
	/// language tag to string dictionary (`nameMap`, `contentMap`, ...)
	LanguageMap,
}

/// One acceptable variant of a property value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Range {
	/// an embedded entity usable as the given type (the capability)
	Entity(&'static TypeSchema),
	Literal(Kind),
}

/// Declaration of a vocabulary property.
///
/// `range` lists variants in resolution order. Every property implicitly also accepts a bare IRI
/// reference and an unknown value, which are tried after everything in `range`.
#[derive(Debug)]
pub struct PropertySpec {
	pub name: &'static str,
	pub functionality: Functionality,
	pub range: &'static [Range],
}

impl PropertySpec {
	pub fn capabilities(&self) -> impl Iterator<Item = &'static TypeSchema> + '_ {
		self.range.iter().filter_map(|r| match r {
			Range::Entity(schema) => Some(*schema),
			Range::Literal(_) => None,
		})
	}

	pub fn kinds(&self) -> impl Iterator<Item = Kind> + '_ {
		self.range.iter().filter_map(|r| match r {
			Range::Literal(kind) => Some(*kind),
			Range::Entity(_) => None,
		})
	}

	/// first declared capability an entity of this schema satisfies
	pub fn capability_for(&self, schema: &TypeSchema) -> Option<&'static TypeSchema> {
		self.capabilities().find(|c| schema.is_a(c))
	}

	/// Checks that a value built by hand is one the decoder could have produced for this property.
	pub fn admit(&self, node: &Node) -> VocabResult<()> {
		if let Node::Unknown(value @ serde_json::Value::Object(_)) = node {
			// would be refused when read back
			if self.capabilities().next().is_none() {
				return Err(Error::UnexpectedObject { property: self.name, value: value.clone() });
			}
		}
		let admitted = match node {
			Node::Entity(capability, entity) =>
				self.capabilities().any(|c| c == *capability) && entity.schema().is_a(capability),
			Node::Literal(literal) => self.kinds().any(|k| k == literal.kind()),
			Node::Iri(_) | Node::Unknown(_) => true,
		};
		if admitted {
			Ok(())
		} else {
			Err(Error::OutOfRange { property: self.name, variant: node.describe() })
		}
	}
}

/// Declaration of a vocabulary type.
///
/// Types form a DAG through `extends`: a type declares its own properties plus all properties of
/// its ancestors, except those named in `without` (e.g. intransitive activities drop `object`).
pub struct TypeSchema {
	pub name: &'static str,
	pub extends: &'static [&'static TypeSchema],
	pub properties: &'static [&'static PropertySpec],
	pub without: &'static [&'static str],
}

impl TypeSchema {
	/// true if this type is `other` or descends from it, i.e. can be used where `other` is expected
	pub fn is_a(&self, other: &TypeSchema) -> bool {
		self == other || self.extends.iter().any(|parent| parent.is_a(other))
	}

	/// every property this type declares, own first, then inherited, without duplicates
	pub fn all_properties(&self) -> Vec<&'static PropertySpec> {
		let mut out = Vec::new();
		self.collect(&mut Vec::new(), &mut out);
		out
	}

	pub fn property(&self, name: &str) -> Option<&'static PropertySpec> {
		self.all_properties().into_iter().find(|p| p.name == name)
	}

	pub fn declares(&self, property: &PropertySpec) -> bool {
		self.property(property.name).is_some()
	}

	fn collect(&self, excluded: &mut Vec<&'static str>, out: &mut Vec<&'static PropertySpec>) {
		let mark = excluded.len();
		excluded.extend_from_slice(self.without);
		for property in self.properties {
			if !excluded.contains(&property.name) && !out.iter().any(|p| p.name == property.name) {
				out.push(property);
			}
		}
		for parent in self.extends {
			parent.collect(excluded, out);
		}
		excluded.truncate(mark);
	}
}

// type names are unique across the vocabulary
impl PartialEq for TypeSchema {
	fn eq(&self, other: &Self) -> bool {
		self.name == other.name
	}
}

impl Eq for TypeSchema {}

impl std::fmt::Debug for TypeSchema {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_tuple("TypeSchema").field(&self.name).finish()
	}
}

#[cfg(test)]
mod test {
	use crate::types::{self, property};

	#[test]
	fn capabilities_follow_the_type_hierarchy() {
		assert!(types::REMOVE.is_a(&types::ACTIVITY));
		assert!(types::REMOVE.is_a(&types::OBJECT));
		assert!(types::MENTION.is_a(&types::LINK));
		assert!(!types::MENTION.is_a(&types::OBJECT));
		assert!(!types::NOTE.is_a(&types::LINK));
		assert!(types::ORDERED_COLLECTION_PAGE.is_a(&types::COLLECTION_PAGE));
		assert!(types::ORDERED_COLLECTION_PAGE.is_a(&types::ORDERED_COLLECTION));
	}

	#[test]
	fn intransitive_activities_drop_object() {
		assert!(types::REMOVE.declares(&property::OBJECT));
		assert!(types::ACTIVITY.declares(&property::OBJECT));
		assert!(!types::INTRANSITIVE_ACTIVITY.declares(&property::OBJECT));
		assert!(!types::QUESTION.declares(&property::OBJECT));
		assert!(types::QUESTION.declares(&property::ACTOR));
		assert!(types::QUESTION.declares(&property::ONE_OF));
	}

	#[test]
	fn inherited_properties_are_listed_once() {
		let properties = types::ORDERED_COLLECTION_PAGE.all_properties();
		let total_items = properties.iter().filter(|p| p.name == "totalItems").count();
		assert_eq!(total_items, 1);
		assert!(properties.iter().any(|p| p.name == "startIndex"));
		assert!(properties.iter().any(|p| p.name == "orderedItems"));
		assert!(properties.iter().any(|p| p.name == "partOf"));
		assert!(properties.iter().any(|p| p.name == "id"));
	}

	#[test]
	fn links_do_not_declare_object_properties() {
		assert!(types::LINK.declares(&property::HREF));
		assert!(types::LINK.declares(&property::NAME));
		assert!(!types::LINK.declares(&property::CONTENT));
		assert!(!types::NOTE.declares(&property::HREF));
	}

	#[test]
	fn capability_is_the_first_declared_one_satisfied() {
		assert_eq!(property::ACTOR.capability_for(&types::PERSON), Some(&types::OBJECT));
		assert_eq!(property::ACTOR.capability_for(&types::MENTION), Some(&types::LINK));
		assert_eq!(property::ICON.capability_for(&types::NOTE), None);
		assert_eq!(property::ICON.capability_for(&types::IMAGE), Some(&types::IMAGE));
	}
}
