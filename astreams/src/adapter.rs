//! Borrowed views over the values an [`Entity`] holds for one property.
//!
//! Read views ([`Values`], [`Single`]) work for any property and are simply empty when nothing is
//! set. Write views ([`ValuesMut`], [`SingleMut`]) refuse properties the entity's type does not
//! declare, and values the property's range does not admit.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::{
	codec::{Iri, Kind, Literal},
	schema::{PropertySpec, TypeSchema},
	Entity, Error, Node, VocabResult,
};

fn check_declared(property: &'static PropertySpec, entity: &Entity) -> VocabResult<()> {
	if entity.schema().declares(property) {
		Ok(())
	} else {
		Err(Error::Undeclared { property: property.name, entity: entity.schema().name })
	}
}

fn admit(property: &'static PropertySpec, entity: &Entity, node: &Node) -> VocabResult<()> {
	check_declared(property, entity)?;
	property.admit(node)
}

/// Ordered values of a non-functional property.
#[derive(Debug, Clone, Copy)]
pub struct Values<'a> {
	property: &'static PropertySpec,
	nodes: &'a [Node],
}

impl<'a> Values<'a> {
	pub(crate) fn new(property: &'static PropertySpec, nodes: &'a [Node]) -> Self {
		Values { property, nodes }
	}

	pub fn property(&self) -> &'static PropertySpec {
		self.property
	}

	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	pub fn get(&self, i: usize) -> Option<&'a Node> {
		self.nodes.get(i)
	}

	pub fn first(&self) -> Option<&'a Node> {
		self.nodes.first()
	}

	pub fn iter(&self) -> std::slice::Iter<'a, Node> {
		self.nodes.iter()
	}

	pub fn is_entity(&self, i: usize) -> bool {
		self.get(i).is_some_and(Node::is_entity)
	}

	pub fn is_entity_as(&self, i: usize, capability: &TypeSchema) -> bool {
		self.get(i).is_some_and(|x| x.is_entity_as(capability))
	}

	pub fn entity(&self, i: usize) -> Option<&'a Entity> {
		self.get(i)?.entity()
	}

	pub fn is_literal(&self, i: usize) -> bool {
		self.get(i).is_some_and(Node::is_literal)
	}

	pub fn is_kind(&self, i: usize, kind: Kind) -> bool {
		self.get(i).is_some_and(|x| x.is_kind(kind))
	}

	pub fn literal(&self, i: usize) -> Option<&'a Literal> {
		self.get(i)?.literal()
	}

	pub fn is_iri(&self, i: usize) -> bool {
		self.get(i).is_some_and(Node::is_iri)
	}

	pub fn iri(&self, i: usize) -> Option<&'a Iri> {
		self.get(i)?.iri()
	}

	pub fn is_unknown(&self, i: usize) -> bool {
		self.get(i).is_some_and(Node::is_unknown)
	}

	pub fn unknown(&self, i: usize) -> Option<&'a Value> {
		self.get(i)?.unknown()
	}

	/// true if the first value is unknown
	pub fn has_unknown(&self) -> bool {
		self.is_unknown(0)
	}

	pub fn get_unknown(&self) -> Option<&'a Value> {
		self.unknown(0)
	}

	/// ids of every value that points somewhere, in order
	pub fn ids(&self) -> Vec<String> {
		self.nodes.iter()
			.filter_map(Node::id)
			.map(|x| x.to_string())
			.collect()
	}
}

impl<'a> IntoIterator for Values<'a> {
	type Item = &'a Node;
	type IntoIter = std::slice::Iter<'a, Node>;

	fn into_iter(self) -> Self::IntoIter {
		self.nodes.iter()
	}
}

pub struct ValuesMut<'a> {
	property: &'static PropertySpec,
	entity: &'a mut Entity,
}

impl<'a> ValuesMut<'a> {
	pub(crate) fn new(property: &'static PropertySpec, entity: &'a mut Entity) -> Self {
		ValuesMut { property, entity }
	}

	pub fn as_values(&self) -> Values<'_> {
		self.entity.values(self.property)
	}

	pub fn len(&self) -> usize {
		self.as_values().len()
	}

	pub fn is_empty(&self) -> bool {
		self.as_values().is_empty()
	}

	pub fn append(&mut self, node: Node) -> VocabResult<()> {
		admit(self.property, self.entity, &node)?;
		self.nodes().push(node);
		Ok(())
	}

	pub fn prepend(&mut self, node: Node) -> VocabResult<()> {
		admit(self.property, self.entity, &node)?;
		self.nodes().insert(0, node);
		Ok(())
	}

	pub fn append_iri(&mut self, iri: Iri) -> VocabResult<()> {
		self.append(Node::Iri(iri))
	}

	pub fn prepend_iri(&mut self, iri: Iri) -> VocabResult<()> {
		self.prepend(Node::Iri(iri))
	}

	pub fn append_entity(&mut self, entity: Entity) -> VocabResult<()> {
		let node = Node::embed(self.property, entity)?;
		self.append(node)
	}

	pub fn prepend_entity(&mut self, entity: Entity) -> VocabResult<()> {
		let node = Node::embed(self.property, entity)?;
		self.prepend(node)
	}

	pub fn append_literal(&mut self, literal: impl Into<Literal>) -> VocabResult<()> {
		self.append(Node::Literal(literal.into()))
	}

	pub fn prepend_literal(&mut self, literal: impl Into<Literal>) -> VocabResult<()> {
		self.prepend(Node::Literal(literal.into()))
	}

	/// removes the value at `i`, keeping the order of the others
	pub fn remove(&mut self, i: usize) -> Option<Node> {
		let nodes = self.entity.values.get_mut(self.property.name)?;
		if i < nodes.len() {
			Some(nodes.remove(i))
		} else {
			None
		}
	}

	pub fn clear(&mut self) {
		self.entity.values.remove(self.property.name);
	}

	pub fn entity_mut(&mut self, i: usize) -> Option<&mut Entity> {
		self.entity.values.get_mut(self.property.name)?.get_mut(i)?.entity_mut()
	}

	/// Unknown value for the property as a whole: it takes the place of the first value,
	/// or becomes the only one when there are none.
	pub fn set_unknown(&mut self, value: Value) -> VocabResult<()> {
		let node = Node::Unknown(value);
		admit(self.property, self.entity, &node)?;
		let nodes = self.nodes();
		if nodes.is_empty() {
			nodes.push(node);
		} else {
			nodes[0] = node;
		}
		Ok(())
	}

	fn nodes(&mut self) -> &mut Vec<Node> {
		self.entity.values.entry(self.property.name).or_default()
	}
}

/// Value of a functional property.
#[derive(Debug, Clone, Copy)]
pub struct Single<'a> {
	property: &'static PropertySpec,
	node: Option<&'a Node>,
}

impl<'a> Single<'a> {
	pub(crate) fn new(property: &'static PropertySpec, node: Option<&'a Node>) -> Self {
		Single { property, node }
	}

	pub fn property(&self) -> &'static PropertySpec {
		self.property
	}

	pub fn get(&self) -> Option<&'a Node> {
		self.node
	}

	pub fn is_present(&self) -> bool {
		self.node.is_some()
	}

	pub fn is_entity(&self) -> bool {
		self.node.is_some_and(Node::is_entity)
	}

	pub fn is_entity_as(&self, capability: &TypeSchema) -> bool {
		self.node.is_some_and(|x| x.is_entity_as(capability))
	}

	pub fn entity(&self) -> Option<&'a Entity> {
		self.node?.entity()
	}

	pub fn is_literal(&self) -> bool {
		self.node.is_some_and(Node::is_literal)
	}

	pub fn is_kind(&self, kind: Kind) -> bool {
		self.node.is_some_and(|x| x.is_kind(kind))
	}

	pub fn literal(&self) -> Option<&'a Literal> {
		self.node?.literal()
	}

	pub fn is_iri(&self) -> bool {
		self.node.is_some_and(Node::is_iri)
	}

	pub fn iri(&self) -> Option<&'a Iri> {
		self.node?.iri()
	}

	pub fn has_unknown(&self) -> bool {
		self.node.is_some_and(Node::is_unknown)
	}

	pub fn get_unknown(&self) -> Option<&'a Value> {
		self.node?.unknown()
	}

	pub fn id(&self) -> Option<&'a str> {
		self.node?.id()
	}

	pub fn as_str(&self) -> Option<&'a str> {
		self.node?.as_str()
	}

	pub fn as_f64(&self) -> Option<f64> {
		self.node?.as_f64()
	}

	pub fn as_bool(&self) -> Option<bool> {
		self.node?.as_bool()
	}

	pub fn as_u64(&self) -> Option<u64> {
		self.node?.as_u64()
	}

	pub fn as_date_time(&self) -> Option<chrono::DateTime<chrono::FixedOffset>> {
		self.node?.as_date_time()
	}

	pub fn as_duration(&self) -> Option<chrono::TimeDelta> {
		self.node?.as_duration()
	}
}

pub struct SingleMut<'a> {
	property: &'static PropertySpec,
	entity: &'a mut Entity,
}

impl<'a> SingleMut<'a> {
	pub(crate) fn new(property: &'static PropertySpec, entity: &'a mut Entity) -> Self {
		SingleMut { property, entity }
	}

	pub fn as_single(&self) -> Single<'_> {
		self.entity.single(self.property)
	}

	/// replaces the value, returning the previous one
	pub fn set(&mut self, node: Node) -> VocabResult<Option<Node>> {
		admit(self.property, self.entity, &node)?;
		Ok(self.entity.functional.insert(self.property.name, node))
	}

	pub fn set_iri(&mut self, iri: Iri) -> VocabResult<Option<Node>> {
		self.set(Node::Iri(iri))
	}

	pub fn set_entity(&mut self, entity: Entity) -> VocabResult<Option<Node>> {
		let node = Node::embed(self.property, entity)?;
		self.set(node)
	}

	pub fn set_literal(&mut self, literal: impl Into<Literal>) -> VocabResult<Option<Node>> {
		self.set(Node::Literal(literal.into()))
	}

	pub fn set_unknown(&mut self, value: Value) -> VocabResult<Option<Node>> {
		self.set(Node::Unknown(value))
	}

	pub fn clear(&mut self) -> Option<Node> {
		self.entity.functional.remove(self.property.name)
	}

	pub fn entity_mut(&mut self) -> Option<&mut Entity> {
		self.entity.functional.get_mut(self.property.name)?.entity_mut()
	}
}

/// Natural language values keyed by language tag.
///
/// The empty tag stands for the default language. Lookups of a missing tag yield an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LangMap(BTreeMap<String, String>);

impl LangMap {
	pub fn new() -> Self {
		LangMap::default()
	}

	pub fn get(&self, lang: &str) -> &str {
		self.0.get(lang).map(String::as_str).unwrap_or_default()
	}

	pub fn contains(&self, lang: &str) -> bool {
		self.0.contains_key(lang)
	}

	pub fn set(&mut self, lang: impl ToString, value: impl ToString) -> Option<String> {
		self.0.insert(lang.to_string(), value.to_string())
	}

	pub fn remove(&mut self, lang: &str) -> Option<String> {
		self.0.remove(lang)
	}

	pub fn languages(&self) -> impl Iterator<Item = &str> {
		self.0.keys().map(String::as_str)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// entries whose value is not a string are dropped
	pub(crate) fn decode(map: &serde_json::Map<String, Value>) -> Self {
		LangMap(
			map.iter()
				.filter_map(|(lang, value)| Some((lang.clone(), value.as_str()?.to_string())))
				.collect()
		)
	}

	pub(crate) fn encode(&self) -> Value {
		Value::Object(
			self.0.iter()
				.map(|(lang, value)| (lang.clone(), Value::String(value.clone())))
				.collect()
		)
	}
}

impl<K: ToString, V: ToString> FromIterator<(K, V)> for LangMap {
	fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
		LangMap(iter.into_iter().map(|(k, v)| (k.to_string(), v.to_string())).collect())
	}
}

#[cfg(test)]
mod test {
	use serde_json::json;

	use super::LangMap;
	use crate::{
		codec::{Iri, Kind},
		types::{self, property},
		Entity, Error, Node,
	};

	fn iri(x: &str) -> Iri {
		Iri::parse(x).unwrap()
	}

	#[test]
	fn append_and_prepend_keep_order() {
		let mut note = Entity::new(&types::NOTE);
		let mut to = note.values_mut(&property::TO);
		to.append_iri(iri("https://example.com/a")).unwrap();
		to.append_iri(iri("https://example.com/b")).unwrap();
		to.append_iri(iri("https://example.com/c")).unwrap();
		to.prepend_iri(iri("https://example.com/d")).unwrap();

		let to = note.values(&property::TO);
		assert_eq!(to.len(), 4);
		assert_eq!(
			to.ids(),
			vec!["https://example.com/d", "https://example.com/a", "https://example.com/b", "https://example.com/c"]
		);
		assert!(to.is_iri(3));
		assert!(!to.is_entity(3));
		assert_eq!(to.iri(4), None);
	}

	#[test]
	fn remove_keeps_the_rest_in_order() {
		let mut note = Entity::new(&types::NOTE);
		let mut cc = note.values_mut(&property::CC);
		for x in ["https://example.com/1", "https://example.com/2", "https://example.com/3"] {
			cc.append_iri(iri(x)).unwrap();
		}
		let removed = cc.remove(1).unwrap();
		assert_eq!(removed.id(), Some("https://example.com/2"));
		assert!(cc.remove(7).is_none());
		assert_eq!(note.values(&property::CC).ids(), vec!["https://example.com/1", "https://example.com/3"]);
	}

	#[test]
	fn set_unknown_takes_the_first_slot() {
		let mut note = Entity::new(&types::NOTE);
		note.values_mut(&property::TAG).set_unknown(json!({ "weird": true })).unwrap();
		assert_eq!(note.values(&property::TAG).len(), 1);
		assert!(note.values(&property::TAG).has_unknown());

		let mut tag = note.values_mut(&property::TAG);
		tag.append_iri(iri("https://example.com/tags/rust")).unwrap();
		tag.set_unknown(json!("replaced")).unwrap();
		let tag = note.values(&property::TAG);
		assert_eq!(tag.len(), 2);
		assert_eq!(tag.get_unknown(), Some(&json!("replaced")));
		assert!(tag.is_iri(1));
	}

	#[test]
	fn entities_are_tagged_with_their_capability() {
		let mut person = Entity::new(&types::PERSON);
		person.single_mut(&property::ID).set_iri(iri("https://example.com/alice")).unwrap();

		let mut like = Entity::new(&types::LIKE);
		like.values_mut(&property::ACTOR).append_entity(person).unwrap();
		let mut mention = Entity::new(&types::MENTION);
		mention.single_mut(&property::HREF).set_literal(iri("https://example.com/bob")).unwrap();
		like.values_mut(&property::ACTOR).append_entity(mention).unwrap();

		let actor = like.values(&property::ACTOR);
		assert!(actor.is_entity_as(0, &types::OBJECT));
		assert!(actor.is_entity_as(1, &types::LINK));
		assert_eq!(actor.entity(0).map(Entity::schema), Some(&types::PERSON));
		assert_eq!(actor.ids(), vec!["https://example.com/alice"]);
	}

	#[test]
	fn out_of_range_values_are_refused() {
		let mut note = Entity::new(&types::NOTE);
		let err = note.values_mut(&property::ICON).append_entity(Entity::new(&types::NOTE)).unwrap_err();
		assert!(matches!(err, Error::OutOfRange { property: "icon", .. }));
		let err = note.single_mut(&property::PUBLISHED).set_literal(true).unwrap_err();
		assert!(matches!(err, Error::OutOfRange { property: "published", .. }));
		let err = note.values_mut(&property::TO).append(Node::Entity(&types::IMAGE, Box::new(Entity::new(&types::IMAGE)))).unwrap_err();
		assert!(matches!(err, Error::OutOfRange { .. }));
		assert!(note.values(&property::TO).is_empty());
	}

	#[test]
	fn objects_are_refused_where_they_could_not_be_read_back() {
		let mut place = Entity::new(&types::PLACE);
		let err = place.single_mut(&property::ALTITUDE).set_unknown(json!({ "foo": "bar" })).unwrap_err();
		assert!(matches!(err, Error::UnexpectedObject { property: "altitude", .. }));
		let err = place.values_mut(&property::NAME).set_unknown(json!({ "foo": "bar" })).unwrap_err();
		assert!(matches!(err, Error::UnexpectedObject { property: "name", .. }));
		assert_eq!(place.to_value().unwrap(), json!({ "type": "Place" }));

		// scalars and objects where entities may go are fine, and read back
		place.single_mut(&property::ALTITUDE).set_unknown(json!([1, 2])).unwrap();
		place.values_mut(&property::TAG).set_unknown(json!({ "foo": "bar" })).unwrap();
		let out = place.serialize().unwrap();
		let mut back = Entity::new(&types::PLACE);
		back.deserialize(&out).unwrap();
		assert!(back.single(&property::ALTITUDE).has_unknown());
		assert_eq!(back.serialize().unwrap(), out);
	}

	#[test]
	fn undeclared_properties_are_refused() {
		let mut note = Entity::new(&types::NOTE);
		let err = note.single_mut(&property::HREF).set_iri(iri("https://example.com")).unwrap_err();
		assert!(matches!(err, Error::Undeclared { property: "href", entity: "Note" }));
		let mut arrive = Entity::new(&types::ARRIVE);
		let err = arrive.values_mut(&property::OBJECT).append_iri(iri("https://example.com")).unwrap_err();
		assert!(matches!(err, Error::Undeclared { property: "object", entity: "Arrive" }));
	}

	#[test]
	fn single_values_are_replaced() {
		let mut place = Entity::new(&types::PLACE);
		let mut altitude = place.single_mut(&property::ALTITUDE);
		assert!(altitude.set_literal(10.0).unwrap().is_none());
		let previous = altitude.set_literal(12.5).unwrap();
		assert_eq!(previous.and_then(|x| x.as_f64()), Some(10.0));
		assert_eq!(place.single(&property::ALTITUDE).as_f64(), Some(12.5));
		assert!(place.single(&property::ALTITUDE).is_kind(Kind::Float));
		assert!(place.single_mut(&property::ALTITUDE).clear().is_some());
		assert!(!place.single(&property::ALTITUDE).is_present());
	}

	#[test]
	fn lang_maps_default_to_empty_strings() {
		let mut names = LangMap::new();
		names.set("en", "Hello");
		names.set("fr", "Bonjour");
		assert_eq!(names.get("fr"), "Bonjour");
		assert_eq!(names.get("de"), "");
		assert_eq!(names.languages().collect::<Vec<_>>(), vec!["en", "fr"]);

		let raw = json!({ "en": "Hello", "it": 3 });
		let decoded = LangMap::decode(raw.as_object().unwrap());
		assert_eq!(decoded.len(), 1);
		assert_eq!(decoded.encode(), json!({ "en": "Hello" }));
	}
}
