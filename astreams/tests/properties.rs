//! Property-based tests over arbitrary json documents.
//!
//! - decoding never panics, whatever the input
//! - every decoded value, encoded on its own, reads back as the same variant and content
//! - once decoded, encoding is stable: decode(encode(x)) encodes back to the same document

use astreams::{
	schema::Functionality,
	types, Entity, Node,
};
use proptest::{prelude::*, test_runner::TestCaseError};
use serde_json::{Map, Value};

// =============================================================================
// HELPER STRATEGIES
// =============================================================================

const KEYS: &[&str] = &[
	"type", "@context", "id", "name", "nameMap", "content", "contentMap", "to", "cc", "tag",
	"actor", "object", "icon", "url", "href", "published", "duration", "altitude", "totalItems",
	"first", "closed", "inbox", "preferredUsername", "sharedInbox", "foo",
];

const TYPES: &[&str] = &[
	"Note", "Person", "Image", "Mention", "Link", "Create", "Question", "OrderedCollection",
	"CollectionPage", "Place", "TotallyUnregisteredType",
];

const STRINGS: &[&str] = &[
	"https://example.com/alice",
	"https://www.w3.org/ns/activitystreams#Public",
	"/relative/path",
	"hello world",
	"",
	"2024-06-04T17:09:20+02:00",
	"2015-01-25T12:34Z",
	"PT5S",
	"P1Y2M",
	"en-US",
	"text/html",
	"mailto:alice@example.com",
];

fn string_strategy() -> impl Strategy<Value = String> {
	prop_oneof![
		prop::sample::select(STRINGS).prop_map(|x| x.to_string()),
		prop::sample::select(TYPES).prop_map(|x| x.to_string()),
		prop::string::string_regex("[a-zA-Z0-9 :/.#-]{0,24}").unwrap(),
	]
}

fn leaf_strategy() -> impl Strategy<Value = Value> {
	prop_oneof![
		Just(Value::Null),
		any::<bool>().prop_map(Value::Bool),
		any::<u32>().prop_map(Value::from),
		(-1000i64..0).prop_map(Value::from),
		(-1.0e6f64..1.0e6).prop_map(Value::from),
		string_strategy().prop_map(Value::String),
	]
}

fn type_strategy() -> impl Strategy<Value = Value> {
	prop_oneof![
		prop::sample::select(TYPES).prop_map(Value::from),
		prop::collection::vec(prop::sample::select(TYPES).prop_map(Value::from), 0..3).prop_map(Value::Array),
	]
}

fn json_strategy() -> impl Strategy<Value = Value> {
	leaf_strategy().prop_recursive(4, 48, 6, |inner| {
		prop_oneof![
			prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
			object_strategy(inner),
		]
	})
}

fn object_strategy(inner: impl Strategy<Value = Value> + Clone) -> impl Strategy<Value = Value> {
	(
		prop::option::of(type_strategy()),
		prop::collection::vec((prop::sample::select(KEYS), inner), 0..6),
	)
		.prop_map(|(kind, entries)| {
			let mut map: Map<String, Value> = entries
				.into_iter()
				.map(|(k, v)| (k.to_string(), v))
				.collect();
			if let Some(kind) = kind {
				map.insert("type".to_string(), kind);
			}
			Value::Object(map)
		})
}

fn document_strategy() -> impl Strategy<Value = Map<String, Value>> {
	object_strategy(json_strategy().boxed()).prop_map(|x| match x {
		Value::Object(map) => map,
		_ => Map::new(),
	})
}

// =============================================================================
// HELPERS
// =============================================================================

fn decode(map: &Map<String, Value>) -> astreams::VocabResult<Entity> {
	let mut note = Entity::new(&types::NOTE);
	note.deserialize(map)?;
	Ok(note)
}

fn notes(types: &Value) -> usize {
	match types {
		Value::Array(xs) => xs.iter().filter(|x| x.as_str() == Some("Note")).count(),
		x => usize::from(x.as_str() == Some("Note")),
	}
}

/// Every value, moved alone into a fresh entity of the same type, is encoded and read back as
/// itself; values of embedded entities are checked the same way.
fn slots_read_back(entity: &Entity) -> Result<(), TestCaseError> {
	let schema = entity.schema();
	for property in schema.all_properties() {
		let functional = match property.functionality {
			Functionality::Functional => true,
			Functionality::NonFunctional => false,
			Functionality::LanguageMap => continue,
		};
		let nodes: Vec<&Node> = if functional {
			entity.single(property).get().into_iter().collect()
		} else {
			entity.values(property).iter().collect()
		};

		for node in nodes {
			let mut alone = Entity::new(schema);
			if functional {
				alone.single_mut(property).set(node.clone()).unwrap();
			} else {
				alone.values_mut(property).append(node.clone()).unwrap();
			}

			let mut back = Entity::new(schema);
			back.deserialize(&alone.serialize().unwrap()).unwrap();
			if functional {
				prop_assert_eq!(back.single(property).get(), Some(node));
			} else {
				prop_assert_eq!(back.values(property).len(), 1);
				prop_assert_eq!(back.values(property).get(0), Some(node));
			}

			if let Some(nested) = node.entity() {
				slots_read_back(nested)?;
			}
		}
	}
	Ok(())
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
	#![proptest_config(ProptestConfig::with_cases(512))]

	/// Arbitrary input is either decoded or refused with an error, never a panic.
	#[test]
	fn decoding_never_panics(raw in json_strategy()) {
		let _ = Entity::from_value(&raw);
		if let Value::Object(map) = &raw {
			let _ = decode(map);
		}
	}

	/// Each decoded value keeps its variant, and its content, through encoding on its own.
	#[test]
	fn every_value_reads_back_as_itself(map in document_strategy()) {
		if let Ok(entity) = decode(&map) {
			slots_read_back(&entity)?;
		}
	}

	/// Encoding a decoded document and decoding it again changes nothing.
	#[test]
	fn encoding_is_stable(map in document_strategy()) {
		if let Ok(first) = decode(&map) {
			let encoded = first.serialize().unwrap();
			let second = decode(&encoded).unwrap();
			prop_assert_eq!(second.serialize().unwrap(), encoded);
		}
	}

	/// The canonical type name is added once, and only when the document lacks it, however many
	/// times the entity is encoded.
	#[test]
	fn type_name_is_injected_once(map in document_strategy()) {
		if let Ok(entity) = decode(&map) {
			let once = entity.to_value().unwrap();
			let twice = entity.to_value().unwrap();
			prop_assert_eq!(&once, &twice);
			let declared = notes(map.get("type").unwrap_or(&Value::Null));
			prop_assert_eq!(notes(&once["type"]), declared.max(1));
		}
	}

	/// `@context` is consumed on input and never written back.
	#[test]
	fn context_is_never_reemitted(map in document_strategy()) {
		if let Ok(entity) = decode(&map) {
			prop_assert!(entity.extension("@context").is_none());
			prop_assert!(entity.serialize().unwrap().get("@context").is_none());
		}
	}
}
