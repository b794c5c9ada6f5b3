//! Recipients of an object, as named by its addressing properties.

use crate::Object;

/// The special collection that addresses an object to everyone.
pub const PUBLIC: &str = "https://www.w3.org/ns/activitystreams#Public";

/// Compact forms of [`PUBLIC`] that json-ld aware servers emit.
const PUBLIC_COMPACT: [&str; 2] = ["as:Public", "Public"];

pub fn is_public_collection(id: &str) -> bool {
	id == PUBLIC || PUBLIC_COMPACT.contains(&id)
}

pub trait Addressed {
	/// Ids of every recipient, in property order: `to`, `bto`, `cc`, `bcc`. Embedded recipients
	/// count by their `id`; values without one are skipped.
	fn addressed(&self) -> Vec<String>;

	/// ids of primary recipients only, from `to` and `bto`
	fn mentioning(&self) -> Vec<String>;

	fn is_public(&self) -> bool {
		self.addressed().iter().any(|x| is_public_collection(x))
	}
}

impl<T: Object> Addressed for T {
	fn addressed(&self) -> Vec<String> {
		[self.to(), self.bto(), self.cc(), self.bcc()]
			.into_iter()
			.flat_map(|x| x.ids())
			.collect()
	}

	fn mentioning(&self) -> Vec<String> {
		[self.to(), self.bto()]
			.into_iter()
			.flat_map(|x| x.ids())
			.collect()
	}
}

#[cfg(test)]
mod test {
	use super::{Addressed, PUBLIC};
	use crate::{types, Entity};

	fn note() -> Entity {
		Entity::from_value(&serde_json::json!({
			"id": "http://localhost:8080/obj/1",
			"type": "Note",
			"content": "hello world!",
			"published": "2024-06-04T17:09:20+00:00",
			"to": ["http://localhost:8080/usr/root/followers"],
			"bto": [{ "type": "Person", "id": "https://localhost:8080/usr/secret" }],
			"cc": [PUBLIC, { "type": "Person" }],
			"bcc": [],
		})).unwrap()
	}

	#[test]
	fn every_recipient_in_property_order() {
		assert_eq!(
			note().addressed(),
			vec![
				"http://localhost:8080/usr/root/followers".to_string(),
				"https://localhost:8080/usr/secret".to_string(),
				PUBLIC.to_string(),
			]
		);
	}

	#[test]
	fn mentions_are_to_and_bto_only() {
		assert_eq!(
			note().mentioning(),
			vec![
				"http://localhost:8080/usr/root/followers".to_string(),
				"https://localhost:8080/usr/secret".to_string(),
			]
		);
	}

	#[test]
	fn public_in_any_form() {
		assert!(note().is_public());
		let compact = Entity::from_value(&serde_json::json!({ "type": "Note", "cc": "as:Public" })).unwrap();
		assert!(compact.is_public());
		assert!(!Entity::new(&types::NOTE).is_public());
	}
}
