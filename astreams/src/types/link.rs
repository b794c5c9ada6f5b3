use crate::Base;

use super::property;

crate::vocab! {
	LINK = "Link" : [] {
		ID, NAME, NAME_MAP, MEDIA_TYPE, PREVIEW,
		HREF, HREFLANG, REL, HEIGHT, WIDTH,
	};
	MENTION = "Mention" : [LINK];
	#[cfg(feature = "activitypub-miscellaneous-terms")]
	HASHTAG = "Hashtag" : [LINK];
}

pub trait Link : Base {
	crate::property!(href -> single property::HREF);
	crate::property!(hreflang -> single property::HREFLANG);
	crate::property!(rel -> values property::REL);
	crate::property!(height -> single property::HEIGHT);
	crate::property!(width -> single property::WIDTH);
}

impl Link for crate::Entity {}

#[cfg(test)]
mod test {
	use serde_json::json;

	use crate::{prelude::*, types, Entity};

	#[test]
	fn mentions_read_as_links() {
		let mention = Entity::from_value(&json!({
			"type": "Mention",
			"href": "https://example.com/users/bob",
			"name": "@bob@example.com",
			"rel": ["nofollow", "me"],
			"width": 12.0,
		})).unwrap();
		assert!(mention.is_a(&types::LINK));
		assert_eq!(mention.href().id(), Some("https://example.com/users/bob"));
		assert_eq!(mention.name().first().and_then(|x| x.as_str()), Some("@bob@example.com"));
		assert_eq!(mention.rel().len(), 2);
		assert_eq!(mention.width().as_u64(), Some(12));
		assert!(!mention.height().is_present());
	}

	#[test]
	fn links_have_no_content() {
		let mut link = Entity::new(&types::LINK);
		assert!(link.content().is_empty());
		assert!(link.content_mut().append_literal("text").is_err());
		assert!(link.href_mut().set_literal(crate::Iri::parse("https://example.com").unwrap()).is_ok());
	}
}
