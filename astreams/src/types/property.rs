//! Every vocabulary property.
//!
//! Ranges list embedded entity capabilities first and literal kinds after them, in the order the
//! vocabulary publishes them. Resolution tries them in this order, so it is part of each
//! property's contract.

use crate::{
	codec::Kind,
	schema::{Functionality, PropertySpec, Range},
	types,
};

macro_rules! declare {
	($(
		$(#[$meta:meta])*
		$ident:ident = $name:literal, $functionality:ident, [$($entity:ident),*], [$($kind:ident),*];
	)*) => {
		$(
			$(#[$meta])*
			pub static $ident: PropertySpec = PropertySpec {
				name: $name,
				functionality: Functionality::$functionality,
				range: &[
					$(Range::Entity(&types::$entity),)*
					$(Range::Literal(Kind::$kind),)*
				],
			};
		)*
	};
}

// shared by objects and links
declare! {
	ID = "id", Functional, [], [];
	NAME = "name", NonFunctional, [], [String, LangString];
	NAME_MAP = "nameMap", LanguageMap, [], [];
	MEDIA_TYPE = "mediaType", Functional, [], [MediaType];
	PREVIEW = "preview", NonFunctional, [LINK, OBJECT], [];
}

declare! {
	ATTACHMENT = "attachment", NonFunctional, [OBJECT, LINK], [];
	ATTRIBUTED_TO = "attributedTo", NonFunctional, [OBJECT, LINK], [];
	AUDIENCE = "audience", NonFunctional, [OBJECT, LINK], [];
	BCC = "bcc", NonFunctional, [OBJECT, LINK], [];
	BTO = "bto", NonFunctional, [OBJECT, LINK], [];
	CC = "cc", NonFunctional, [OBJECT, LINK], [];
	CONTENT = "content", NonFunctional, [], [String, LangString];
	CONTENT_MAP = "contentMap", LanguageMap, [], [];
	CONTEXT = "context", NonFunctional, [OBJECT, LINK], [];
	DURATION = "duration", Functional, [], [Duration];
	END_TIME = "endTime", Functional, [], [DateTime];
	GENERATOR = "generator", NonFunctional, [OBJECT, LINK], [];
	ICON = "icon", NonFunctional, [IMAGE, LINK], [];
	IMAGE = "image", NonFunctional, [IMAGE, LINK], [];
	IN_REPLY_TO = "inReplyTo", NonFunctional, [OBJECT, LINK], [];
	LOCATION = "location", NonFunctional, [OBJECT, LINK], [];
	PUBLISHED = "published", Functional, [], [DateTime];
	REPLIES = "replies", Functional, [COLLECTION], [];
	START_TIME = "startTime", Functional, [], [DateTime];
	SUMMARY = "summary", NonFunctional, [], [String, LangString];
	SUMMARY_MAP = "summaryMap", LanguageMap, [], [];
	TAG = "tag", NonFunctional, [OBJECT, LINK], [];
	TO = "to", NonFunctional, [OBJECT, LINK], [];
	UPDATED = "updated", Functional, [], [DateTime];
	URL = "url", NonFunctional, [LINK], [AnyUri];

	#[cfg(feature = "activitypub")]
	SOURCE = "source", Functional, [OBJECT], [];
	#[cfg(feature = "activitypub")]
	LIKES = "likes", Functional, [COLLECTION], [];
	#[cfg(feature = "activitypub")]
	SHARES = "shares", Functional, [COLLECTION], [];

	#[cfg(feature = "activitypub-miscellaneous-terms")]
	SENSITIVE = "sensitive", Functional, [], [Boolean];
	#[cfg(feature = "activitypub-miscellaneous-terms")]
	QUOTE_URL = "quoteUrl", Functional, [], [AnyUri];
}

declare! {
	HREF = "href", Functional, [], [AnyUri];
	HREFLANG = "hreflang", Functional, [], [Bcp47];
	REL = "rel", NonFunctional, [], [String];
	HEIGHT = "height", Functional, [], [NonNegativeInteger];
	WIDTH = "width", Functional, [], [NonNegativeInteger];
}

declare! {
	ACTOR = "actor", NonFunctional, [OBJECT, LINK], [];
	OBJECT = "object", NonFunctional, [OBJECT, LINK], [];
	TARGET = "target", NonFunctional, [OBJECT, LINK], [];
	RESULT = "result", NonFunctional, [OBJECT, LINK], [];
	ORIGIN = "origin", NonFunctional, [OBJECT, LINK], [];
	INSTRUMENT = "instrument", NonFunctional, [OBJECT, LINK], [];

	ONE_OF = "oneOf", NonFunctional, [OBJECT, LINK], [];
	ANY_OF = "anyOf", NonFunctional, [OBJECT, LINK], [];
	CLOSED = "closed", NonFunctional, [OBJECT, LINK], [DateTime, Boolean];
}

declare! {
	TOTAL_ITEMS = "totalItems", Functional, [], [NonNegativeInteger];
	CURRENT = "current", Functional, [COLLECTION_PAGE, LINK], [];
	FIRST = "first", Functional, [COLLECTION_PAGE, LINK], [];
	LAST = "last", Functional, [COLLECTION_PAGE, LINK], [];
	ITEMS = "items", NonFunctional, [OBJECT, LINK], [];
	ORDERED_ITEMS = "orderedItems", NonFunctional, [OBJECT, LINK], [];
	PART_OF = "partOf", Functional, [LINK, COLLECTION], [];
	NEXT = "next", Functional, [COLLECTION_PAGE, LINK], [];
	PREV = "prev", Functional, [COLLECTION_PAGE, LINK], [];
	START_INDEX = "startIndex", Functional, [], [NonNegativeInteger];
}

declare! {
	ACCURACY = "accuracy", Functional, [], [Float];
	ALTITUDE = "altitude", Functional, [], [Float];
	LATITUDE = "latitude", Functional, [], [Float];
	LONGITUDE = "longitude", Functional, [], [Float];
	RADIUS = "radius", Functional, [], [Float];
	UNITS = "units", Functional, [], [String, AnyUri];

	DESCRIBES = "describes", Functional, [OBJECT], [];

	SUBJECT = "subject", Functional, [OBJECT, LINK], [];
	RELATIONSHIP = "relationship", NonFunctional, [OBJECT], [];

	FORMER_TYPE = "formerType", NonFunctional, [OBJECT], [String];
	DELETED = "deleted", Functional, [], [DateTime];
}

declare! {
	#[cfg(feature = "activitypub")]
	INBOX = "inbox", Functional, [ORDERED_COLLECTION], [];
	#[cfg(feature = "activitypub")]
	OUTBOX = "outbox", Functional, [ORDERED_COLLECTION], [];
	#[cfg(feature = "activitypub")]
	FOLLOWING = "following", Functional, [COLLECTION], [];
	#[cfg(feature = "activitypub")]
	FOLLOWERS = "followers", Functional, [COLLECTION], [];
	#[cfg(feature = "activitypub")]
	LIKED = "liked", Functional, [COLLECTION], [];
	#[cfg(feature = "activitypub")]
	STREAMS = "streams", NonFunctional, [COLLECTION], [];
	#[cfg(feature = "activitypub")]
	PREFERRED_USERNAME = "preferredUsername", Functional, [], [String, LangString];
	#[cfg(feature = "activitypub")]
	PREFERRED_USERNAME_MAP = "preferredUsernameMap", LanguageMap, [], [];
	#[cfg(feature = "activitypub")]
	ENDPOINTS = "endpoints", Functional, [OBJECT], [];

	#[cfg(feature = "activitypub-miscellaneous-terms")]
	MANUALLY_APPROVES_FOLLOWERS = "manuallyApprovesFollowers", Functional, [], [Boolean];
	#[cfg(feature = "activitypub-miscellaneous-terms")]
	MOVED_TO = "movedTo", Functional, [OBJECT], [];
}
