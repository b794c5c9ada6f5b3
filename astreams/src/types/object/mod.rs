pub mod activity;
pub mod actor;
pub mod collection;
pub mod document;
pub mod place;
pub mod profile;
pub mod relationship;
pub mod tombstone;

use crate::{types::property, Base};

crate::vocab! {
	OBJECT = "Object" : [] {
		ID, NAME, NAME_MAP, MEDIA_TYPE, PREVIEW,
		ATTACHMENT, ATTRIBUTED_TO, AUDIENCE, BCC, BTO, CC, CONTENT, CONTENT_MAP, CONTEXT,
		DURATION, END_TIME, GENERATOR, ICON, IMAGE, IN_REPLY_TO, LOCATION, PUBLISHED, REPLIES,
		START_TIME, SUMMARY, SUMMARY_MAP, TAG, TO, UPDATED, URL,
		#[cfg(feature = "activitypub")] SOURCE,
		#[cfg(feature = "activitypub")] LIKES,
		#[cfg(feature = "activitypub")] SHARES,
		#[cfg(feature = "activitypub-miscellaneous-terms")] SENSITIVE,
		#[cfg(feature = "activitypub-miscellaneous-terms")] QUOTE_URL,
	};
	ARTICLE = "Article" : [OBJECT];
	EVENT = "Event" : [OBJECT];
	NOTE = "Note" : [OBJECT];
}

pub trait Object : Base {
	crate::property!(attachment -> values property::ATTACHMENT);
	crate::property!(attributed_to -> values property::ATTRIBUTED_TO);
	crate::property!(audience -> values property::AUDIENCE);
	crate::property!(bcc -> values property::BCC);
	crate::property!(bto -> values property::BTO);
	crate::property!(cc -> values property::CC);
	crate::property!(content -> values property::CONTENT);
	crate::property!(content_map -> lang property::CONTENT_MAP);
	crate::property!(context -> values property::CONTEXT);
	crate::property!(duration -> single property::DURATION);
	crate::property!(end_time -> single property::END_TIME);
	crate::property!(generator -> values property::GENERATOR);
	crate::property!(icon -> values property::ICON);
	crate::property!(image -> values property::IMAGE);
	crate::property!(in_reply_to -> values property::IN_REPLY_TO);
	crate::property!(location -> values property::LOCATION);
	crate::property!(published -> single property::PUBLISHED);
	crate::property!(replies -> single property::REPLIES);
	crate::property!(start_time -> single property::START_TIME);
	crate::property!(summary -> values property::SUMMARY);
	crate::property!(summary_map -> lang property::SUMMARY_MAP);
	crate::property!(tag -> values property::TAG);
	crate::property!(to -> values property::TO);
	crate::property!(updated -> single property::UPDATED);
	crate::property!(url -> values property::URL);

	#[cfg(feature = "activitypub")]
	crate::property!(
		/// source the content was rendered from, e.g. markdown
		source -> single property::SOURCE
	);
	#[cfg(feature = "activitypub")]
	crate::property!(likes -> single property::LIKES);
	#[cfg(feature = "activitypub")]
	crate::property!(shares -> single property::SHARES);

	#[cfg(feature = "activitypub-miscellaneous-terms")]
	crate::property!(sensitive -> single property::SENSITIVE);
	#[cfg(feature = "activitypub-miscellaneous-terms")]
	crate::property!(quote_url -> single property::QUOTE_URL);
}

impl Object for crate::Entity {}
