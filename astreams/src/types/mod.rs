//! The ActivityStreams vocabulary, plus the ActivityPub extension terms.
//!
//! Each family of types declares its schemas and an accessor trait; all accessor traits are
//! implemented by [`crate::Entity`], whatever its actual type.

pub mod property;

mod base;
mod link;
mod object;

pub use base::Base;
pub use link::*;
pub use object::{
	*,
	activity::{*, intransitive::*},
	actor::*,
	collection::{*, page::*},
	document::*,
	place::*,
	profile::*,
	relationship::*,
	tombstone::*,
};

use crate::schema::TypeSchema;

/// Every concrete type, as registered by [`crate::Registry::builtin`].
pub static BUILTIN: &[&TypeSchema] = &[
	&OBJECT,
	&LINK,
	&MENTION,
	#[cfg(feature = "activitypub-miscellaneous-terms")]
	&HASHTAG,

	&ACTIVITY,
	&INTRANSITIVE_ACTIVITY,
	&ACCEPT,
	&TENTATIVE_ACCEPT,
	&ADD,
	&ANNOUNCE,
	&ARRIVE,
	&BLOCK,
	&CREATE,
	&DELETE,
	&DISLIKE,
	&FLAG,
	&FOLLOW,
	&IGNORE,
	&INVITE,
	&JOIN,
	&LEAVE,
	&LIKE,
	&LISTEN,
	&MOVE,
	&OFFER,
	&QUESTION,
	&REJECT,
	&TENTATIVE_REJECT,
	&READ,
	&REMOVE,
	&TRAVEL,
	&UNDO,
	&UPDATE,
	&VIEW,

	&APPLICATION,
	&GROUP,
	&ORGANIZATION,
	&PERSON,
	&SERVICE,

	&COLLECTION,
	&ORDERED_COLLECTION,
	&COLLECTION_PAGE,
	&ORDERED_COLLECTION_PAGE,

	&ARTICLE,
	&DOCUMENT,
	&AUDIO,
	&IMAGE,
	&PAGE,
	&VIDEO,
	&EVENT,
	&NOTE,
	&PLACE,
	&PROFILE,
	&RELATIONSHIP,
	&TOMBSTONE,
];
