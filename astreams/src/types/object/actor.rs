#[cfg(any(feature = "activitypub", feature = "activitypub-miscellaneous-terms"))]
use crate::types::property;
use crate::Object;

use super::OBJECT;

crate::vocab! {
	/// Not a vocabulary type by itself: parent of the actor types, carrying the properties
	/// ActivityPub requires of actors.
	ACTOR = "Actor" : [OBJECT] {
		#[cfg(feature = "activitypub")] INBOX,
		#[cfg(feature = "activitypub")] OUTBOX,
		#[cfg(feature = "activitypub")] FOLLOWING,
		#[cfg(feature = "activitypub")] FOLLOWERS,
		#[cfg(feature = "activitypub")] LIKED,
		#[cfg(feature = "activitypub")] STREAMS,
		#[cfg(feature = "activitypub")] PREFERRED_USERNAME,
		#[cfg(feature = "activitypub")] PREFERRED_USERNAME_MAP,
		#[cfg(feature = "activitypub")] ENDPOINTS,
		#[cfg(feature = "activitypub-miscellaneous-terms")] MANUALLY_APPROVES_FOLLOWERS,
		#[cfg(feature = "activitypub-miscellaneous-terms")] MOVED_TO,
	};
	APPLICATION = "Application" : [ACTOR];
	GROUP = "Group" : [ACTOR];
	ORGANIZATION = "Organization" : [ACTOR];
	PERSON = "Person" : [ACTOR];
	SERVICE = "Service" : [ACTOR];
}

pub trait Actor : Object {
	#[cfg(feature = "activitypub")]
	crate::property!(inbox -> single property::INBOX);
	#[cfg(feature = "activitypub")]
	crate::property!(outbox -> single property::OUTBOX);
	#[cfg(feature = "activitypub")]
	crate::property!(following -> single property::FOLLOWING);
	#[cfg(feature = "activitypub")]
	crate::property!(followers -> single property::FOLLOWERS);
	#[cfg(feature = "activitypub")]
	crate::property!(liked -> single property::LIKED);
	#[cfg(feature = "activitypub")]
	crate::property!(streams -> values property::STREAMS);
	#[cfg(feature = "activitypub")]
	crate::property!(preferred_username -> single property::PREFERRED_USERNAME);
	#[cfg(feature = "activitypub")]
	crate::property!(preferred_username_map -> lang property::PREFERRED_USERNAME_MAP);
	#[cfg(feature = "activitypub")]
	crate::property!(endpoints -> single property::ENDPOINTS);

	#[cfg(feature = "activitypub-miscellaneous-terms")]
	crate::property!(manually_approves_followers -> single property::MANUALLY_APPROVES_FOLLOWERS);
	#[cfg(feature = "activitypub-miscellaneous-terms")]
	crate::property!(moved_to -> single property::MOVED_TO);

	// everyone puts it on the actor, even though it belongs in endpoints
	#[cfg(feature = "activitypub")]
	fn shared_inbox(&self) -> Option<&str> {
		self.entity().extension("sharedInbox")?.as_str()
	}

	#[cfg(feature = "activitypub")]
	fn set_shared_inbox(&mut self, val: Option<&str>) -> Option<serde_json::Value> {
		let val = val.map(|x| serde_json::Value::String(x.to_string()));
		self.entity_mut().set_extension("sharedInbox", val)
	}
}

impl Actor for crate::Entity {}
