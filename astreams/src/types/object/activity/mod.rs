pub mod intransitive;

use crate::{types::property, Object};

use super::OBJECT;

crate::vocab! {
	ACTIVITY = "Activity" : [OBJECT] { ACTOR, OBJECT, TARGET, RESULT, ORIGIN, INSTRUMENT };

	ACCEPT = "Accept" : [ACTIVITY];
	TENTATIVE_ACCEPT = "TentativeAccept" : [ACCEPT];
	ADD = "Add" : [ACTIVITY];
	ANNOUNCE = "Announce" : [ACTIVITY];
	CREATE = "Create" : [ACTIVITY];
	DELETE = "Delete" : [ACTIVITY];
	DISLIKE = "Dislike" : [ACTIVITY];
	FLAG = "Flag" : [ACTIVITY];
	FOLLOW = "Follow" : [ACTIVITY];
	IGNORE = "Ignore" : [ACTIVITY];
	BLOCK = "Block" : [IGNORE];
	JOIN = "Join" : [ACTIVITY];
	LEAVE = "Leave" : [ACTIVITY];
	LIKE = "Like" : [ACTIVITY];
	LISTEN = "Listen" : [ACTIVITY];
	MOVE = "Move" : [ACTIVITY];
	OFFER = "Offer" : [ACTIVITY];
	INVITE = "Invite" : [OFFER];
	READ = "Read" : [ACTIVITY];
	REJECT = "Reject" : [ACTIVITY];
	TENTATIVE_REJECT = "TentativeReject" : [REJECT];
	REMOVE = "Remove" : [ACTIVITY];
	UNDO = "Undo" : [ACTIVITY];
	UPDATE = "Update" : [ACTIVITY];
	VIEW = "View" : [ACTIVITY];
}

pub trait Activity : Object {
	crate::property!(actor -> values property::ACTOR);
	crate::property!(
		/// not declared by intransitive activities
		object -> values property::OBJECT
	);
	crate::property!(target -> values property::TARGET);
	crate::property!(result -> values property::RESULT);
	crate::property!(origin -> values property::ORIGIN);
	crate::property!(instrument -> values property::INSTRUMENT);
}

impl Activity for crate::Entity {}
