use crate::{types::property, Activity};

use super::ACTIVITY;

crate::vocab! {
	INTRANSITIVE_ACTIVITY = "IntransitiveActivity" : [ACTIVITY] without ["object"];
	ARRIVE = "Arrive" : [INTRANSITIVE_ACTIVITY];
	TRAVEL = "Travel" : [INTRANSITIVE_ACTIVITY];
	QUESTION = "Question" : [INTRANSITIVE_ACTIVITY] { ONE_OF, ANY_OF, CLOSED };
}

pub trait Question : Activity {
	crate::property!(one_of -> values property::ONE_OF);
	crate::property!(any_of -> values property::ANY_OF);
	crate::property!(
		/// either the time the question closed, a plain flag, or the closing object
		closed -> values property::CLOSED
	);
}

impl Question for crate::Entity {}
