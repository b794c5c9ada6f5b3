use crate::{types::property, Object};

use super::OBJECT;

crate::vocab! {
	RELATIONSHIP = "Relationship" : [OBJECT] { SUBJECT, OBJECT, RELATIONSHIP };
}

pub trait Relationship : Object {
	crate::property!(subject -> single property::SUBJECT);
	// named apart from `Activity::object`, same property
	crate::property!(relationship_object -> values property::OBJECT);
	crate::property!(relationship -> values property::RELATIONSHIP);
}

impl Relationship for crate::Entity {}
