use crate::{types::property, Object};

use super::OBJECT;

crate::vocab! {
	TOMBSTONE = "Tombstone" : [OBJECT] { FORMER_TYPE, DELETED };
}

pub trait Tombstone : Object {
	crate::property!(former_type -> values property::FORMER_TYPE);
	crate::property!(deleted -> single property::DELETED);
}

impl Tombstone for crate::Entity {}
