use crate::{types::property, Object};

use super::OBJECT;

crate::vocab! {
	PROFILE = "Profile" : [OBJECT] { DESCRIBES };
}

pub trait Profile : Object {
	crate::property!(describes -> single property::DESCRIBES);
}

impl Profile for crate::Entity {}
