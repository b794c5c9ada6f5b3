use crate::Entity;

use super::property;

/// Accessors shared by objects and links.
///
/// Every accessor trait of the vocabulary builds on this one and only needs the underlying
/// [`Entity`]. Reading a property the entity's type does not declare yields nothing, writing it
/// fails with [`crate::Error::Undeclared`].
pub trait Base {
	fn entity(&self) -> &Entity;
	fn entity_mut(&mut self) -> &mut Entity;

	crate::property!(id -> single property::ID);
	crate::property!(name -> values property::NAME);
	crate::property!(name_map -> lang property::NAME_MAP);
	crate::property!(media_type -> single property::MEDIA_TYPE);
	crate::property!(preview -> values property::PREVIEW);
}

impl Base for Entity {
	fn entity(&self) -> &Entity {
		self
	}

	fn entity_mut(&mut self) -> &mut Entity {
		self
	}
}
