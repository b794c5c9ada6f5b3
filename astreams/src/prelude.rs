pub use crate::types::{
	Base, Object, Link,
	Activity, Question,
	Actor,
	Collection, OrderedCollection, CollectionPage, OrderedCollectionPage,
	Place, Profile, Relationship, Tombstone,
};
pub use crate::target::Addressed;
#[cfg(feature = "jsonld")]
pub use crate::jsonld::LD;
