//! ActivityStreams object model.
//!
//! Documents are decoded into [`Entity`] values whose properties hold [`Node`]s: an embedded
//! entity, a literal, an IRI reference or, when nothing declared fits, the raw json value kept
//! verbatim. Which of these a raw value becomes is decided by the property's declared range and
//! the [`Registry`] of known types, and encoding gives back the same document.
//!
//! ```
//! use astreams::prelude::*;
//!
//! let like = astreams::Entity::from_value(&serde_json::json!({
//! 	"type": "Like",
//! 	"actor": "https://example.com/alice",
//! 	"object": { "type": "Note", "id": "https://example.com/notes/1" },
//! })).unwrap();
//!
//! assert!(like.actor().is_iri(0));
//! assert_eq!(like.object().ids(), vec!["https://example.com/notes/1"]);
//! ```

mod macros;
pub(crate) use macros::{strenum, property, vocab};

mod error;
pub use error::{CodecError, Error, VocabResult};

pub mod codec;
pub use codec::{Iri, IriSyntaxError, Kind, Literal};

pub mod schema;

mod registry;
pub use registry::{Registry, DEFAULT_MAX_DEPTH};

mod node;
pub use node::Node;

mod adapter;
pub use adapter::{LangMap, Single, SingleMut, Values, ValuesMut};

mod entity;
pub use entity::{Entity, TypeName};

pub mod config;
pub use config::Config;

pub mod types;
pub use types::{
	Base, Object, Link,
	Activity, Question,
	Actor,
	Collection, OrderedCollection, CollectionPage, OrderedCollectionPage,
	Place, Profile, Relationship, Tombstone,
};

pub mod target;

#[cfg(feature = "jsonld")]
pub mod jsonld;

pub mod prelude;
