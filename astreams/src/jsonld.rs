use crate::config::JsonLdConfig;

/// Adds `@context` to serialized documents.
///
/// Serialization never writes a context by itself, and deserialization drops any context found,
/// so documents meant to leave the process go through this last.
pub trait LD {
	fn ld_context(self, config: &JsonLdConfig) -> Self;
}

impl LD for serde_json::Value {
	fn ld_context(mut self, config: &JsonLdConfig) -> Self {
		if let Some(obj) = self.as_object_mut() {
			let mut contexts: Vec<serde_json::Value> = config.contexts
				.iter()
				.map(|x| serde_json::Value::String(x.clone()))
				.collect();

			#[allow(unused_mut)]
			let mut ctx = serde_json::Map::new();
			#[cfg(feature = "activitypub-miscellaneous-terms")]
			for term in ["sensitive", "quoteUrl", "manuallyApprovesFollowers", "movedTo", "Hashtag"] {
				ctx.insert(term.to_string(), serde_json::Value::String(format!("as:{term}")));
			}
			if !ctx.is_empty() {
				contexts.push(serde_json::Value::Object(ctx));
			}

			obj.insert("@context".to_string(), serde_json::Value::Array(contexts));
		} else {
			tracing::warn!("cannot add @context to json value different than object");
		}
		self
	}
}
