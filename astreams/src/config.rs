use std::collections::BTreeMap;

#[serde_inline_default::serde_inline_default]
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, serde_default::DefaultFromSerde)]
pub struct Config {
	#[serde(default)]
	pub registry: RegistryConfig,

	#[serde(default)]
	pub jsonld: JsonLdConfig,
}

#[serde_inline_default::serde_inline_default]
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, serde_default::DefaultFromSerde)]
pub struct RegistryConfig {
	#[serde_inline_default(crate::registry::DEFAULT_MAX_DEPTH)]
	/// how many levels of embedded entities a document may nest before decoding is refused
	pub max_depth: usize,

	#[serde(default)]
	/// extra type names resolving to a built-in type, e.g. `"as:Note" = "Note"`
	pub aliases: BTreeMap<String, String>,
}

#[serde_inline_default::serde_inline_default]
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, serde_default::DefaultFromSerde)]
pub struct JsonLdConfig {
	#[serde_inline_default(vec![
		"https://www.w3.org/ns/activitystreams".into(),
		"https://w3id.org/security/v1".into(),
	])]
	/// contexts added by the `@context` helper, in order
	pub contexts: Vec<String>,
}

impl Config {
	pub fn load(path: Option<&std::path::PathBuf>) -> Self {
		let Some(cfg_path) = path else { return Config::default() };
		match std::fs::read_to_string(cfg_path) {
			Ok(x) => match toml::from_str(&x) {
				Ok(cfg) => return cfg,
				Err(e) => tracing::error!("failed parsing config file: {e}"),
			},
			Err(e) => tracing::error!("failed reading config file: {e}"),
		}
		Config::default()
	}

	pub fn registry(&self) -> crate::Registry {
		crate::Registry::from_config(&self.registry)
	}
}
