//! Runtime configuration
//!
//! The admin is configured at deploy time, not build time: the host injects a
//! small JSON object (or plain environment variables) naming the API base URL
//! and a few optional integration keys. Missing values fall back to the
//! documented local-development defaults.

use serde::Deserialize;

fn default_api_url() -> String {
	"http://localhost:8000/".to_string()
}

fn default_base_name() -> String {
	"/admin".to_string()
}

fn default_version() -> String {
	env!("CARGO_PKG_VERSION").to_string()
}

/// Deploy-time configuration for the admin.
///
/// Deserializes from the injected runtime-config object; the same keys are
/// honored as environment variables by [`RuntimeConfig::from_env`].
///
/// # Examples
///
/// ```
/// use dentora_client::RuntimeConfig;
///
/// let config: RuntimeConfig =
///     serde_json::from_str(r#"{"API_URL": "https://api.dentora.md/"}"#).unwrap();
///
/// assert_eq!(config.api_url, "https://api.dentora.md/");
/// assert_eq!(config.base_name, "/admin");
/// assert!(config.google_maps_api_key.is_none());
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct RuntimeConfig {
	/// Base URL of the REST backend.
	#[serde(rename = "API_URL", default = "default_api_url")]
	pub api_url: String,

	/// Deployed admin version, shown in the UI footer.
	#[serde(rename = "VERSION", default = "default_version")]
	pub version: String,

	/// Path prefix the admin is served under.
	#[serde(rename = "BASE_NAME", default = "default_base_name")]
	pub base_name: String,

	#[serde(rename = "GOOGLE_MAPS_API_KEY", default)]
	pub google_maps_api_key: Option<String>,

	#[serde(rename = "MAPBOX_ACCESS_TOKEN", default)]
	pub mapbox_access_token: Option<String>,
}

impl Default for RuntimeConfig {
	fn default() -> Self {
		Self {
			api_url: default_api_url(),
			version: default_version(),
			base_name: default_base_name(),
			google_maps_api_key: None,
			mapbox_access_token: None,
		}
	}
}

impl RuntimeConfig {
	/// Read the configuration from environment variables, falling back to
	/// the defaults for anything unset.
	pub fn from_env() -> Self {
		let defaults = Self::default();
		Self {
			api_url: std::env::var("API_URL").unwrap_or(defaults.api_url),
			version: std::env::var("VERSION").unwrap_or(defaults.version),
			base_name: std::env::var("BASE_NAME").unwrap_or(defaults.base_name),
			google_maps_api_key: std::env::var("GOOGLE_MAPS_API_KEY").ok(),
			mapbox_access_token: std::env::var("MAPBOX_ACCESS_TOKEN").ok(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults() {
		let config = RuntimeConfig::default();

		assert_eq!(config.api_url, "http://localhost:8000/");
		assert_eq!(config.base_name, "/admin");
		assert!(!config.version.is_empty());
	}

	#[test]
	fn test_deserializes_full_runtime_object() {
		let config: RuntimeConfig = serde_json::from_str(
			r#"{
				"API_URL": "https://api.dentora.md/",
				"VERSION": "2.4.0",
				"BASE_NAME": "/panel",
				"GOOGLE_MAPS_API_KEY": "gm-key",
				"MAPBOX_ACCESS_TOKEN": "mb-token"
			}"#,
		)
		.unwrap();

		assert_eq!(config.version, "2.4.0");
		assert_eq!(config.base_name, "/panel");
		assert_eq!(config.google_maps_api_key.as_deref(), Some("gm-key"));
		assert_eq!(config.mapbox_access_token.as_deref(), Some("mb-token"));
	}
}
