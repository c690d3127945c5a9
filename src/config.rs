use std::fs;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::jwks::{KeyMetadata, KeyUsage};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	pub listen_host: String,
	pub listen_port: u16,

	/// PKCS#8 PEM file with the private key whose public half gets published
	pub key_pem_path: Option<String>,
	pub key_id: Option<String>,
	pub key_use: Option<KeyUsage>,
	pub key_alg: Option<String>,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			listen_host: "127.0.0.1".to_string(),
			listen_port: 8080,

			key_pem_path: None,
			key_id: None,
			key_use: None,
			key_alg: None,
		}
	}
}

impl Config {
	/// # Errors
	///
	/// Fails on malformed YAML or unknown fields.
	pub fn from_yaml(yaml: &str) -> Result<Self> {
		Ok(serde_yaml::from_str(yaml)?)
	}

	/// # Errors
	///
	/// Fails if the file can't be read or parsed.
	pub fn from_file(path: &str) -> Result<Self> {
		let content = fs::read_to_string(path)
			.map_err(|e| format!("Unable to open config file `{path}`: {e}"))?;
		Self::from_yaml(&content)
	}

	#[must_use]
	pub fn listen_addr(&self) -> String {
		format!("{}:{}", self.listen_host, self.listen_port)
	}

	#[must_use]
	pub fn key_metadata(&self) -> KeyMetadata {
		KeyMetadata {
			id: self.key_id.clone(),
			usage: self.key_use,
			algorithm: self.key_alg.clone(),
		}
	}
}
