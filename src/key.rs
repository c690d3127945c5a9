use std::fmt;
use std::fs;

use jwt_simple::prelude::*;

use crate::config::Config;
use crate::error::{ConfigErrorKind, Result};

/// A private key loaded once at startup.
///
/// Only [`KeyPair::Rsa`] can be published, the other variants exist so that a
/// misconfigured key is reported by what it is instead of as garbage.
#[allow(clippy::large_enum_variant)]
pub enum KeyPair {
	Rsa(RS256KeyPair),
	EcdsaP256(ES256KeyPair),
	Ed25519(Ed25519KeyPair),
}

impl KeyPair {
	/// Parses a PKCS#8 PEM private key.
	///
	/// # Errors
	///
	/// [`ConfigErrorKind::UnrecognizedKey`] if none of the supported key types parse.
	pub fn from_pem(pem: &str) -> Result<Self> {
		if let Ok(key) = RS256KeyPair::from_pem(pem) {
			return Ok(Self::Rsa(key));
		}
		if let Ok(key) = ES256KeyPair::from_pem(pem) {
			return Ok(Self::EcdsaP256(key));
		}
		if let Ok(key) = Ed25519KeyPair::from_pem(pem) {
			return Ok(Self::Ed25519(key));
		}

		Err(ConfigErrorKind::UnrecognizedKey.into())
	}

	/// # Errors
	///
	/// Fails if the file can't be read or doesn't hold a supported key.
	pub fn from_pem_file(path: &str) -> Result<Self> {
		let pem = fs::read_to_string(path)
			.map_err(|e| format!("Unable to read key file `{path}`: {e}"))?;
		Self::from_pem(&pem)
	}

	/// # Errors
	///
	/// [`ConfigErrorKind::MissingKeyPair`] when `key_pem_path` is unset, otherwise
	/// whatever [`KeyPair::from_pem_file`] returns.
	pub fn from_config(config: &Config) -> Result<Self> {
		let path = config
			.key_pem_path
			.as_deref()
			.ok_or(ConfigErrorKind::MissingKeyPair)?;
		Self::from_pem_file(path)
	}

	/// JWK `kty` of the key
	#[must_use]
	pub const fn family(&self) -> &'static str {
		match self {
			Self::Rsa(_) => "RSA",
			Self::EcdsaP256(_) => "EC",
			Self::Ed25519(_) => "OKP",
		}
	}

	#[must_use]
	pub const fn as_rsa(&self) -> Option<&RS256KeyPair> {
		match self {
			Self::Rsa(key) => Some(key),
			_ => None,
		}
	}
}

// Never print key material
impl fmt::Debug for KeyPair {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("KeyPair").field(&self.family()).finish()
	}
}
