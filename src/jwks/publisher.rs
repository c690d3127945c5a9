use std::sync::Arc;

use super::{Jwk, JwkSet, KeyMetadata, KeyUsage, PublicKeyDescriptor, KEY_TYPE_RSA};
use crate::config::Config;
use crate::error::{ConfigErrorKind, Result};
use crate::key::KeyPair;

/// JWS algorithms (RFC 7518 section 3.1) that sign with an RSA key
pub const RSA_SIGNATURE_ALGORITHMS: &[&str] = &["RS256", "RS384", "RS512", "PS256", "PS384", "PS512"];
/// JWE key management algorithms (RFC 7518 section 4.1) that encrypt with an RSA key
pub const RSA_ENCRYPTION_ALGORITHMS: &[&str] = &["RSA1_5", "RSA-OAEP", "RSA-OAEP-256", "RSA-OAEP-384", "RSA-OAEP-512"];

/// Turns the public half of the injected RSA key pair into a JWK set.
///
/// Only the public components are kept, clones share them.
#[derive(Debug, Clone)]
pub struct JwkPublisher {
	modulus: Arc<[u8]>,
	exponent: Arc<[u8]>,
	metadata: KeyMetadata,
}

impl JwkPublisher {
	/// # Errors
	///
	/// [`ConfigErrorKind::UnsupportedKeyType`] if the key pair is not RSA,
	/// [`ConfigErrorKind::UnsupportedAlgorithm`] if `alg` doesn't fit an RSA key
	/// used for `use`.
	pub fn new(key: Arc<KeyPair>, metadata: KeyMetadata) -> Result<Self> {
		let Some(rsa) = key.as_rsa() else {
			return Err(ConfigErrorKind::UnsupportedKeyType {
				family: key.family(),
			}
			.into());
		};

		if let Some(algorithm) = &metadata.algorithm {
			check_algorithm(algorithm, metadata.usage)?;
		}

		let components = rsa.public_key().to_components();

		Ok(Self {
			modulus: components.n.into(),
			exponent: components.e.into(),
			metadata,
		})
	}

	/// Loads the key pair named in the config and wraps it with the configured metadata.
	///
	/// # Errors
	///
	/// Any key loading error, or whatever [`JwkPublisher::new`] refuses.
	pub fn from_config(config: &Config) -> Result<Self> {
		let key = KeyPair::from_config(config)?;
		Self::new(Arc::new(key), config.key_metadata())
	}

	#[must_use]
	pub fn descriptor(&self) -> PublicKeyDescriptor {
		PublicKeyDescriptor {
			key_type: KEY_TYPE_RSA,
			modulus: self.modulus.to_vec(),
			exponent: self.exponent.to_vec(),
			metadata: self.metadata.clone(),
		}
	}

	#[must_use]
	pub fn get_jwk_set(&self) -> JwkSet {
		JwkSet::new(Jwk::from(self.descriptor()))
	}

	#[must_use]
	pub fn modulus_bits(&self) -> usize {
		self.modulus
			.first()
			.map_or(0, |msb| self.modulus.len() * 8 - msb.leading_zeros() as usize)
	}
}

fn check_algorithm(algorithm: &str, usage: Option<KeyUsage>) -> Result<()> {
	let allowed = match usage {
		Some(KeyUsage::Signature) => RSA_SIGNATURE_ALGORITHMS.contains(&algorithm),
		Some(KeyUsage::Encryption) => RSA_ENCRYPTION_ALGORITHMS.contains(&algorithm),
		None => {
			RSA_SIGNATURE_ALGORITHMS.contains(&algorithm)
				|| RSA_ENCRYPTION_ALGORITHMS.contains(&algorithm)
		}
	};

	if allowed {
		Ok(())
	} else {
		Err(ConfigErrorKind::UnsupportedAlgorithm {
			algorithm: algorithm.to_string(),
			usage: usage.map_or("sig or enc", KeyUsage::as_str),
		}
		.into())
	}
}
