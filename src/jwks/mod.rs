use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub mod handle_jwks;
pub mod publisher;

pub use publisher::JwkPublisher;

/// Key type of every key this crate publishes
pub const KEY_TYPE_RSA: &str = "RSA";

#[macro_export]
macro_rules! generate_cors_preflight {
	($func_name:ident, $methods:expr) => {
		pub async fn $func_name() -> actix_web::HttpResponse {
			actix_web::HttpResponse::NoContent()
				.append_header(("Access-Control-Allow-Origin", "*"))
				.append_header(("Access-Control-Allow-Headers", "Content-Type"))
				.append_header((
					"Access-Control-Allow-Methods",
					concat!($methods, ", OPTIONS"),
				))
				.finish()
		}
	};
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum KeyUsage {
	#[serde(rename = "sig")]
	Signature,
	#[serde(rename = "enc")]
	Encryption,
}

impl KeyUsage {
	#[must_use]
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Signature => "sig",
			Self::Encryption => "enc",
		}
	}
}

/// Optional JWK members, none of them are emitted unless configured
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct KeyMetadata {
	pub id: Option<String>,
	pub usage: Option<KeyUsage>,
	pub algorithm: Option<String>,
}

/// The raw public parameters of an RSA key, before any encoding.
///
/// `modulus` and `exponent` are unsigned big-endian magnitudes without
/// leading zero bytes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct PublicKeyDescriptor {
	pub key_type: &'static str,
	pub modulus: Vec<u8>,
	pub exponent: Vec<u8>,
	pub metadata: KeyMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Jwk {
	#[serde(rename = "kty")]
	pub key_type: String,
	#[serde(rename = "use", skip_serializing_if = "Option::is_none")]
	pub usage: Option<KeyUsage>,
	#[serde(rename = "kid", skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
	#[serde(rename = "alg", skip_serializing_if = "Option::is_none")]
	pub algorithm: Option<String>,
	#[serde(rename = "n")]
	pub modulus: String,
	#[serde(rename = "e")]
	pub exponent: String,
}

impl Jwk {
	#[must_use]
	pub fn to_json_object(&self) -> Map<String, Value> {
		let mut object = Map::new();
		object.insert("kty".to_string(), Value::from(self.key_type.as_str()));
		if let Some(usage) = self.usage {
			object.insert("use".to_string(), Value::from(usage.as_str()));
		}
		if let Some(id) = &self.id {
			object.insert("kid".to_string(), Value::from(id.as_str()));
		}
		if let Some(algorithm) = &self.algorithm {
			object.insert("alg".to_string(), Value::from(algorithm.as_str()));
		}
		object.insert("n".to_string(), Value::from(self.modulus.as_str()));
		object.insert("e".to_string(), Value::from(self.exponent.as_str()));
		object
	}
}

impl From<PublicKeyDescriptor> for Jwk {
	fn from(descriptor: PublicKeyDescriptor) -> Self {
		Self {
			key_type: descriptor.key_type.to_string(),
			usage: descriptor.metadata.usage,
			id: descriptor.metadata.id,
			algorithm: descriptor.metadata.algorithm,
			modulus: URL_SAFE_NO_PAD.encode(descriptor.modulus),
			exponent: URL_SAFE_NO_PAD.encode(descriptor.exponent),
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct JwkSet {
	pub keys: Vec<Jwk>,
}

impl JwkSet {
	#[must_use]
	pub fn new(key: Jwk) -> Self {
		Self { keys: vec![key] }
	}

	#[must_use]
	pub fn to_json_object(&self) -> Map<String, Value> {
		let keys = self
			.keys
			.iter()
			.map(|key| Value::Object(key.to_json_object()))
			.collect();

		let mut object = Map::new();
		object.insert("keys".to_string(), Value::Array(keys));
		object
	}
}
