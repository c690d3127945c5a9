use derive_more::{Display, Error as DeriveError};

pub type Result<T> = std::result::Result<T, Error>;

/// Reasons the process refuses to start serving the key set.
#[derive(Debug, Display, DeriveError, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConfigErrorKind {
	#[display("No key pair configured, set `key_pem_path`")]
	MissingKeyPair,
	#[display("Only RSA keys can be published, the configured key is of type `{family}`")]
	UnsupportedKeyType { family: &'static str },
	#[display("The configured PEM does not hold an RSA, EC P-256 or Ed25519 private key")]
	UnrecognizedKey,
	#[display("`{algorithm}` is not an RSA algorithm usable for `{usage}`")]
	UnsupportedAlgorithm { algorithm: String, usage: &'static str },
}

#[derive(Debug, Display, DeriveError, Clone)]
#[display("Configuration error: {cause}")]
pub struct Error {
	cause: String,
	kind: Option<ConfigErrorKind>,
}

impl Error {
	#[must_use]
	pub const fn kind(&self) -> Option<&ConfigErrorKind> {
		self.kind.as_ref()
	}
}

impl From<String> for Error {
	fn from(error: String) -> Self {
		Self {
			cause: error,
			kind: None,
		}
	}
}

impl From<ConfigErrorKind> for Error {
	fn from(error: ConfigErrorKind) -> Self {
		Self {
			cause: error.to_string(),
			kind: Some(error),
		}
	}
}

impl From<std::io::Error> for Error {
	fn from(error: std::io::Error) -> Self {
		format!("IO error: {error}").into()
	}
}

impl From<serde_yaml::Error> for Error {
	fn from(error: serde_yaml::Error) -> Self {
		format!("Serde-YAML error: {error}").into()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_kind_survives_conversion() {
		let error: Error = ConfigErrorKind::UnsupportedKeyType { family: "EC" }.into();

		assert_eq!(error.kind(), Some(&ConfigErrorKind::UnsupportedKeyType { family: "EC" }));
		assert_eq!(
			error.to_string(),
			"Configuration error: Only RSA keys can be published, the configured key is of type `EC`"
		);
	}

	#[test]
	fn test_foreign_errors_have_no_kind() {
		let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
		let error: Error = io.into();

		assert!(error.kind().is_none());
		assert!(error.to_string().starts_with("Configuration error: IO error:"));
	}
}
