use lazy_static::lazy_static;

pub mod app_build;
pub mod config;
pub mod error;
pub mod jwks;
pub mod key;

#[cfg(test)]
pub mod tests;

pub const JWKS_PATH: &str = "/.well-known/jwks.json";

#[cfg(not(test))]
lazy_static! {
	pub static ref CONFIG_FILE: String = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.yaml".to_string());
}

#[cfg(test)]
lazy_static! {
	pub static ref CONFIG_FILE: String = "config.sample.yaml".to_string();
}
