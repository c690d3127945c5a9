use log::info;

use jwks_publisher::app_build::build;
use jwks_publisher::config::Config;
use jwks_publisher::jwks::JwkPublisher;
use jwks_publisher::CONFIG_FILE;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

	// Panics on boot are fine
	let config = Config::from_file(CONFIG_FILE.as_str())
		.unwrap_or_else(|e| panic!("Failed to load `{}`: {e}", CONFIG_FILE.as_str()));
	let publisher = JwkPublisher::from_config(&config)
		.unwrap_or_else(|e| panic!("Refusing to start: {e}"));

	info!(
		"Publishing a {}-bit RSA key (kid: {})",
		publisher.modulus_bits(),
		config.key_id.as_deref().unwrap_or("none")
	);

	let (addrs, server) = build(None, &config, publisher)?;
	for addr in addrs {
		info!("Server running on http://{addr}");
	}

	server.await
}
