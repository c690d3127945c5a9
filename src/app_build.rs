use std::net::SocketAddr;

use actix_web::http::Method;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};

use crate::config::Config;
use crate::jwks::{handle_jwks, JwkPublisher};
use crate::JWKS_PATH;

pub fn routes(cfg: &mut web::ServiceConfig) {
	cfg.service(
		web::resource(JWKS_PATH)
			.route(web::get().to(handle_jwks::jwks))
			.route(web::method(Method::OPTIONS).to(handle_jwks::jwks_preflight)),
	);
}

/// Binds the server without starting it.
///
/// `listen` overrides the address from the config, tests pass `127.0.0.1:0`.
///
/// # Errors
///
/// Fails if the address can't be bound.
pub fn build(
	listen: Option<&str>,
	config: &Config,
	publisher: JwkPublisher,
) -> std::io::Result<(Vec<SocketAddr>, actix_web::dev::Server)> {
	let listen = listen.map_or_else(|| config.listen_addr(), str::to_string);
	let publisher = web::Data::new(publisher);

	let server = HttpServer::new(move || {
		App::new()
			.app_data(publisher.clone())
			.configure(routes)
			.wrap(Logger::default())
	})
	.workers(if cfg!(debug_assertions) || cfg!(test) {
		1
	} else {
		std::thread::available_parallelism().map_or(2, std::num::NonZeroUsize::get)
	})
	.bind(listen)?;

	Ok((server.addrs(), server.run()))
}
