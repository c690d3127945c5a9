#![allow(clippy::unwrap_used)]
use std::sync::Arc;

use actix_web::dev::ServiceResponse;
use actix_web::test::init_service;
use actix_web::{web, App};

use crate::app_build::routes;
use crate::jwks::{JwkPublisher, KeyMetadata};
use crate::key::KeyPair;


pub const RSA_PEM: &str = include_str!("keys/rsa2048.pem");
pub const EC_PEM: &str = include_str!("keys/ec_p256.pem");
pub const ED25519_PEM: &str = include_str!("keys/ed25519.pem");

/// Base64url modulus of `keys/rsa2048.pem`, computed with openssl
pub const RSA_MODULUS_B64: &str = include_str!("keys/rsa2048.n.txt");

pub fn rsa_publisher() -> JwkPublisher {
	let key = Arc::new(KeyPair::from_pem(RSA_PEM).unwrap());
	JwkPublisher::new(key, KeyMetadata::default()).unwrap()
}

pub async fn setup_app(
	publisher: JwkPublisher,
) -> impl actix_web::dev::Service<
	actix_http::Request,
	Response = ServiceResponse,
	Error = actix_web::Error,
> {
	init_service(
		App::new()
			.app_data(web::Data::new(publisher))
			.configure(routes),
	)
	.await
}
