use actix_web::{web, HttpResponse};

use super::JwkPublisher;
use crate::generate_cors_preflight;

generate_cors_preflight!(jwks_preflight, "GET");

// Unauthenticated
pub async fn jwks(publisher: web::Data<JwkPublisher>) -> HttpResponse {
	let set = publisher.get_jwk_set();
	log::debug!("Serving JWK set with {} key(s)", set.keys.len());

	HttpResponse::Ok()
		.append_header(("Access-Control-Allow-Origin", "*"))
		.json(set)
}
