use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, Responder, get, web};

use crate::render::render_features_section;

/// Features section alone, for embedding the cards in other pages.
#[get("/fragments/features")]
pub async fn features_fragment() -> impl Responder {
    let html = render_features_section();
    log::debug!("Rendered features fragment ({} bytes)", html.len());

    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(html)
}

#[get("/healthz")]
pub async fn healthz() -> impl Responder {
    HttpResponse::Ok().content_type(ContentType::plaintext()).body("ok")
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(features_fragment).service(healthz);
}
