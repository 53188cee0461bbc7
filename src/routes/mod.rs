pub mod frizer;
pub mod health;

use actix_web::web;

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").configure(health::init))
        .service(web::scope("/api").configure(frizer::init));
}
