use actix_web::web;

use crate::handlers::about_me;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/about")
            .route(web::get().to(about_me::get_about_info))
    );
}
