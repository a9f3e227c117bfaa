use actix_web::web;

use crate::handlers::contact_me;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/contact")
            .service(
                web::resource("")
                    .route(web::post().to(contact_me::create_contact_message))
            )
            .service(
                web::resource("/messages")
                    .route(web::get().to(contact_me::get_all_contact_messages))
            )
    );
}
