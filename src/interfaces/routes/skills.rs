use actix_web::web;

use crate::handlers::skills;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/skills")
            .service(
                web::resource("")
                    .route(web::get().to(skills::get_all_skills))
            )
            .service(
                web::resource("/category")
                    .route(web::get().to(skills::get_skills_by_category))
            )
    );
}
