use actix_web::web;

use crate::handlers::portfolio;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/portfolio")
            .route(web::get().to(portfolio::get_portfolio_overview))
    );
}
