use std::path::Path;

use actix_web::web;

use crate::handlers::{home::api_info, system::health_check};

mod about_me;
mod contact;
mod json_error;
mod portfolio;
mod projects;
mod skills;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    cfg.service(
        web::scope("/api")
            .service(web::resource("").route(web::get().to(api_info)))
            .configure(portfolio::config_routes)
            .configure(about_me::config_routes)
            .configure(projects::config_routes)
            .configure(contact::config_routes)
            .configure(skills::config_routes)
    );

    cfg.configure(json_error::config_routes);
}

/// Serves the client assets from `public_dir` at `/`. Must be registered after the API routes.
pub fn configure_static_files(cfg: &mut web::ServiceConfig, public_dir: &Path) {
    cfg.service(
        actix_files::Files::new("/", public_dir)
            .index_file("index.html")
    );
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use super::*;
    use crate::{store::memory::create_store, AppState};

    fn state() -> web::Data<AppState> {
        web::Data::new(AppState::new(create_store().unwrap()))
    }

    #[actix_web::test]
    async fn api_root_describes_routes() {
        let app = test::init_service(App::new().app_data(state()).configure(configure_routes)).await;

        let req = test::TestRequest::get().uri("/api").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["name"], "Mary Portfolio API");
        assert_eq!(body["endpoints"]["skills"], "/api/skills");
    }

    #[actix_web::test]
    async fn unknown_project_is_json_404() {
        let app = test::init_service(App::new().app_data(state()).configure(configure_routes)).await;

        let req = test::TestRequest::get().uri("/api/projects/nope").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Not found: project 'nope'");
    }

    #[actix_web::test]
    async fn bad_featured_flag_is_json_400() {
        let app = test::init_service(App::new().app_data(state()).configure(configure_routes)).await;

        let req = test::TestRequest::get().uri("/api/projects?featured=yes").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Bad request: featured must be true or false, got 'yes'");
    }

    #[actix_web::test]
    async fn unknown_category_is_empty_200() {
        let app = test::init_service(App::new().app_data(state()).configure(configure_routes)).await;

        let req = test::TestRequest::get().uri("/api/projects?category=games").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body, serde_json::json!([]));
    }

    #[actix_web::test]
    async fn contact_post_is_created_and_listed() {
        let data = state();
        let app = test::init_service(App::new().app_data(data.clone()).configure(configure_routes)).await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(serde_json::json!({"name": "A", "email": "a@b.com"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["subject"], "");

        assert_eq!(data.portfolio_handler.count_contact_messages().await.unwrap(), 1);
    }

    #[actix_web::test]
    async fn wrong_content_type_is_415() {
        let app = test::init_service(App::new().app_data(state()).configure(configure_routes)).await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .insert_header(("Content-Type", "text/plain"))
            .set_payload("hello")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }
}
