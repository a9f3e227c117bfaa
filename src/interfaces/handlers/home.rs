use actix_web::{HttpResponse, Responder};

pub async fn api_info() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "name": "Mary Portfolio API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "A portfolio web API serving projects, skills and contact intake",
        "author": "Mary",
        "endpoints": {
            "portfolio": "/api/portfolio",
            "about": "/api/about",
            "projects": "/api/projects",
            "contact": "/api/contact",
            "skills": "/api/skills"
        },
        "frontend": {
            "home": "/",
            "about": "/about.html",
            "projects": "/projects.html",
            "contact": "/contact.html"
        }
    }))
}
