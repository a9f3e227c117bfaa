use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::project::{ProjectFilter, ProjectFilterQuery},
    errors::AppError,
    AppState,
};

#[instrument(skip(state, query))]
pub async fn get_all_projects(
    state: web::Data<AppState>,
    query: web::Query<ProjectFilterQuery>,
) -> Result<impl Responder, AppError> {
    let filter = ProjectFilter::try_from(query.into_inner())
        .map_err(AppError::BadRequest)?;

    let projects = state.portfolio_handler.get_all_projects(&filter).await?;
    Ok(HttpResponse::Ok().json(projects))
}

#[instrument(skip(state))]
pub async fn get_featured_projects(
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let projects = state.portfolio_handler.get_featured_projects().await?;
    Ok(HttpResponse::Ok().json(projects))
}

#[instrument(skip(project_id, state))]
pub async fn get_project_by_id(
    project_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let project = state.portfolio_handler
        .get_project_by_id(&project_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("project '{}'", project_id)))?;

    Ok(HttpResponse::Ok().json(project))
}
