use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::skill::SkillCategoryQuery, errors::AppError, AppState};

#[instrument(skip(state))]
pub async fn get_all_skills(
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let skills = state.portfolio_handler.get_all_skills().await?;
    Ok(HttpResponse::Ok().json(skills))
}

#[instrument(skip(state, query))]
pub async fn get_skills_by_category(
    state: web::Data<AppState>,
    query: web::Query<SkillCategoryQuery>,
) -> Result<impl Responder, AppError> {
    let category = query.into_inner().name.unwrap_or_default();

    let skills = state.portfolio_handler.get_skills_by_category(&category).await?;
    Ok(HttpResponse::Ok().json(skills))
}
