use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{errors::AppError, AppState};

#[instrument(skip(state))]
pub async fn get_about_info(
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let about = state.portfolio_handler.get_about_info().await?;
    Ok(HttpResponse::Ok().json(about))
}
