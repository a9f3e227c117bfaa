use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{errors::AppError, AppState};

#[instrument(skip(state))]
pub async fn get_portfolio_overview(
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let overview = state.portfolio_handler.get_portfolio_overview().await?;
    Ok(HttpResponse::Ok().json(overview))
}
