use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::contact_me::{ContactMessageResponse, NewContactMessage},
    errors::AppError,
    AppState,
};

#[instrument(skip(state, form))]
pub async fn create_contact_message(
    state: web::Data<AppState>,
    form: web::Json<NewContactMessage>,
) -> Result<impl Responder, AppError> {
    let message = state.portfolio_handler
        .create_contact_message(form.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(ContactMessageResponse::from(message)))
}

#[instrument(skip(state))]
pub async fn get_all_contact_messages(
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let messages = state.portfolio_handler.get_all_contact_messages().await?;
    Ok(HttpResponse::Ok().json(messages))
}
