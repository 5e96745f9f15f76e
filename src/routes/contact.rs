use actix_web::{web, HttpResponse};

use crate::mail_dispatcher::MailDispatcher;

#[derive(serde::Deserialize)]
pub struct ContactFormData {
    name: String,
    email: String,
    subject: String,
    message: String,
}

/// The client/server boundary of the contact pipeline.
///
/// Presence validation happens in the form controller before anything is
/// posted here, so the handler forwards the payload verbatim and always
/// answers 200 with the dispatcher's normalized result.
#[tracing::instrument(
    name = "Handling a contact form submission",
    skip(form, dispatcher),
    fields(
        submitter_email = %form.email,
        subject = %form.subject
    )
)]
pub async fn submit_contact(
    form: web::Json<ContactFormData>,
    dispatcher: web::Data<MailDispatcher>,
) -> HttpResponse {
    let response = dispatcher
        .dispatch(&form.name, &form.email, &form.subject, &form.message)
        .await;
    HttpResponse::Ok().json(response)
}
