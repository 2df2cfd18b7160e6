use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::Form;

use crate::state::AppState;
use crate::twiml::MessageResponse;

#[derive(Debug, Default, serde::Deserialize)]
pub struct SmsForm {
    #[serde(rename = "Body", default)]
    pub body: String,
    #[serde(rename = "From", default)]
    pub from: Option<String>,
}

/// POST /sms — handle an inbound message and reply with TwiML.
///
/// Always answers 200; failures are reported in the message text. A missing
/// or unreadable form is treated as an empty body.
pub async fn sms_reply(
    State(app): State<AppState>,
    form: Result<Form<SmsForm>, FormRejection>,
) -> MessageResponse {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            tracing::debug!("unreadable sms form: {rejection}");
            SmsForm::default()
        }
    };
    tracing::debug!(from = form.from.as_deref().unwrap_or("-"), "inbound sms");

    let router = app.router.clone();
    let body = form.body;
    let reply = tokio::task::spawn_blocking(move || router.handle(&body))
        .await
        .unwrap_or_else(|e| {
            tracing::warn!("sms task join error: {e}");
            record_core::router::error_reply(&e)
        });

    MessageResponse::new(reply)
}
