use crate::config::EmailRelayConfig;
use serde::Serialize;

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct ContactMessage {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
}

/// Body of the relay's `email/send` call.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct RelayRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: &'a ContactMessage,
}

impl<'a> RelayRequest<'a> {
    pub fn new(config: &'a EmailRelayConfig, message: &'a ContactMessage) -> Self {
        Self {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            template_params: message,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed,
}

impl FormStatus {
    pub fn message(self) -> &'static str {
        match self {
            Self::Idle => "",
            Self::Sending => "Enviando mensaje...",
            Self::Sent => "✅ Mensaje enviado correctamente.",
            Self::Failed => "❌ Error al enviar. Intenta de nuevo.",
        }
    }

    pub fn from_outcome(outcome: &Result<(), &'static str>) -> Self {
        match outcome {
            Ok(()) => Self::Sent,
            Err(_) => Self::Failed,
        }
    }

    /// The form is cleared only after a confirmed send.
    pub fn clears_form(self) -> bool {
        matches!(self, Self::Sent)
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn send_contact(
    config: &EmailRelayConfig,
    message: &ContactMessage,
) -> Result<(), &'static str> {
    use crate::config::EMAIL_RELAY_ENDPOINT;
    use gloo_net::http::Request;

    let response = Request::post(EMAIL_RELAY_ENDPOINT)
        .json(&RelayRequest::new(config, message))
        .map_err(|_| "failed encoding request")?
        .send()
        .await
        .map_err(|_| "request failed")?;

    if !response.ok() {
        return Err("received non-success response");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    fn message() -> ContactMessage {
        ContactMessage {
            from_name: "Ada".to_string(),
            from_email: "ada@example.com".to_string(),
            message: "Hola".to_string(),
        }
    }

    #[test]
    fn relay_payload_carries_identifiers_and_params() {
        let config = SiteConfig::default();
        let message = message();
        let body = serde_json::to_value(RelayRequest::new(&config.email_relay, &message))
            .expect("payload serializes");

        assert_eq!(body["service_id"], "service_y95t4ks");
        assert_eq!(body["template_id"], "template_fsjo89q");
        assert_eq!(body["user_id"], "f70sxGybBMO0tcB7y");
        assert_eq!(body["template_params"]["from_name"], "Ada");
        assert_eq!(body["template_params"]["from_email"], "ada@example.com");
        assert_eq!(body["template_params"]["message"], "Hola");
    }

    #[test]
    fn outcome_maps_to_status_text() {
        let sent = FormStatus::from_outcome(&Ok(()));
        let failed = FormStatus::from_outcome(&Err("request failed"));

        assert_eq!(sent.message(), "✅ Mensaje enviado correctamente.");
        assert!(sent.clears_form());
        assert_eq!(failed.message(), "❌ Error al enviar. Intenta de nuevo.");
        assert!(!failed.clears_form());
        assert_eq!(FormStatus::Sending.message(), "Enviando mensaje...");
    }
}
