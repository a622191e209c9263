//! Delivery of contact submissions through the EmailJS REST relay.
//!
//! One POST per submission. The response is treated as a binary signal: any
//! 2xx status is success, everything else is a delivery failure. No retry,
//! no queueing; the HTTP client's default timeout is the only bound.

use serde::Serialize;

use fltk::app::Sender;

use super::contact::Submission;
use super::error::AppError;
use super::messages::Message;

pub const RELAY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Caller-held routing identifiers and public key for the relay. These are
/// public by design, the same way a web page embeds them.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub service_id: &'static str,
    pub template_id: &'static str,
    pub public_key: &'static str,
}

impl RelayConfig {
    pub fn bundled() -> Self {
        Self {
            service_id: "service_k2x9dqe",
            template_id: "template_7fp3m1a",
            public_key: "Zq8WtLk2_RvYh41Xc",
        }
    }
}

#[derive(Serialize)]
struct RelayRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

#[derive(Serialize)]
struct TemplateParams<'a> {
    name: &'a str,
    email: &'a str,
    message: &'a str,
}

fn relay_request<'a>(config: &'a RelayConfig, submission: &'a Submission) -> RelayRequest<'a> {
    RelayRequest {
        service_id: config.service_id,
        template_id: config.template_id,
        user_id: config.public_key,
        template_params: TemplateParams {
            name: &submission.name,
            email: &submission.email,
            message: &submission.message,
        },
    }
}

/// Send one submission to the relay, blocking until it resolves.
pub fn deliver(config: &RelayConfig, submission: &Submission) -> Result<(), AppError> {
    let response = minreq::post(RELAY_ENDPOINT)
        .with_json(&relay_request(config, submission))?
        .send()?;

    if (200..300).contains(&response.status_code) {
        Ok(())
    } else {
        Err(AppError::Delivery(format!(
            "relay returned status {}",
            response.status_code
        )))
    }
}

/// Run the delivery on a background thread so the UI stays responsive, and
/// hand the outcome back through the app channel. The error string is for
/// diagnostics only and is never shown to the user.
pub fn deliver_in_background(
    config: RelayConfig,
    submission: Submission,
    sender: Sender<Message>,
) {
    std::thread::spawn(move || {
        let outcome = deliver(&config, &submission).map_err(|e| e.to_string());
        sender.send(Message::DeliveryFinished(outcome));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relay_payload_shape() {
        let config = RelayConfig::bundled();
        let submission = Submission {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            message: "Hello".to_string(),
        };

        let value = serde_json::to_value(relay_request(&config, &submission)).unwrap();

        assert_eq!(value["service_id"], config.service_id);
        assert_eq!(value["template_id"], config.template_id);
        assert_eq!(value["user_id"], config.public_key);
        assert_eq!(value["template_params"]["name"], "Jane Doe");
        assert_eq!(value["template_params"]["email"], "jane@example.com");
        assert_eq!(value["template_params"]["message"], "Hello");
    }

    #[test]
    fn test_payload_has_no_extra_fields() {
        let config = RelayConfig::bundled();
        let submission = Submission::default();
        let value = serde_json::to_value(relay_request(&config, &submission)).unwrap();

        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        assert_eq!(value["template_params"].as_object().unwrap().len(), 3);
    }
}
