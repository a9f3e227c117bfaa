use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const CONTACT_RECEIVED_MESSAGE: &str = "Thank you for your message! I will get back to you soon.";

/// Contact form submission. Fields are stored as received; missing ones become empty strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewContactMessage {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl NewContactMessage {
    pub fn stamp(self, timestamp: DateTime<Utc>) -> ContactMessage {
        ContactMessage {
            name: self.name,
            email: self.email,
            subject: self.subject,
            message: self.message,
            timestamp,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessageResponse {
    pub success: bool,
    pub message: String,
    pub data: ContactMessage,
}

impl From<ContactMessage> for ContactMessageResponse {
    fn from(data: ContactMessage) -> Self {
        ContactMessageResponse {
            success: true,
            message: CONTACT_RECEIVED_MESSAGE.to_string(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default_to_empty() {
        let parsed: NewContactMessage = serde_json::from_str(r#"{"name":"A"}"#).unwrap();
        assert_eq!(parsed.name, "A");
        assert_eq!(parsed.email, "");
        assert_eq!(parsed.subject, "");
        assert_eq!(parsed.message, "");
    }

    #[test]
    fn response_envelope_wraps_message() {
        let msg = NewContactMessage {
            name: "A".into(),
            email: "a@b.com".into(),
            subject: "Hi".into(),
            message: "Hello".into(),
        }
        .stamp(Utc::now());

        let json = serde_json::to_value(ContactMessageResponse::from(msg)).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], CONTACT_RECEIVED_MESSAGE);
        assert_eq!(json["data"]["email"], "a@b.com");
        assert!(json["data"]["timestamp"].is_string());
    }
}
