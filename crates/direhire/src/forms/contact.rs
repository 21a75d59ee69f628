use serde::{Deserialize, Serialize};

use super::{blank_to_none, FormErrors};

/// Support page contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub category: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<ContactRequest, FormErrors> {
        let mut errors = FormErrors::new();
        errors.require("name", &self.name, "Name is required");
        errors.require("email", &self.email, "Email is required");
        errors.require("message", &self.message, "Message is required");

        errors.into_result(ContactRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            category: blank_to_none(&self.category),
            message: self.message.trim().to_string(),
        })
    }
}
