use serde::{Deserialize, Serialize};

use super::{blank_to_none, is_digits, FormErrors};
use crate::i18n::Locale;

const OTP_LENGTH: usize = 6;
const PINCODE_LENGTH: usize = 6;
const AADHAR_LENGTH: usize = 12;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountRole {
    #[default]
    Customer,
    Worker,
}

/// Account creation form. Workers must also give a pin code and an Aadhar
/// number, and confirm their phone with a one-time code before the account
/// is created.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignupForm {
    pub role: AccountRole,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub location: String,
    pub pincode: Option<String>,
    pub aadhar_number: Option<String>,
    pub language_preference: Locale,
}

/// Validated signup data, ready to hand to the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupProfile {
    pub email: String,
    pub full_name: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub location: String,
    pub role: AccountRole,
    pub language_preference: Locale,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pincode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aadhar_number: Option<String>,
    pub phone_verified: bool,
}

impl SignupProfile {
    /// Phone number with every digit but the last four hidden, for logs.
    pub fn masked_phone(&self) -> String {
        let digits: Vec<char> = self.phone.chars().filter(char::is_ascii_digit).collect();
        let shown = digits.len().saturating_sub(4);
        digits
            .iter()
            .enumerate()
            .map(|(index, digit)| if index < shown { '*' } else { *digit })
            .collect()
    }
}

impl SignupForm {
    pub fn validate(&self) -> Result<SignupProfile, FormErrors> {
        let mut errors = FormErrors::new();

        errors.require("email", &self.email, "Email is required");
        errors.require("password", &self.password, "Password is required");
        if self.password != self.confirm_password {
            errors.insert("confirmPassword", "Passwords do not match");
        }
        errors.require("firstName", &self.first_name, "First name is required");
        errors.require("lastName", &self.last_name, "Last name is required");
        errors.require("phone", &self.phone, "Phone number is required");
        errors.require("location", &self.location, "Location is required");

        let pincode = blank_to_none(&self.pincode);
        let aadhar_number = blank_to_none(&self.aadhar_number);
        if self.role == AccountRole::Worker {
            match pincode.as_deref() {
                None => errors.insert("pincode", "Pin code is required"),
                Some(value) => errors.require_digits(
                    "pincode",
                    value,
                    PINCODE_LENGTH,
                    "Pin code must be 6 digits",
                ),
            }
            match aadhar_number.as_deref() {
                None => errors.insert("aadharNumber", "Aadhar number is required"),
                Some(value) => errors.require_digits(
                    "aadharNumber",
                    value,
                    AADHAR_LENGTH,
                    "Aadhar number must be 12 digits",
                ),
            }
        }

        let first_name = self.first_name.trim().to_string();
        let last_name = self.last_name.trim().to_string();
        let is_worker = self.role == AccountRole::Worker;

        errors.into_result(SignupProfile {
            email: self.email.trim().to_string(),
            full_name: format!("{first_name} {last_name}"),
            first_name,
            last_name,
            phone: self.phone.trim().to_string(),
            location: self.location.trim().to_string(),
            role: self.role,
            language_preference: self.language_preference,
            pincode: pincode.filter(|_| is_worker),
            aadhar_number: aadhar_number.filter(|_| is_worker),
            phone_verified: false,
        })
    }

    pub fn requires_otp(&self) -> bool {
        self.role == AccountRole::Worker
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginRequest, FormErrors> {
        let mut errors = FormErrors::new();
        errors.require("email", &self.email, "Email is required");
        errors.require("password", &self.password, "Password is required");
        errors.into_result(LoginRequest {
            email: self.email.trim().to_string(),
        })
    }
}

/// Second step of a worker signup: the original form plus the code sent to
/// the worker's phone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OtpForm {
    pub signup: SignupForm,
    pub code: String,
}

impl OtpForm {
    pub fn validate(&self) -> Result<SignupProfile, FormErrors> {
        let code_valid = is_digits(self.code.trim(), OTP_LENGTH);
        match self.signup.validate() {
            Ok(profile) if code_valid => Ok(SignupProfile {
                phone_verified: true,
                ..profile
            }),
            Ok(_) => Err(otp_error(FormErrors::new())),
            Err(errors) if code_valid => Err(errors),
            Err(errors) => Err(otp_error(errors)),
        }
    }
}

fn otp_error(mut errors: FormErrors) -> FormErrors {
    errors.insert("otp", "Please enter a valid 6-digit OTP");
    errors
}
