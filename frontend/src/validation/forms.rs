use serde::{Deserialize, Serialize};
use validator::Validate;

use super::rules;
use crate::api::{CustomerCreate, LoginRequest, RegisterRequest};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

impl LoginForm {
    pub fn into_request(self) -> LoginRequest {
        LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RegisterForm {
    #[validate(length(min = 3, message = "Username must be at least 3 characters"))]
    pub username: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    #[validate(
        length(min = 8, message = "Confirm password is required"),
        must_match(other = "password", message = "Passwords do not match")
    )]
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn into_request(self) -> RegisterRequest {
        RegisterRequest {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password,
            confirm_password: self.confirm_password,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CustomerForm {
    #[validate(
        custom(function = "rules::validate_not_blank"),
        length(max = 100, message = "First name must be at most 100 characters")
    )]
    pub first_name: String,
    #[validate(
        custom(function = "rules::validate_not_blank"),
        length(max = 100, message = "Last name must be at most 100 characters")
    )]
    pub last_name: String,
    #[validate(custom(function = "rules::validate_nepali_phone"))]
    pub phone_number: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    #[serde(default)]
    pub address: String,
}

impl CustomerForm {
    pub fn into_request(self) -> CustomerCreate {
        CustomerCreate {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            phone_number: self.phone_number,
            email: self.email.filter(|email| !email.trim().is_empty()),
            address: self.address,
        }
    }
}
