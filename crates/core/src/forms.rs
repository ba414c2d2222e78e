//! Validated input forms.
//!
//! Each form mirrors the fields a user submits; `validate()` performs the
//! required-field checks before anything is sent to the service.

use serde::Serialize;
use validator::{Validate, ValidationError};

/// Accepted simulated payment methods.
pub const PAYMENT_METHODS: &[&str] = &["bkash", "nagad", "rocket"];

/// The role new accounts register with.
pub const DEFAULT_ROLE: &str = "student";

/// Registration form, `POST /api/auth/register`.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterForm {
    #[serde(rename = "stdId")]
    #[validate(length(min = 1, message = "Student ID is required"))]
    pub student_id: String,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    #[validate(length(min = 1, message = "Hall name is required"))]
    pub hall_name: String,
    /// Free-text self description; may be empty.
    pub description: String,
    /// Account role, normally [`DEFAULT_ROLE`].
    #[validate(length(min = 1, message = "Role is required"))]
    pub role: String,
}

/// New delivery post form, `POST /api/posts`.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct NewPost {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
}

/// Simulated payment form completing a delivery.
#[derive(Debug, Clone, Validate)]
pub struct PaymentForm {
    #[validate(custom(function = "validate_payment_method"))]
    pub method: String,
    #[validate(range(min = 1, message = "Amount must be positive"))]
    pub amount: u32,
}

fn validate_payment_method(method: &str) -> Result<(), ValidationError> {
    if PAYMENT_METHODS.contains(&method) {
        Ok(())
    } else {
        let mut error = ValidationError::new("payment_method");
        error.message = Some("Payment method must be one of: bkash, nagad, rocket".into());
        Err(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_form_requires_all_fields() {
        let form = RegisterForm {
            student_id: String::new(),
            name: "Nadia".into(),
            email: "not-an-email".into(),
            password: "123".into(),
            hall_name: String::new(),
            description: String::new(),
            role: DEFAULT_ROLE.into(),
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("student_id"));
        assert!(errors.field_errors().contains_key("email"));
        assert!(errors.field_errors().contains_key("password"));
        assert!(errors.field_errors().contains_key("hall_name"));
    }

    #[test]
    fn valid_register_form_passes() {
        let form = RegisterForm {
            student_id: "2020331001".into(),
            name: "Nadia".into(),
            email: "nadia@campus.edu".into(),
            password: "secret1".into(),
            hall_name: "Shahporan Hall".into(),
            description: "Second year, CSE".into(),
            role: DEFAULT_ROLE.into(),
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn register_form_serializes_the_full_wire_payload() {
        let form = RegisterForm {
            student_id: "2020331001".into(),
            name: "Nadia".into(),
            email: "nadia@campus.edu".into(),
            password: "secret1".into(),
            hall_name: "Shahporan Hall".into(),
            description: String::new(),
            role: DEFAULT_ROLE.into(),
        };

        let body = serde_json::to_value(&form).unwrap();
        assert_eq!(body["stdId"], "2020331001");
        assert_eq!(body["hallName"], "Shahporan Hall");
        assert_eq!(body["description"], "");
        assert_eq!(body["role"], "student");
    }

    #[test]
    fn new_post_requires_title_and_description() {
        let form = NewPost {
            title: String::new(),
            description: String::new(),
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
        assert!(errors.field_errors().contains_key("description"));
    }

    #[test]
    fn payment_method_must_be_known() {
        let form = PaymentForm {
            method: "paypal".into(),
            amount: 50,
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("method"));

        for method in PAYMENT_METHODS {
            let form = PaymentForm {
                method: (*method).into(),
                amount: 50,
            };
            assert!(form.validate().is_ok(), "{method} should be accepted");
        }
    }

    #[test]
    fn payment_amount_must_be_positive() {
        let form = PaymentForm {
            method: "bkash".into(),
            amount: 0,
        };
        assert!(form.validate().is_err());
    }
}
