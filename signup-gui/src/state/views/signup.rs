use signup_ui::component::form;

use crate::{
    services::signup::SignUpRequest,
    state::{
        cooldown::Cooldown,
        validation::{is_valid_password, is_valid_phone_number},
    },
};

pub const MISSING_FIELDS: &str = "Please fill in all fields";
pub const MISSING_PHONE_NUMBER: &str = "Please enter your phone number";
pub const INVALID_PHONE_NUMBER: &str = "Invalid phone number format";
pub const INVALID_PASSWORD: &str = "Password must be at least 4 characters";

const PHONE_NUMBER_WARNING: &str = "Phone number must be 11 digits";
const CODE_WARNING: &str = "Code must contain only digits";

/// State of the signup form.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub name: form::Value<String>,
    pub phone_number: form::Value<String>,
    pub code: form::Value<String>,
    pub password: form::Value<String>,
    pub cooldown: Cooldown,
    /// A registration request is in flight.
    pub submitting: bool,
    /// A verification code request is in flight.
    pub requesting_code: bool,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_update_name(&mut self, name: String) {
        self.name.value = name;
    }

    pub fn on_update_phone_number(&mut self, phone_number: String) {
        self.phone_number.valid =
            phone_number.is_empty() || is_valid_phone_number(&phone_number);
        self.phone_number.warning = (!self.phone_number.valid).then_some(PHONE_NUMBER_WARNING);
        self.phone_number.value = phone_number;
    }

    pub fn on_update_code(&mut self, code: String) {
        let valid = code.chars().all(|c| c.is_ascii_digit());
        self.code = form::Value {
            value: code,
            warning: (!valid).then_some(CODE_WARNING),
            valid,
        };
    }

    pub fn on_update_password(&mut self, password: String) {
        self.password.valid = password.is_empty() || is_valid_password(&password);
        self.password.warning = (!self.password.valid).then_some(INVALID_PASSWORD);
        self.password.value = password;
    }

    pub fn can_submit(&self) -> bool {
        !self.submitting
    }

    pub fn can_request_code(&self) -> bool {
        !self.submitting && !self.requesting_code
    }

    /// Phone number to send the verification code to, or the alert to show.
    pub fn verification_phone_number(&self) -> Result<String, &'static str> {
        let phone_number = &self.phone_number.value;
        if phone_number.is_empty() {
            return Err(MISSING_PHONE_NUMBER);
        }
        if !is_valid_phone_number(phone_number) {
            return Err(INVALID_PHONE_NUMBER);
        }
        Ok(phone_number.clone())
    }

    /// Registration payload, or the alert to show.
    pub fn signup_request(&self) -> Result<SignUpRequest, &'static str> {
        if self.name.value.is_empty()
            || self.phone_number.value.is_empty()
            || self.code.value.is_empty()
            || self.password.value.is_empty()
        {
            return Err(MISSING_FIELDS);
        }
        if !is_valid_phone_number(&self.phone_number.value) {
            return Err(INVALID_PHONE_NUMBER);
        }
        if !is_valid_password(&self.password.value) {
            return Err(INVALID_PASSWORD);
        }
        Ok(SignUpRequest {
            name: self.name.value.clone(),
            phone_number: self.phone_number.value.clone(),
            ver_number: self.code.value.clone(),
            password: self.password.value.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> SignupForm {
        let mut form = SignupForm::new();
        form.on_update_name("Kim".to_string());
        form.on_update_phone_number("01012345678".to_string());
        form.on_update_code("123456".to_string());
        form.on_update_password("secret".to_string());
        form
    }

    #[test]
    fn test_live_phone_number_feedback() {
        let mut form = SignupForm::new();
        form.on_update_phone_number("010".to_string());
        assert!(!form.phone_number.valid);
        assert_eq!(form.phone_number.warning, Some(PHONE_NUMBER_WARNING));

        form.on_update_phone_number("01012345678".to_string());
        assert!(form.phone_number.valid);
        assert_eq!(form.phone_number.warning, None);

        // Clearing the field removes the warning.
        form.on_update_phone_number(String::new());
        assert!(form.phone_number.valid);
    }

    #[test]
    fn test_live_code_and_password_feedback() {
        let mut form = SignupForm::new();
        form.on_update_code("12a".to_string());
        assert!(!form.code.valid);
        assert_eq!(form.code.warning, Some(CODE_WARNING));
        form.on_update_code("123".to_string());
        assert!(form.code.valid);

        form.on_update_password("abc".to_string());
        assert!(!form.password.valid);
        form.on_update_password("abcd".to_string());
        assert!(form.password.valid);
        assert_eq!(form.password.warning, None);
    }

    #[test]
    fn test_signup_request() {
        let request = filled().signup_request().unwrap();
        assert_eq!(request.name, "Kim");
        assert_eq!(request.phone_number, "01012345678");
        assert_eq!(request.ver_number, "123456");
        assert_eq!(request.password, "secret");
    }

    #[test]
    fn test_signup_request_checks_order() {
        // Emptiness is checked before format.
        let mut form = filled();
        form.on_update_name(String::new());
        form.on_update_phone_number("123".to_string());
        assert_eq!(form.signup_request(), Err(MISSING_FIELDS));

        let mut form = filled();
        form.on_update_code(String::new());
        assert_eq!(form.signup_request(), Err(MISSING_FIELDS));

        let mut form = filled();
        form.on_update_phone_number("0101234567".to_string());
        form.on_update_password("abc".to_string());
        assert_eq!(form.signup_request(), Err(INVALID_PHONE_NUMBER));

        let mut form = filled();
        form.on_update_password("abc".to_string());
        assert_eq!(form.signup_request(), Err(INVALID_PASSWORD));
    }

    #[test]
    fn test_verification_phone_number() {
        let mut form = SignupForm::new();
        assert_eq!(form.verification_phone_number(), Err(MISSING_PHONE_NUMBER));

        form.on_update_phone_number("0101234".to_string());
        assert_eq!(form.verification_phone_number(), Err(INVALID_PHONE_NUMBER));

        form.on_update_phone_number("01012345678".to_string());
        assert_eq!(
            form.verification_phone_number(),
            Ok("01012345678".to_string())
        );
    }

    #[test]
    fn test_in_flight_flags() {
        let mut form = filled();
        assert!(form.can_submit());
        assert!(form.can_request_code());

        form.requesting_code = true;
        assert!(form.can_submit());
        assert!(!form.can_request_code());

        form.requesting_code = false;
        form.submitting = true;
        assert!(!form.can_submit());
        assert!(!form.can_request_code());
    }
}
