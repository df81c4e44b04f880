use iced::time::Instant;

use crate::services::signup::SignupError;

/// All application messages
#[derive(Debug, Clone)]
pub enum Msg {
    // Form inputs
    SignupUpdateName(String),
    SignupUpdatePhoneNumber(String),
    SignupUpdateCode(String),
    SignupUpdatePassword(String),

    // Registration
    SignupSubmit,
    SignupDone(Result<String, SignupError>),

    // Verification code
    VerificationRequest,
    VerificationSent(Result<String, SignupError>),
    CooldownTick(Instant),

    // Navigation
    NavigateToSignup,

    // Warnings
    WarningCloseModal,
}

/// Type alias for Msg (used in views)
pub type Message = Msg;
