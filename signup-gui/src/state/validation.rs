//! Client side checks of the signup fields.
//!
//! These only spare the user a round trip, the server enforces its own policy.

pub const PHONE_NUMBER_LEN: usize = 11;
pub const PASSWORD_MIN_LEN: usize = 4;

/// A phone number is exactly 11 ASCII digits, no separators.
pub fn is_valid_phone_number(phone_number: &str) -> bool {
    phone_number.len() == PHONE_NUMBER_LEN && phone_number.bytes().all(|b| b.is_ascii_digit())
}

/// A password is at least 4 UTF-16 code units long, so a character outside the basic
/// multilingual plane counts twice.
pub fn is_valid_password(password: &str) -> bool {
    password.encode_utf16().count() >= PASSWORD_MIN_LEN
}
