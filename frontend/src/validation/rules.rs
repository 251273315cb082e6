//! Field rules the derive attributes cannot express on their own.

use std::borrow::Cow;

use validator::ValidationError;

const PHONE_DIGITS: usize = 10;

/// Validates a Nepali mobile number.
///
/// Requirements:
/// - Exactly 10 ASCII digits
/// - Starts with `9`
pub fn validate_nepali_phone(phone: &str) -> Result<(), ValidationError> {
    let digits_only = phone.chars().all(|c| c.is_ascii_digit());
    if phone.len() != PHONE_DIGITS || !digits_only || !phone.starts_with('9') {
        return Err(ValidationError::new("phone_invalid")
            .with_message(Cow::Borrowed("Invalid phone number")));
    }
    Ok(())
}

/// Rejects values that are empty once surrounding whitespace is removed.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::Borrowed("This field is required")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_accepts_mobile_number() {
        assert!(validate_nepali_phone("9841234567").is_ok());
        assert!(validate_nepali_phone("9701234567").is_ok());
    }

    #[test]
    fn phone_rejects_wrong_length() {
        assert!(validate_nepali_phone("984123456").is_err());
        assert!(validate_nepali_phone("98412345678").is_err());
    }

    #[test]
    fn phone_rejects_non_digits_and_landline_prefix() {
        let err = validate_nepali_phone("98-1234567").unwrap_err();
        assert_eq!(err.code, "phone_invalid");
        assert!(validate_nepali_phone("0141234567").is_err());
    }

    #[test]
    fn not_blank_rejects_whitespace() {
        assert!(validate_not_blank("   ").is_err());
        assert!(validate_not_blank("Thapa").is_ok());
    }
}
