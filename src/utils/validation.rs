use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// Help text shown under a form field that failed its check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Please enter your name")]
    MissingName,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Card number must be 16 digits")]
    InvalidCardNumber,
    #[error("Use the MM/YY format")]
    InvalidExpiry,
    #[error("CVV must be 3 digits")]
    InvalidCvv,
    #[error("Please enter a message")]
    MissingMessage,
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"))
}

fn expiry_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(0[1-9]|1[0-2])/\d{2}$").expect("expiry pattern is valid"))
}

pub fn validate_name(name: &str) -> Result<(), FieldError> {
    if name.trim().is_empty() {
        Err(FieldError::MissingName)
    } else {
        Ok(())
    }
}

pub fn validate_email(email: &str) -> Result<(), FieldError> {
    if email_regex().is_match(email.trim()) {
        Ok(())
    } else {
        Err(FieldError::InvalidEmail)
    }
}

pub fn validate_card_number(number: &str) -> Result<(), FieldError> {
    let digits: String = number.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.len() == 16 && digits.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(FieldError::InvalidCardNumber)
    }
}

pub fn validate_expiry(expiry: &str) -> Result<(), FieldError> {
    if expiry_regex().is_match(expiry.trim()) {
        Ok(())
    } else {
        Err(FieldError::InvalidExpiry)
    }
}

pub fn validate_cvv(cvv: &str) -> Result<(), FieldError> {
    let cvv = cvv.trim();
    if cvv.len() == 3 && cvv.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(FieldError::InvalidCvv)
    }
}

pub fn validate_message(message: &str) -> Result<(), FieldError> {
    if message.trim().is_empty() {
        Err(FieldError::MissingMessage)
    } else {
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    CardNumber,
    Expiry,
    Cvv,
    Message,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<Field, FieldError>);

impl FormErrors {
    fn check(&mut self, field: Field, result: Result<(), FieldError>) {
        if let Err(err) = result {
            self.0.insert(field, err);
        }
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_empty()
    }

    pub fn has_error(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutForm {
    pub cardholder_name: String,
    pub email: String,
    pub card_number: String,
    pub expiry: String,
    pub cvv: String,
}

impl CheckoutForm {
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::default();
        errors.check(Field::Name, validate_name(&self.cardholder_name));
        errors.check(Field::Email, validate_email(&self.email));
        errors.check(Field::CardNumber, validate_card_number(&self.card_number));
        errors.check(Field::Expiry, validate_expiry(&self.expiry));
        errors.check(Field::Cvv, validate_cvv(&self.cvv));
        errors
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::default();
        errors.check(Field::Name, validate_name(&self.name));
        errors.check(Field::Email, validate_email(&self.email));
        errors.check(Field::Message, validate_message(&self.message));
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn valid_checkout() -> CheckoutForm {
        CheckoutForm {
            cardholder_name: "Priya Sharma".into(),
            email: "priya@example.in".into(),
            card_number: "4111 1111 1111 1111".into(),
            expiry: "09/27".into(),
            cvv: "123".into(),
        }
    }

    #[test]
    fn name_must_not_be_blank() {
        assert_eq!(validate_name("  "), Err(FieldError::MissingName));
        assert_eq!(validate_name("Asha"), Ok(()));
    }

    #[test]
    fn email_pattern() {
        assert_eq!(validate_email("player@turfbook.in"), Ok(()));
        assert_eq!(validate_email(" player@turfbook.in "), Ok(()));
        assert_eq!(validate_email("player@turfbook"), Err(FieldError::InvalidEmail));
        assert_eq!(validate_email("player turf@book.in"), Err(FieldError::InvalidEmail));
        assert_eq!(validate_email(""), Err(FieldError::InvalidEmail));
    }

    #[test]
    fn card_fields() {
        assert_eq!(validate_card_number("4111111111111111"), Ok(()));
        assert_eq!(validate_card_number("4111 1111 1111 111"), Err(FieldError::InvalidCardNumber));
        assert_eq!(validate_card_number("4111-1111-1111-1111"), Err(FieldError::InvalidCardNumber));
        assert_eq!(validate_expiry("12/30"), Ok(()));
        assert_eq!(validate_expiry("13/30"), Err(FieldError::InvalidExpiry));
        assert_eq!(validate_expiry("1/30"), Err(FieldError::InvalidExpiry));
        assert_eq!(validate_cvv("007"), Ok(()));
        assert_eq!(validate_cvv("12a"), Err(FieldError::InvalidCvv));
        assert_eq!(validate_cvv("1234"), Err(FieldError::InvalidCvv));
    }

    #[test]
    fn checkout_form_collects_every_failure() {
        assert!(valid_checkout().validate().is_valid());

        let form = CheckoutForm {
            cardholder_name: String::new(),
            email: "nope".into(),
            ..valid_checkout()
        };
        let errors = form.validate();

        assert!(!errors.is_valid());
        assert_eq!(errors.len(), 2);
        assert!(errors.has_error(Field::Name));
        assert!(errors.has_error(Field::Email));
        assert!(!errors.has_error(Field::CardNumber));
        assert_eq!(
            errors.get(Field::Email).map(|e| e.to_string()),
            Some("Please enter a valid email address".to_string())
        );
    }

    #[test]
    fn contact_form_requires_a_message() {
        let form = ContactForm {
            name: "Rahul".into(),
            email: "rahul@example.com".into(),
            message: "   ".into(),
        };
        let errors = form.validate();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Message), Some(FieldError::MissingMessage));
    }
}
