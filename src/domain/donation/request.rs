//! Donation requests and their validation rules.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use std::fmt;

use super::status::DonationMethod;
use crate::domain::foundation::ValidationError;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email regex")
});

static MSISDN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^2547\d{8}$").expect("valid msisdn regex"));

/// Kenyan mobile number in international form without `+` (`2547XXXXXXXX`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Msisdn(String);

impl Msisdn {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("phone"));
        }
        if !MSISDN_PATTERN.is_match(trimmed) {
            return Err(ValidationError::invalid_format(
                "phone",
                "Phone must be in format 2547XXXXXXXX",
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Msisdn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A donor's intent to pay, prior to contacting the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct DonationRequest {
    pub email: String,
    pub amount: Decimal,
    pub currency: Option<String>,
    pub method: DonationMethod,
    pub phone: Option<String>,
    pub note: Option<String>,
}

/// A request that passed validation; ready to send to the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedDonation {
    pub email: String,
    pub amount: Decimal,
    pub currency: String,
    pub method: DonationMethod,
    pub note: Option<String>,
}

impl DonationRequest {
    pub fn stk_push(email: impl Into<String>, phone: impl Into<String>, amount: Decimal) -> Self {
        Self {
            email: email.into(),
            amount,
            currency: None,
            method: DonationMethod::MpesaStk,
            phone: Some(phone.into()),
            note: None,
        }
    }

    pub fn checkout(email: impl Into<String>, amount: Decimal) -> Self {
        Self {
            email: email.into(),
            amount,
            currency: None,
            method: DonationMethod::HostedCheckout,
            phone: None,
            note: None,
        }
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Checks email, amount and (for STK push) phone.
    ///
    /// Blank currency falls back to the method's default.
    pub fn validate(&self) -> Result<ValidatedDonation, ValidationError> {
        self.validate_parts().map(|(donation, _)| donation)
    }

    /// Same checks, also returning the MSISDN to prompt. Fails for a
    /// hosted-checkout request, which carries no phone.
    pub fn validate_stk_push(&self) -> Result<(ValidatedDonation, Msisdn), ValidationError> {
        match self.validate_parts()? {
            (donation, Some(phone)) => Ok((donation, phone)),
            (_, None) => Err(ValidationError::empty_field("phone")),
        }
    }

    fn validate_parts(&self) -> Result<(ValidatedDonation, Option<Msisdn>), ValidationError> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        if !EMAIL_PATTERN.is_match(email) {
            return Err(ValidationError::invalid_format(
                "email",
                "not a valid email address",
            ));
        }
        if self.amount <= Decimal::ZERO {
            return Err(ValidationError::not_positive("amount"));
        }

        let phone = match self.method {
            DonationMethod::MpesaStk => {
                let raw = self.phone.as_deref().unwrap_or_default();
                Some(Msisdn::parse(raw)?)
            }
            DonationMethod::HostedCheckout => None,
        };

        let currency = self
            .currency
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_uppercase)
            .unwrap_or_else(|| self.method.default_currency().to_string());

        let donation = ValidatedDonation {
            email: email.to_string(),
            amount: self.amount,
            currency,
            method: self.method,
            note: self
                .note
                .as_deref()
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(str::to_string),
        };
        Ok((donation, phone))
    }
}

impl ValidatedDonation {
    /// Narrative shown on the donor's STK prompt.
    pub fn narrative(&self) -> &str {
        self.note.as_deref().unwrap_or("Donation")
    }
}
