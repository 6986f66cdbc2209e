//! Card Field Validation
//!
//! Format checks only. There is no Luhn check and no expiry-in-the-past check.

use regex::Regex;
use std::sync::LazyLock;

use crate::form::{Field, FormState};

pub const CARD_NUMBER_ERROR: &str = "Card number must be 16 digits.";
pub const EXPIRY_DATE_ERROR: &str = "Expiry date must be in MM/YY format.";
pub const CVV_ERROR: &str = "CVV must be 3 digits.";

// ASCII classes on purpose: `\d` would also accept other Unicode digits.
static CARD_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{16}$").unwrap());
static EXPIRY_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(0[1-9]|1[0-2])/[0-9]{2}$").unwrap());
static CVV_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{3}$").unwrap());

/// Per-field messages; an empty string means the field passed
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
}

impl ValidationErrors {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::CardNumber => &self.card_number,
            Field::ExpiryDate => &self.expiry_date,
            Field::Cvv => &self.cvv,
        }
    }

    pub fn has_errors(&self) -> bool {
        Field::ALL.iter().any(|&field| !self.get(field).is_empty())
    }

    /// Failing fields with their messages, in form order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::ALL
            .into_iter()
            .map(|field| (field, self.get(field)))
            .filter(|(_, message)| !message.is_empty())
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

pub fn is_valid_card_number(value: &str) -> bool {
    let digits: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    CARD_NUMBER_RE.is_match(&digits)
}

pub fn is_valid_expiry_date(value: &str) -> bool {
    EXPIRY_DATE_RE.is_match(value)
}

pub fn is_valid_cvv(value: &str) -> bool {
    CVV_RE.is_match(value)
}

/// Check every field of the form. Always recomputes all three entries.
pub fn validate(form: &FormState) -> ValidationErrors {
    let check = |ok: bool, message: &str| if ok { String::new() } else { message.to_string() };

    ValidationErrors {
        card_number: check(is_valid_card_number(&form.card_number), CARD_NUMBER_ERROR),
        expiry_date: check(is_valid_expiry_date(&form.expiry_date), EXPIRY_DATE_ERROR),
        cvv: check(is_valid_cvv(&form.cvv), CVV_ERROR),
    }
}
