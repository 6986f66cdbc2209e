//! Form State
//!
//! The three user-entered payment fields, the page identifiers read from the
//! query string, and the JSON payload built from both.

use serde::Serialize;
use std::str::FromStr;

use crate::error::{CheckoutError, Result};
use crate::validation::{ValidationErrors, validate};

/// Payment input field
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    CardNumber,
    ExpiryDate,
    Cvv,
}

impl Field {
    pub const ALL: [Self; 3] = [Self::CardNumber, Self::ExpiryDate, Self::Cvv];

    /// Wire name, as used in the request payload and the input ids
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CardNumber => "cardNumber",
            Self::ExpiryDate => "expiryDate",
            Self::Cvv => "cvv",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::CardNumber => "Card Number",
            Self::ExpiryDate => "Expiry Date",
            Self::Cvv => "CVV",
        }
    }

    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::CardNumber => "1234 5678 9012 3456",
            Self::ExpiryDate => "MM/YY",
            Self::Cvv => "123",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = CheckoutError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "cardNumber" => Ok(Self::CardNumber),
            "expiryDate" => Ok(Self::ExpiryDate),
            "cvv" => Ok(Self::Cvv),
            other => Err(CheckoutError::UnknownField(other.to_string())),
        }
    }
}

/// Current values of the payment inputs
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite one field. No validation happens here.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    /// Overwrite a field addressed by its wire name
    pub fn update_named(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let field = name.parse()?;
        self.update_field(field, value);
        Ok(())
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::CardNumber => &self.card_number,
            Field::ExpiryDate => &self.expiry_date,
            Field::Cvv => &self.cvv,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::CardNumber => &mut self.card_number,
            Field::ExpiryDate => &mut self.expiry_date,
            Field::Cvv => &mut self.cvv,
        }
    }

    pub fn validate(&self) -> ValidationErrors {
        validate(self)
    }

    /// Build the payment payload, refusing when any field is invalid
    pub fn to_request(&self, context: &CheckoutContext) -> Result<CheckoutRequest> {
        let errors = self.validate();
        if errors.has_errors() {
            return Err(CheckoutError::Validation(errors));
        }
        Ok(CheckoutRequest::new(context, self))
    }
}

/// Identifiers carried through from the checkout page URL
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckoutContext {
    pub user_id: Option<String>,
    pub plan_id: Option<String>,
}

impl CheckoutContext {
    pub fn new(user_id: Option<String>, plan_id: Option<String>) -> Self {
        Self { user_id, plan_id }
    }

    /// Parse from a raw query string (`userId=u1&planId=pro`, with or without `?`).
    ///
    /// The first occurrence of each key wins. Values are not validated.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut context = Self::default();
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "userId" if context.user_id.is_none() => context.user_id = Some(value.into_owned()),
                "planId" if context.plan_id.is_none() => context.plan_id = Some(value.into_owned()),
                _ => {}
            }
        }
        context
    }
}

/// JSON body posted to the payment endpoint
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub user_id: Option<String>,
    pub plan_id: Option<String>,
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
}

impl CheckoutRequest {
    /// Card fields are sent exactly as typed.
    pub fn new(context: &CheckoutContext, form: &FormState) -> Self {
        Self {
            user_id: context.user_id.clone(),
            plan_id: context.plan_id.clone(),
            card_number: form.card_number.clone(),
            expiry_date: form.expiry_date.clone(),
            cvv: form.cvv.clone(),
        }
    }
}
