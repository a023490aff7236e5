use serde::{Deserialize, Serialize};

use super::fields::{FieldError, FieldValue, present, present_value};

/// Body of `POST /admin/cart` and `PUT /admin/cart/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CartItemInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<FieldValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<FieldValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A cart item that passed field validation, with numbers coerced.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItemFields {
    pub user_email: String,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
    pub image: String,
}

impl CartItemInput {
    /// Checks presence, then price, then quantity, in that order.
    pub fn validate(&self) -> Result<CartItemFields, FieldError> {
        let (Some(user_email), Some(name), Some(price), Some(quantity)) = (
            present(self.user_email.as_deref()),
            present(self.name.as_deref()),
            present_value(self.price.as_ref()),
            present_value(self.quantity.as_ref()),
        ) else {
            return Err(FieldError::MissingCartFields);
        };

        let price = price
            .as_positive_decimal()
            .ok_or(FieldError::InvalidPrice)?;
        let quantity = quantity
            .as_positive_integer()
            .ok_or(FieldError::InvalidQuantity)?;

        Ok(CartItemFields {
            user_email: user_email.to_string(),
            name: name.to_string(),
            price,
            quantity,
            image: self.image.clone().unwrap_or_default(),
        })
    }
}
