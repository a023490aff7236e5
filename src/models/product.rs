use serde::{Deserialize, Serialize};

use super::fields::{FieldError, FieldValue, present, present_value};

/// Body of `POST /products`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<FieldValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub image: String,
    pub category: String,
}

impl ProductInput {
    /// Only presence is checked; a negative price is accepted.
    pub fn validate(&self) -> Result<NewProduct, FieldError> {
        let (Some(name), Some(price), Some(image), Some(category)) = (
            present(self.name.as_deref()),
            present_value(self.price.as_ref()),
            present(self.image.as_deref()),
            present(self.category.as_deref()),
        ) else {
            return Err(FieldError::MissingProductFields);
        };

        let price = price.as_number().ok_or(FieldError::NonNumericPrice)?;

        Ok(NewProduct {
            name: name.to_string(),
            price,
            image: image.to_string(),
            category: category.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> ProductInput {
        ProductInput {
            name: Some("Lamp".to_string()),
            price: Some(FieldValue::from("19.99")),
            image: Some("https://img.example/lamp.png".to_string()),
            category: Some("home".to_string()),
        }
    }

    #[test]
    fn test_valid_product() {
        let product = input().validate().unwrap();
        assert_eq!(product.price, 19.99);
        assert_eq!(product.category, "home");
    }

    #[test]
    fn test_each_field_required() {
        let mut p = input();
        p.name = None;
        assert_eq!(p.validate(), Err(FieldError::MissingProductFields));

        let mut p = input();
        p.image = Some(String::new());
        assert_eq!(p.validate(), Err(FieldError::MissingProductFields));

        let mut p = input();
        p.category = None;
        assert_eq!(p.validate(), Err(FieldError::MissingProductFields));

        let mut p = input();
        p.price = Some(FieldValue::from(0.0));
        assert_eq!(p.validate(), Err(FieldError::MissingProductFields));
    }

    #[test]
    fn test_negative_price_allowed() {
        let mut p = input();
        p.price = Some(FieldValue::from(-3.0));
        assert_eq!(p.validate().unwrap().price, -3.0);
    }

    #[test]
    fn test_non_numeric_price() {
        let mut p = input();
        p.price = Some(FieldValue::from("free"));
        assert_eq!(p.validate(), Err(FieldError::NonNumericPrice));
    }
}
