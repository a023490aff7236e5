pub mod cart;
pub mod fields;
pub mod login_log;
pub mod product;
pub mod user;

pub use cart::{CartItemFields, CartItemInput};
pub use fields::{FieldError, FieldValue};
pub use login_log::NewLoginLog;
pub use product::{NewProduct, ProductInput};
pub use user::NewUser;

use chrono::{DateTime, SecondsFormat, Utc};

/// Fixed-width RFC 3339 timestamp, so string order is chronological order.
#[must_use]
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

#[must_use]
pub fn timestamp_now() -> String {
    format_timestamp(Utc::now())
}
