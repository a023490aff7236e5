pub use super::cart_items::Entity as CartItems;
pub use super::login_logs::Entity as LoginLogs;
pub use super::products::Entity as Products;
pub use super::users::Entity as Users;
