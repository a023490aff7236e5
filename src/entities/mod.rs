pub mod prelude;

pub mod cart_items;
pub mod login_logs;
pub mod products;
pub mod users;
