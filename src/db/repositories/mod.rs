pub mod cart;
pub mod login_log;
pub mod product;
pub mod user;
