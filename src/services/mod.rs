pub mod cart_service;
pub mod cart_service_impl;
pub use cart_service::{CartError, CartService};
pub use cart_service_impl::SeaOrmCartService;

pub mod login_log_service;
pub mod login_log_service_impl;
pub use login_log_service::{LoginLogError, LoginLogService};
pub use login_log_service_impl::SeaOrmLoginLogService;

pub mod product_service;
pub mod product_service_impl;
pub use product_service::{ProductError, ProductService};
pub use product_service_impl::SeaOrmProductService;

pub mod user_service;
pub mod user_service_impl;
pub use user_service::{UserError, UserService};
pub use user_service_impl::SeaOrmUserService;
