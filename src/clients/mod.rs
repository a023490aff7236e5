pub mod admin_api;

pub use admin_api::{AdminApiClient, AdminSession, ClientError, DashboardSnapshot};
