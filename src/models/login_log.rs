/// A login attempt as recorded by the authentication flow.
#[derive(Debug, Clone)]
pub struct NewLoginLog {
    pub email: String,
    pub success: bool,
    pub ip: Option<String>,
    pub user_agent: String,
}
