/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the delivery service API (default:
    /// `http://localhost:5000`).
    pub api_url: String,
    /// Optional sign-in email for the smoke binary.
    pub email: Option<String>,
    /// Optional sign-in password for the smoke binary.
    pub password: Option<String>,
}

impl AppConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var          | Default                 |
    /// |------------------|-------------------------|
    /// | `RELAY_API_URL`  | `http://localhost:5000` |
    /// | `RELAY_EMAIL`    | unset                   |
    /// | `RELAY_PASSWORD` | unset                   |
    pub fn from_env() -> Self {
        let api_url =
            std::env::var("RELAY_API_URL").unwrap_or_else(|_| "http://localhost:5000".into());
        let email = std::env::var("RELAY_EMAIL").ok();
        let password = std::env::var("RELAY_PASSWORD").ok();

        Self {
            api_url,
            email,
            password,
        }
    }
}
