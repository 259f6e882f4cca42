use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    /// When set, brand-profile creation rejects a userId that doesn't match
    /// an existing user. Off by default: submissions are stored verbatim.
    pub strict_profile_owner: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let strict_profile_owner = std::env::var("STRICT_PROFILE_OWNER")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        Ok(Self {
            database_url,
            strict_profile_owner,
        })
    }
}
