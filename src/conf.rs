use config::{Config, ConfigError, Environment};
use lazy_static::lazy_static;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Settings {
    pub service_name: String,
    pub listen_port: String,
    pub database_url: String,
    pub database_pool_max_connections: u32,
    pub page_size: usize,
    //admin gate
    pub admin_email: String,
    pub admin_password: String,
    pub session_ttl_minutes: i64,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let conf = Config::builder()
            .set_default("service_name", "jobboard")?
            .set_default("listen_port", "3000")?
            .set_default("database_pool_max_connections", 5)?
            .set_default("page_size", 5)?
            .set_default("session_ttl_minutes", 720)?
            .add_source(Environment::default().try_parsing(true))
            .build()?;
        let mut s: Settings = conf.try_deserialize()?;
        if s.page_size == 0 {
            tracing::warn!("page_size of 0 is not usable, falling back to 5");
            s.page_size = 5;
        }
        s.admin_email = s.admin_email.trim().to_lowercase();
        Ok(s)
    }
}

lazy_static! {
    pub static ref settings: Settings = Settings::new().expect("improperly configured");
}
