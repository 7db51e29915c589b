use super::*;
use tokio_postgres::Config;

#[rustfmt::skip]
pub const DB_NAME:     &str = "DB_NAME";
#[rustfmt::skip]
pub const DB_USER:     &str = "DB_USER";
#[rustfmt::skip]
pub const DB_PASSWORD: &str = "DB_PASSWORD";
#[rustfmt::skip]
pub const DB_HOST:     &str = "DB_HOST";
#[rustfmt::skip]
pub const DB_PORT:     &str = "DB_PORT";

/// Connection parameters for the warehouse.
///
/// All five come from the environment and none has a default.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    dbname: String,
    user: String,
    password: String,
    host: String,
    port: u16,
}

impl Credentials {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build credentials from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &'static str| lookup(key).ok_or(ConfigError::Missing(key));
        let dbname = require(DB_NAME)?;
        let user = require(DB_USER)?;
        let password = require(DB_PASSWORD)?;
        let host = require(DB_HOST)?;
        let value = require(DB_PORT)?;
        let port = value
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::Port { value })?;
        Ok(Self {
            dbname,
            user,
            password,
            host,
            port,
        })
    }

    pub fn config(&self) -> Config {
        let mut config = Config::new();
        config
            .dbname(self.dbname.as_str())
            .user(self.user.as_str())
            .password(self.password.as_str())
            .host(self.host.as_str())
            .port(self.port);
        config
    }
}

impl std::fmt::Display for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}@{}:{}/{}", self.user, self.host, self.port, self.dbname)
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("dbname", &self.dbname)
            .field("user", &self.user)
            .field("password", &"***")
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}
