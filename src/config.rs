//! Runtime configuration.
//!
//! Values come from built-in defaults, overridden by `TODO_*` environment
//! variables (e.g. `TODO_DATABASE_URL`, `TODO_LISTEN_ADDR`, `TODO_LOGLEVEL`).

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

pub const ENV_PREFIX: &str = "TODO_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:todos.db".to_string(),
            listen_addr: "127.0.0.1:5000".to_string(),
            loglevel: "info".to_string(),
        }
    }
}

impl Config {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn from_env() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }
}
