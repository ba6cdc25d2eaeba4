use std::env;

/// Default bcrypt work factor used when `BCRYPT_COST` is not set.
pub const DEFAULT_BCRYPT_COST: u32 = 10;

pub struct Config {
    pub database_url: String,
    pub server_port: u16,
    pub server_host: String,
    pub bcrypt_cost: u32,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("SERVER_PORT must be a number"),
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            bcrypt_cost: env::var("BCRYPT_COST")
                .unwrap_or_else(|_| DEFAULT_BCRYPT_COST.to_string())
                .parse()
                .expect("BCRYPT_COST must be a number"),
        }
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.server_host, self.server_port)
    }
}
