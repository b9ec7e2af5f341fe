use std::env;

/// Fallback signing secret for local development. Only used when `DEV_MODE`
/// is explicitly enabled; production startup requires `JWT_SECRET`.
const DEV_JWT_SECRET: &str = "your-secret-key";

pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub jwt_secret: String,
}

impl Config {
    pub fn from_env() -> Self {
        let jwt_secret = match env::var("JWT_SECRET") {
            Ok(secret) => secret,
            Err(_) if dev_mode_enabled() => {
                log::warn!(
                    "JWT_SECRET is not set; falling back to the insecure development secret \
                     because DEV_MODE is enabled"
                );
                DEV_JWT_SECRET.to_string()
            }
            Err(_) => {
                panic!("JWT_SECRET must be set (or set DEV_MODE=1 to accept the insecure development secret)")
            }
        };

        Self {
            jwt_secret,
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("SERVER_PORT must be a number"),
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
        }
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.server_host, self.server_port)
    }
}

fn dev_mode_enabled() -> bool {
    env::var("DEV_MODE")
        .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}
