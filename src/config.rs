use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub session_cookie_name: String,
    pub session_idle_minutes: i64,
    pub share_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            session_cookie_name: "gm_session".to_string(),
            session_idle_minutes: 60,
            share_url: "https://yourapp.com/share".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            web_server_host: env::var("WEB_SERVER_HOST").unwrap_or(defaults.web_server_host),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.web_server_port),
            session_cookie_name: env::var("SESSION_COOKIE_NAME")
                .ok()
                .filter(|name| !name.trim().is_empty())
                .unwrap_or(defaults.session_cookie_name),
            session_idle_minutes: env::var("SESSION_IDLE_MINUTES")
                .ok()
                .and_then(|m| m.parse().ok())
                .filter(|m: &i64| *m > 0)
                .unwrap_or(defaults.session_idle_minutes),
            share_url: env::var("SHARE_URL").unwrap_or(defaults.share_url),
        }
    }

    pub fn session_idle_timeout(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.session_idle_minutes)
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            session_cookie_name: "gm_test_session".to_string(),
            session_idle_minutes: 5,
            share_url: "https://example.test/share".to_string(),
        }
    }
}
