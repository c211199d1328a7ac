pub mod cors_config;
pub mod db_env;
pub mod health;
pub mod hostname;
pub mod logging;
pub mod tls_config;

/// True if the env var is present and is one of "1", "true", "yes", or "y". False otherwise.
pub fn is_env_flag_set(env_var: &str) -> bool {
    std::env::var(env_var)
        .map(|v| {
            let v = v.trim().to_lowercase();
            v == "1" || v == "true" || v == "yes" || v == "y"
        })
        .unwrap_or(false)
}
