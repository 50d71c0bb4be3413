use anyhow::{bail, Context, Result};

/// Application configuration loaded from environment variables.
/// Every field has a default; only malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Credential for the completion API. `None` keeps question generation on the fallback set.
    pub openai_api_key: Option<String>,
    pub max_upload_bytes: usize,
    /// Minimum resume score that unlocks the technical quiz.
    pub quiz_unlock_score: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            openai_api_key: None,
            max_upload_bytes: 5 * 1024 * 1024,
            quiz_unlock_score: 40,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();

        let quiz_unlock_score = parse_env("QUIZ_UNLOCK_SCORE", defaults.quiz_unlock_score)?;
        if quiz_unlock_score > 100 {
            bail!("QUIZ_UNLOCK_SCORE must be between 0 and 100, got {quiz_unlock_score}");
        }

        Ok(Config {
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            openai_api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", defaults.max_upload_bytes)?,
            quiz_unlock_score,
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_uses_default_when_unset() {
        let value: u16 = parse_env("COACH_API_TEST_UNSET_VARIABLE", 1234).unwrap();
        assert_eq!(value, 1234);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("COACH_API_TEST_BAD_PORT", "not-a-port");
        let result: Result<u16> = parse_env("COACH_API_TEST_BAD_PORT", 8080);
        assert!(result.is_err());
    }

    #[test]
    fn test_default_unlock_score_is_40() {
        assert_eq!(Config::default().quiz_unlock_score, 40);
        assert!(Config::default().openai_api_key.is_none());
    }
}
