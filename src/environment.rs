use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Environment variable overriding the analytics API base URL.
pub const API_URL_ENV: &str = "OI_DASH_API_URL";

/// Represents the analytics backends the dashboard can talk to.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// Backend running on this machine (default development server port).
    #[default]
    Local,
    /// Any other backend, addressed by its base URL.
    Custom { api_url: String },
}

impl Environment {
    /// Returns the analytics API base URL associated with the environment.
    pub fn api_url(&self) -> String {
        match self {
            Environment::Local => "http://127.0.0.1:5000".to_string(),
            Environment::Custom { api_url } => api_url.clone(),
        }
    }

    /// Resolves the environment from, in order of precedence, an explicit URL,
    /// the `OI_DASH_API_URL` variable and a URL saved in the config file.
    pub fn resolve(flag: Option<String>, env_var: Option<String>, saved: Option<String>) -> Self {
        flag.or(env_var)
            .or(saved)
            .filter(|url| !url.trim().is_empty())
            .map(|url| url.trim().parse().unwrap_or_default())
            .unwrap_or_default()
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            url if url.starts_with("http://") || url.starts_with("https://") => {
                Ok(Environment::Custom {
                    api_url: s.trim_end_matches('/').to_string(),
                })
            }
            _ => Err(()),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.api_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // The explicit flag wins over the environment variable and the saved URL.
    fn test_resolve_precedence() {
        let env = Environment::resolve(
            Some("http://flag:1".to_string()),
            Some("http://env:2".to_string()),
            Some("http://saved:3".to_string()),
        );
        assert_eq!(env.api_url(), "http://flag:1");

        let env = Environment::resolve(None, None, Some("https://saved:3/".to_string()));
        assert_eq!(env.api_url(), "https://saved:3");
    }

    #[test]
    // Unparseable or empty values fall back to the local backend.
    fn test_resolve_falls_back_to_local() {
        assert_eq!(Environment::resolve(None, None, None), Environment::Local);
        assert_eq!(
            Environment::resolve(Some("  ".to_string()), None, None),
            Environment::Local
        );
        assert_eq!(
            Environment::resolve(Some("ftp://nope".to_string()), None, None),
            Environment::Local
        );
    }
}
