use std::env;

const DEFAULT_ORIGIN: &str = "http://localhost:5173";

#[derive(Clone, Debug)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn from_env() -> Self {
        let origins =
            env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| DEFAULT_ORIGIN.to_string());

        Self {
            allowed_origins: parse_origins(&origins),
        }
    }
}

/// Splits a comma-separated origin list. An empty or all-whitespace value
/// falls back to the default origin rather than allowing nothing.
fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(|origin| origin.trim().to_string())
        .filter(|origin| !origin.is_empty())
        .collect();

    if origins.is_empty() {
        return vec![DEFAULT_ORIGIN.to_string()];
    }

    origins
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_comma_separated_origins() {
        let origins = parse_origins("http://a.example, http://b.example");
        assert_eq!(origins, vec!["http://a.example", "http://b.example"]);
    }

    #[test]
    fn test_empty_value_falls_back_to_default() {
        assert_eq!(parse_origins(""), vec![DEFAULT_ORIGIN]);
        assert_eq!(parse_origins("  "), vec![DEFAULT_ORIGIN]);
        assert_eq!(parse_origins(" , ,"), vec![DEFAULT_ORIGIN]);
    }

    #[test]
    fn test_skips_empty_entries() {
        let origins = parse_origins("http://a.example,,http://b.example,");
        assert_eq!(origins, vec!["http://a.example", "http://b.example"]);
    }
}
