//! Shell configuration, read from the environment.

/// Command prompt printed before every command.
pub const DEFAULT_PROMPT: &str = "Enter Command: ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub prompt: String,
    pub color: bool,
    pub show_card: bool,
    pub log_path: Option<String>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            color: true,
            show_card: false,
            log_path: None,
        }
    }
}

fn is_truthy(v: &str) -> bool {
    let v = v.trim();
    v == "1" || v.eq_ignore_ascii_case("true")
}

impl ShellConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the environment in production, a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let prompt = lookup("BOWLING_PROMPT")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_PROMPT.to_string());

        // NO_COLOR only needs to be present (https://no-color.org).
        let no_color = lookup("BOWLING_NO_COLOR")
            .map(|v| is_truthy(&v))
            .unwrap_or(false)
            || lookup("NO_COLOR").map(|v| !v.is_empty()).unwrap_or(false);

        let show_card = lookup("BOWLING_SHOW_CARD")
            .map(|v| is_truthy(&v))
            .unwrap_or(false);

        let log_path = lookup("BOWLING_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            prompt,
            color: !no_color,
            show_card,
            log_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> ShellConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ShellConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(config_from(&[]), ShellConfig::default());
    }

    #[test]
    fn reads_every_variable() {
        let config = config_from(&[
            ("BOWLING_PROMPT", "> "),
            ("BOWLING_NO_COLOR", "true"),
            ("BOWLING_SHOW_CARD", "1"),
            ("BOWLING_LOG_PATH", " /tmp/bowling.ndjson "),
        ]);
        assert_eq!(config.prompt, "> ");
        assert!(!config.color);
        assert!(config.show_card);
        assert_eq!(config.log_path.as_deref(), Some("/tmp/bowling.ndjson"));
    }

    #[test]
    fn no_color_standard_variable_is_honoured() {
        assert!(!config_from(&[("NO_COLOR", "1")]).color);
        assert!(config_from(&[("NO_COLOR", "")]).color);
        assert!(config_from(&[("BOWLING_NO_COLOR", "0")]).color);
    }

    #[test]
    fn blank_log_path_disables_transcript() {
        assert_eq!(config_from(&[("BOWLING_LOG_PATH", "   ")]).log_path, None);
    }
}
