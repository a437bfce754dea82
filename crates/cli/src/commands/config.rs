use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, SecretString};
use toml::Value;
use ukef_core::config::{AppConfig, LoadOptions};

use super::{CommandResult, EXIT_CONFIG_INVALID};

/// One rendered setting: dotted key, display value and the env vars that can
/// set it, highest precedence first.
struct Setting {
    key: &'static str,
    value: String,
    env_keys: &'static [&'static str],
}

pub fn run() -> CommandResult {
    match AppConfig::load(LoadOptions::default()) {
        Ok(config) => {
            let file_path = detect_config_path();
            let file_doc = load_config_file_doc(file_path.as_deref());
            CommandResult::success(render(&config, file_doc.as_ref(), file_path.as_deref()))
        }
        Err(error) => CommandResult::failure(
            "config",
            "config_validation",
            format!("config validation failed: {error}"),
            EXIT_CONFIG_INVALID,
        ),
    }
}

fn settings(config: &AppConfig) -> Vec<Setting> {
    vec![
        Setting {
            key: "acbs.base_url",
            value: config.acbs.base_url.clone(),
            env_keys: &["UKEF_ACBS_BASE_URL"],
        },
        Setting {
            key: "acbs.id_token",
            value: redact_token(&config.acbs.id_token),
            env_keys: &["UKEF_ACBS_ID_TOKEN"],
        },
        Setting {
            key: "acbs.timeout_secs",
            value: config.acbs.timeout_secs.to_string(),
            env_keys: &["UKEF_ACBS_TIMEOUT_SECS"],
        },
        Setting {
            key: "server.bind_address",
            value: config.server.bind_address.clone(),
            env_keys: &["UKEF_SERVER_BIND_ADDRESS"],
        },
        Setting {
            key: "server.port",
            value: config.server.port.to_string(),
            env_keys: &["UKEF_SERVER_PORT"],
        },
        Setting {
            key: "server.graceful_shutdown_secs",
            value: config.server.graceful_shutdown_secs.to_string(),
            env_keys: &["UKEF_SERVER_GRACEFUL_SHUTDOWN_SECS"],
        },
        Setting {
            key: "api.api_key",
            value: config.api.api_key.as_ref().map_or_else(|| "<unset>".to_string(), redact_token),
            env_keys: &["UKEF_API_KEY"],
        },
        Setting {
            key: "logging.level",
            value: config.logging.level.clone(),
            env_keys: &["UKEF_LOGGING_LEVEL", "UKEF_LOG_LEVEL"],
        },
        Setting {
            key: "logging.format",
            value: format!("{:?}", config.logging.format).to_ascii_lowercase(),
            env_keys: &["UKEF_LOGGING_FORMAT", "UKEF_LOG_FORMAT"],
        },
    ]
}

fn render(config: &AppConfig, file_doc: Option<&Value>, file_path: Option<&Path>) -> String {
    let mut lines = vec!["effective config (source precedence: env > file > default):".to_string()];
    for setting in settings(config) {
        let source = field_source(setting.key, setting.env_keys, file_doc, file_path);
        lines.push(format!("- {} = {} (source: {source})", setting.key, setting.value));
    }
    lines.join("\n")
}

fn detect_config_path() -> Option<PathBuf> {
    [PathBuf::from("ukef.toml"), PathBuf::from("config/ukef.toml")]
        .into_iter()
        .find(|path| path.exists())
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let raw = fs::read_to_string(path?).ok()?;
    raw.parse::<Value>().ok()
}

fn field_source(
    key_path: &str,
    env_keys: &[&str],
    file_doc: Option<&Value>,
    file_path: Option<&Path>,
) -> String {
    let set_env = env_keys
        .iter()
        .find(|key| env::var(key).is_ok_and(|value| !value.trim().is_empty()));
    if let Some(env_key) = set_env {
        return format!("env ({env_key})");
    }

    if file_doc.is_some_and(|doc| contains_path(doc, key_path)) {
        let file_path = file_path
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "config file".to_string());
        return format!("file ({file_path})");
    }

    "default".to_string()
}

fn contains_path(root: &Value, key_path: &str) -> bool {
    let mut current = root;
    for key in key_path.split('.') {
        let Some(next) = current.get(key) else {
            return false;
        };
        current = next;
    }
    true
}

/// Keeps the first four characters of long secrets so operators can tell
/// tokens apart.
fn redact_token(token: &SecretString) -> String {
    let trimmed = token.expose_secret().trim();
    if trimmed.is_empty() {
        return "<empty>".to_string();
    }
    if trimmed.chars().count() <= 8 {
        return "<redacted>".to_string();
    }

    let prefix: String = trimmed.chars().take(4).collect();
    format!("{prefix}***")
}

#[cfg(test)]
mod tests {
    use secrecy::SecretString;
    use toml::Value;

    use super::{contains_path, redact_token};

    #[test]
    fn secrets_are_never_printed_in_full() {
        let long = SecretString::from("eyJhbGciOiJSUzI1NiJ9.payload".to_string());
        assert_eq!(redact_token(&long), "eyJh***");
        assert_eq!(redact_token(&SecretString::from("short".to_string())), "<redacted>");
        assert_eq!(redact_token(&SecretString::from("  ".to_string())), "<empty>");
    }

    #[test]
    fn dotted_keys_are_looked_up_in_the_file() {
        let doc: Value = "[acbs]\nbase_url = \"https://acbs.example\"\n".parse().expect("toml");
        assert!(contains_path(&doc, "acbs.base_url"));
        assert!(!contains_path(&doc, "acbs.timeout_secs"));
        assert!(!contains_path(&doc, "server.port"));
    }
}
