use std::env;
use std::sync::{Mutex, OnceLock};

use serde_json::Value;
use ukef_cli::commands::{config, doctor};
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn config_reports_sources_and_redacts_secrets() {
    with_env(
        &[
            ("UKEF_ACBS_BASE_URL", "https://acbs.example/api"),
            ("UKEF_ACBS_ID_TOKEN", "eyJhbGciOiJSUzI1NiJ9.secret-part"),
            ("UKEF_API_KEY", "operator-api-key-1234"),
        ],
        || {
            let result = config::run();
            assert_eq!(result.exit_code, 0, "expected config to render");

            let output = &result.output;
            assert!(output
                .contains("- acbs.base_url = https://acbs.example/api (source: env (UKEF_ACBS_BASE_URL))"));
            assert!(output.contains("- acbs.id_token = eyJh*** (source: env (UKEF_ACBS_ID_TOKEN))"));
            assert!(output.contains("- api.api_key = oper*** (source: env (UKEF_API_KEY))"));
            assert!(output.contains("- server.port = 3001 (source: default)"));
            assert!(!output.contains("secret-part"));
            assert!(!output.contains("operator-api-key-1234"));
        },
    );
}

#[test]
fn config_honours_the_log_level_alias() {
    with_env(
        &[("UKEF_ACBS_ID_TOKEN", "eyJhbGciOiJSUzI1NiJ9"), ("UKEF_LOG_LEVEL", "debug")],
        || {
            let result = config::run();
            assert_eq!(result.exit_code, 0);
            assert!(result.output.contains("- logging.level = debug (source: env (UKEF_LOG_LEVEL))"));
            assert!(result.output.contains("- api.api_key = <unset> (source: default)"));
        },
    );
}

#[test]
fn config_returns_config_failure_without_an_id_token() {
    with_env(&[], || {
        let result = config::run();
        assert_eq!(result.exit_code, 2, "expected config validation failure code");

        let payload = parse_payload(&result.output);
        assert_eq!(payload["command"], "config");
        assert_eq!(payload["status"], "error");
        assert_eq!(payload["error_class"], "config_validation");
        assert!(payload["message"].as_str().unwrap_or_default().contains("acbs.id_token"));
    });
}

#[test]
fn doctor_passes_when_acbs_answers() {
    let runtime = tokio::runtime::Runtime::new().expect("runtime");
    let server = runtime.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("GET")).respond_with(ResponseTemplate::new(401)).mount(&server).await;
        server
    });
    let base_url = server.uri();

    with_env(&[("UKEF_ACBS_BASE_URL", base_url.as_str()), ("UKEF_ACBS_ID_TOKEN", "eyJhbGciOiJSUzI1NiJ9")], || {
        let result = doctor::run(true);
        assert_eq!(result.exit_code, 0, "expected doctor to pass: {}", result.output);

        let payload = parse_payload(&result.output);
        assert_eq!(payload["overall_status"], "pass");
        assert_eq!(payload["checks"][0]["name"], "config_validation");
        assert_eq!(payload["checks"][1]["name"], "acbs_reachability");
        assert!(payload["checks"][1]["details"].as_str().unwrap_or_default().contains("HTTP 401"));
    });

    drop(server);
}

#[test]
fn doctor_fails_when_acbs_is_unreachable() {
    with_env(
        &[("UKEF_ACBS_BASE_URL", "http://127.0.0.1:9"), ("UKEF_ACBS_ID_TOKEN", "eyJhbGciOiJSUzI1NiJ9")],
        || {
            let result = doctor::run(false);
            assert_eq!(result.exit_code, 1);
            assert!(result.output.starts_with("doctor: one or more readiness checks failed"));
            assert!(result.output.contains("- [ok] config_validation"));
            assert!(result.output.contains("- [fail] acbs_reachability"));
        },
    );
}

#[test]
fn doctor_skips_the_probe_when_config_is_invalid() {
    with_env(&[], || {
        let result = doctor::run(true);
        assert_eq!(result.exit_code, 1);

        let payload = parse_payload(&result.output);
        assert_eq!(payload["overall_status"], "fail");
        assert_eq!(payload["checks"][0]["status"], "fail");
        assert_eq!(payload["checks"][1]["status"], "skipped");
    });
}

fn parse_payload(output: &str) -> Value {
    serde_json::from_str(output).expect("command output should be valid JSON")
}

fn with_env(vars: &[(&str, &str)], test_fn: impl FnOnce()) {
    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    let _guard =
        ENV_LOCK.get_or_init(|| Mutex::new(())).lock().expect("env mutex should not be poisoned");

    let keys = [
        "UKEF_ACBS_BASE_URL",
        "UKEF_ACBS_ID_TOKEN",
        "UKEF_ACBS_TIMEOUT_SECS",
        "UKEF_SERVER_BIND_ADDRESS",
        "UKEF_SERVER_PORT",
        "UKEF_SERVER_GRACEFUL_SHUTDOWN_SECS",
        "UKEF_API_KEY",
        "UKEF_LOGGING_LEVEL",
        "UKEF_LOGGING_FORMAT",
        "UKEF_LOG_LEVEL",
        "UKEF_LOG_FORMAT",
    ];

    let previous_values: Vec<(&str, Option<String>)> =
        keys.iter().map(|key| (*key, env::var(key).ok())).collect();

    for key in &keys {
        env::remove_var(key);
    }
    for (key, value) in vars {
        env::set_var(key, value);
    }

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(test_fn));

    for (key, value) in previous_values {
        match value {
            Some(value) => env::set_var(key, value),
            None => env::remove_var(key),
        }
    }

    if let Err(panic) = result {
        std::panic::resume_unwind(panic);
    }
}
