//! Basic usage of the layered loader.
//!
//! Run from a directory containing `.env` and `.env.development` to see the
//! three tiers interact; without them the snapshot alone is returned.

use smart_config::ConfigLoader;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .init();

    // An injected snapshot stands in for the live process environment, the
    // way a test harness would drive the loader.
    let config = ConfigLoader::new()
        .with_process_env([
            ("NODE_ENV".to_string(), "development".to_string()),
            ("PORT".to_string(), "8080".to_string()),
            ("SYSTEM_ONLY_VAR".to_string(), "hello_from_system".to_string()),
        ])
        .load();

    for warning in config.warnings() {
        eprintln!("warning: {warning}");
    }

    for key in [
        "DATABASE_URL",
        "API_KEY",
        "LOG_LEVEL",
        "PORT",
        "SYSTEM_ONLY_VAR",
    ] {
        println!("{key}={}", config.get(key).unwrap_or("<unset>"));
    }
    println!(
        "optional feature flag: {}",
        config.get("FEATURE_FLAG_X").unwrap_or("disabled")
    );
}
