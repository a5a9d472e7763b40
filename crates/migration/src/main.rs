use config::{Config, Environment, File};
use sea_orm_migration::prelude::*;
use std::env;
use url::Url;

/// Resolve the database URL from the same sources the server reads: an optional
/// `config.yaml` layered under the environment. `database_url` wins; otherwise the
/// `postgres_*` keys (with the server's defaults) are composed into a URL.
fn resolve_database_url(settings: &Config) -> Option<String> {
    if let Ok(url) = settings.get_string("database_url") {
        if !url.trim().is_empty() {
            return Some(url);
        }
    }

    let host = settings.get_string("postgres_host").ok()?;
    let host = if host.contains(':') && !host.starts_with('[') {
        format!("[{host}]")
    } else {
        host
    };
    let port = settings.get_int("postgres_port").ok()?;

    let mut url = Url::parse(&format!("postgres://{host}:{port}")).ok()?;
    url.set_username(&settings.get_string("postgres_user").ok()?)
        .ok()?;
    url.set_password(Some(&settings.get_string("postgres_password").ok()?))
        .ok()?;
    url.set_path(&settings.get_string("postgres_db").ok()?);
    Some(url.to_string())
}

fn load_settings(env: Option<config::Map<String, String>>) -> Result<Config, config::ConfigError> {
    Config::builder()
        .set_default("postgres_db", "database_name")?
        .set_default("postgres_user", "user")?
        .set_default("postgres_password", "password")?
        .set_default("postgres_host", "localhost")?
        .set_default("postgres_port", 5432)?
        .add_source(File::with_name("config.yaml").required(false))
        .add_source(Environment::default().separator("__").source(env))
        .build()
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let settings = load_settings(None).expect("Failed to load configuration");
    if let Some(url) = resolve_database_url(&settings) {
        env::set_var("DATABASE_URL", url);
    }
    cli::run_cli(migration::Migrator).await;
}
