use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, Map};
use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub seed: SeedConfig,
}

#[derive(Clone, Default, Deserialize)]
pub struct DatabaseConfig {
    /// Required unless `seed.dry_run` is set.
    pub url: Option<String>,
}

impl DatabaseConfig {
    /// ## Summary
    /// Returns the connection URL with any password replaced by `***`.
    #[must_use]
    pub fn redacted_url(&self) -> Option<String> {
        self.url.as_deref().map(redact_database_url)
    }
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.redacted_url())
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedConfig {
    /// Apply embedded migrations before seeding.
    pub run_migrations: bool,
    /// Seed an in-memory store instead of the database.
    pub dry_run: bool,
}

impl Settings {
    /// ## Summary
    /// Returns a configuration builder pre-populated with default values.
    ///
    /// ## Errors
    /// Returns an error if a default value cannot be set.
    pub fn defaults() -> CoreResult<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("logging.level", "info")?
            .set_default("seed.run_migrations", true)?
            .set_default("seed.dry_run", false)?)
    }

    /// ## Summary
    /// Loads configuration from an optional `config.toml` and the process environment.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> CoreResult<Self> {
        Self::load_from("config.toml", None)
    }

    /// ## Summary
    /// Loads configuration from `file` (optional) and environment variables.
    ///
    /// Environment variables take precedence over file values. Nested keys are
    /// separated by `__` (`SEED__DRY_RUN`, `LOGGING__LEVEL`); a single `_` is part of
    /// the key name. `DATABASE_URL` is read as-is into `database.url`.
    ///
    /// `vars` replaces the process environment when given.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load_from(file: &str, vars: Option<Map<String, String>>) -> CoreResult<Self> {
        tracing::debug!(file, "Loading configuration");

        let database_url = match &vars {
            Some(vars) => vars.get("DATABASE_URL").cloned(),
            None => std::env::var("DATABASE_URL").ok(),
        };

        Ok(Self::defaults()?
            // TOML file
            .add_source(config::File::with_name(file).required(false))
            // Env
            .add_source(
                Environment::default()
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true)
                    .source(vars),
            )
            .set_override_option("database.url", database_url.filter(|url| !url.is_empty()))?
            .build()?
            .try_deserialize::<Settings>()?)
    }

    /// ## Summary
    /// Returns the database URL, which every non-dry run needs.
    ///
    /// ## Errors
    /// Returns an error if `database.url` is not configured.
    pub fn database_url(&self) -> CoreResult<&str> {
        self.database
            .url
            .as_deref()
            .ok_or(CoreError::MissingConfig("database.url"))
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> CoreResult<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}

/// ## Summary
/// Masks the password in a PostgreSQL connection string.
///
/// Handles the URI form (`user:password@` userinfo and a `password` query
/// parameter) and the `key=value` keyword form.
#[must_use]
pub fn redact_database_url(url: &str) -> String {
    match url.split_once("://") {
        Some((scheme, rest)) => format!("{scheme}://{}", redact_uri(rest)),
        None => redact_keywords(url),
    }
}

fn redact_uri(rest: &str) -> String {
    let (base, query) = match rest.split_once('?') {
        Some((base, query)) => (base, Some(query)),
        None => (rest, None),
    };

    let mut redacted = match base.rsplit_once('@') {
        Some((userinfo, host)) => match userinfo.split_once(':') {
            Some((user, _password)) => format!("{user}:***@{host}"),
            None => base.to_string(),
        },
        None => base.to_string(),
    };

    if let Some(query) = query {
        let params: Vec<String> = query
            .split('&')
            .map(|param| match param.split_once('=') {
                Some((key, _value)) if key.eq_ignore_ascii_case("password") => {
                    format!("{key}=***")
                }
                _ => param.to_string(),
            })
            .collect();
        redacted.push('?');
        redacted.push_str(&params.join("&"));
    }

    redacted
}

fn redact_keywords(conninfo: &str) -> String {
    let mut out = String::with_capacity(conninfo.len());
    let mut rest = conninfo;

    loop {
        let trimmed = rest.trim_start();
        out.push_str(&rest[..rest.len() - trimmed.len()]);
        rest = trimmed;
        if rest.is_empty() {
            break;
        }

        let key_end = rest
            .find(|c: char| c == '=' || c.is_whitespace())
            .unwrap_or(rest.len());
        let key = &rest[..key_end];
        out.push_str(key);
        rest = &rest[key_end..];

        let after_space = rest.trim_start();
        out.push_str(&rest[..rest.len() - after_space.len()]);
        rest = after_space;
        let Some(value) = rest.strip_prefix('=') else {
            continue;
        };
        out.push('=');

        let value_start = value.trim_start();
        out.push_str(&value[..value.len() - value_start.len()]);
        let len = keyword_value_len(value_start);
        if key.eq_ignore_ascii_case("password") {
            out.push_str("***");
        } else {
            out.push_str(&value_start[..len]);
        }
        rest = &value_start[len..];
    }

    out
}

/// Byte length of a keyword value: a single-quoted string with `\` escapes, or
/// everything up to the next whitespace.
fn keyword_value_len(value: &str) -> usize {
    let Some(quoted) = value.strip_prefix('\'') else {
        return value.find(char::is_whitespace).unwrap_or(value.len());
    };

    let mut escaped = false;
    for (idx, c) in quoted.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '\'' {
            return idx + 2;
        }
    }
    value.len()
}

#[cfg(test)]
mod tests;
