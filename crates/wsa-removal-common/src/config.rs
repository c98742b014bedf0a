//! Invocation configuration
//!
//! Both values resolve independently: payload field, then the environment
//! variable of the same name, then a placeholder.

use crate::defaults::{APP_ID_KEY, DIRECTORY_KEY, PLACEHOLDER_APP_ID, PLACEHOLDER_DIRECTORY_ID};
use crate::error::ConfigError;
use serde_json::Value;

/// WorkSpaces directory identifier (e.g. `d-906734xxxx`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display, derive_more::Deref)]
pub struct DirectoryId(String);

impl DirectoryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// WorkSpaces application identifier (e.g. `wsa-hvh179sq6`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display, derive_more::Deref)]
pub struct ApplicationId(String);

impl ApplicationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Invocation payload fields recognised by the task. Other fields are ignored.
#[derive(Debug, Clone, Default)]
pub struct RemovalEvent {
    pub workspaces_directory: Option<String>,
    pub office_app_id: Option<String>,
}

impl RemovalEvent {
    /// Decode a raw invocation payload.
    ///
    /// Never fails: a payload that is not an object, or a recognised field
    /// that is not a string, is treated as absent so resolution falls back to
    /// the environment. The returned issues describe what was ignored.
    /// `null` is an empty payload (console test invocations send it).
    pub fn from_value(value: Value) -> (Self, Vec<ConfigError>) {
        let fields = match value {
            Value::Null => return (Self::default(), Vec::new()),
            Value::Object(fields) => fields,
            other => {
                let issue = ConfigError::NotAnObject(json_type(&other));
                return (Self::default(), vec![issue]);
            }
        };

        let mut issues = Vec::new();
        let mut string_field = |key: &'static str| match fields.get(key) {
            None | Some(Value::Null) => None,
            Some(Value::String(value)) => Some(value.clone()),
            Some(other) => {
                issues.push(ConfigError::NotAString {
                    field: key,
                    found: json_type(other),
                });
                None
            }
        };

        let event = Self {
            workspaces_directory: string_field(DIRECTORY_KEY),
            office_app_id: string_field(APP_ID_KEY),
        };
        (event, issues)
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Where a configuration value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ConfigSource {
    #[display("payload")]
    Payload,
    #[display("environment")]
    Environment,
    #[display("placeholder")]
    Placeholder,
}

/// Resolved configuration for one removal run
#[derive(Debug, Clone)]
pub struct RemovalConfig {
    /// Directory whose WorkSpaces are scanned
    pub directory_id: DirectoryId,
    /// Application to disassociate and uninstall
    pub target_app_id: ApplicationId,
    pub directory_source: ConfigSource,
    pub app_source: ConfigSource,
}

impl RemovalConfig {
    /// Resolve configuration from the payload, falling back to `env_lookup`.
    pub fn resolve<F>(event: &RemovalEvent, env_lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let (directory, directory_source) = resolve_value(
            event.workspaces_directory.as_deref(),
            DIRECTORY_KEY,
            PLACEHOLDER_DIRECTORY_ID,
            &env_lookup,
        );
        let (app, app_source) = resolve_value(
            event.office_app_id.as_deref(),
            APP_ID_KEY,
            PLACEHOLDER_APP_ID,
            &env_lookup,
        );

        Self {
            directory_id: DirectoryId(directory),
            target_app_id: ApplicationId(app),
            directory_source,
            app_source,
        }
    }

    /// Resolve configuration from the payload and the process environment.
    pub fn from_env(event: &RemovalEvent) -> Self {
        Self::resolve(event, |key| std::env::var(key).ok())
    }

    /// True if either value fell through to its placeholder
    pub fn uses_placeholder(&self) -> bool {
        self.directory_source == ConfigSource::Placeholder
            || self.app_source == ConfigSource::Placeholder
    }
}

fn resolve_value<F>(
    payload: Option<&str>,
    key: &str,
    placeholder: &str,
    env_lookup: &F,
) -> (String, ConfigSource)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = payload {
        return (value.to_string(), ConfigSource::Payload);
    }
    if let Some(value) = env_lookup(key) {
        return (value, ConfigSource::Environment);
    }
    (placeholder.to_string(), ConfigSource::Placeholder)
}
