use super::{Config, ConfigError, DEFAULT_DEV_SUBJECT};
use crate::{Role, credential::DevIdentity};
use http::HeaderValue;
use serde::{Deserialize, Serialize};
use url::Url;

const VARIABLE_PREFIX: &str = "DELIVOPS_";
const PRODUCTION_ENVIRONMENT: &str = "production";

/// A serializable configuration.
///
/// Every field is optional so that configuration layers can be merged.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SerializableConfig {
    api_base: Option<String>,
    internal_api_base: Option<String>,
    tenant_id: Option<String>,
    dev: Option<DevConfig>,
    environment: Option<String>,
    internal_aliases: Option<Vec<String>>,
    token_path: Option<String>,
    access_token: Option<String>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct DevConfig {
    role: Option<String>,
    sub: Option<String>,
    fake_auth: Option<bool>,
}

impl DevConfig {
    fn merge(&mut self, other: Self) {
        if other.role.is_some() {
            self.role = other.role;
        }

        if other.sub.is_some() {
            self.sub = other.sub;
        }

        if other.fake_auth.is_some() {
            self.fake_auth = other.fake_auth;
        }
    }

    fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl SerializableConfig {
    /// Builds a configuration layer from environment variable pairs.
    ///
    /// Unknown and blank variables are ignored.
    pub fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut config = Self::default();
        let mut dev = DevConfig::default();

        for (key, value) in vars {
            let Some(name) = key.strip_prefix(VARIABLE_PREFIX) else {
                continue;
            };
            let value = value.trim();

            if value.is_empty() {
                continue;
            }

            match name {
                "API_BASE" => config.api_base = Some(value.into()),
                "INTERNAL_API_BASE" => config.internal_api_base = Some(value.into()),
                "TENANT_ID" => config.tenant_id = Some(value.into()),
                "DEV_ROLE" => dev.role = Some(value.into()),
                "DEV_SUB" => dev.sub = Some(value.into()),
                "DEV_FAKE_AUTH" => dev.fake_auth = Some(parse_flag(value)),
                "ENV" => config.environment = Some(value.into()),
                "INTERNAL_ALIASES" => {
                    config.internal_aliases = Some(
                        value
                            .split(',')
                            .map(str::trim)
                            .filter(|alias| !alias.is_empty())
                            .map(ToOwned::to_owned)
                            .collect(),
                    )
                }
                "TOKEN_PATH" => config.token_path = Some(value.into()),
                "ACCESS_TOKEN" => config.access_token = Some(value.into()),
                _ => {}
            }
        }

        if !dev.is_empty() {
            config.dev = Some(dev);
        }

        config
    }

    /// Merges another configuration on top of this one.
    pub fn merge(&mut self, other: Self) {
        if other.api_base.is_some() {
            self.api_base = other.api_base;
        }

        if other.internal_api_base.is_some() {
            self.internal_api_base = other.internal_api_base;
        }

        if other.tenant_id.is_some() {
            self.tenant_id = other.tenant_id;
        }

        if let Some(other) = other.dev {
            if let Some(dev) = &mut self.dev {
                dev.merge(other);
            } else {
                self.dev = Some(other);
            }
        }

        if other.environment.is_some() {
            self.environment = other.environment;
        }

        if other.internal_aliases.is_some() {
            self.internal_aliases = other.internal_aliases;
        }

        if other.token_path.is_some() {
            self.token_path = other.token_path;
        }

        if other.access_token.is_some() {
            self.access_token = other.access_token;
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Compiles a serializable configuration into a validated one.
pub fn compile_config(config: SerializableConfig) -> Result<Config, ConfigError> {
    let mut compiled = Config::new()
        .set_public_base(config.api_base.as_deref().map(Url::parse).transpose()?)
        .set_internal_base(
            config
                .internal_api_base
                .as_deref()
                .map(Url::parse)
                .transpose()?,
        )
        .set_production(config.environment.as_deref() == Some(PRODUCTION_ENVIRONMENT))
        .set_access_token(config.access_token);

    if let Some(tenant_id) = config.tenant_id {
        compiled = compiled.set_tenant_id(HeaderValue::try_from(tenant_id)?);
    }

    if let Some(dev) = config.dev {
        compiled = compiled.set_dev_fake_auth(dev.fake_auth.unwrap_or_default());

        if let Some(role) = dev.role {
            let identity = DevIdentity::new(
                Role::from(role.as_str()),
                dev.sub.unwrap_or_else(|| DEFAULT_DEV_SUBJECT.into()),
            );
            identity.validate()?;
            compiled = compiled.set_dev_identity(Some(identity));
        }
    }

    if let Some(aliases) = config.internal_aliases {
        compiled = compiled.set_internal_aliases(aliases);
    }

    if let Some(path) = config.token_path {
        compiled = compiled.set_token_path(path);
    }

    Ok(compiled)
}
