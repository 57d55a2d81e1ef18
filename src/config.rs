mod error;
mod serde;
mod toml;

pub use self::{
    error::ConfigError,
    serde::{SerializableConfig, compile_config},
    toml::read_config,
};
use crate::credential::DevIdentity;
use core::ops::Deref;
use http::HeaderValue;
use url::Url;

/// A default base URL used by servers without any configured base.
pub const DEFAULT_LOCAL_BASE: &str = "http://localhost:8000";
/// A default tenant identifier.
pub const DEFAULT_TENANT_ID: &str = "1";
/// A default development subject.
pub const DEFAULT_DEV_SUBJECT: &str = "dev|user";
/// Default host names only resolvable inside an internal network.
pub const DEFAULT_INTERNAL_ALIASES: &[&str] = &["api", "backend"];
/// A default path of a same-origin token endpoint.
pub const DEFAULT_TOKEN_PATH: &str = "/api/auth/token";

/// A process-wide client configuration.
///
/// It is built once at startup and never changes afterwards.
#[derive(Clone, Debug)]
pub struct Config {
    public_base: Option<Url>,
    internal_base: Option<Url>,
    tenant_id: HeaderValue,
    dev_identity: Option<DevIdentity>,
    dev_fake_auth: bool,
    production: bool,
    internal_aliases: Vec<String>,
    token_path: String,
    access_token: Option<String>,
}

impl Config {
    /// Creates a configuration with defaults.
    pub fn new() -> Self {
        Self {
            public_base: None,
            internal_base: None,
            tenant_id: HeaderValue::from_static(DEFAULT_TENANT_ID),
            dev_identity: None,
            dev_fake_auth: false,
            production: false,
            internal_aliases: DEFAULT_INTERNAL_ALIASES
                .iter()
                .copied()
                .map(ToOwned::to_owned)
                .collect(),
            token_path: DEFAULT_TOKEN_PATH.into(),
            access_token: None,
        }
    }

    /// Reads a configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    /// Reads a configuration from environment variable pairs.
    pub fn from_vars(
        vars: impl IntoIterator<Item = (String, String)>,
    ) -> Result<Self, ConfigError> {
        compile_config(SerializableConfig::from_vars(vars))
    }

    /// Returns a public API base.
    pub const fn public_base(&self) -> Option<&Url> {
        self.public_base.as_ref()
    }

    /// Returns an internal-network API base.
    pub const fn internal_base(&self) -> Option<&Url> {
        self.internal_base.as_ref()
    }

    /// Returns a tenant identifier.
    pub const fn tenant_id(&self) -> &HeaderValue {
        &self.tenant_id
    }

    /// Returns a development identity.
    pub const fn dev_identity(&self) -> Option<&DevIdentity> {
        self.dev_identity.as_ref()
    }

    /// Returns `true` if the development identity may be sent at all.
    pub const fn dev_identity_available(&self) -> bool {
        self.dev_identity.is_some() && !self.production
    }

    /// Returns `true` if requests use the development identity only.
    pub const fn dev_mode(&self) -> bool {
        self.dev_fake_auth && self.dev_identity_available()
    }

    /// Returns `true` in production.
    pub const fn production(&self) -> bool {
        self.production
    }

    /// Returns host names only resolvable inside an internal network.
    pub fn internal_aliases(&self) -> impl Iterator<Item = &str> {
        self.internal_aliases.iter().map(Deref::deref)
    }

    /// Returns a path of a same-origin token endpoint.
    pub fn token_path(&self) -> &str {
        &self.token_path
    }

    /// Returns a server session access token.
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Sets a public API base.
    pub fn set_public_base(mut self, base: Option<Url>) -> Self {
        self.public_base = base;
        self
    }

    /// Sets an internal-network API base.
    pub fn set_internal_base(mut self, base: Option<Url>) -> Self {
        self.internal_base = base;
        self
    }

    /// Sets a tenant identifier.
    pub fn set_tenant_id(mut self, tenant_id: HeaderValue) -> Self {
        self.tenant_id = tenant_id;
        self
    }

    /// Sets a development identity.
    pub fn set_dev_identity(mut self, identity: Option<DevIdentity>) -> Self {
        self.dev_identity = identity;
        self
    }

    /// Sets whether requests use the development identity only.
    pub const fn set_dev_fake_auth(mut self, enabled: bool) -> Self {
        self.dev_fake_auth = enabled;
        self
    }

    /// Sets whether we run in production.
    pub const fn set_production(mut self, production: bool) -> Self {
        self.production = production;
        self
    }

    /// Sets internal host names.
    pub fn set_internal_aliases(mut self, aliases: Vec<String>) -> Self {
        self.internal_aliases = aliases;
        self
    }

    /// Sets a token endpoint path.
    pub fn set_token_path(mut self, path: String) -> Self {
        self.token_path = path;
        self
    }

    /// Sets a server session access token.
    pub fn set_access_token(mut self, token: Option<String>) -> Self {
        self.access_token = token;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Role;
    use pretty_assertions::assert_eq;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(key, value)| ((*key).into(), (*value).into()))
            .collect()
    }

    #[test]
    fn default_config() {
        let config = Config::from_vars(Vec::<(String, String)>::new()).unwrap();

        assert_eq!(config.public_base(), None);
        assert_eq!(config.internal_base(), None);
        assert_eq!(config.tenant_id(), "1");
        assert_eq!(config.dev_identity(), None);
        assert!(!config.dev_mode());
        assert_eq!(
            config.internal_aliases().collect::<Vec<_>>(),
            vec!["api", "backend"]
        );
        assert_eq!(config.token_path(), "/api/auth/token");
    }

    #[test]
    fn read_variables() {
        let config = Config::from_vars(vars(&[
            ("DELIVOPS_API_BASE", "https://api.example.com"),
            ("DELIVOPS_INTERNAL_API_BASE", "http://api:8000"),
            ("DELIVOPS_TENANT_ID", "42"),
            ("DELIVOPS_DEV_ROLE", "Chauffeur Codex"),
            ("DELIVOPS_DEV_SUB", "dev|driver"),
            ("DELIVOPS_DEV_FAKE_AUTH", "true"),
            ("DELIVOPS_INTERNAL_ALIASES", "api, worker ,"),
            ("UNRELATED", "value"),
        ]))
        .unwrap();

        assert_eq!(
            config.public_base().map(Url::as_str),
            Some("https://api.example.com/")
        );
        assert_eq!(
            config.internal_base().map(Url::as_str),
            Some("http://api:8000/")
        );
        assert_eq!(config.tenant_id(), "42");
        assert_eq!(
            config.dev_identity(),
            Some(&DevIdentity::new(Role::Chauffeur, "dev|driver".into()))
        );
        assert!(config.dev_mode());
        assert_eq!(
            config.internal_aliases().collect::<Vec<_>>(),
            vec!["api", "worker"]
        );
    }

    #[test]
    fn ignore_blank_variables() {
        let config = Config::from_vars(vars(&[
            ("DELIVOPS_API_BASE", "  "),
            ("DELIVOPS_TENANT_ID", ""),
        ]))
        .unwrap();

        assert_eq!(config.public_base(), None);
        assert_eq!(config.tenant_id(), "1");
    }

    #[test]
    fn default_dev_subject() {
        let config = Config::from_vars(vars(&[("DELIVOPS_DEV_ROLE", "ADMIN")])).unwrap();

        assert_eq!(
            config.dev_identity(),
            Some(&DevIdentity::new(Role::Admin, DEFAULT_DEV_SUBJECT.into()))
        );
        assert!(config.dev_identity_available());
        assert!(!config.dev_mode());
    }

    #[test]
    fn disable_dev_identity_in_production() {
        let config = Config::from_vars(vars(&[
            ("DELIVOPS_DEV_ROLE", "ADMIN"),
            ("DELIVOPS_DEV_FAKE_AUTH", "1"),
            ("DELIVOPS_ENV", "production"),
        ]))
        .unwrap();

        assert!(config.production());
        assert!(!config.dev_identity_available());
        assert!(!config.dev_mode());
    }

    #[test]
    fn fail_on_invalid_base() {
        assert!(matches!(
            Config::from_vars(vars(&[("DELIVOPS_API_BASE", "not a url")])),
            Err(ConfigError::UrlParse(_))
        ));
    }

    #[test]
    fn fail_on_invalid_tenant() {
        assert!(matches!(
            Config::from_vars(vars(&[("DELIVOPS_TENANT_ID", "1\n2")])),
            Err(ConfigError::HttpInvalidHeaderValue(_))
        ));
    }
}
