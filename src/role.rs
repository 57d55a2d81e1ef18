use core::{
    convert::Infallible,
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// A user role understood by the API.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Role {
    /// A tenant administrator.
    Admin,
    /// A driver.
    Chauffeur,
    /// A cross-tenant supervisor.
    GlobalSupervision,
    /// A role unknown to this client, sent as is.
    Other(String),
}

impl Role {
    /// Returns a canonical name sent in headers.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "ADMIN",
            Self::Chauffeur => "CHAUFFEUR",
            Self::GlobalSupervision => "GLOBAL_SUPERVISION",
            Self::Other(name) => name,
        }
    }
}

impl FromStr for Role {
    type Err = Infallible;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        // Identity provider role names are aliased to canonical ones.
        Ok(match name.trim() {
            "ADMIN" | "Admin Codex" => Self::Admin,
            "CHAUFFEUR" | "Chauffeur Codex" => Self::Chauffeur,
            "GLOBAL_SUPERVISION" | "Supervision Globale" | "Delivops Team" => {
                Self::GlobalSupervision
            }
            name => Self::Other(name.into()),
        })
    }
}

impl Display for Role {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.as_str())
    }
}

impl From<&str> for Role {
    fn from(name: &str) -> Self {
        match name.parse() {
            Ok(role) => role,
            Err(error) => match error {},
        }
    }
}

/// Normalizes identity provider role names into roles.
pub fn normalize_roles<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<Role> {
    names.into_iter().map(Role::from).collect()
}
