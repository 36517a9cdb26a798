use serde::{Deserialize, Serialize};
use std::fmt;

pub const SERVICE_A_TOKEN: &str = "ETAServiceA";
pub const SERVICE_B_TOKEN: &str = "ETAServiceB";
pub const UNSPECIFIED_TOKEN: &str = "";

/// An upstream ETA service, as named on the wire.
///
/// `Unspecified` asks for every known provider and takes the fastest answer.
/// Tokens outside the known set are kept as `Unknown` so validation can
/// report them instead of failing the whole decode.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Provider {
    ServiceA,
    ServiceB,
    #[default]
    Unspecified,
    Unknown(String),
}

impl Provider {
    pub fn token(&self) -> &str {
        match self {
            Self::ServiceA => SERVICE_A_TOKEN,
            Self::ServiceB => SERVICE_B_TOKEN,
            Self::Unspecified => UNSPECIFIED_TOKEN,
            Self::Unknown(token) => token.as_str(),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl From<String> for Provider {
    fn from(token: String) -> Self {
        match token.as_str() {
            SERVICE_A_TOKEN => Self::ServiceA,
            SERVICE_B_TOKEN => Self::ServiceB,
            UNSPECIFIED_TOKEN => Self::Unspecified,
            _ => Self::Unknown(token),
        }
    }
}

impl From<&str> for Provider {
    fn from(token: &str) -> Self {
        token.to_string().into()
    }
}

impl From<Provider> for String {
    fn from(provider: Provider) -> Self {
        match provider {
            Provider::Unknown(token) => token,
            known => known.token().to_string(),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
