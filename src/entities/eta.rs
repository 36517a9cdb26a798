use serde::{Deserialize, Serialize};

use crate::entities::Provider;

/// The answer handed back to the caller: seconds of travel and the provider
/// that actually produced them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EtaResult {
    #[serde(rename = "Eta")]
    pub eta: u32,
    #[serde(rename = "Provider")]
    pub provider: Provider,
}

impl EtaResult {
    pub fn new(eta: u32, provider: Provider) -> Self {
        Self { eta, provider }
    }
}

#[test]
fn serialises_with_capitalised_fields() {
    let result = EtaResult::new(20048, Provider::ServiceA);

    assert_eq!(
        serde_json::to_string(&result).unwrap(),
        r#"{"Eta":20048,"Provider":"ETAServiceA"}"#
    );
}
