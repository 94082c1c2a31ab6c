use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Payload of the root endpoint: service banner plus the routes a client can
/// reach, keyed by resource family.
#[derive(Serialize, Deserialize, Debug)]
pub struct ServiceInfo {
    pub message: &'static str,
    pub status: &'static str,
    pub endpoints: BTreeMap<&'static str, &'static str>,
}
