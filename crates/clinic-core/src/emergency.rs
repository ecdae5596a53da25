//! Emergency call intent.
//!
//! Placing the call is up to the client: the core only produces the `tel:` URI to navigate to.
//! There is no failure path.

use crate::config::CoreConfig;
use crate::notification::Notification;

/// A request to dial the configured emergency number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmergencyCall {
    number: String,
}

impl EmergencyCall {
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Telephone URI for the client to navigate to, e.g. `tel:108`.
    pub fn tel_uri(&self) -> String {
        format!("tel:{}", self.number)
    }

    pub fn notification(&self) -> Notification {
        Notification::from(self)
    }
}

/// Builds the emergency call intent for the configured number.
pub fn initiate_call(cfg: &CoreConfig) -> EmergencyCall {
    let call = EmergencyCall {
        number: cfg.emergency_number().to_string(),
    };
    tracing::info!("emergency call initiated to {}", call.tel_uri());
    call
}
