//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Runtime settings for the admin client.
pub struct ClientConfig {
    /// Origin of the restaurant directory backend, e.g. `http://localhost:8080`.
    pub api_base_url: String,
    /// OAuth client id the federated login widget was registered with.
    #[serde(default)]
    pub google_client_id: Option<String>,
}
