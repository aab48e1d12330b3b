use std::time::Duration;

/// Engine settings that come from the environment in production.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Store name shown in the menu header and embedded in charge descriptions.
    pub store_name: String,
    /// Fixed payer contact attached to every charge.
    pub payer_email: String,
    /// Upper bound on a single charge-creation call; expiry counts as a
    /// gateway failure.
    pub gateway_timeout: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            store_name: "LOJABOT".to_string(),
            payer_email: "vendas@lojabot.com.br".to_string(),
            gateway_timeout: Duration::from_secs(30),
        }
    }
}
