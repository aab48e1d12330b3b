use crate::domain::ports::{Charge, PaymentGateway};
use crate::error::{BotError, Result};
use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Request-level timeout; the engine imposes its own bound on top.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Pay-by-code (Pix) adapter for a Mercado-Pago-shaped payments API.
///
/// `POST {base_url}/v1/payments` with a bearer token; the redeemable code
/// comes back under `point_of_interaction.transaction_data.qr_code`.
pub struct PixGateway {
    client: Client,
    base_url: String,
    access_token: String,
}

#[derive(Serialize)]
struct ChargeRequest<'a> {
    transaction_amount: Decimal,
    description: &'a str,
    payment_method_id: &'static str,
    payer: Payer<'a>,
}

#[derive(Serialize)]
struct Payer<'a> {
    email: &'a str,
}

#[derive(Deserialize)]
struct ChargeResponse {
    point_of_interaction: PointOfInteraction,
}

#[derive(Deserialize)]
struct PointOfInteraction {
    transaction_data: TransactionData,
}

#[derive(Deserialize)]
struct TransactionData {
    qr_code: String,
}

impl PixGateway {
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            access_token: access_token.into(),
        })
    }
}

#[async_trait]
impl PaymentGateway for PixGateway {
    async fn create_charge(
        &self,
        amount: Decimal,
        description: &str,
        payer_email: &str,
    ) -> Result<Charge> {
        let body = ChargeRequest {
            transaction_amount: amount,
            description,
            payment_method_id: "pix",
            payer: Payer { email: payer_email },
        };

        let response = self
            .client
            .post(format!("{}/v1/payments", self.base_url))
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BotError::Gateway(format!(
                "payment API returned {status}"
            )));
        }

        let parsed: ChargeResponse = response.json().await?;
        Ok(Charge {
            code: parsed.point_of_interaction.transaction_data.qr_code,
        })
    }
}
