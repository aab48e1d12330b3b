use async_trait::async_trait;
use lojabot::application::engine::ConversationEngine;
use lojabot::config::EngineConfig;
use lojabot::domain::catalog::{Category, Product};
use lojabot::domain::message::InboundMessage;
use lojabot::domain::ports::{Charge, Outbound, PaymentGateway};
use lojabot::error::{BotError, Result};
use lojabot::infrastructure::in_memory::{InMemoryCatalog, InMemorySessionStore};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Barrier, Mutex};

/// One recorded outbound send.
#[derive(Debug, Clone, PartialEq)]
pub enum Sent {
    Text { user: String, text: String },
    Media { user: String, url: String, caption: String },
}

/// Outbound double that records every send for assertions. Media sends can
/// be scripted to fail to exercise the text fallback.
#[derive(Default, Clone)]
pub struct RecordingOutbound {
    sent: Arc<Mutex<Vec<Sent>>>,
    fail_media: bool,
}

impl RecordingOutbound {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failing_media() -> Self {
        Self {
            fail_media: true,
            ..Self::default()
        }
    }

    pub async fn all(&self) -> Vec<Sent> {
        self.sent.lock().await.clone()
    }

    /// Text bodies only, in send order.
    pub async fn texts(&self) -> Vec<String> {
        self.sent
            .lock()
            .await
            .iter()
            .filter_map(|s| match s {
                Sent::Text { text, .. } => Some(text.clone()),
                Sent::Media { .. } => None,
            })
            .collect()
    }
}

#[async_trait]
impl Outbound for RecordingOutbound {
    async fn send_text(&self, user_id: &str, text: &str) -> Result<()> {
        self.sent.lock().await.push(Sent::Text {
            user: user_id.to_string(),
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_media(&self, user_id: &str, media_url: &str, caption: &str) -> Result<()> {
        if self.fail_media {
            return Err(BotError::Transport("media unavailable".to_string()));
        }
        self.sent.lock().await.push(Sent::Media {
            user: user_id.to_string(),
            url: media_url.to_string(),
            caption: caption.to_string(),
        });
        Ok(())
    }
}

enum GatewayMode {
    Ok(String),
    Fail,
    /// Waits for `n` concurrent callers before any of them completes.
    Rendezvous(Arc<Barrier>, String),
    /// Never completes on its own; only the engine timeout ends the call.
    Hang,
}

/// Gateway double that records every call and answers per its mode.
#[derive(Clone)]
pub struct FakeGateway {
    mode: Arc<GatewayMode>,
    calls: Arc<Mutex<Vec<(Decimal, String)>>>,
}

impl FakeGateway {
    pub fn ok(code: &str) -> Self {
        Self::with_mode(GatewayMode::Ok(code.to_string()))
    }

    pub fn failing() -> Self {
        Self::with_mode(GatewayMode::Fail)
    }

    pub fn rendezvous(parties: usize, code: &str) -> Self {
        Self::with_mode(GatewayMode::Rendezvous(
            Arc::new(Barrier::new(parties)),
            code.to_string(),
        ))
    }

    pub fn hanging() -> Self {
        Self::with_mode(GatewayMode::Hang)
    }

    fn with_mode(mode: GatewayMode) -> Self {
        Self {
            mode: Arc::new(mode),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub async fn calls(&self) -> Vec<(Decimal, String)> {
        self.calls.lock().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.calls.lock().await.len()
    }
}

#[async_trait]
impl PaymentGateway for FakeGateway {
    async fn create_charge(
        &self,
        amount: Decimal,
        description: &str,
        _payer_email: &str,
    ) -> Result<Charge> {
        self.calls
            .lock()
            .await
            .push((amount, description.to_string()));

        match &*self.mode {
            GatewayMode::Ok(code) => Ok(Charge { code: code.clone() }),
            GatewayMode::Fail => Err(BotError::Gateway("scripted failure".to_string())),
            GatewayMode::Rendezvous(barrier, code) => {
                barrier.wait().await;
                Ok(Charge { code: code.clone() })
            }
            GatewayMode::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Err(BotError::Gateway("unreachable".to_string()))
            }
        }
    }
}

/// Catalog used across the integration tests. Category and product ids never
/// collide because categories win the numeric lookup.
pub fn sample_catalog() -> InMemoryCatalog {
    let categories = vec![
        Category {
            id: 1,
            name: "Eletrônicos".to_string(),
            icon: Some("🎧".to_string()),
        },
        Category {
            id: 2,
            name: "Acessórios".to_string(),
            icon: None,
        },
        Category {
            id: 3,
            name: "Importados".to_string(),
            icon: None,
        },
    ];
    let products = vec![
        Product {
            id: 10,
            name: "AirPods Pro".to_string(),
            price: dec!(1200.00),
            stock: 5,
            image_url: Some("https://cdn.example.com/airpods.jpg".to_string()),
            category_id: 1,
        },
        Product {
            id: 11,
            name: "iPhone 15".to_string(),
            price: dec!(4999.90),
            stock: 2,
            image_url: Some("https://cdn.example.com/iphone.jpg".to_string()),
            category_id: 1,
        },
        Product {
            id: 20,
            name: "Case".to_string(),
            price: dec!(99.90),
            stock: 3,
            image_url: None,
            category_id: 2,
        },
        Product {
            id: 21,
            name: "Película 3D".to_string(),
            price: dec!(29.90),
            stock: 0,
            image_url: None,
            category_id: 2,
        },
    ];
    InMemoryCatalog::seed(categories, products)
}

/// A fully wired engine plus handles to every double, for assertions.
pub struct TestBot {
    pub engine: Arc<ConversationEngine>,
    pub outbound: RecordingOutbound,
    pub gateway: FakeGateway,
    pub catalog: InMemoryCatalog,
    pub sessions: InMemorySessionStore,
}

impl TestBot {
    pub async fn say(&self, user: &str, body: &str) {
        self.engine
            .handle_message(&InboundMessage::direct(user, body))
            .await
            .expect("handle_message failed");
    }
}

pub fn bot(gateway: FakeGateway) -> TestBot {
    bot_with(gateway, RecordingOutbound::new(), EngineConfig::default())
}

pub fn bot_with(gateway: FakeGateway, outbound: RecordingOutbound, config: EngineConfig) -> TestBot {
    let catalog = sample_catalog();
    let sessions = InMemorySessionStore::new();

    let engine = ConversationEngine::new(
        Box::new(catalog.clone()),
        Box::new(sessions.clone()),
        Box::new(gateway.clone()),
        Box::new(outbound.clone()),
        config,
    );

    TestBot {
        engine: Arc::new(engine),
        outbound,
        gateway,
        catalog,
        sessions,
    }
}
