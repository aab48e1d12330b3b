use super::reply;
use crate::config::EngineConfig;
use crate::domain::catalog::Product;
use crate::domain::message::InboundMessage;
use crate::domain::ports::{CatalogBox, OutboundBox, PaymentGatewayBox, SessionStoreBox};
use crate::domain::session::{Session, SessionStatus};
use crate::error::{BotError, Result};

/// The main entry point for inbound chat messages.
///
/// `ConversationEngine` consumes one message at a time and applies a fixed
/// chain of rules; the first matching rule wins and nothing falls through.
/// There is no per-user mutual exclusion: overlapping messages from the same
/// sender can both read the same session snapshot (see the race test).
pub struct ConversationEngine {
    catalog: CatalogBox,
    sessions: SessionStoreBox,
    gateway: PaymentGatewayBox,
    outbound: OutboundBox,
    config: EngineConfig,
}

/// Remainder of `input` after an ASCII case-insensitive `buscar ` prefix.
fn search_term(input: &str) -> Option<&str> {
    const PREFIX: &str = "buscar ";
    match input.get(..PREFIX.len()) {
        Some(head) if head.eq_ignore_ascii_case(PREFIX) => Some(input[PREFIX.len()..].trim()),
        _ => None,
    }
}

impl ConversationEngine {
    pub fn new(
        catalog: CatalogBox,
        sessions: SessionStoreBox,
        gateway: PaymentGatewayBox,
        outbound: OutboundBox,
        config: EngineConfig,
    ) -> Self {
        Self {
            catalog,
            sessions,
            gateway,
            outbound,
            config,
        }
    }

    /// Dispatches one inbound message.
    ///
    /// Rule order, first match wins:
    /// 1. group-origin messages are dropped silently
    /// 2. a session awaiting an address captures the text verbatim
    /// 3. `buscar <term>` searches the catalog
    /// 4. `loja` / `menu` shows the category menu
    /// 5. bare digits resolve to the agent queue, a category or a product
    /// 6. `pagar` creates the charge for an `Interested` session
    /// 7. anything else is a silent no-op
    ///
    /// `Err` is reserved for store/transport failures; every user-recoverable
    /// condition is answered (or deliberately ignored) inline.
    pub async fn handle_message(&self, msg: &InboundMessage) -> Result<()> {
        if msg.from_group {
            return Ok(());
        }

        let user = msg.sender.as_str();
        let input = msg.body.trim();

        // Address capture beats every other reading of the text, including
        // digits and keywords.
        if let Some(session) = self.sessions.get(user).await?
            && session.status == SessionStatus::AwaitingAddress
        {
            return self.capture_address(user, session, input).await;
        }

        if let Some(term) = search_term(input) {
            return self.search(user, term).await;
        }

        if input.eq_ignore_ascii_case("loja") || input.eq_ignore_ascii_case("menu") {
            return self.menu(user).await;
        }

        if !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit()) {
            // A digit string too long for u32 cannot name anything; treat it
            // like any other unmatched number.
            if let Ok(n) = input.parse::<u32>() {
                return self.pick_number(user, n).await;
            }
            return Ok(());
        }

        if input.eq_ignore_ascii_case("pagar")
            && let Some(session) = self.sessions.get(user).await?
            && session.status == SessionStatus::Interested
        {
            return self.create_payment(user, session).await;
        }

        // Explicit terminal branch: unrecognized input gets no reply.
        Ok(())
    }

    async fn capture_address(&self, user: &str, mut session: Session, input: &str) -> Result<()> {
        session.address = Some(input.to_string());
        session.status = SessionStatus::Finished;
        self.sessions.put(user, session).await?;
        self.outbound.send_text(user, reply::ADDRESS_CONFIRMED).await
    }

    async fn search(&self, user: &str, term: &str) -> Result<()> {
        // A failed lookup reads the same as an empty one.
        let found = match self.catalog.search_by_name(term).await {
            Ok(found) => found,
            Err(err) => {
                tracing::warn!(%err, term, "product search failed");
                Vec::new()
            }
        };

        let text = if found.is_empty() {
            reply::search_not_found(term)
        } else {
            reply::search_results(term, &found)
        };
        self.outbound.send_text(user, &text).await
    }

    async fn menu(&self, user: &str) -> Result<()> {
        let categories = match self.catalog.list_categories().await {
            Ok(categories) => categories,
            Err(err) => {
                tracing::warn!(%err, "category listing failed");
                Vec::new()
            }
        };

        let menu = reply::main_menu(&self.config.store_name, &categories);
        self.outbound.send_text(user, &menu).await
    }

    async fn pick_number(&self, user: &str, n: u32) -> Result<()> {
        if n == 0 {
            return self.outbound.send_text(user, reply::QUEUE_ACK).await;
        }

        if let Some(category) = self.catalog.category_by_id(n).await? {
            let products = self.catalog.products_by_category(n).await?;
            let text = if products.is_empty() {
                reply::category_empty(&category)
            } else {
                reply::category_listing(&category, &products)
            };
            return self.outbound.send_text(user, &text).await;
        }

        if let Some(product) = self.catalog.product_by_id(n).await? {
            return self.select_product(user, product).await;
        }

        // Neither a category nor a product: silence.
        Ok(())
    }

    async fn select_product(&self, user: &str, product: Product) -> Result<()> {
        if !product.in_stock() {
            return self.outbound.send_text(user, reply::SOLD_OUT).await;
        }

        let caption = reply::product_caption(&product);
        let image_url = product.image_url.clone();

        // Overwrites whatever flow was in progress; selecting a product
        // always restarts from a fresh session.
        self.sessions.put(user, Session::interested(product)).await?;

        match image_url {
            Some(url) => {
                if let Err(err) = self.outbound.send_media(user, &url, &caption).await {
                    tracing::debug!(%err, "media send failed, falling back to text");
                    self.outbound.send_text(user, &caption).await?;
                }
                Ok(())
            }
            None => self.outbound.send_text(user, &caption).await,
        }
    }

    async fn create_payment(&self, user: &str, mut session: Session) -> Result<()> {
        let item = session.item.clone();
        self.outbound.send_text(user, reply::GENERATING_CHARGE).await?;

        let description = format!("{}: {}", self.config.store_name, item.name);
        let attempt = tokio::time::timeout(
            self.config.gateway_timeout,
            self.gateway
                .create_charge(item.price, &description, &self.config.payer_email),
        )
        .await
        .map_err(|_| BotError::Gateway("charge creation timed out".to_string()))
        .and_then(|outcome| outcome);

        match attempt {
            Ok(charge) => {
                self.catalog.decrement_stock(item.id, 1).await?;
                self.outbound.send_text(user, reply::CHARGE_READY).await?;
                self.outbound.send_text(user, &charge.code).await?;

                session.status = SessionStatus::AwaitingAddress;
                self.sessions.put(user, session).await?;
                self.outbound.send_text(user, reply::ADDRESS_PROMPT).await
            }
            Err(err) => {
                tracing::error!(%err, item_id = item.id, "charge creation failed");
                // Session stays Interested so the customer may retry.
                self.outbound.send_text(user, reply::PAYMENT_FAILED).await
            }
        }
    }
}
