/// An inbound chat message as delivered by the transport.
///
/// The engine never talks to the chat network directly; whatever binds it
/// (WhatsApp, Telegram, a console loop) reduces each event to this shape.
#[derive(Debug, Clone)]
pub struct InboundMessage {
    /// Opaque sender identity, one per conversation.
    pub sender: String,
    /// Raw text body, untrimmed.
    pub body: String,
    /// Group-origin messages are dropped without a reply.
    pub from_group: bool,
}

impl InboundMessage {
    /// Direct message from `sender`.
    pub fn direct(sender: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            body: body.into(),
            from_group: false,
        }
    }
}
