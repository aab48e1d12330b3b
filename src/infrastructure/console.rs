use crate::domain::ports::Outbound;
use crate::error::Result;
use async_trait::async_trait;

/// Outbound adapter that prints sends to stdout. Stands in for a real chat
/// transport when driving the engine from a terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleOutbound;

#[async_trait]
impl Outbound for ConsoleOutbound {
    async fn send_text(&self, user_id: &str, text: &str) -> Result<()> {
        println!("[{user_id}]\n{text}\n");
        Ok(())
    }

    async fn send_media(&self, user_id: &str, media_url: &str, caption: &str) -> Result<()> {
        println!("[{user_id}] 🖼 {media_url}\n{caption}\n");
        Ok(())
    }
}
