use crate::Result;
use crate::telegram::{TelegramClient, models::Update};

#[async_trait::async_trait]
pub trait UpdateHandler: Send + Sync {
    async fn handle(&self, update: &Update, client: &TelegramClient) -> Result<()>;
}
