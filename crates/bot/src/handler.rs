use crate::Result;
use crate::deep_link::DeepLink;
use crate::telegram::{
    TelegramClient,
    models::{InlineKeyboardMarkup, SendMessageRequest, Update},
};
use crate::traits::UpdateHandler;

pub const OPEN_BUTTON_TEXT: &str = "Open the dojo";

/// Answers `/start` with a button that opens the web app.
///
/// The sender's Telegram id is passed as the start parameter so the web app
/// can match the chat to a member.
pub struct DeepLinkHandler {
    link: DeepLink,
}

impl DeepLinkHandler {
    pub fn new(link: DeepLink) -> Self {
        Self { link }
    }

    /// The reply for an update, or `None` when the update is not for us.
    pub fn reply_for(&self, update: &Update) -> Option<SendMessageRequest> {
        let message = update.message.as_ref()?;
        let text = message.text.as_deref()?;

        if !is_start_command(text) {
            return None;
        }

        let start_param = message.from.as_ref().map(|user| user.id.to_string());
        let greeting = match message.from.as_ref() {
            Some(user) => format!("Welcome, {}! Tap below to open your training log.", user.first_name),
            None => "Welcome! Tap below to open your training log.".to_string(),
        };

        Some(SendMessageRequest {
            chat_id: message.chat.id,
            text: greeting,
            reply_markup: Some(InlineKeyboardMarkup::single_web_app_button(
                OPEN_BUTTON_TEXT,
                self.link.build(start_param.as_deref()),
            )),
        })
    }
}

/// `/start`, `/start payload` and `/start@bot_name` all count.
fn is_start_command(text: &str) -> bool {
    let command = text.split_whitespace().next().unwrap_or_default();
    let command = command.split('@').next().unwrap_or_default();
    command == "/start"
}

#[async_trait::async_trait]
impl UpdateHandler for DeepLinkHandler {
    async fn handle(&self, update: &Update, client: &TelegramClient) -> Result<()> {
        let Some(reply) = self.reply_for(update) else {
            tracing::debug!("Ignoring update {}", update.update_id);
            return Ok(());
        };

        tracing::info!("Sending web app link to chat {}", reply.chat_id);
        client.send_message(&reply).await?;

        Ok(())
    }
}
