use reqwest::Client;
use serde::{Serialize, de::DeserializeOwned};
use std::time::Duration;

use super::models::{
    ApiResponse, GetUpdatesRequest, InlineKeyboardMarkup, MenuButton, Message,
    SendMessageRequest, SetChatMenuButtonRequest, Update,
};
use crate::error::Result;

pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

/// Thin client over the Telegram Bot API
pub struct TelegramClient {
    client: Client,
    api_url: String,
    token: String,
}

impl TelegramClient {
    /// `api_url` is the Bot API host, `token` the bot token from BotFather.
    pub fn new(api_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        // Long polling holds the connection open, so the timeout must exceed
        // the longest `getUpdates` wait.
        let client = Client::builder()
            .timeout(Duration::from_secs(90))
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_url, self.token, method)
    }

    async fn call<B, T>(&self, method: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!("Calling Bot API method {}", method);

        let response = self
            .client
            .post(self.method_url(method))
            .json(body)
            .send()
            .await?;

        let envelope = response.json::<ApiResponse<T>>().await?;
        envelope.into_result()
    }

    /// Long-poll for updates after `offset`, waiting up to `timeout_secs`.
    pub async fn get_updates(&self, offset: Option<i64>, timeout_secs: u64) -> Result<Vec<Update>> {
        let request = GetUpdatesRequest {
            offset,
            timeout: timeout_secs,
            allowed_updates: vec!["message"],
        };
        self.call("getUpdates", &request).await
    }

    pub async fn send_message(&self, request: &SendMessageRequest) -> Result<Message> {
        self.call("sendMessage", request).await
    }

    pub async fn send_text(
        &self,
        chat_id: i64,
        text: impl Into<String>,
        reply_markup: Option<InlineKeyboardMarkup>,
    ) -> Result<Message> {
        let request = SendMessageRequest {
            chat_id,
            text: text.into(),
            reply_markup,
        };
        self.send_message(&request).await
    }

    /// Install the bot's menu button, for one chat or as the default.
    pub async fn set_chat_menu_button(
        &self,
        chat_id: Option<i64>,
        menu_button: MenuButton,
    ) -> Result<bool> {
        let request = SetChatMenuButtonRequest {
            chat_id,
            menu_button,
        };
        self.call("setChatMenuButton", &request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_url() {
        let client = TelegramClient::new("https://api.telegram.org/", "123:abc").unwrap();
        assert_eq!(
            client.method_url("getUpdates"),
            "https://api.telegram.org/bot123:abc/getUpdates"
        );
    }
}
