use serde::{Deserialize, Serialize};

use crate::error::{BotError, Result};

/// Envelope every Bot API method answers with
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub description: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn into_result(self) -> Result<T> {
        match (self.ok, self.result) {
            (true, Some(result)) => Ok(result),
            _ => Err(BotError::ApiError(
                self.description
                    .unwrap_or_else(|| "request failed without description".to_string()),
            )),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Message>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub chat: Chat,
    pub from: Option<TelegramUser>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelegramUser {
    pub id: i64,
    pub first_name: String,
    pub username: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebAppInfo {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineKeyboardButton {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_app: Option<WebAppInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

impl InlineKeyboardMarkup {
    pub fn single_web_app_button(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            inline_keyboard: vec![vec![InlineKeyboardButton {
                text: text.into(),
                web_app: Some(WebAppInfo { url: url.into() }),
            }]],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendMessageRequest {
    pub chat_id: i64,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MenuButton {
    WebApp { text: String, web_app: WebAppInfo },
    Default,
}

#[derive(Debug, Clone, Serialize)]
pub struct SetChatMenuButtonRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<i64>,
    pub menu_button: MenuButton,
}

#[derive(Debug, Clone, Serialize)]
pub struct GetUpdatesRequest {
    pub offset: Option<i64>,
    pub timeout: u64,
    pub allowed_updates: Vec<&'static str>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parses_updates_response() {
        let body = json!({
            "ok": true,
            "result": [{
                "update_id": 1001,
                "message": {
                    "message_id": 7,
                    "chat": { "id": 555, "type": "private" },
                    "from": { "id": 555, "is_bot": false, "first_name": "Ana" },
                    "text": "/start"
                }
            }]
        });

        let response: ApiResponse<Vec<Update>> = serde_json::from_value(body).unwrap();
        let updates = response.into_result().unwrap();
        assert_eq!(updates.len(), 1);
        let message = updates[0].message.as_ref().unwrap();
        assert_eq!(message.chat.id, 555);
        assert_eq!(message.text.as_deref(), Some("/start"));
        assert_eq!(message.from.as_ref().unwrap().first_name, "Ana");
    }

    #[test]
    fn test_error_envelope_becomes_api_error() {
        let body = json!({ "ok": false, "error_code": 401, "description": "Unauthorized" });
        let response: ApiResponse<bool> = serde_json::from_value(body).unwrap();

        match response.into_result() {
            Err(BotError::ApiError(message)) => assert_eq!(message, "Unauthorized"),
            other => panic!("expected ApiError, got {:?}", other),
        }
    }

    #[test]
    fn test_menu_button_wire_format() {
        let request = SetChatMenuButtonRequest {
            chat_id: None,
            menu_button: MenuButton::WebApp {
                text: "Open dojo".to_string(),
                web_app: WebAppInfo {
                    url: "https://dojo.example.com/app".to_string(),
                },
            },
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "menu_button": {
                    "type": "web_app",
                    "text": "Open dojo",
                    "web_app": { "url": "https://dojo.example.com/app" }
                }
            })
        );
    }
}
