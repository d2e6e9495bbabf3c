pub mod deep_link;
pub mod error;
pub mod handler;
pub mod polling;
pub mod telegram;
pub mod traits;

pub use deep_link::DeepLink;
pub use error::{BotError, Result};
pub use handler::DeepLinkHandler;
pub use telegram::TelegramClient;
pub use traits::UpdateHandler;
