use anyhow::Context;
use bot::{
    DeepLink, DeepLinkHandler, TelegramClient, polling,
    telegram::{client::DEFAULT_API_URL, models::{MenuButton, WebAppInfo}},
};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "dojo-bot")]
#[command(about = "Telegram bot that opens the dojo web app", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, env = "WEB_APP_URL")]
    web_app_url: String,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(clap::Args)]
struct TelegramArgs {
    #[arg(long, env = "BOT_TOKEN", hide_env_values = true)]
    bot_token: String,

    #[arg(long, env = "TELEGRAM_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Long-poll Telegram and answer /start with a web app button
    Run {
        #[command(flatten)]
        telegram: TelegramArgs,
    },
    /// Print the web app link
    Link {
        #[arg(long)]
        start: Option<String>,
    },
    /// Install the web app as the bot's menu button
    SetMenuButton {
        #[command(flatten)]
        telegram: TelegramArgs,

        #[arg(long, default_value = "Open dojo")]
        text: String,

        /// Only for this chat instead of every chat
        #[arg(long)]
        chat_id: Option<i64>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("dojo_bot={},bot={}", log_level, log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let link = DeepLink::new(&cli.web_app_url).context("WEB_APP_URL is not a valid web app URL")?;

    match cli.command {
        Commands::Run { telegram } => {
            let client = TelegramClient::new(telegram.api_url, telegram.bot_token)
                .context("Failed to build Telegram client")?;
            let handler = DeepLinkHandler::new(link);

            tracing::info!("Polling Telegram for updates");
            tokio::select! {
                _ = polling::run(&client, &handler) => {}
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("Shutting down");
                }
            }
        }
        Commands::Link { start } => {
            println!("{}", link.build(start.as_deref()));
        }
        Commands::SetMenuButton {
            telegram,
            text,
            chat_id,
        } => {
            let client = TelegramClient::new(telegram.api_url, telegram.bot_token)
                .context("Failed to build Telegram client")?;

            let menu_button = MenuButton::WebApp {
                text,
                web_app: WebAppInfo {
                    url: link.build(None),
                },
            };
            client
                .set_chat_menu_button(chat_id, menu_button)
                .await
                .context("Failed to set menu button")?;

            tracing::info!("✓ Menu button now opens {}", link.base());
        }
    }

    Ok(())
}
