use anyhow::Result;
use dotenvy::dotenv;
use log::{error, info};
use serenity::async_trait;
use serenity::model::application::interaction::{Interaction, InteractionResponseType};
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::model::id::GuildId;
use serenity::prelude::*;
use std::sync::Arc;

use lexicon::commands::{
    register_global_commands, register_guild_commands, CommandContext, CommandHandler,
};
use lexicon::core::{Config, DiscordMessenger, Messenger};
use lexicon::features::{get_bot_version, get_features};
use lexicon::features::{Catalog, DigestJob, JobScheduler, QuizDispatchJob};
use lexicon::store::{JsonFileStore, UserStore};

struct Handler {
    command_handler: Arc<CommandHandler>,
    guild_id: Option<GuildId>,
}

impl Handler {
    fn new(command_handler: CommandHandler, guild_id: Option<GuildId>) -> Self {
        Handler {
            command_handler: Arc::new(command_handler),
            guild_id,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }

        // Quiz answers stay silent on failure; the error only reaches the log
        if let Err(e) = self.command_handler.handle_message(&ctx, &msg).await {
            error!("Error handling message from {}: {e}", msg.author.id);
        }
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("🎉 {} is connected and ready!", ready.user.name);
        info!("📡 Connected to {} guilds", ready.guilds.len());
        info!("🤖 Bot ID: {}", ready.user.id);

        if let Some(guild_id) = self.guild_id {
            info!("🔧 Development mode: Registering commands for guild {guild_id}");
            if let Err(e) = register_guild_commands(&ctx, guild_id).await {
                error!("❌ Failed to register guild slash commands: {e}");
            }
        } else {
            info!("🌍 Production mode: Registering commands globally");
            if let Err(e) = register_global_commands(&ctx).await {
                error!("❌ Failed to register global slash commands: {e}");
            }
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        if let Interaction::ApplicationCommand(command) = interaction {
            if let Err(e) = self
                .command_handler
                .handle_slash_command(&ctx, &command)
                .await
            {
                error!(
                    "Error handling slash command '{}': {}",
                    command.data.name, e
                );

                let _ = command
                    .create_interaction_response(&ctx.http, |response| {
                        response
                            .kind(InteractionResponseType::ChannelMessageWithSource)
                            .interaction_response_data(|message| {
                                message.content("❌ Sorry, something went wrong. Please try again.")
                            })
                    })
                    .await;
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting Lexicon v{}...", get_bot_version());
    for feature in get_features() {
        info!("   - {} v{}", feature.name, feature.version);
    }

    let catalog = match &config.catalog_path {
        Some(path) => {
            let catalog = Catalog::load(path)
                .map_err(|e| anyhow::anyhow!("Failed to load catalog from {}: {}", path, e))?;
            info!("📄 Loaded {} abbreviations from {path}", catalog.len());
            catalog
        }
        None => {
            let catalog = Catalog::built_in();
            info!("📄 Using built-in catalog ({} abbreviations)", catalog.len());
            catalog
        }
    };
    let catalog = Arc::new(catalog);

    let store: Arc<dyn UserStore> = Arc::new(JsonFileStore::new(&config.store_path));
    info!("💾 User store at {}", config.store_path);

    let command_handler = CommandHandler::new(CommandContext::new(store.clone(), catalog.clone()));

    // Parse guild ID if provided for development mode
    let guild_id = config
        .discord_guild_id
        .as_ref()
        .and_then(|id| id.parse::<u64>().ok())
        .map(GuildId);

    let handler = Handler::new(command_handler, guild_id);

    let intents = GatewayIntents::GUILDS
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await
        .map_err(|e| {
            error!("Failed to create Discord client: {e}");
            anyhow::anyhow!("Client creation failed: {}", e)
        })?;

    info!("Bot configured successfully. Connecting to Discord gateway...");

    // Start the digest and quiz schedules
    let messenger: Arc<dyn Messenger> =
        Arc::new(DiscordMessenger::new(client.cache_and_http.http.clone()));
    let _jobs = JobScheduler::new()
        .add(
            config.digest_schedule,
            Arc::new(DigestJob::new(store.clone(), catalog.clone(), messenger.clone())),
        )
        .add(
            config.quiz_schedule,
            Arc::new(QuizDispatchJob::new(store, catalog, messenger)),
        )
        .start();

    if let Err(why) = client.start().await {
        error!("Gateway connection failed: {why:?}");
        return Err(anyhow::anyhow!(
            "Failed to establish gateway connection: {}",
            why
        ));
    }

    Ok(())
}
