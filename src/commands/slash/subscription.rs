//! Subscription slash commands

use serenity::builder::CreateApplicationCommand;

/// Creates subscription commands
pub fn create_commands() -> Vec<CreateApplicationCommand> {
    vec![create_start_command(), create_progress_command()]
}

fn create_start_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("start")
        .description("Subscribe to daily UK fintech abbreviations and the weekly quiz")
        .to_owned()
}

fn create_progress_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("progress")
        .description("See how many digests you have received and whether a quiz is waiting")
        .to_owned()
}
