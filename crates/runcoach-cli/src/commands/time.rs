use clap::Subcommand;
use runcoach_core::time_codec::{format_time, parse_time};

use super::CommandResult;

#[derive(Subcommand)]
pub enum TimeAction {
    /// Convert `mm:ss`, `hh:mm:ss` or `1h05m30s` to seconds
    Parse {
        text: String,
    },
    /// Render seconds as `m:ss` or `h:mm:ss`
    Format {
        seconds: u32,
    },
}

pub fn run(action: TimeAction) -> CommandResult {
    match action {
        TimeAction::Parse { text } => {
            let seconds = parse_time(&text)?;
            println!("{seconds}");
        }
        TimeAction::Format { seconds } => {
            println!("{}", format_time(seconds));
        }
    }
    Ok(())
}
