use anyhow::Result;
use clap::Args;

use super::print_json;
use crate::domain::categories::Category;
use crate::infrastructure::client::YearshelfClient;

#[derive(Debug, Args)]
pub struct CompleteCommand {
    /// One of book, music, game, movie, tv
    pub category: Category,
    /// Calendar year; defaults to the current year
    #[arg(long)]
    pub year: Option<u32>,
}

#[derive(Debug, Args)]
pub struct ScreenCommand {
    /// Calendar year; defaults to the current year
    #[arg(long)]
    pub year: Option<u32>,
}

pub async fn complete(client: &YearshelfClient, command: CompleteCommand) -> Result<()> {
    let items = client
        .completions()
        .category(command.category, command.year)
        .await?;
    print_json(&items)
}

pub async fn screen(client: &YearshelfClient, command: ScreenCommand) -> Result<()> {
    let items = client.completions().screen(command.year).await?;
    print_json(&items)
}
