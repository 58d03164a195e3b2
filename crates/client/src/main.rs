//! itemtable-client CLI entry point.

use clap::Parser;
use itemtable_client::cli::items::{parse_data, ItemsAction};
use itemtable_client::cli::{Cli, Commands};
use itemtable_client::output::format_output;
use itemtable_client::ItemtableClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = ItemtableClient::new(&cli.base_url);

    match cli.command {
        Commands::Items(items_cmd) => match items_cmd.action {
            ItemsAction::List => {
                let items = client.list_items().await?;
                println!("{}", format_output(&items, cli.format));
            }
            ItemsAction::Put { id, data } => {
                let data = parse_data(&data)?;
                let saved = client.put_item(&id, data).await?;
                if !cli.quiet {
                    println!("{} ({})", saved.message, id);
                }
            }
        },
        Commands::Health => {
            client.livez().await?;
            if !cli.quiet {
                println!("OK ({})", client.base_url());
            }
        }
    }

    Ok(())
}
