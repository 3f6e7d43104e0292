use protocol_stats::models::mappings::{mapped_tools, resolve_slug};
use protocol_stats::utils::display::DisplayFormatter;
use protocol_stats::{Config, StatsService};
use std::error::Error;
use std::io::{self, Write};
use tracing::{debug, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    info!("Starting DeFi protocol statistics");

    let config = Config::from_env();
    debug!("Using provider at {}", config.base_url);

    let service = StatsService::new(&config);
    let display = DisplayFormatter::new();

    println!("=== DeFi Protocol Statistics ===");
    println!("Commands:");
    println!("  <tool id>          - Show live statistics for a tool");
    println!("  batch <id> <id>... - Show statistics for several tools");
    println!("  list               - Show tools with live data");
    println!("  cache              - Show cache status");
    println!("  exit               - Exit the program");

    let mut input = String::new();
    loop {
        input.clear();
        print!("> ");
        io::stdout().flush()?;
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }

        let command = input.trim();
        let mut words = command.split_whitespace();
        match words.next() {
            None => continue,
            Some("exit") => {
                debug!("Received exit command");
                break;
            }
            Some("list") => {
                let rows: Vec<Vec<String>> = mapped_tools()
                    .into_iter()
                    .map(|(tool, slug)| vec![tool.to_string(), slug.to_string()])
                    .collect();
                println!("{}", display.format_header("Tools with live data"));
                println!("{}", display.format_table(&["Tool", "DeFiLlama slug"], &rows));
            }
            Some("cache") => {
                let stats = service.cache().stats(service.now_millis());
                println!("{}", display.format_cache_stats(&stats));
            }
            Some("batch") => {
                let ids: Vec<String> = words.map(str::to_string).collect();
                if ids.is_empty() {
                    println!("Usage: batch <tool id> <tool id>...");
                    continue;
                }
                let rows: Vec<Vec<String>> = service
                    .get_many(&ids)
                    .await
                    .iter()
                    .map(|(id, state)| display.stats_row(id, state))
                    .collect();
                println!("{}", display.format_table(&["Tool", "TVL", "24h Change"], &rows));
            }
            Some(tool_id) => {
                debug!("Fetching statistics for tool: {}", tool_id);
                let state = service.get_statistics(tool_id).await;
                println!(
                    "{}",
                    display.format_stats_summary(tool_id, resolve_slug(tool_id), &state)
                );
            }
        }
    }

    info!("Shutting down");
    Ok(())
}
