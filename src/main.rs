use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use taxpayer_records::browser::{RecordBrowser, RecordTable};
use taxpayer_records::cli::{apply, render_page, Cli, Flow, PageCommand};
use taxpayer_records::config::Config;
use taxpayer_records::lifecycle::{setup_tracing, RecordSystem};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    setup_tracing(cli.verbosity());

    let config = Config::load_from(cli.config.as_deref())?;
    info!(service = ?config.service, seeded = config.seed.len(), "Starting record service");

    let system = RecordSystem::new(&config.service);
    system.seed(&config.seed).await?;

    let mut browser = RecordBrowser::new(system.record_client.clone());
    let mut table = RecordTable::new(config.table.rows_per_page);

    browser.mount().await;
    println!("{}", render_page(&browser, &table));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match line.parse::<PageCommand>() {
            Ok(command) => command,
            Err(e) => {
                warn!(error = %e, "Ignoring input");
                println!("{e}");
                continue;
            }
        };

        let (flow, text) = apply(&mut browser, &mut table, command).await;
        if flow == Flow::Quit {
            break;
        }
        if let Some(text) = text {
            println!("{text}");
        }
        println!("{}", render_page(&browser, &table));
    }

    // The browser holds a client clone; release it so the actor can stop.
    drop(browser);
    system.shutdown().await?;
    Ok(())
}
