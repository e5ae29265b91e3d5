//! Grid combat terminal client.
//!
//! Reads one command per line from stdin and prints the board after every
//! accepted action. Logs go to stderr; set `RUST_LOG=debug` to see rejected
//! actions and snapshot I/O.
//!
//! ```bash
//! GRID_COMBAT_STARTING_PLAYER=random cargo run -p grid-combat-client
//! ```

use std::io::Write;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use grid_combat_client::{App, ClientConfig, Command, Flow, logging, render};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    logging::setup_logging()?;

    let config = ClientConfig::from_env();
    tracing::info!(
        starting = ?config.starting_player,
        adjacent_walls_only = config.adjacent_walls_only,
        snapshot = %config.snapshot_path.display(),
        "starting grid combat"
    );

    let mut app = App::new(&config);
    println!("{}", render::board(app.session().state()));
    println!("type `help` for commands");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{}> ", app.session().state().current_player());
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(error) => {
                println!("{error}");
                continue;
            }
        };

        match app.handle(command) {
            Ok(Flow::Continue(reply)) => println!("{reply}"),
            Ok(Flow::Quit) => break,
            Err(error) => {
                tracing::error!("{error:#}");
                println!("error: {error:#}");
            }
        }
    }

    tracing::info!("goodbye");
    Ok(())
}
