use clap::{Parser, Subcommand};
use passrank::config::Config;
use passrank::dataset::loader;
use passrank::{Leaderboards, RankResult};
use std::path::PathBuf;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    config: Config,

    /// Also write the full result as pretty JSON to this file.
    #[arg(global = true, short, long)]
    output: Option<PathBuf>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Best clear per player on one chart.
    Chart(cmd::chart::ChartArgs),
    /// Profile of a single player.
    Player(cmd::player::PlayerArgs),
    /// Global player ranking.
    AllPlayers(cmd::all_players::AllPlayersArgs),
    /// Every player's best clears in one list.
    AllClears(cmd::all_clears::AllClearsArgs),
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        error!("{}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> RankResult<()> {
    cli.config.engine.validate()?;

    info!("📂 Loading snapshot: {}", cli.config.paths.charts);
    let data = loader::load_from_paths(&cli.config.paths)?;
    let boards = Leaderboards::new(&data, cli.config.engine.clone());
    let output = cli.output.as_deref();

    match cli.command {
        Commands::Chart(args) => cmd::chart::run(&args, &boards, output),
        Commands::Player(args) => cmd::player::run(&args, &boards, output),
        Commands::AllPlayers(args) => cmd::all_players::run(&args, &boards, output),
        Commands::AllClears(args) => cmd::all_clears::run(&args, &boards, output),
    }
}
