use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use directories::ProjectDirs;
use hotkey_core::{HotkeyMod, KeyId, ModPaths};
use tools::sim_host::{InventorySnapshot, SimHost};
use tools::{describe_report, format_bindings};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Drive the hotkey mod against a simulated inventory.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Press keys one tick at a time and print what each press did
    Run {
        /// Directory holding tld_hotkeys.json (created with defaults if missing)
        #[arg(short, long)]
        user_data: Option<PathBuf>,
        /// Inventory snapshot JSON
        #[arg(short, long)]
        inventory: PathBuf,
        /// Key to press; repeat for several ticks
        #[arg(short, long = "press", required = true)]
        presses: Vec<String>,
        /// Make the simulated audio hooks fail
        #[arg(long)]
        audio_fails: bool,
    },
    /// Print the loaded binding table
    Bindings {
        #[arg(short, long)]
        user_data: Option<PathBuf>,
    },
}

fn resolve_user_data(arg: Option<PathBuf>) -> Result<PathBuf> {
    match arg {
        Some(dir) => Ok(dir),
        None => ProjectDirs::from("", "", "HotkeyOverhaul")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .context("No user data directory available; pass --user-data"),
    }
}

fn run(
    user_data: PathBuf,
    inventory: PathBuf,
    presses: Vec<String>,
    audio_fails: bool,
) -> Result<()> {
    let keys = presses
        .iter()
        .map(|raw| raw.parse::<KeyId>().with_context(|| format!("Invalid key: {raw}")))
        .collect::<Result<Vec<_>>>()?;

    let snapshot = InventorySnapshot::load(&inventory)?;
    tracing::info!(path = %inventory.display(), items = snapshot.items.len(), "inventory loaded");
    let mut host = SimHost::from_snapshot(snapshot);
    host.set_audio_fails(audio_fails);

    let mut hotkeys = HotkeyMod::start(ModPaths::from_user_data_dir(&user_data));

    for (tick, key) in keys.into_iter().enumerate() {
        let reports = hotkeys.update(&mut host, &[key]);
        if reports.is_empty() {
            println!("tick {tick}: {key} is not bound");
        }
        for report in &reports {
            println!("tick {tick}: {}", describe_report(&host, report));
        }
    }

    let equipped = host.equipped().and_then(|id| host.name_of(id)).unwrap_or("nothing");
    println!("Equipped: {equipped}");
    for (name, region, layer) in host.worn() {
        println!("Wearing: {name} ({region:?}, {layer:?})");
    }
    Ok(())
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry().with(filter).with(fmt::layer().with_writer(io::stderr)).init();

    let args = Args::parse();
    match args.command {
        Command::Run { user_data, inventory, presses, audio_fails } => {
            run(resolve_user_data(user_data)?, inventory, presses, audio_fails)
        }
        Command::Bindings { user_data } => {
            let hotkeys: HotkeyMod<()> =
                HotkeyMod::start(ModPaths::from_user_data_dir(&resolve_user_data(user_data)?));
            for line in format_bindings(hotkeys.bindings()) {
                println!("{line}");
            }
            Ok(())
        }
    }
}
