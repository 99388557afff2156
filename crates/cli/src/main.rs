//! Retail Ops CLI - analyses over exported platform listings.
//!
//! Every command reads already-fetched JSON listings from disk (either a
//! bare JSON array or a raw `{"_items": [...]}` page dump) and runs a pure
//! analysis over them. Fetching, pagination, and authentication live in the
//! exporter that produced the files.
//!
//! # Usage
//!
//! ```bash
//! # Which catalog items have no inventory at a location?
//! ro-cli missing-inventory --inventory inv.json --items items.json \
//!     --location 6904bd808e1c9f7c711dfe45 --location-name "SPAR Downtown"
//!
//! # How many items does a menu have, and how many are snoozed?
//! ro-cli menu count --preview preview.json --location-name "Store A"
//!
//! # Which account products are missing from every menu category?
//! ro-cli menu coverage --categories categories.json --products products.json
//!
//! # Snooze history for one PLU
//! ro-cli snooze-history --reports reports.json --plu 123
//!
//! # Channel links grouped per channel
//! ro-cli channels --links links.json
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "ro-cli")]
#[command(author, version, about = "Retail operations analysis tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report catalog items with no inventory at a location
    MissingInventory {
        /// Exported inventory listing (JSON)
        #[arg(long)]
        inventory: PathBuf,

        /// Exported catalog items listing (JSON)
        #[arg(long)]
        items: PathBuf,

        /// Location ID to check
        #[arg(short, long)]
        location: String,

        /// Display name used in the report (defaults to the location ID)
        #[arg(long)]
        location_name: Option<String>,
    },
    /// Menu analyses over an exported menu preview
    Menu {
        #[command(subcommand)]
        action: MenuAction,
    },
    /// Show snooze/unsnooze history for one PLU
    SnoozeHistory {
        /// Exported operation reports listing (JSON)
        #[arg(long)]
        reports: PathBuf,

        /// PLU to trace
        #[arg(short, long)]
        plu: String,
    },
    /// Group channel links per channel
    Channels {
        /// Exported channel links listing (JSON)
        #[arg(long)]
        links: PathBuf,
    },
}

#[derive(Subcommand)]
enum MenuAction {
    /// Count active and snoozed items in a menu preview
    Count {
        /// Exported menu preview (JSON)
        #[arg(long)]
        preview: PathBuf,

        /// Display name of the location the preview was rendered for
        #[arg(long, default_value = "Unknown")]
        location_name: String,
    },
    /// List account products missing from every menu category
    Coverage {
        /// Exported menu categories listing (JSON)
        #[arg(long)]
        categories: PathBuf,

        /// Exported account products listing (JSON)
        #[arg(long)]
        products: PathBuf,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), commands::CommandError> {
    match cli.command {
        Commands::MissingInventory {
            inventory,
            items,
            location,
            location_name,
        } => commands::missing::run(&inventory, &items, &location, location_name.as_deref()),
        Commands::Menu { action } => match action {
            MenuAction::Count {
                preview,
                location_name,
            } => commands::menu::count(&preview, &location_name),
            MenuAction::Coverage {
                categories,
                products,
            } => commands::menu::coverage(&categories, &products),
        },
        Commands::SnoozeHistory { reports, plu } => commands::snooze::run(&reports, &plu),
        Commands::Channels { links } => commands::channels::run(&links),
    }
}
