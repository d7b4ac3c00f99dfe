//! Generates the bridge wiki pages from the embedded device catalog.

use clap::{Parser, Subcommand};
use z2m_docgen::{
    catalog::{DeviceCatalog, embedded_converters},
    docs::DocsGenerator,
    tracing_config,
};

#[derive(Parser)]
#[command(name = "generate-docs")]
#[command(about = "Generate wiki pages from the device catalog")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate every wiki page
    All {
        /// Directory the pages are written into (must exist)
        #[arg(short, long)]
        output: String,
    },
    /// Generate only the supported devices page
    Devices {
        /// Directory the page is written into (must exist)
        #[arg(short, long)]
        output: String,
    },
    /// Generate only the home assistant integration guide
    Guide {
        /// Directory the page is written into (must exist)
        #[arg(short, long)]
        output: String,
    },
    /// List the device catalog grouped by vendor
    List,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_config::init()?;

    let cli = Cli::parse();
    let devices = DeviceCatalog::embedded()?;

    match cli.command {
        Commands::All { output } => {
            let converters = embedded_converters()?;
            DocsGenerator::new(output).generate_all(&devices, &converters)?;
        }
        Commands::Devices { output } => {
            DocsGenerator::new(output).generate_supported_devices(&devices)?;
        }
        Commands::Guide { output } => {
            DocsGenerator::new(output).generate_homeassistant_guide(&devices)?;
        }
        Commands::List => {
            for vendor in devices.vendors() {
                println!("{vendor}:");
                for device in devices.by_vendor(vendor) {
                    println!("  {} - {}", device.model, device.description);
                }
            }
        }
    }

    Ok(())
}
