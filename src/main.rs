use advent_routes::config;
use advent_routes::listing::FsListing;
use advent_routes::redirect::latest_redirect;
use advent_routes::routes::{self, DiscoveryOptions};
use advent_routes::types::NavData;
use advent_routes::{data, output};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "advent-routes")]
#[command(about = "Discover year routes of an advent challenge site")]
#[command(long_about = "\
Discover year routes of an advent challenge site

Every directory directly under the routes root is a year. Paths with
[dynamic] or (group) segments are ignored. The landing page redirects to
the last year found.

Project structure:

  project/
  ├── advent.toml                  # Optional config
  ├── src/routes/
  │   ├── +layout.server.ts        # Root-level files are not years
  │   ├── 2022/+page.svelte        # Year 2022
  │   ├── 2023/+page.svelte        # Year 2023 (redirect target)
  │   └── [slug]/+page.svelte      # Ignored
  ├── src/lib/components/
  │   └── days/2023/DayOne.svelte  # Counts as a 2023 component
  └── data/2023/day-one.json       # Local mirror of the year data

Run 'advent-routes gen-config' to generate a documented advent.toml.")]
#[command(version)]
struct Cli {
    /// Project directory
    #[arg(long, default_value = ".", global = true)]
    project: PathBuf,

    /// More log output on stderr (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List discovered years and the landing redirect
    Routes {
        /// Count per-year components
        #[arg(long)]
        components: bool,
        /// Print navigation data as JSON
        #[arg(long)]
        json: bool,
    },
    /// List every page-marker file by its parent directory
    Pages {
        #[arg(long)]
        json: bool,
    },
    /// Print the landing redirect target
    Redirect {
        #[arg(long)]
        json: bool,
    },
    /// Load and validate a year's datasets from the local mirror
    Data {
        #[arg(long)]
        year: String,
        #[arg(long)]
        json: bool,
    },
    /// Print the remote dataset URLs for a year
    Urls {
        #[arg(long)]
        year: String,
    },
    /// Print a stock advent.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let listing = FsListing::new(&cli.project);

    match cli.command {
        Command::Routes { components, json } => {
            let site_config = config::load_config(&cli.project)?;
            let options = DiscoveryOptions::from_config(&site_config, components);
            let entries = routes::discover_routes(&listing, &options)?;
            let redirect = latest_redirect(&entries);
            if json {
                let nav = NavData { years: entries };
                println!("{}", serde_json::to_string_pretty(&nav)?);
            } else {
                output::print_routes_output(&entries, components, &redirect);
            }
        }
        Command::Pages { json } => {
            let site_config = config::load_config(&cli.project)?;
            let pages = routes::discover_pages(
                &listing,
                &site_config.routes_root,
                &site_config.page_marker,
                site_config.on_missing_root,
            )?;
            if json {
                println!("{}", serde_json::to_string_pretty(&pages)?);
            } else {
                output::print_pages_output(&pages);
            }
        }
        Command::Redirect { json } => {
            let site_config = config::load_config(&cli.project)?;
            let options = DiscoveryOptions::from_config(&site_config, false);
            let entries = routes::discover_routes(&listing, &options)?;
            let redirect = latest_redirect(&entries);
            if json {
                println!("{}", serde_json::to_string_pretty(&redirect)?);
            } else {
                println!("{}", output::format_redirect(&redirect));
            }
        }
        Command::Data { year, json } => {
            let site_config = config::load_config(&cli.project)?;
            let dir = cli.project.join(&site_config.data.dir);
            let year_data = data::load_year(&dir, &year)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&year_data)?);
            } else {
                output::print_year_data(&year, &year_data);
            }
        }
        Command::Urls { year } => {
            let site_config = config::load_config(&cli.project)?;
            output::print_dataset_urls(&site_config.data.base_url, &year);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Log to stderr so stdout stays clean for `--json` output.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
