use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use vardeck_core::{build_variant_previews, generate_sku, AppConfig};
use vardeck_inventory::{HttpInventoryClient, InventoryProvider};

#[derive(Debug, Parser)]
#[command(name = "vardeck")]
#[command(about = "Variant SKU preview and inventory lookup tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Preview the SKU for one variant, or the matrix for several
    Sku {
        /// Product name the base segment is derived from
        #[arg(long)]
        name: String,

        /// Color for a single preview
        #[arg(long, conflicts_with = "colors")]
        color: Option<String>,

        /// Size for a single preview
        #[arg(long, conflicts_with = "sizes")]
        size: Option<String>,

        /// Comma-separated colors for a variant matrix
        #[arg(long, value_delimiter = ',')]
        colors: Vec<String>,

        /// Comma-separated sizes for a variant matrix
        #[arg(long, value_delimiter = ',')]
        sizes: Vec<String>,
    },
    /// Fetch live inventory for one or more SKUs
    Fetch {
        /// SKU to look up; repeat the flag for a batch
        #[arg(long = "sku", required = true)]
        skus: Vec<String>,

        /// Override VARDECK_BFF_BASE_URL for this invocation
        #[arg(long)]
        base_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    match cli.command {
        Commands::Sku {
            name,
            color,
            size,
            colors,
            sizes,
        } => {
            tracing_subscriber::fmt::init();
            run_sku(&name, color.as_deref(), size.as_deref(), &colors, &sizes);
            Ok(())
        }
        Commands::Fetch { skus, base_url } => {
            let config = vardeck_core::load_app_config()?;
            let env_filter = EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
            tracing_subscriber::fmt().with_env_filter(env_filter).init();
            run_fetch(&config, &skus, base_url.as_deref()).await
        }
    }
}

/// Prints a single preview SKU, or the full variant matrix when list flags
/// are given. A lone `--color`/`--size` combines with the opposite list.
fn run_sku(
    name: &str,
    color: Option<&str>,
    size: Option<&str>,
    colors: &[String],
    sizes: &[String],
) {
    if colors.is_empty() && sizes.is_empty() {
        println!("{}", generate_sku(name, color, size));
        return;
    }

    let mut colors = colors.to_vec();
    if let Some(color) = color {
        colors.push(color.to_owned());
    }
    let mut sizes = sizes.to_vec();
    if let Some(size) = size {
        sizes.push(size.to_owned());
    }

    let previews = build_variant_previews(name, &colors, &sizes);
    if previews.is_empty() {
        println!("no variants to preview; every color/size entry was blank");
        return;
    }
    for preview in &previews {
        println!(
            "{:<20} color={} size={}",
            preview.sku,
            preview.color.as_deref().unwrap_or("-"),
            preview.size.as_deref().unwrap_or("-")
        );
    }
}

/// Runs one batch fetch and prints a line per requested SKU, in request
/// order. SKUs the backend has no record for are reported as such rather
/// than shown as zero stock.
///
/// # Errors
///
/// Returns an error if the client cannot be built from the configured base
/// URL or the batch fetch fails after the configured retries.
async fn run_fetch(
    config: &AppConfig,
    skus: &[String],
    base_url: Option<&str>,
) -> anyhow::Result<()> {
    let client = match base_url {
        Some(url) => HttpInventoryClient::with_base_url(config, url)?,
        None => HttpInventoryClient::new(config)?,
    };

    let records = client.fetch_batch(skus).await?;
    tracing::info!(
        requested = skus.len(),
        resolved = records.len(),
        "inventory batch fetched"
    );
    for sku in skus {
        match records.get(sku) {
            Some(record) => {
                let reorder = if record.needs_reorder() { "  reorder" } else { "" };
                println!(
                    "{sku}: available={} reserved={} status={}{reorder}",
                    record.quantity_available,
                    record.quantity_reserved,
                    record.stock_status(),
                );
            }
            None => println!("{sku}: no inventory record"),
        }
    }
    Ok(())
}
