use std::path::PathBuf;

use clap::Parser;
use gpui::{App, Application};
use tracing::{debug, error, info};

use vat_core::{AmountField, DecimalSeparator, VatRate};
use vat_ui::config::{AppConfig, ConfigOverrides};
use vat_ui::{logging, open_main_window, setup_app};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Net / gross / VAT calculator.
///
/// Type an amount into one field and the other two follow at the selected
/// VAT rate.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Starting VAT rate: 0, 5, 8 or 23 (with or without `%`).
    #[arg(long)]
    rate: Option<VatRate>,

    /// Field that receives keypad input at startup: net, gross or vat.
    #[arg(long)]
    active: Option<AmountField>,

    /// Decimal separator shown in amounts: comma or point.
    #[arg(long)]
    separator: Option<DecimalSeparator>,

    /// Log filter, e.g. `debug` or `info,vat_core=trace`.
    /// `RUST_LOG` takes precedence when set.
    #[arg(long)]
    log_level: Option<String>,

    /// Also append log output to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            rate: self.rate,
            active: self.active,
            separator: self.separator,
            log_level: self.log_level.clone(),
            log_file: self.log_file.clone(),
        }
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_or_default(cli.config.as_deref())?.with_overrides(cli.overrides());
    config.validate()?;

    logging::init_logging(&config.log_level)?;
    if let Some(path) = &config.log_file {
        logging::enable_file_logging(path)?;
    }
    info!("Starting VAT calculator");
    debug!("configuration:\n{config}");

    Application::new()
        .with_assets(gpui_component_assets::Assets)
        .run(move |cx: &mut App| {
            setup_app(cx);
            if let Err(error) = open_main_window(cx, &config) {
                error!(?error, "failed to open calculator window");
                cx.quit();
            }
        });

    Ok(())
}
