//! `spantable`: print delimited text as a proportional-width table.
//!
//! ```text
//! $ printf 'name,notes\nalice,likes long walks\n' | spantable -H -w 23 -l 2
//! |==========+==========|
//! |name      |notes     |
//! |==========+==========|
//! |alice     |likes long|
//! |          | walks    |
//! |----------+----------|
//! ```

mod input;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use env_logger::fmt::style::{AnsiColor, Color, Style};
use env_logger::Builder;
use log::LevelFilter;
use spantable::{BorderStyle, Table, TableConfig};

use crate::input::Records;

#[derive(Parser, Debug)]
#[command(name = "spantable", version, about)]
struct Cli {
    /// Input file; reads stdin when omitted or `-`
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Field delimiter
    #[arg(
        short,
        long,
        default_value = ",",
        value_parser = input::parse_delimiter
    )]
    delimiter: u8,

    /// Use the first record as column titles
    #[arg(short = 'H', long)]
    header: bool,

    /// Column title (repeatable); overrides --header
    #[arg(short, long = "title", value_name = "TITLE")]
    titles: Vec<String>,

    /// Total table width; defaults to the terminal width
    #[arg(short, long, value_name = "N")]
    width: Option<usize>,

    /// Comma-separated weights for the leading columns
    #[arg(long, value_delimiter = ',', value_name = "W,W,..")]
    weights: Option<Vec<f64>>,

    /// Maximum lines per row before trimming
    #[arg(short, long, value_name = "N")]
    lines_per_row: Option<usize>,

    /// Border style: ascii, light or double
    #[arg(short, long, value_name = "STYLE")]
    border: Option<BorderStyle>,

    /// YAML table configuration; flags override its values
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Overlay command line values on a loaded configuration.
    ///
    /// Titles resolve in order: `--title`, then the input header, then
    /// whatever the configuration file set.
    fn apply(&self, config: &mut TableConfig, header: Option<Vec<String>>) {
        if let Some(width) = self.width {
            config.width = Some(width);
        }
        if let Some(weights) = &self.weights {
            config.weights = weights.clone();
        }
        if let Some(lines) = self.lines_per_row {
            config.lines_per_row = lines;
        }
        if let Some(border) = self.border {
            config.border = border;
        }
        if !self.titles.is_empty() {
            config.titles = self.titles.clone();
        } else if let Some(header) = header {
            config.titles = header;
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let error_style = Style::new()
        .fg_color(Some(Color::Ansi(AnsiColor::Red)))
        .bold();
    let warn_style = Style::new()
        .fg_color(Some(Color::Ansi(AnsiColor::Yellow)))
        .bold();

    // RUST_LOG wins over -v
    Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(move |buf, record| {
            let style = match record.level() {
                log::Level::Error => error_style,
                log::Level::Warn => warn_style,
                _ => Style::new(),
            };
            writeln!(
                buf,
                "{style}[{}]{style:#} {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

fn load_config(cli: &Cli) -> Result<TableConfig> {
    match &cli.config {
        Some(path) => {
            log::info!("loading configuration from {}", path.display());
            TableConfig::from_path(path)
                .with_context(|| format!("invalid configuration file {}", path.display()))
        }
        None => Ok(TableConfig::default()),
    }
}

fn build_table(cli: &Cli, records: Records) -> Result<Table> {
    let mut config = load_config(cli)?;
    cli.apply(&mut config, records.header);

    let mut table = Table::from_config(&config)
        .context("invalid table settings")?;
    for row in records.rows {
        table.add_row(row);
    }
    Ok(table)
}

fn run(cli: Cli) -> Result<()> {
    let reader = input::open(cli.input.as_deref())?;
    let records = input::read_records(reader, cli.delimiter, cli.header)?;
    let table = build_table(&cli, records)?;
    table.print().context("failed to render table")?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(cli)
}
