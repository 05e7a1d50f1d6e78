pub mod cell_readers;
pub mod classify;
pub mod cli;
pub mod columns;
pub mod convert;
pub mod data;
pub mod error;
pub mod io_utils;
pub mod missing;
pub mod narrow;
pub mod probe;
pub mod reader;
pub mod table;
pub mod types;

use std::{env, sync::OnceLock};

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use crate::{
    cell_readers::CellReaders,
    cli::{Cli, Commands},
};

pub use crate::{
    data::{Value, ValueKind},
    error::{CellError, ConfigurationError, ConversionError, ConversionFailure, NarrowError},
    narrow::{calc_narrowest_type, narrow, narrow_array, narrow_row, narrow_to_narrowest},
    types::DataType,
};

static LOGGER: OnceLock<()> = OnceLock::new();

fn init_logging() {
    LOGGER.get_or_init(|| {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
        if env::var("RUST_LOG").is_err() {
            builder.filter_module("cell_narrow", LevelFilter::Info);
        }
        let _ = builder.format_timestamp_millis().try_init();
    });
}

pub fn run() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Probe(args) => probe::execute(&args),
        Commands::Convert(args) => convert::execute(&args),
        Commands::Readers => {
            handle_readers();
            Ok(())
        }
    }
}

fn handle_readers() {
    let readers = CellReaders::default();
    let rows = readers
        .iter()
        .map(|(name, reader)| vec![name.to_string(), reader.value_type().to_string()])
        .collect::<Vec<_>>();
    table::print_table(&["reader", "type"], &rows);
}

pub(crate) fn printable_delimiter(delimiter: u8) -> String {
    match delimiter {
        b'\t' => "\\t".to_string(),
        other => (other as char).to_string(),
    }
}
