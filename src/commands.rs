use bip39::Language;
use clap::{error::ErrorKind, CommandFactory, Parser};
use std::ffi::OsString;
use std::io::Write;
use tracing::{debug, error};

use crate::collector::collect;
use crate::config::ScanConfig;
use crate::constants::SHARDS;
use crate::derive::{AddressDeriver, HdDeriver};
use crate::error::{Result, ScanError};
use crate::report::report_coin;
use crate::types::SecureMnemonic;
use crate::watchlist::Watchlist;

pub const MNEMONIC_LANGUAGE: Language = Language::Spanish;
pub const USAGE_MESSAGE: &str = "Please provide your iron age spanish seed phrase as a command line argument";

pub const EXIT_OK: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = env!("CARGO_PKG_DESCRIPTION"), version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[arg(value_name = "SEED_PHRASE", help = "Spanish BIP39 seed phrase, quoted as a single argument")]
    pub mnemonic: Option<String>,

    /// Words after the first argument, such as an unquoted phrase. Ignored.
    #[arg(trailing_var_arg = true, hide = true)]
    pub extra: Vec<String>,
}

/// Derives, collects and reports every configured coin type. Returns the number of matches.
pub fn run_sweep<D, W>(deriver: &D, watchlist: &Watchlist, config: &ScanConfig, out: &mut W) -> Result<usize>
where
    D: AddressDeriver + ?Sized,
    W: Write,
{
    writeln!(
        out,
        "\nThis script will derive {} addresses across {} shards. This can take several minutes to complete.\nExiting the process will cancel the operation.",
        config.total_addresses(),
        SHARDS.len()
    )?;
    let mut found = 0;
    for &coin_type in &config.coin_types {
        writeln!(out, "\nChecking addresses for coinType {}", coin_type)?;
        let scan = collect(deriver, coin_type, config)?;
        found += report_coin(out, &scan, watchlist)?;
    }
    Ok(found)
}

pub fn execute<W: Write>(mnemonic: &SecureMnemonic, config: &ScanConfig, out: &mut W) -> Result<usize> {
    if !mnemonic.is_valid(MNEMONIC_LANGUAGE) {
        return Err(ScanError::InvalidMnemonic);
    }
    let watchlist = Watchlist::load(&config.watchlist_path)?;
    let deriver = HdDeriver::new(mnemonic.to_seed(MNEMONIC_LANGUAGE, "")?);
    run_sweep(&deriver, &watchlist, config, out)
}

/// Parses `args`, runs the sweep and maps the outcome to a process exit code.
pub fn run<I, T, W, E>(args: I, config: &ScanConfig, out: &mut W, err: &mut E) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
    E: Write,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = write!(out, "{}", e.render());
            return EXIT_OK;
        }
        Err(e) => {
            let _ = writeln!(err, "{}", USAGE_MESSAGE);
            let _ = write!(err, "{}", e.render());
            return EXIT_FAILURE;
        }
    };
    let Some(phrase) = cli.mnemonic else {
        let _ = writeln!(err, "{}", USAGE_MESSAGE);
        let _ = writeln!(err, "\n{}", Cli::command().render_usage());
        return EXIT_FAILURE;
    };

    if !cli.extra.is_empty() {
        debug!(ignored = cli.extra.len(), "ignoring arguments after the seed phrase");
    }

    let mnemonic = SecureMnemonic::from_phrase(&phrase);
    exit_code(execute(&mnemonic, config, out), err)
}

/// Reports a failed sweep on `err` and returns the matching exit code.
pub fn exit_code<E: Write>(outcome: Result<usize>, err: &mut E) -> u8 {
    match outcome {
        Ok(found) => {
            debug!(found, "sweep complete");
            EXIT_OK
        }
        Err(ScanError::InvalidMnemonic) => {
            debug!("seed phrase rejected by the {:?} wordlist", MNEMONIC_LANGUAGE);
            EXIT_FAILURE
        }
        Err(e @ ScanError::Watchlist { .. }) => {
            error!(error = %e, "cannot load watch-list");
            let _ = writeln!(err, "Error loading addresses: {}", e);
            EXIT_FAILURE
        }
        Err(e) => {
            error!(error = %e, "sweep aborted");
            let _ = writeln!(err, "Error computing address: {}", e);
            EXIT_FAILURE
        }
    }
}
