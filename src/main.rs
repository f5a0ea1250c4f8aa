use std::io;
use std::process::ExitCode;

use shard_sweep::commands;
use shard_sweep::config::ScanConfig;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).with_target(false).init();
}

fn main() -> ExitCode {
    init_tracing();
    let config = ScanConfig::from_env();
    let code = commands::run(std::env::args_os(), &config, &mut io::stdout().lock(), &mut io::stderr().lock());
    ExitCode::from(code)
}
