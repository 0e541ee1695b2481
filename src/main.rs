use std::io::{self, BufWriter};
use std::process::ExitCode;

use log::{error, info};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .format_target(false)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();

    match domain_checker::batch::run(stdin.lock(), BufWriter::new(stdout.lock())) {
        Ok(summary) => {
            info!(
                "{} forbidden ({} after minimization), {} queries, {} blocked",
                summary.forbidden, summary.minimized, summary.queries, summary.blocked
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
