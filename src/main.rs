use brainsight::{
    cli::{Cli, CliHandler},
    logging::{self, Verbosity},
};
use std::process;

#[tokio::main]
async fn main() {
    // Parse command line arguments
    let cli = match Cli::parse_args() {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("❌ {}", e);
            process::exit(e.exit_code());
        }
    };

    if let Err(e) = logging::init(
        Verbosity::from_flags(cli.verbose, cli.debug),
        cli.should_use_color(),
    ) {
        eprintln!("⚠️ {}", e);
    }

    let handler = CliHandler::new(cli);

    let exit_code = match handler.run().await {
        Ok(code) => code,
        Err(e) => {
            tracing::debug!(error = ?e, "run aborted");
            eprintln!("❌ {}", e);
            e.exit_code()
        }
    };

    process::exit(exit_code);
}
