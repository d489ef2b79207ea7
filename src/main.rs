use repolens::cli::{commands, Cli};
use repolens::ui::output;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();

    let default_filter = if cli.debug { "repolens=debug" } else { "repolens=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = commands::run(cli).await {
        output::error(err);
        std::process::exit(1);
    }
}
