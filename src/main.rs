// src/main.rs

use gofer::{cli, logging, print_failure_notice, run};

#[tokio::main]
async fn main() {
    if let Err(err) = run_main().await {
        print_failure_notice(&format!("{err:#}"));
        std::process::exit(1);
    }
}

async fn run_main() -> anyhow::Result<()> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    run(args).await
}
