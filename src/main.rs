//! minionctl - install, supervise, and remove the miniond host agent

#![cfg_attr(test, allow(clippy::expect_used))]

use clap::Parser;

use minionctl::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let code = cli.run().await;
    std::process::exit(code);
}
