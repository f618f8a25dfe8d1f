use clap::Parser;

mod platform;

fn main() -> anyhow::Result<()> {
    let cli = platform::config::Cli::parse();
    platform::run_app(cli)
}
