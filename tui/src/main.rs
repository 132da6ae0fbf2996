use clap::Parser;
use roiwiz_tui::cli::Cli;
use roiwiz_tui::run_main;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_main(cli)
}
