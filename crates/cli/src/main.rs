use anyhow::Context;
use clap::Parser;

use hcn_cli::Cli;
use hcn_contact::SiteConfig;

fn main() -> anyhow::Result<()> {
    hcn_observability::init();

    let cli = Cli::parse();
    let site = SiteConfig::from_env().context("invalid site configuration")?;

    let stdout = std::io::stdout();
    hcn_cli::run(cli, &site, &mut stdout.lock())
}
