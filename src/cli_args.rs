use clap_derive::Parser;

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct CliArgs {
    /// Number of base layers to build before the menu starts
    #[arg(short, long, default_value_t = 3)]
    pub layers: usize,

    /// Preload sample layers instead of prompting for them
    #[arg(short, long)]
    pub sample: bool,

    /// Enable debug output
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn parse() -> CliArgs {
    <CliArgs as clap::Parser>::parse()
}
