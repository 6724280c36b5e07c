use clap::{Parser, Subcommand};

mod assessment;
mod cmd;
mod samples;

#[derive(Parser, Debug)]
#[command(name = "ptax", version, about = "Parcel property tax calculator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Assess property tax for a site and its floors
    Assess(cmd::assess::AssessCommand),
    /// Print a built-in demo property dataset
    Sample(cmd::sample::SampleCommand),
    /// Print the expected property input format
    Schema(cmd::schema::SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Command::Assess(cmd) => cmd.exec(),
        Command::Sample(cmd) => cmd.exec(),
        Command::Schema(cmd) => cmd.exec(),
    }
}
