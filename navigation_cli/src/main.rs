use clap::{Parser, Subcommand};

use crate::{decode::DecodeArgs, encode::EncodeArgs};

mod decode;
mod encode;
mod input;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode the points of a polyline record
    #[command(visible_alias = "d")]
    Decode {
        #[command(flatten)]
        args: DecodeArgs,
    },
    /// Encode a list of coordinates into a polyline record
    #[command(visible_alias = "e")]
    Encode {
        #[command(flatten)]
        args: EncodeArgs,
    },
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let output = match cli.command {
        Commands::Decode { args } => decode::run(args)?,
        Commands::Encode { args } => encode::run(args)?,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
