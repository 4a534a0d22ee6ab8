use clap::{Parser, Subcommand, ValueEnum};
use eyre::Result;

use avr_mulgen::render::{render_asm, render_inline_c};
use avr_mulgen::{sequence_for, Variant};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: MulgenCommand,

    /// Output format
    #[arg(long, value_enum, default_value = "inline-c", global = true)]
    format: Format,

    /// Limbs of each operand kept register-resident per bank; operands
    /// are twice this many limbs
    #[arg(long, default_value_t = common::constants::mul160::WINDOW, global = true)]
    window: usize,
}

#[derive(Subcommand)]
enum MulgenCommand {
    /// Generate the multiply routine
    Mul,
    /// Generate the square routine
    Square,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// One instruction per line
    Asm,
    /// Quoted lines for a C inline-assembly block
    InlineC,
    /// Typed instruction records
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let variant = match cli.command {
        MulgenCommand::Mul => Variant::Multiply,
        MulgenCommand::Square => Variant::Square,
    };
    let sequence = sequence_for(variant, cli.window)?;

    match cli.format {
        Format::Asm => print!("{}", render_asm(&sequence)),
        Format::InlineC => print!("{}", render_inline_c(&sequence)),
        Format::Json => println!("{}", serde_json::to_string_pretty(&sequence)?),
    }
    Ok(())
}
