use std::process::ExitCode;

use clap::Parser;
use log::{debug, error};

use lfsr::Lfsr;

/// Linear feedback shift register
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Initial state as a binary string, most significant bit first
    #[arg(short, long)]
    seed: String,

    /// Feedback tap position, 1 being the least significant bit
    #[arg(short, long)]
    tap: u32,

    /// Number of single steps to print as a bit string
    #[arg(long, default_value_t = 0)]
    steps: u32,

    /// Bits per generated number
    #[arg(short, long, default_value_t = 0)]
    width: u32,

    /// How many numbers to generate
    #[arg(short, long, default_value_t = 1)]
    count: u32,
}

fn run(args: &Args) -> lfsr::Result<()> {
    let mut lfsr = Lfsr::new(&args.seed, args.tap)?;
    debug!("{:?}", lfsr);
    println!("{}", lfsr);

    if args.steps > 0 {
        let bits: String = lfsr
            .bits()
            .take(args.steps as usize)
            .map(|b| char::from(b'0' + b))
            .collect();
        println!("{}", bits);
    }

    if args.width > 0 {
        let words: Vec<String> = (0..args.count)
            .map(|_| lfsr.generate(args.width).to_string())
            .collect();
        println!("{}", words.join(" "));
    }

    println!("{}", lfsr);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
