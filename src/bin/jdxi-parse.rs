// Parses JD-Xi System Exclusive messages given as hex text or read from
// a .syx file, and prints each one as JSON.

use std::path::Path;
use std::process;

use clap::Parser;

use jdxi_sysex::{read_file, split_messages, RecordingDiagnostics, SysExParser};

#[derive(Parser)]
#[command(name = "jdxi-parse")]
struct Arguments {
    /// Path of a .syx file, or the message bytes as hex (spaces allowed).
    input: String,

    /// Print the decode success rate and the MD5 digest of each message.
    #[arg(long)]
    stats: bool,

    /// Print diagnostics events to standard error.
    #[arg(long, short)]
    verbose: bool,
}

fn main() {
    let args = Arguments::parse();

    let buffer = if Path::new(&args.input).is_file() {
        match read_file(&args.input) {
            Some(buffer) => buffer,
            None => process::exit(1),
        }
    } else {
        match hex::decode(args.input.replace([' ', ':'], "")) {
            Ok(buffer) => buffer,
            Err(e) => {
                eprintln!("Error in hex string: {}", e);
                process::exit(1);
            }
        }
    };

    let recording = RecordingDiagnostics::new();
    let parser = SysExParser::default().with_diagnostics(&recording);

    let messages = split_messages(&buffer);
    let count = messages.len();
    if count == 0 {
        eprintln!("No messages found");
        process::exit(1);
    }
    let mut failed = false;
    for (number, message) in messages.iter().enumerate() {
        if count > 1 {
            println!("Message {} of {}", number + 1, count);
        }
        match parser.parse(message) {
            Ok(parsed) => {
                match serde_json::to_string_pretty(&parsed.to_json()) {
                    Ok(text) => println!("{}", text),
                    Err(e) => eprintln!("{}", e),
                }
                if args.stats {
                    println!(
                        "Decoded {} of {} parameters ({:.1}%)",
                        parsed.report.successes.len(),
                        parsed.report.successes.len() + parsed.report.failures.len(),
                        parsed.report.success_rate()
                    );
                    if !parsed.report.failures.is_empty() {
                        println!("Failed: {}", parsed.report.failures.join(", "));
                    }
                }
            }
            Err(e) => {
                eprintln!("{}", e);
                failed = true;
            }
        }
        if args.stats {
            println!("MD5 digest: {:x}", md5::compute(message));
        }
        if args.verbose {
            for event in recording.take() {
                eprintln!("{}", event);
            }
        }
    }

    if failed {
        process::exit(1);
    }
}
