// Composes a JD-Xi parameter write (DT1) or read request (RQ1) and prints
// the message bytes as hex.

use std::process;

use clap::Parser;

use jdxi_sysex::{registry, DeviceConfig, SynthFamily, SysExComposer, SysExMessage};

#[derive(Parser)]
#[command(name = "jdxi-compose")]
struct Arguments {
    /// Temporary area: program, digital1, digital2, analog or drum.
    family: SynthFamily,

    /// Parameter name, optionally qualified with its table
    /// (for example DIGITAL_PARTIAL.FILTER_CUTOFF).
    parameter: String,

    /// Display value, or a label for switch parameters. Not needed with
    /// --request.
    #[arg(allow_hyphen_values = true)]
    value: Option<String>,

    /// Partial, part or drum pad number.
    #[arg(long, short)]
    partial: Option<u8>,

    /// Compose an RQ1 request for the parameter instead of a write.
    #[arg(long, short)]
    request: bool,

    /// Device ID of the synthesizer.
    #[arg(long, default_value_t = DeviceConfig::JDXI.device_id)]
    device_id: u8,
}

fn compose(args: &Arguments) -> jdxi_sysex::Result<SysExMessage> {
    let device = DeviceConfig { device_id: args.device_id, ..DeviceConfig::JDXI };
    let composer = SysExComposer::new(device);
    let family = args.family;
    let base = family.base_address();
    let parameter = registry::resolve_name(family, &args.parameter)?;

    if args.request {
        return composer.request_parameter(base, family, parameter, args.partial);
    }

    let value = args.value.as_deref().unwrap_or_default();
    match value.parse::<i32>() {
        Ok(display) => composer.compose(base, family, parameter, display, args.partial),
        Err(_) => composer.compose_label(base, family, parameter, value, args.partial),
    }
}

fn main() {
    let args = Arguments::parse();
    if !args.request && args.value.is_none() {
        eprintln!("A value is required unless --request is given");
        process::exit(2);
    }

    match compose(&args) {
        Ok(message) => println!("{}", message),
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}
