// Prints a universal identity request, or decodes an identity reply given
// as hex and tells whether it came from a JD-Xi.

use std::process;

use clap::Parser;

use jdxi_sysex::identity::{IdentityReply, IdentityRequest, BROADCAST};

#[derive(Parser)]
#[command(name = "jdxi-identity")]
struct Arguments {
    /// Identity reply bytes as hex. Without it, a request is printed.
    reply: Option<String>,

    /// Device ID to address the request to.
    #[arg(long, default_value_t = BROADCAST)]
    device_id: u8,
}

fn main() {
    let args = Arguments::parse();

    let Some(reply) = args.reply else {
        let request = IdentityRequest::new(args.device_id);
        println!("{}", hex::encode_upper(request.to_bytes()));
        return;
    };

    let data = match hex::decode(reply.replace(' ', "")) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Error in hex string: {}", e);
            process::exit(1);
        }
    };

    match IdentityReply::parse(&data) {
        Ok(reply) => {
            println!("Device {:02X}h: {}", reply.device_id, reply);
            println!("{}", if reply.is_jdxi() { "Roland JD-Xi" } else { "Not a JD-Xi" });
        }
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}
