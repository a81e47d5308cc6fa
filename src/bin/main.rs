use serde::Deserialize;
use serde_json::json;
use std::io::Write;
use std::net::Ipv4Addr;
use std::path::PathBuf;

use bgp_rhi::{Advert, BgpMessage, Parameters, RouteSet};
use clap::Parser;

/// bgp-rhi renders a route set into BGP UPDATE message bodies and prints them as hex.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Opts {
    /// Path to a JSON file holding `advert`, `routes` and optionally `parameters`.
    #[clap(name = "FILE")]
    file_path: PathBuf,

    /// Render for this peer AS instead of the one in the advert
    #[clap(short = 'J', long)]
    peer_asn: Option<u16>,

    /// Also print the OPEN message body for the session
    #[clap(long)]
    open: bool,

    /// Hold time advertised in the OPEN message
    #[clap(long, default_value_t = 90)]
    hold_time: u16,

    /// BGP identifier advertised in the OPEN message. Defaults to the IPv4 next hop.
    #[clap(long)]
    router_id: Option<Ipv4Addr>,

    /// Output as JSON objects
    #[clap(long)]
    json: bool,
}

#[derive(Deserialize, Debug)]
struct Input {
    advert: Advert,
    #[serde(default)]
    parameters: Option<Parameters>,
    routes: RouteSet,
}

fn print_message(stdout: &mut std::io::Stdout, msg: &BgpMessage, json: bool) {
    let body = hex::encode(msg.body());
    let output_str = if json {
        json!({"type": msg.msg_type(), "length": msg.body().len(), "body": body}).to_string()
    } else {
        format!("{} {}", msg.msg_type(), body)
    };
    if let Err(e) = writeln!(stdout, "{}", &output_str) {
        if e.kind() != std::io::ErrorKind::BrokenPipe {
            eprintln!("{}", e);
        }
        std::process::exit(1);
    }
}

fn main() {
    let opts: Opts = Opts::parse();

    env_logger::init();

    let input: Input = match std::fs::read_to_string(&opts.file_path)
        .map_err(|e| e.to_string())
        .and_then(|s| serde_json::from_str(&s).map_err(|e| e.to_string()))
    {
        Ok(input) => input,
        Err(err) => {
            eprintln!("{}: {}", opts.file_path.display(), err);
            std::process::exit(1);
        }
    };

    let peer_asn = opts.peer_asn.unwrap_or(input.advert.peer_asn);
    let advert = match &input.parameters {
        Some(params) => input.advert.with_parameters(params, peer_asn),
        None => Advert {
            peer_asn,
            ..input.advert
        },
    };

    let mut stdout = std::io::stdout();
    if opts.open {
        let router_id = opts.router_id.unwrap_or(advert.next_hop);
        let open = advert.open_message(opts.hold_time, router_id);
        print_message(&mut stdout, &BgpMessage::Open(open), opts.json);
    }

    match advert.render_batch(&input.routes) {
        Ok(messages) => {
            for msg in &messages {
                print_message(&mut stdout, msg, opts.json);
            }
        }
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }
}
