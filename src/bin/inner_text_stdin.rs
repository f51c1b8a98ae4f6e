//! Reads HTML (or hast JSON with `--hast`) from stdin and prints the
//! rendered text as JSON to stdout.
//!
//! Usage: `inner_text_stdin [--hast] [normal|pre|nowrap|pre-wrap]`

use std::env;
use std::io::{self, Read};

use rs_inner_text::encoding::decode_html;
use rs_inner_text::{hast_json_to_text, html_to_text_with_options, Options, Result};
use serde::Serialize;
use tracing::{debug, error};

#[derive(Serialize)]
struct Output {
    text: String,
}

fn run() -> Result<String> {
    let mut hast = false;
    let mut options = Options::default();

    for arg in env::args().skip(1) {
        if arg == "--hast" {
            hast = true;
        } else {
            options.whitespace = arg.parse()?;
        }
    }

    let mut input = Vec::new();
    io::stdin().read_to_end(&mut input)?;
    debug!(bytes = input.len(), hast, whitespace = %options.whitespace, "read input");

    if hast {
        return hast_json_to_text(&String::from_utf8_lossy(&input), &options);
    }

    let html = decode_html(&input);
    Ok(html_to_text_with_options(&html, &options))
}

fn main() {
    tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(text) => {
            println!("{}", serde_json::to_string(&Output { text }).unwrap_or_default());
        }
        Err(err) => {
            error!("{err}");
            std::process::exit(1);
        }
    }
}
