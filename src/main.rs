#![doc = include_str!("../README.md")]

use clap::Parser;
use core::error::Error;
use scrubby::{
    AllowList, BlacklistSanitizer, RenderFormat, Sanitizer, WhitelistSanitizer, parse_document,
    render_metrics, serialize_document,
};
use std::{
    fs,
    io::{self, Read, Write},
    path::PathBuf,
    process::exit,
};

const DOCUMENT_HEADER: &str = concat!(
    r#"<?xml version="1.0" standalone="no"?>"#,
    "\n",
    r#"<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">"#,
    "\n",
);

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Arguments {
    /// An input file. Reads standard input when omitted.
    input: Option<PathBuf>,
    /// An output file. Writes standard output when omitted.
    output: Option<PathBuf>,
    /// Uses the element blacklist instead of the whitelist.
    #[arg(long)]
    blacklist: bool,
    /// Sets a removal report format.
    #[arg(long, default_value = "text")]
    report: RenderFormat,
}

fn main() {
    env_logger::init();

    if let Err(error) = run() {
        eprintln!("{error}");
        exit(1)
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let Arguments {
        input,
        output,
        blacklist,
        report,
    } = Arguments::parse();

    let text = if let Some(path) = &input {
        fs::read_to_string(path)?
    } else {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        text
    };

    let sanitizer: Box<dyn Sanitizer> = if blacklist {
        Box::new(BlacklistSanitizer::new())
    } else {
        Box::new(WhitelistSanitizer::new(AllowList::new()))
    };

    let sanitized = sanitizer.sanitize(parse_document(&text)?);
    let mut document = DOCUMENT_HEADER.to_string();

    if let Some(element) = sanitized.element() {
        document.push_str(&serialize_document(element)?);
        document.push('\n');
    }

    if let Some(path) = &output {
        fs::write(path, document)?;
    } else {
        io::stdout().write_all(document.as_bytes())?;
    }

    render_metrics(&sanitized.metrics(), report, &mut io::stderr())?;

    Ok(())
}
