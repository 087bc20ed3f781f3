pub mod loggers;

use crate::loggers::init_logger;
use anyhow::Result;
use clap::Parser;
use mdmerge::config::MergeConfig;
use mdmerge::pipeline::{blocks2json, pages_from_json, reconstruct};
use std::path::Path;

#[derive(Parser, Debug)]
#[command(version, about, long_about=None)]
struct Args {
    /// Pages JSON file produced by the upstream layout stage.
    #[arg(short, long)]
    input: String,

    /// Markdown output path; stdout when omitted.
    #[arg(short, long)]
    out: Option<String>,

    /// Optional path for the finalized block records as JSON.
    #[arg(short, long)]
    blocks: Option<String>,

    /// Force a block flush at every page boundary.
    #[arg(short, long, default_value_t = false)]
    paginate: bool,

    /// Override the separator emitted after page-ending blocks.
    #[arg(long)]
    page_separator: Option<String>,

    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.verbose)?;

    if !Path::new(args.input.as_str()).exists() {
        eprintln!("File not found: {}", args.input);
        std::process::exit(-1);
    }

    let mut config = MergeConfig::new();
    config.paginate_output = args.paginate;
    if let Some(separator) = args.page_separator {
        config.page_separator = separator;
    }

    let json = std::fs::read_to_string(&args.input)?;
    let pages = pages_from_json(&json)?;
    let (text_blocks, full_text) = reconstruct(&pages, &config);

    if let Some(blocks_path) = args.blocks {
        std::fs::write(&blocks_path, blocks2json(&text_blocks)?)?;
        tracing::info!("Wrote {} block records to {}", text_blocks.len(), blocks_path);
    }

    match args.out {
        Some(out) => {
            std::fs::write(&out, &full_text)?;
            tracing::info!("Wrote markdown to {}", out);
        }
        None => {
            println!("{}", full_text);
        }
    }

    return Ok(());
}
