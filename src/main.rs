use anyhow::Result;
use clap::Parser;
use shield_icon_gen::icon_gen::{self, DEFAULT_SIZES};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "shield-icon-gen",
    about = "Generate the shield icons for the browser extension"
)]
struct Args {
    /// Output directory.
    #[clap(short, long, value_name = "DIR", default_value = ".")]
    output: PathBuf,

    /// PNG icon sizes to generate, written as icon<SIZE>.png.
    #[clap(short, long, value_delimiter = ',', value_name = "SIZES")]
    png: Option<Vec<u32>>,

    /// Also write icons.json with the manifest "icons" entry
    #[clap(long)]
    manifest: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    icon_gen::generate_icons(icon_gen::Args {
        output: args.output,
        sizes: args.png.unwrap_or_else(|| DEFAULT_SIZES.to_vec()),
        manifest: args.manifest,
    })
}
