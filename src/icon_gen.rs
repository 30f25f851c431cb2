use crate::manifest::{write_icons_manifest, IconsManifest};
use crate::png::encode_png;
use crate::shield::shield_image;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Icon sizes a browser extension manifest expects
pub const DEFAULT_SIZES: [u32; 3] = [16, 48, 128];

/// Largest icon edge accepted, in pixels.
/// A 4096 px icon already needs about 50 MB of raw scanlines.
pub const MAX_ICON_SIZE: u32 = 4096;

#[derive(Debug, Clone)]
pub struct Args {
    pub output: PathBuf,
    pub sizes: Vec<u32>,
    pub manifest: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            output: PathBuf::from("."),
            sizes: DEFAULT_SIZES.to_vec(),
            manifest: false,
        }
    }
}

/// File name of the icon for `size`, e.g. `icon16.png`
pub fn icon_file_name(size: u32) -> String {
    format!("icon{size}.png")
}

pub fn generate_icons(args: Args) -> Result<()> {
    // Fail before touching the file system if any size is unusable
    for &size in &args.sizes {
        validate_size(size)?;
    }

    std::fs::create_dir_all(&args.output).context("Can't create output directory")?;

    println!("Generating Auron Security extension icons...");

    let mut manifest = IconsManifest::new();
    for &size in &args.sizes {
        let filename = icon_file_name(size);
        render_icon(size, &args.output.join(&filename))?;
        println!("Created {filename}");
        manifest.add_icon(size, filename);
    }

    if args.manifest {
        write_icons_manifest(&args.output, &manifest)?;
    }

    println!("Done!");
    Ok(())
}

/// Checks that a `size` x `size` icon can be rendered and encoded
pub fn validate_size(size: u32) -> Result<()> {
    if size == 0 {
        anyhow::bail!("Icon size must be greater than zero");
    }
    if size > MAX_ICON_SIZE {
        anyhow::bail!(
            "Icon size {} exceeds the maximum of {}",
            size,
            MAX_ICON_SIZE
        );
    }

    // one filter byte plus three bytes per pixel for every row
    let edge = size as usize;
    edge
        .checked_mul(3)
        .and_then(|row| row.checked_add(1))
        .and_then(|row| row.checked_mul(edge))
        .with_context(|| format!("Icon size {} does not fit in memory", size))?;
    Ok(())
}

/// Renders the shield at `size` x `size` and writes it to `path`
///
/// The PNG is fully encoded in memory and written with a single call,
/// replacing any existing file.
pub fn write_icon(size: u32, path: &Path) -> Result<()> {
    validate_size(size)?;
    render_icon(size, path)
}

fn render_icon(size: u32, path: &Path) -> Result<()> {
    let image = shield_image(size, size);
    let png = encode_png(&image)
        .with_context(|| format!("Failed to encode {}x{} icon", size, size))?;

    std::fs::write(path, png)
        .with_context(|| format!("Failed to write PNG file {}", path.display()))?;
    Ok(())
}
