use shield_icon_gen::icon_gen::{icon_file_name, DEFAULT_SIZES};
use shield_icon_gen::shield::shield_image;
use std::path::PathBuf;

fn main() {
    let dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let mut failures = 0;

    for size in DEFAULT_SIZES {
        let path = dir.join(icon_file_name(size));
        println!("Checking {}", path.display());

        let img = match image::open(&path) {
            Ok(img) => img,
            Err(err) => {
                println!("  ⚠ Failed to decode: {err}");
                failures += 1;
                continue;
            }
        };

        println!("  Dimensions: {}x{}", img.width(), img.height());
        println!("  Color type: {:?}", img.color());

        if img.width() != size || img.height() != size {
            println!("  ⚠ Expected {size}x{size}");
            failures += 1;
            continue;
        }

        let decoded = img.to_rgb8();
        let center = decoded.get_pixel(size / 2, size / 2);
        let corner = decoded.get_pixel(0, 0);
        println!("  Center pixel: RGB {:?}", center.0);
        println!("  Corner pixel: RGB {:?}", corner.0);

        let expected = shield_image(size, size);
        let mismatches = decoded
            .pixels()
            .zip(expected.pixels())
            .filter(|(got, want)| got != want)
            .count();

        if mismatches == 0 {
            println!("  ✓ All pixels match the shield");
        } else {
            println!("  ⚠ {mismatches} pixels differ from the shield");
            failures += 1;
        }
    }

    if failures > 0 {
        std::process::exit(1);
    }
}
