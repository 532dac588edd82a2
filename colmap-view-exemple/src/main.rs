use std::env;

use colmap_view_core::io::normalize_folder;
use colmap_view_core::sampler::{base_indices, jitter_bound};
use colmap_view_core::{ColmapExport, ColmapFile, CoreError, ImageGallery};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set RUST_LOG=debug to see the gallery's listing details
    env_logger::init();

    // Image folder as first argument, COLMAP export folder as second (both default to "./")
    let images_dir = normalize_folder(&env::args().nth(1).unwrap_or_else(|| ".".to_owned()));
    let colmap_dir = normalize_folder(&env::args().nth(2).unwrap_or_else(|| ".".to_owned()));

    let gallery = ImageGallery::new(&images_dir);
    let images = gallery.list()?;
    println!("{} images in {}", images.len(), images_dir.display());

    // Base indices and jitter window used for a sample of 5
    let sample_size = images.len().min(5);
    println!(
        "Base indices: {:?}, jitter: +/-{}",
        base_indices(images.len(), sample_size),
        jitter_bound(images.len(), sample_size)
    );

    // Sample a few times: picks move inside their jitter window on each run
    for i in 0..3 {
        match gallery.sample(5) {
            Ok(sample) => println!("Sample {} ({}/{}): {:?}", i + 1, sample.count, sample.total, sample.images),
            Err(CoreError::NoImages) => {
                println!("No images to sample");
                break;
            }
            Err(e) => return Err(e.into()),
        }
    }

    // Asking for more than available returns everything, in order
    if !images.is_empty() {
        let all = gallery.sample(usize::MAX)?;
        if all.images == images {
            println!("Full listing returned in order ({} images)", all.count);
        } else {
            println!("Should not happen: full listing differs from the directory order");
        }
    }

    // The COLMAP text files are optional here
    let export = ColmapExport::new(&colmap_dir);
    for file in ColmapFile::ALL {
        match export.read(file) {
            Ok(content) => println!("{}: {} lines", file, content.lines().count()),
            Err(e) => println!("{}", e),
        }
    }

    Ok(())
}
