#![allow(dead_code)]

use std::{
    path::{Path, PathBuf},
    sync::OnceLock,
};

use image::{Rgba, RgbaImage};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoroshiro128PlusPlus;

pub fn load_images(images: &[PathBuf]) -> Vec<(String, RgbaImage)> {
    images
        .iter()
        .map(|path| {
            image::open(path).map(|image| {
                (
                    path.file_name().unwrap().to_owned().into_string().unwrap(),
                    image.into_rgba8(),
                )
            })
        })
        .collect::<Result<_, _>>()
        .expect("loaded each image")
}

pub fn load_image_dir(dir: impl AsRef<Path>) -> Vec<(String, RgbaImage)> {
    let mut paths = std::fs::read_dir(dir)
        .expect("read img directory")
        .collect::<Result<Vec<_>, _>>()
        .expect("read each file")
        .iter()
        .map(std::fs::DirEntry::path)
        .collect::<Vec<_>>();

    paths.sort();

    load_images(&paths)
}

/// A smooth diagonal gradient, so neighboring pixels are similar.
pub fn gradient_image(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        let r = (x * 255 / width.max(1)) as u8;
        let g = (y * 255 / height.max(1)) as u8;
        let b = ((x + y) * 255 / (width + height).max(1)) as u8;
        Rgba([r, g, b, 255])
    })
}

/// Uniform random noise, the worst case for the number of clusters.
pub fn noise_image(width: u32, height: u32, seed: u64) -> RgbaImage {
    let mut rng = Xoroshiro128PlusPlus::seed_from_u64(seed);
    RgbaImage::from_fn(width, height, |_, _| Rgba(rng.gen()))
}

/// A handful of flat colors with a little noise, like a screenshot or pixel art.
pub fn posterized_image(width: u32, height: u32, seed: u64) -> RgbaImage {
    let mut rng = Xoroshiro128PlusPlus::seed_from_u64(seed);
    let colors: Vec<[u8; 3]> = (0..16).map(|_| rng.gen()).collect();
    RgbaImage::from_fn(width, height, |x, y| {
        let [r, g, b] = colors[((x / 32 + y / 32) % 16) as usize];
        let jitter = rng.gen_range(0..4);
        Rgba([r.saturating_add(jitter), g, b.saturating_sub(jitter), 255])
    })
}

/// Directory of real images to benchmark on in addition to the synthetic ones.
pub const IMG_DIR_ENV: &str = "PIXSORT_BENCH_IMAGES";

fn load_bench_images() -> Vec<(String, RgbaImage)> {
    let mut images = vec![
        ("gradient_512".to_owned(), gradient_image(512, 512)),
        ("posterized_512".to_owned(), posterized_image(512, 512, 0)),
        ("noise_256".to_owned(), noise_image(256, 256, 0)),
    ];

    if let Some(dir) = std::env::var_os(IMG_DIR_ENV) {
        images.extend(load_image_dir(dir));
    }

    images
}

static BENCH_IMAGES: OnceLock<Vec<(String, RgbaImage)>> = OnceLock::new();

pub fn bench_images() -> &'static [(String, RgbaImage)] {
    BENCH_IMAGES.get_or_init(load_bench_images)
}
