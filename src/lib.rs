//! A library for pixel sorting: reordering an image so that visually similar colors
//! end up in contiguous runs.
//!
//! `pixsort` walks the pixels of an image in raster-scan order and groups them with a
//! first-fit clustering policy (see the [`first_fit`] module).
//! The clusters are then concatenated in the order they were created and
//! laid back out row by row into a grid of the original size.
//!
//! # Features
//! To reduce dependencies and compile times, `pixsort` has several `cargo` features
//! that can be turned off or on:
//! - `pipelines`: exposes a builder struct that serves as the high-level API (more details below).
//! - `image`: enables integration with the [`image`] crate.
//! - `cli`: builds the `pixsort` command line tool.
//!
//! # Low-Level API
//! The core consists of two functions:
//! [`first_fit::cluster`] groups a slice of pixels into a [`ClusterSet`],
//! and [`flatten`] turns the [`ClusterSet`] back into a flat sequence of pixels.
//! ```
//! # use pixsort::{first_fit, flatten, reshape, ErrorRange};
//! # use palette::Srgba;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pixels = vec![
//!     Srgba::new(10, 10, 10, 255),
//!     Srgba::new(250, 250, 250, 255),
//!     Srgba::new(12, 12, 12, 255),
//!     Srgba::new(0, 0, 0, 255),
//! ];
//!
//! let clusters = first_fit::cluster(&pixels, ErrorRange::new(5))?;
//! let grid = reshape(flatten(clusters), 2, 2)?;
//! assert_eq!(grid.get(1, 0), Some(pixels[2]));
//! # Ok(())
//! # }
//! ```
//!
//! # High-Level API
//! To get started with the high-level API, see [`SortPipeline`].
//! ```no_run
//! # use pixsort::{SortPipeline, ZeroRange};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let img = image::open("some image")?.into_rgba8();
//!
//! let sorted = SortPipeline::try_from(&img)?
//!     .error_range(32) // set the per-channel tolerance
//!     .zero_range(ZeroRange::Default) // treat an error range of 0 as unset
//!     .sorted_rgbaimage();
//! # Ok(())
//! # }
//! ```
//!
//! Note that some of the options and functions above require certain features to be enabled.

#![deny(unsafe_code, unsafe_op_in_unsafe_fn)]
#![warn(
    clippy::pedantic,
    clippy::cargo,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,
    clippy::unwrap_in_result,
    clippy::expect_used,
    clippy::unneeded_field_pattern,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unnecessary_self_imports,
    clippy::str_to_string,
    clippy::string_to_string,
    clippy::string_slice,
    missing_docs,
    clippy::missing_docs_in_private_items,
    rustdoc::all,
    clippy::float_cmp_const,
    clippy::lossy_float_literal
)]
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::many_single_char_names,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::unreadable_literal,
    clippy::wildcard_imports
)]

mod clusters;
mod flattener;
mod types;

#[cfg(feature = "pipelines")]
mod api;

pub mod first_fit;

pub use clusters::*;
pub use first_fit::first_fit;
pub use flattener::*;
pub use types::*;

#[cfg(feature = "pipelines")]
pub use api::*;

/// The maximum supported image size in number of pixels is `u32::MAX`.
pub const MAX_PIXELS: u32 = u32::MAX;

#[cfg(test)]
pub(crate) mod tests {
    use crate::Pixel;
    use palette::Srgba;
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoroshiro128PlusPlus;

    /// Generates `len` pixels with uniformly random channels.
    pub fn test_pixels(len: usize, seed: u64) -> Vec<Pixel> {
        let mut rng = Xoroshiro128PlusPlus::seed_from_u64(seed);
        (0..len)
            .map(|_| {
                let [r, g, b, a] = rng.gen::<[u8; 4]>();
                Srgba::new(r, g, b, a)
            })
            .collect()
    }

    pub fn test_pixels_1024() -> Vec<Pixel> {
        test_pixels(1024, 42)
    }

    /// Generates `len` pixels drawn from a small set of colors,
    /// so that many pixels repeat an earlier RGB value with a different alpha.
    pub fn test_pixels_few_colors(len: usize) -> Vec<Pixel> {
        let colors = test_pixels(24, 7);
        let mut rng = Xoroshiro128PlusPlus::seed_from_u64(len as u64);
        (0..len)
            .map(|_| {
                let color = colors[rng.gen_range(0..colors.len())];
                Srgba::new(color.red, color.green, color.blue, rng.gen())
            })
            .collect()
    }

    /// Sorts pixels by their components so that two pixel sequences can be compared as multisets.
    pub fn as_sorted_arrays(pixels: &[Pixel]) -> Vec<[u8; 4]> {
        let mut arrays = pixels
            .iter()
            .map(|p| [p.red, p.green, p.blue, p.alpha])
            .collect::<Vec<_>>();
        arrays.sort_unstable();
        arrays
    }
}
