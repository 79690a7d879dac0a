//! First-fit color clustering.
//!
//! Pixels are visited in order. Each pixel joins the first existing cluster, in creation order,
//! whose representative color is within the [`ErrorRange`] on every RGB channel.
//! If no cluster accepts it, the pixel becomes the representative of a new cluster.
//! A pixel never moves to a later cluster, even if that cluster would be a closer match.
//!
//! The result is a partition of the input: every pixel ends up in exactly one cluster,
//! members keep their relative input order, and clusters are ordered by their first pixel.
//!
//! # Examples
//! ```
//! # use pixsort::{first_fit, ErrorRange, PixelSliceError};
//! # use palette::Srgba;
//! # fn main() -> Result<(), PixelSliceError> {
//! let pixels = vec![
//!     Srgba::new(10, 10, 10, 255),
//!     Srgba::new(250, 250, 250, 255),
//!     Srgba::new(12, 12, 12, 255),
//! ];
//!
//! let clusters = first_fit::cluster(&pixels, ErrorRange::new(5))?;
//! assert_eq!(clusters.counts(), vec![2, 1]);
//! # Ok(())
//! # }
//! ```

use crate::{ClusterSet, ErrorRange, Pixel, PixelSlice, PixelSliceError};
use std::collections::HashMap;

/// Clusters `pixels` with the first-fit policy.
///
/// Returns an error if `pixels` is empty or longer than [`MAX_PIXELS`](crate::MAX_PIXELS).
/// See [`first_fit`] for the version that takes an already validated [`PixelSlice`].
pub fn cluster(pixels: &[Pixel], error_range: ErrorRange) -> Result<ClusterSet, PixelSliceError> {
    Ok(first_fit(pixels.try_into()?, error_range))
}

/// Clusters the pixels of `pixels` with the first-fit policy.
///
/// The matching cluster for each distinct RGB triple is remembered after it is first seen.
/// Acceptance windows never change once a cluster is created, so a repeated color always
/// lands in the same cluster a full scan would pick.
#[must_use]
pub fn first_fit(pixels: PixelSlice, error_range: ErrorRange) -> ClusterSet {
    let mut clusters = ClusterSet::new();
    let mut seen = HashMap::<[u8; 3], usize>::new();

    for &pixel in pixels.iter() {
        let key = [pixel.red, pixel.green, pixel.blue];
        if let Some(&i) = seen.get(&key) {
            clusters.push(i, pixel);
            continue;
        }

        let i = match clusters.first_accepting(pixel) {
            Some(i) => {
                clusters.push(i, pixel);
                i
            }
            None => clusters.create(pixel, error_range),
        };

        seen.insert(key, i);
    }

    clusters
}
