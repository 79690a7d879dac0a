//! Turns a [`ClusterSet`] back into a flat sequence of pixels and reshapes it into a grid.

use crate::{ClusterSet, Pixel};
use std::{error::Error, fmt::Display, slice};
#[cfg(feature = "image")]
use {image::RgbaImage, palette::cast::IntoComponents};

/// Concatenates the members of each cluster, in cluster creation order.
///
/// The output has one entry for each pixel that was clustered.
///
/// # Examples
/// ```
/// # use pixsort::{first_fit, flatten, ErrorRange, PixelSliceError};
/// # use palette::Srgba;
/// # fn main() -> Result<(), PixelSliceError> {
/// let pixels = vec![
///     Srgba::new(10, 10, 10, 255),
///     Srgba::new(250, 250, 250, 255),
///     Srgba::new(12, 12, 12, 255),
/// ];
///
/// let sorted = flatten(first_fit::cluster(&pixels, ErrorRange::new(5))?);
/// assert_eq!(sorted, vec![pixels[0], pixels[2], pixels[1]]);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn flatten(clusters: ClusterSet) -> Vec<Pixel> {
    let mut pixels = Vec::with_capacity(clusters.num_pixels());
    for cluster in clusters {
        pixels.extend(cluster.into_members());
    }
    pixels
}

/// Reshapes a flat, row-major sequence of pixels into a `width` by `height` [`PixelGrid`].
///
/// Returns an error if the number of pixels is not `width * height`.
pub fn reshape(pixels: Vec<Pixel>, width: u32, height: u32) -> Result<PixelGrid, DimensionMismatch> {
    let expected = width as usize * height as usize;
    if pixels.len() == expected {
        Ok(PixelGrid { width, height, pixels })
    } else {
        Err(DimensionMismatch {
            width,
            height,
            len: pixels.len(),
        })
    }
}

/// An error type for when a number of pixels does not fill a grid exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionMismatch {
    /// The requested width.
    pub width: u32,
    /// The requested height.
    pub height: u32,
    /// The number of pixels that were provided.
    pub len: usize,
}

impl Display for DimensionMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} pixels do not fill a {}x{} grid",
            self.len, self.width, self.height
        )
    }
}

impl Error for DimensionMismatch {}

/// A row-major grid of pixels.
///
/// The pixel at column `x` and row `y` is stored at index `y * width + x`.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelGrid {
    /// The number of columns.
    width: u32,
    /// The number of rows.
    height: u32,
    /// The pixels, row by row.
    pixels: Vec<Pixel>,
}

impl PixelGrid {
    /// Returns the number of columns.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Returns the `(width, height)` of the grid.
    #[must_use]
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the pixel at column `x` and row `y`, or `None` if it is out of bounds.
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<Pixel> {
        if x < self.width && y < self.height {
            Some(self.pixels[y as usize * self.width as usize + x as usize])
        } else {
            None
        }
    }

    /// Returns an iterator over the rows of the grid, from top to bottom.
    pub fn rows(&self) -> slice::ChunksExact<'_, Pixel> {
        // a zero width grid has no pixels, but chunks_exact needs a non-zero size
        self.pixels.chunks_exact((self.width as usize).max(1))
    }

    /// Returns all pixels in row-major order.
    #[must_use]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Consumes the grid and returns its pixels in row-major order.
    #[must_use]
    pub fn into_pixels(self) -> Vec<Pixel> {
        self.pixels
    }

    /// Converts the grid into an [`RgbaImage`].
    #[cfg(feature = "image")]
    #[must_use]
    pub fn into_rgbaimage(self) -> RgbaImage {
        let Self { width, height, pixels } = self;
        let buf = pixels.into_components();

        #[allow(clippy::expect_used)]
        {
            // pixels.len() is equal to width * height by construction
            RgbaImage::from_vec(width, height, buf).expect("large enough buffer")
        }
    }
}

#[cfg(feature = "image")]
impl From<PixelGrid> for RgbaImage {
    fn from(grid: PixelGrid) -> Self {
        grid.into_rgbaimage()
    }
}
