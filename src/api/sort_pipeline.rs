//! Contains the [`SortPipeline`] builder struct for the high level API.

use crate::{flatten, first_fit, reshape, ClusterSet, ErrorRange, Pixel, PixelGrid, PixelSlice, ZeroRange};
use log::debug;
#[cfg(feature = "image")]
use {crate::PixelSliceError, image::RgbaImage};

/// A builder struct to specify options to sort the pixels of an image.
///
/// # Examples
/// To start, create a [`SortPipeline`] from a [`RgbaImage`] (note that the `image` feature is needed):
/// ```no_run
/// # use pixsort::SortPipeline;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let img = image::open("some image")?.into_rgba8();
/// let mut pipeline = SortPipeline::try_from(&img)?;
/// # Ok(())
/// # }
/// ```
///
/// Then, you can change options like the error range:
/// ```
/// # use pixsort::{SortPipeline, PixelSliceError, ZeroRange};
/// # use palette::Srgba;
/// # fn main() -> Result<(), PixelSliceError> {
/// # let pixels = vec![Srgba::new(0, 0, 0, 255)];
/// # let mut pipeline = SortPipeline::new(pixels.as_slice().try_into()?, 1, 1).unwrap();
/// let pipeline = pipeline
///     .error_range(32)
///     .zero_range(ZeroRange::Default);
/// # Ok(())
/// # }
/// ```
///
/// Finally, run the pipeline:
/// ```
/// # use pixsort::{SortPipeline, PixelSliceError};
/// # use palette::Srgba;
/// # fn main() -> Result<(), PixelSliceError> {
/// let pixels = vec![
///     Srgba::new(10, 10, 10, 255),
///     Srgba::new(250, 250, 250, 255),
///     Srgba::new(12, 12, 12, 255),
///     Srgba::new(248, 251, 255, 255),
/// ];
/// let grid = SortPipeline::new(pixels.as_slice().try_into()?, 2, 2)
///     .unwrap()
///     .error_range(5)
///     .sorted_grid();
///
/// assert_eq!(grid.pixels(), &[pixels[0], pixels[2], pixels[1], pixels[3]]);
/// # Ok(())
/// # }
/// ```
#[must_use]
#[derive(Debug, Clone)]
pub struct SortPipeline<'a> {
    /// The input image as a flat slice of pixels.
    pub(crate) pixels: PixelSlice<'a>,
    /// The dimensions of the image.
    pub(crate) dimensions: (u32, u32),
    /// The per-channel tolerance for matching a cluster.
    pub(crate) error_range: ErrorRange,
    /// How to interpret an error range of `0`.
    pub(crate) zero_range: ZeroRange,
}

impl<'a> SortPipeline<'a> {
    /// Creates a new [`SortPipeline`] with default options
    /// and does not validate the size of the input image/slice.
    fn new_unchecked(pixels: PixelSlice<'a>, width: u32, height: u32) -> Self {
        Self {
            pixels,
            dimensions: (width, height),
            error_range: ErrorRange::default(),
            zero_range: ZeroRange::default(),
        }
    }

    /// Creates a new [`SortPipeline`] with default options.
    /// Returns `None` if the length of `pixels` is not equal to `width * height`.
    #[must_use]
    pub fn new(pixels: PixelSlice<'a>, width: u32, height: u32) -> Option<Self> {
        if pixels.len() == width as usize * height as usize {
            Some(Self::new_unchecked(pixels, width, height))
        } else {
            None
        }
    }

    /// Sets the per-channel tolerance used to match pixels against a cluster.
    ///
    /// The default error range is [`ErrorRange::DEFAULT`].
    pub fn error_range(&mut self, error_range: impl Into<ErrorRange>) -> &mut Self {
        self.error_range = error_range.into();
        self
    }

    /// Sets how an error range of `0` is interpreted.
    ///
    /// See [`ZeroRange`] for more details.
    ///
    /// The default is [`ZeroRange::Exact`].
    pub fn zero_range(&mut self, zero_range: ZeroRange) -> &mut Self {
        self.zero_range = zero_range;
        self
    }

    /// Returns the error range that will actually be used after applying the [`ZeroRange`] policy.
    #[must_use]
    pub fn effective_error_range(&self) -> ErrorRange {
        self.zero_range.resolve(self.error_range)
    }

    /// Returns the `(width, height)` of the input.
    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        self.dimensions
    }
}

#[cfg(feature = "image")]
impl<'a> TryFrom<&'a RgbaImage> for SortPipeline<'a> {
    type Error = PixelSliceError;

    fn try_from(image: &'a RgbaImage) -> Result<Self, Self::Error> {
        Ok(Self::new_unchecked(
            image.try_into()?,
            image.width(),
            image.height(),
        ))
    }
}

impl<'a> SortPipeline<'a> {
    /// Runs the clustering step and returns the clusters.
    #[must_use]
    pub fn clusters(&self) -> ClusterSet {
        let error_range = self.effective_error_range();
        let clusters = first_fit(self.pixels, error_range);
        debug!(
            "clustered {} pixels into {} clusters with error range {error_range}",
            clusters.num_pixels(),
            clusters.len(),
        );
        clusters
    }

    /// Runs the pipeline and returns the reordered pixels as a flat, row-major sequence.
    #[must_use]
    pub fn sorted_pixels(&self) -> Vec<Pixel> {
        flatten(self.clusters())
    }

    /// Runs the pipeline and returns the reordered pixels as a grid
    /// with the same dimensions as the input.
    pub fn sorted_grid(&self) -> PixelGrid {
        let (width, height) = self.dimensions;

        #[allow(clippy::expect_used)]
        {
            // clustering is a partition, so the output has width * height pixels
            reshape(self.sorted_pixels(), width, height).expect("one pixel per grid cell")
        }
    }
}

#[cfg(feature = "image")]
impl<'a> SortPipeline<'a> {
    /// Runs the pipeline and returns the sorted image.
    #[must_use]
    pub fn sorted_rgbaimage(&self) -> RgbaImage {
        self.sorted_grid().into_rgbaimage()
    }
}
