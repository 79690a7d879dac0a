//! Contains various types needed across the crate.

use crate::MAX_PIXELS;
use palette::Srgba;
use std::{
    error::Error,
    fmt::{Debug, Display},
    ops::Deref,
};
#[cfg(feature = "image")]
use {image::RgbaImage, palette::cast::ComponentsAs};

/// An 8-bit sRGB color with an alpha channel.
///
/// Only the red, green, and blue channels are considered when clustering.
/// The alpha channel is carried along untouched.
pub type Pixel = Srgba<u8>;

/// An error type for when the length of an input (e.g., `Vec` or slice)
/// is above the maximum supported value.
///
/// The inner value is the maximum supported value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AboveMaxLen<T>(pub T);

impl<T: Display> Display for AboveMaxLen<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "above the maximum length of {}", self.0)
    }
}

impl<T: Debug + Display> Error for AboveMaxLen<T> {}

/// An error type for when an input has no pixels at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmptyInput;

impl Display for EmptyInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "the input contains no pixels")
    }
}

impl Error for EmptyInput {}

/// The reasons a slice of pixels can fail to become a [`PixelSlice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelSliceError {
    /// The slice was empty.
    Empty(EmptyInput),
    /// The slice was longer than [`MAX_PIXELS`].
    TooLong(AboveMaxLen<u32>),
}

impl Display for PixelSliceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PixelSliceError::Empty(err) => Display::fmt(err, f),
            PixelSliceError::TooLong(err) => Display::fmt(err, f),
        }
    }
}

impl Error for PixelSliceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PixelSliceError::Empty(err) => Some(err),
            PixelSliceError::TooLong(err) => Some(err),
        }
    }
}

impl From<EmptyInput> for PixelSliceError {
    fn from(err: EmptyInput) -> Self {
        Self::Empty(err)
    }
}

impl From<AboveMaxLen<u32>> for PixelSliceError {
    fn from(err: AboveMaxLen<u32>) -> Self {
        Self::TooLong(err)
    }
}

/// A simple new type wrapper around `&'a [Pixel]` with the invariant that the inner slice
/// is not empty and its length is not greater than [`MAX_PIXELS`].
///
/// # Examples
/// Use `try_into` to create [`PixelSlice`]s.
///
/// From a raw pixel slice:
/// ```
/// # use pixsort::{PixelSlice, PixelSliceError};
/// # use palette::Srgba;
/// # fn main() -> Result<(), PixelSliceError> {
/// let pixels = vec![Srgba::new(0, 0, 0, 255)];
/// let pixels: PixelSlice = pixels.as_slice().try_into()?;
/// # Ok(())
/// # }
/// ```
///
/// From an image (needs the `image` feature to be enabled):
/// ```no_run
/// # use pixsort::PixelSlice;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let img = image::open("some image")?.into_rgba8();
/// let pixels = PixelSlice::try_from(&img)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, PartialEq)]
#[repr(transparent)]
pub struct PixelSlice<'a>(&'a [Pixel]);

impl<'a> Clone for PixelSlice<'a> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a> Copy for PixelSlice<'a> {}

impl<'a> PixelSlice<'a> {
    /// Returns the length of the slice as a `u32`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn num_pixels(&self) -> u32 {
        self.0.len() as u32
    }

    /// Returns the first pixel of the slice.
    #[must_use]
    pub fn first_pixel(&self) -> Pixel {
        // non-empty by construction
        self.0[0]
    }
}

impl<'a> AsRef<[Pixel]> for PixelSlice<'a> {
    fn as_ref(&self) -> &[Pixel] {
        self
    }
}

impl<'a> Deref for PixelSlice<'a> {
    type Target = [Pixel];

    fn deref(&self) -> &Self::Target {
        self.0
    }
}

impl<'a> From<PixelSlice<'a>> for &'a [Pixel] {
    fn from(val: PixelSlice<'a>) -> Self {
        val.0
    }
}

impl<'a> TryFrom<&'a [Pixel]> for PixelSlice<'a> {
    type Error = PixelSliceError;

    fn try_from(slice: &'a [Pixel]) -> Result<Self, Self::Error> {
        if slice.is_empty() {
            Err(EmptyInput.into())
        } else if slice.len() > MAX_PIXELS as usize {
            Err(AboveMaxLen(MAX_PIXELS).into())
        } else {
            Ok(Self(slice))
        }
    }
}

#[cfg(feature = "image")]
impl<'a> TryFrom<&'a RgbaImage> for PixelSlice<'a> {
    type Error = PixelSliceError;

    fn try_from(image: &'a RgbaImage) -> Result<Self, Self::Error> {
        let pixels = image.pixels().len();
        let buf = &image.as_raw()[..(pixels * 4)];
        let slice: &'a [Pixel] = buf.components_as();
        slice.try_into()
    }
}

/// The per-channel tolerance used to decide whether two colors are similar enough
/// to end up in the same cluster.
///
/// A pixel joins a cluster if each of its red, green, and blue channels is within
/// `error_range` of the corresponding channel of the cluster's representative color.
/// An [`ErrorRange`] of `0` only groups exactly equal colors,
/// while [`ErrorRange::MAX`] puts every pixel into a single cluster.
///
/// # Examples
/// ```
/// # use pixsort::ErrorRange;
/// let range = ErrorRange::new(32);
/// let range: ErrorRange = 32.into();
/// assert_eq!(ErrorRange::default(), ErrorRange::DEFAULT);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ErrorRange(u8);

impl ErrorRange {
    /// An error range of `0`, which only matches exactly equal colors.
    pub const EXACT: Self = Self(0);

    /// The default error range of `15`.
    pub const DEFAULT: Self = Self(15);

    /// The maximum error range, under which every color matches every other color.
    pub const MAX: Self = Self(u8::MAX);

    /// Creates a new [`ErrorRange`] from the given `u8`.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Gets the inner `u8` value.
    #[must_use]
    pub const fn into_inner(self) -> u8 {
        self.0
    }

    /// Returns whether this is an error range of `0`.
    #[must_use]
    pub const fn is_exact(self) -> bool {
        self.0 == 0
    }
}

impl Default for ErrorRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u8> for ErrorRange {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<ErrorRange> for u8 {
    fn from(val: ErrorRange) -> Self {
        val.into_inner()
    }
}

impl Display for ErrorRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_slice_is_rejected() {
        let pixels: &[Pixel] = &[];
        assert_eq!(
            PixelSlice::try_from(pixels),
            Err(PixelSliceError::Empty(EmptyInput))
        );
    }

    #[test]
    fn non_empty_slice_is_accepted() {
        let pixels = [Srgba::new(1, 2, 3, 4), Srgba::new(5, 6, 7, 8)];
        let slice = PixelSlice::try_from(pixels.as_slice()).unwrap();
        assert_eq!(slice.num_pixels(), 2);
        assert_eq!(slice.first_pixel(), pixels[0]);
        assert_eq!(&*slice, pixels.as_slice());
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            PixelSliceError::from(EmptyInput).to_string(),
            "the input contains no pixels"
        );
        assert_eq!(
            PixelSliceError::from(AboveMaxLen(MAX_PIXELS)).to_string(),
            format!("above the maximum length of {MAX_PIXELS}")
        );
        assert!(PixelSliceError::from(EmptyInput).source().is_some());
    }

    #[test]
    fn error_range_constants() {
        assert!(ErrorRange::EXACT.is_exact());
        assert!(!ErrorRange::DEFAULT.is_exact());
        assert_eq!(ErrorRange::DEFAULT.into_inner(), 15);
        assert_eq!(u8::from(ErrorRange::MAX), 255);
        assert_eq!(ErrorRange::from(7).to_string(), "7");
    }

    #[cfg(feature = "image")]
    #[test]
    fn slice_from_rgbaimage() {
        let image = RgbaImage::from_raw(2, 1, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        let slice = PixelSlice::try_from(&image).unwrap();
        assert_eq!(&*slice, &[Srgba::new(1, 2, 3, 4), Srgba::new(5, 6, 7, 8)]);

        let empty = RgbaImage::new(0, 0);
        assert_eq!(
            PixelSlice::try_from(&empty),
            Err(PixelSliceError::Empty(EmptyInput))
        );
    }
}
