//! Contains the [`Cluster`] and [`ClusterSet`] types produced by [`first_fit`](crate::first_fit),
//! alongside the acceptance windows used to match pixels against a cluster.

use crate::{ErrorRange, Pixel};
use std::{ops::RangeInclusive, slice, vec};

/// The inclusive range of values a single color channel may take
/// to be accepted by a representative channel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChannelWindow {
    /// The smallest accepted value.
    pub min: u8,
    /// The largest accepted value.
    pub max: u8,
}

impl ChannelWindow {
    /// Creates the window centered on `value` that spans `error_range` in both directions,
    /// clamped to `0..=255`.
    #[must_use]
    pub const fn new(value: u8, error_range: ErrorRange) -> Self {
        let e = error_range.into_inner();
        Self {
            min: value.saturating_sub(e),
            max: value.saturating_add(e),
        }
    }

    /// Returns whether `value` falls inside the window.
    #[must_use]
    #[inline]
    pub const fn contains(&self, value: u8) -> bool {
        self.min <= value && value <= self.max
    }
}

impl From<ChannelWindow> for RangeInclusive<u8> {
    fn from(window: ChannelWindow) -> Self {
        window.min..=window.max
    }
}

/// The red, green, and blue [`ChannelWindow`]s of a cluster's representative color.
///
/// The alpha channel has no window, so it never affects whether a pixel is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AcceptanceWindow {
    /// The window for the red channel.
    pub red: ChannelWindow,
    /// The window for the green channel.
    pub green: ChannelWindow,
    /// The window for the blue channel.
    pub blue: ChannelWindow,
}

impl AcceptanceWindow {
    /// Creates the acceptance window around `representative`.
    ///
    /// # Examples
    /// ```
    /// # use pixsort::{AcceptanceWindow, ErrorRange};
    /// # use palette::Srgba;
    /// let window = AcceptanceWindow::new(Srgba::new(0, 128, 255, 255), ErrorRange::new(5));
    /// assert_eq!((window.red.min, window.red.max), (0, 5));
    /// assert_eq!((window.green.min, window.green.max), (123, 133));
    /// assert_eq!((window.blue.min, window.blue.max), (250, 255));
    /// ```
    #[must_use]
    pub fn new(representative: Pixel, error_range: ErrorRange) -> Self {
        Self {
            red: ChannelWindow::new(representative.red, error_range),
            green: ChannelWindow::new(representative.green, error_range),
            blue: ChannelWindow::new(representative.blue, error_range),
        }
    }

    /// Returns whether the red, green, and blue channels of `pixel` all fall inside the window.
    #[must_use]
    #[inline]
    pub fn accepts(&self, pixel: Pixel) -> bool {
        self.red.contains(pixel.red)
            && self.green.contains(pixel.green)
            && self.blue.contains(pixel.blue)
    }
}

/// An ordered group of pixels that share one fixed representative color.
///
/// The representative is the pixel that created the cluster,
/// so it is always the first member and a [`Cluster`] is never empty.
/// Members are kept in the order in which they joined.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    /// The acceptance window of the representative, computed once on creation.
    window: AcceptanceWindow,
    /// The pixels in this cluster, starting with the representative.
    members: Vec<Pixel>,
}

impl Cluster {
    /// Creates a new [`Cluster`] with `representative` as its first and only member.
    #[must_use]
    pub fn new(representative: Pixel, error_range: ErrorRange) -> Self {
        Self {
            window: AcceptanceWindow::new(representative, error_range),
            members: vec![representative],
        }
    }

    /// Returns the color that all other members were matched against.
    #[must_use]
    pub fn representative(&self) -> Pixel {
        self.members[0]
    }

    /// Returns the acceptance window of the representative.
    #[must_use]
    pub fn window(&self) -> &AcceptanceWindow {
        &self.window
    }

    /// Returns whether `pixel` is close enough to the representative to join this cluster.
    #[must_use]
    #[inline]
    pub fn accepts(&self, pixel: Pixel) -> bool {
        self.window.accepts(pixel)
    }

    /// Appends `pixel` to the end of this cluster.
    ///
    /// This does not check whether the pixel is accepted by the cluster.
    pub(crate) fn push(&mut self, pixel: Pixel) {
        self.members.push(pixel);
    }

    /// Returns the members of this cluster in the order they were added.
    #[must_use]
    pub fn members(&self) -> &[Pixel] {
        &self.members
    }

    /// Returns the number of members in this cluster.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Consumes the cluster and returns its members.
    #[must_use]
    pub fn into_members(self) -> Vec<Pixel> {
        self.members
    }
}

/// The clusters produced by a single clustering pass, in the order they were created.
///
/// Every input pixel belongs to exactly one cluster.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClusterSet {
    /// The clusters, ordered by creation.
    clusters: Vec<Cluster>,
    /// The total number of pixels across all clusters.
    num_pixels: usize,
}

impl ClusterSet {
    /// Creates an empty [`ClusterSet`].
    #[must_use]
    pub const fn new() -> Self {
        Self { clusters: Vec::new(), num_pixels: 0 }
    }

    /// Appends a new cluster with `representative` as its first member
    /// and returns its index.
    pub(crate) fn create(&mut self, representative: Pixel, error_range: ErrorRange) -> usize {
        self.clusters.push(Cluster::new(representative, error_range));
        self.num_pixels += 1;
        self.clusters.len() - 1
    }

    /// Appends `pixel` to the cluster at index `cluster`.
    pub(crate) fn push(&mut self, cluster: usize, pixel: Pixel) {
        self.clusters[cluster].push(pixel);
        self.num_pixels += 1;
    }

    /// Returns the index of the first cluster, in creation order, that accepts `pixel`.
    #[must_use]
    pub fn first_accepting(&self, pixel: Pixel) -> Option<usize> {
        self.clusters.iter().position(|cluster| cluster.accepts(pixel))
    }

    /// Returns the number of clusters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    /// Returns whether there are no clusters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Returns the total number of pixels across all clusters.
    #[must_use]
    pub fn num_pixels(&self) -> usize {
        self.num_pixels
    }

    /// Returns the cluster at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Cluster> {
        self.clusters.get(index)
    }

    /// Returns an iterator over the clusters in creation order.
    pub fn iter(&self) -> slice::Iter<'_, Cluster> {
        self.clusters.iter()
    }

    /// Returns the representative color of each cluster in creation order.
    #[must_use]
    pub fn representatives(&self) -> Vec<Pixel> {
        self.clusters.iter().map(Cluster::representative).collect()
    }

    /// Returns the number of members in each cluster in creation order.
    #[must_use]
    pub fn counts(&self) -> Vec<usize> {
        self.clusters.iter().map(Cluster::len).collect()
    }
}

impl AsRef<[Cluster]> for ClusterSet {
    fn as_ref(&self) -> &[Cluster] {
        &self.clusters
    }
}

impl<'a> IntoIterator for &'a ClusterSet {
    type Item = &'a Cluster;
    type IntoIter = slice::Iter<'a, Cluster>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for ClusterSet {
    type Item = Cluster;
    type IntoIter = vec::IntoIter<Cluster>;

    fn into_iter(self) -> Self::IntoIter {
        self.clusters.into_iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use palette::Srgba;

    #[test]
    fn window_clamps_at_zero() {
        let window = ChannelWindow::new(0, ErrorRange::new(5));
        assert_eq!(window, ChannelWindow { min: 0, max: 5 });
        assert!(window.contains(0));
        assert!(window.contains(5));
        assert!(!window.contains(6));
        assert!(!window.contains(255));
    }

    #[test]
    fn window_clamps_at_max() {
        let window = ChannelWindow::new(255, ErrorRange::new(5));
        assert_eq!(window, ChannelWindow { min: 250, max: 255 });
        assert!(window.contains(255));
        assert!(window.contains(250));
        assert!(!window.contains(249));
        assert!(!window.contains(0));
    }

    #[test]
    fn window_bounds_match_saturating_formula() {
        for c in 0..=u8::MAX {
            for e in [0, 1, 5, 15, 127, 128, 254, 255] {
                let window = ChannelWindow::new(c, ErrorRange::new(e));
                let min = i32::from(c) - i32::from(e);
                let max = i32::from(c) + i32::from(e);
                for v in 0..=u8::MAX {
                    let expected = min.max(0) <= i32::from(v) && i32::from(v) <= max.min(255);
                    assert_eq!(window.contains(v), expected, "c={c} e={e} v={v}");
                }
            }
        }
    }

    #[test]
    fn zero_range_window_is_a_single_value() {
        let window = ChannelWindow::new(42, ErrorRange::EXACT);
        assert_eq!(RangeInclusive::from(window), 42..=42);
    }

    #[test]
    fn max_range_window_spans_everything() {
        for c in [0, 1, 128, 254, 255] {
            let window = ChannelWindow::new(c, ErrorRange::MAX);
            assert_eq!(RangeInclusive::from(window), 0..=255);
        }
    }

    #[test]
    fn alpha_is_ignored_for_acceptance() {
        let cluster = Cluster::new(Srgba::new(10, 20, 30, 255), ErrorRange::EXACT);
        assert!(cluster.accepts(Srgba::new(10, 20, 30, 0)));
        assert!(!cluster.accepts(Srgba::new(10, 20, 31, 255)));
    }

    #[test]
    fn cluster_representative_is_first_member() {
        let rep = Srgba::new(10, 10, 10, 255);
        let mut cluster = Cluster::new(rep, ErrorRange::new(5));
        cluster.push(Srgba::new(12, 12, 12, 255));
        cluster.push(Srgba::new(8, 9, 10, 0));

        assert_eq!(cluster.representative(), rep);
        assert_eq!(cluster.members()[0], rep);
        assert_eq!(cluster.len(), 3);
        assert_eq!(
            cluster.into_members(),
            vec![rep, Srgba::new(12, 12, 12, 255), Srgba::new(8, 9, 10, 0)]
        );
    }

    #[test]
    fn cluster_set_tracks_pixels_and_order() {
        let e = ErrorRange::new(5);
        let mut set = ClusterSet::new();
        assert!(set.is_empty());
        assert_eq!(set.first_accepting(Srgba::new(0, 0, 0, 0)), None);

        let a = set.create(Srgba::new(10, 10, 10, 255), e);
        let b = set.create(Srgba::new(250, 250, 250, 255), e);
        set.push(a, Srgba::new(12, 12, 12, 255));

        assert_eq!((a, b), (0, 1));
        assert_eq!(set.len(), 2);
        assert_eq!(set.num_pixels(), 3);
        assert_eq!(set.counts(), vec![2, 1]);
        assert_eq!(
            set.representatives(),
            vec![Srgba::new(10, 10, 10, 255), Srgba::new(250, 250, 250, 255)]
        );
        assert_eq!(set.first_accepting(Srgba::new(14, 6, 15, 0)), Some(0));
        assert_eq!(set.first_accepting(Srgba::new(245, 255, 250, 0)), Some(1));
        assert_eq!(set.first_accepting(Srgba::new(128, 128, 128, 255)), None);
        assert_eq!(set.get(1).unwrap().members(), &[Srgba::new(250, 250, 250, 255)]);
        assert!(set.get(2).is_none());
    }

    #[test]
    fn first_accepting_prefers_earliest_cluster() {
        let e = ErrorRange::new(10);
        let mut set = ClusterSet::new();
        set.create(Srgba::new(100, 100, 100, 255), e);
        set.create(Srgba::new(108, 108, 108, 255), e);

        // 108 is an exact match for the second cluster but still inside the first window
        assert_eq!(set.first_accepting(Srgba::new(108, 108, 108, 255)), Some(0));
        assert_eq!(set.first_accepting(Srgba::new(115, 115, 115, 255)), Some(1));
    }
}
