//! Two-dimensional buffers.

use alloc::vec::Vec;
use core::fmt::{self, Debug, Formatter};
use core::ops::{Index, IndexMut};

/// A rectangular 2D buffer that owns its elements, backed by a `Vec`.
///
/// `Buf2` stores its elements contiguously, in standard row-major order,
/// such that element (x, y) maps to element at index
/// ```text
/// buf.width() * y + x
/// ```
/// in the backing vector.
///
/// # Examples
/// ```
/// # use stipple_core::util::buf::Buf2;
/// // Elements initialized with `Default::default()`
/// let mut buf = Buf2::new_default(4, 4);
/// // Indexing with an usize i yields row with index i as a slice,
/// // so elements are indexed row first, column second:
/// buf[1][2] = 123;
/// assert_eq!(&buf[1], &[0, 0, 123, 0]);
/// assert_eq!(buf.get(2, 1), Some(&123));
/// ```
#[derive(Clone, Eq, PartialEq)]
pub struct Buf2<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T> Buf2<T> {
    /// Returns a buffer with size `w` × `h`, with elements initialized
    /// with values from `init` in row-major order.
    ///
    /// # Panics
    /// If there are fewer than `w * h` elements in `init`.
    pub fn new<I>(w: usize, h: usize, init: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let data: Vec<_> = init.into_iter().take(w * h).collect();
        assert_eq!(data.len(), w * h, "not enough elements");
        Self { width: w, height: h, data }
    }
    /// Returns a buffer with size `w` × `h`, with every element
    /// initialized by calling `T::default()`.
    pub fn new_default(w: usize, h: usize) -> Self
    where
        T: Clone + Default,
    {
        Self::new(w, h, core::iter::repeat(T::default()))
    }
    /// Returns a buffer with size `w` × `h`, with every element
    /// initialized by calling `init_fn(x, y)` where x is the column index
    /// and y the row index of the element being initialized.
    pub fn new_with<F>(w: usize, h: usize, mut init_fn: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut data = Vec::with_capacity(w * h);
        for y in 0..h {
            for x in 0..w {
                data.push(init_fn(x, y));
            }
        }
        Self { width: w, height: h, data }
    }

    /// Returns the width of `self`.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }
    /// Returns the height of `self`.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }
    /// Returns the backing data of `self` in row-major order.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }
    /// Returns a reference to the element at column `x`, row `y`,
    /// or `None` if out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        (x < self.width && y < self.height)
            .then(|| &self.data[y * self.width + x])
    }
    /// Returns an iterator over the rows of `self`.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.data.chunks_exact(self.width.max(1))
    }
    /// Returns a mutable iterator over the rows of `self`.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [T]> {
        self.data.chunks_exact_mut(self.width.max(1))
    }
}

impl<T> Index<usize> for Buf2<T> {
    type Output = [T];

    /// Returns the row with index `i`.
    #[inline]
    fn index(&self, i: usize) -> &[T] {
        let w = self.width;
        &self.data[i * w..][..w]
    }
}

impl<T> IndexMut<usize> for Buf2<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut [T] {
        let w = self.width;
        &mut self.data[i * w..][..w]
    }
}

impl<T> Debug for Buf2<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buf2")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}
