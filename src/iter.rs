use {
    crate::RawBuf,
    std::{
        fmt::{self, Formatter},
        iter::FusedIterator,
        ptr, slice,
    },
};

/// Forward cursor over the live range of a [`GrowableArray`].
///
/// Produced by [`begin`], [`end`] and [`iter`]. The cursor borrows the array,
/// so any operation that may move or resize the storage cannot run while
/// the cursor is alive.
///
/// ```
/// use platform_vec::GrowableArray;
///
/// let array: GrowableArray<u64> = [1, 2, 3].into_iter().collect();
///
/// let (mut it, end) = (array.begin(), array.end());
/// let mut seen = Vec::new();
/// while it != end {
///     seen.push(*it.get().unwrap());
///     it.advance();
/// }
/// assert_eq!(seen, [1, 2, 3]);
/// ```
///
/// [`GrowableArray`]: crate::GrowableArray
/// [`begin`]: crate::GrowableArray::begin
/// [`end`]: crate::GrowableArray::end
/// [`iter`]: crate::GrowableArray::iter
pub struct SeqIter<'a, T> {
    items: &'a [T],
    pos: usize,
}

impl<'a, T> SeqIter<'a, T> {
    pub(crate) const fn new(items: &'a [T], pos: usize) -> Self {
        Self { items, pos }
    }

    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Element under the cursor, `None` at the end position.
    pub fn get(&self) -> Option<&'a T> {
        self.items.get(self.pos)
    }

    /// # Panics
    ///
    /// Panics if the cursor already stands at the end position
    pub fn advance(&mut self) {
        assert!(self.pos < self.items.len(), "advance past the end of sequence");
        self.pos += 1;
    }
}

impl<T> Clone for SeqIter<'_, T> {
    fn clone(&self) -> Self {
        Self { items: self.items, pos: self.pos }
    }
}

// compares storage identity, not element values
impl<T> PartialEq for SeqIter<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.items, other.items) && self.pos == other.pos
    }
}

impl<T> Eq for SeqIter<'_, T> {}

impl<T> fmt::Debug for SeqIter<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeqIter")
            .field("ptr", &self.items.as_ptr())
            .field("pos", &self.pos)
            .field("len", &self.items.len())
            .finish()
    }
}

impl<'a, T> Iterator for SeqIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.items.get(self.pos)?;
        self.pos += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.items.len() - self.pos;
        (rest, Some(rest))
    }
}

impl<T> ExactSizeIterator for SeqIter<'_, T> {}
impl<T> FusedIterator for SeqIter<'_, T> {}

/// Owning iterator that moves elements out of a [`GrowableArray`].
///
/// [`GrowableArray`]: crate::GrowableArray
pub struct IntoIter<T> {
    buf: RawBuf<T>,
    // live elements are `front..back`
    front: usize,
    back: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(buf: RawBuf<T>, len: usize) -> Self {
        Self { buf, front: 0, back: len }
    }

    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `front..back` are initialized and not yet yielded
        unsafe { slice::from_raw_parts(self.buf.as_ptr().add(self.front), self.back - self.front) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        // SAFETY: slot is initialized and it will never be read again
        let item = unsafe { self.buf.as_ptr().add(self.front).read() };
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.back - self.front;
        (rest, Some(rest))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        // SAFETY: slot is initialized and it will never be read again
        Some(unsafe { self.buf.as_ptr().add(self.back).read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let rest = ptr::slice_from_raw_parts_mut(
            // SAFETY: `front <= back <= cap`
            unsafe { self.buf.as_ptr().add(self.front) },
            self.back - self.front,
        );
        self.front = self.back;
        // SAFETY: not yielded elements are still owned by the iterator,
        // `RawBuf` releases the memory afterwards
        unsafe { ptr::drop_in_place(rest) }
    }
}
