use {
    crate::{DoublePlusOne, Error, GrowthPolicy, IntoIter, RawBuf, Result, SeqIter},
    std::{
        alloc::handle_alloc_error,
        fmt::{self, Formatter},
        marker::PhantomData,
        mem::{self, ManuallyDrop},
        ops::{Index, IndexMut},
        ptr, slice,
    },
};

/// Contiguous growable array.
///
/// Slots `0..len` hold live elements, slots `len..capacity` are allocated but
/// never readable. When a full array needs one more slot, the capacity moves
/// to `G::grow(capacity)` (`2c + 1` by default).
///
/// ```
/// use platform_vec::GrowableArray;
///
/// let mut array = GrowableArray::new();
/// for i in 1..=4 {
///     array.push_back(i)?;
/// }
/// assert_eq!(array.as_slice(), [1, 2, 3, 4]);
/// assert_eq!(array.capacity(), 7);
///
/// assert_eq!(array.erase(0)?, 1);
/// assert_eq!(array.pop_back()?, 4);
/// array.push_back(5)?;
/// assert_eq!(array.as_slice(), [2, 3, 5]);
/// assert_eq!(array.capacity(), 7);
/// # Ok::<(), platform_vec::Error>(())
/// ```
pub struct GrowableArray<T, G = DoublePlusOne> {
    buf: RawBuf<T>,
    len: usize,
    _policy: PhantomData<fn() -> G>,
}

impl<T> GrowableArray<T> {
    /// Constructs an empty array without allocation.
    pub const fn new() -> Self {
        Self::with_policy()
    }
}

impl<T, G: GrowthPolicy> GrowableArray<T, G> {
    /// Constructs an empty array growing by `G`.
    pub const fn with_policy() -> Self {
        Self { buf: RawBuf::dangling(), len: 0, _policy: PhantomData }
    }

    /// Constructs an empty array with exactly `cap` allocated slots.
    pub fn with_capacity(cap: usize) -> Result<Self> {
        Ok(Self { buf: RawBuf::allocate(cap)?, len: 0, _policy: PhantomData })
    }

    /// Constructs an array of `len` default values, `len == capacity`.
    pub fn with_len(len: usize) -> Result<Self>
    where
        T: Default,
    {
        let mut array = Self::with_capacity(len)?;
        array.fill_to(len, T::default);
        Ok(array)
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn capacity(&self) -> usize {
        self.buf.cap()
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Largest capacity the array could ever request.
    pub const fn max_size() -> usize {
        match mem::size_of::<T>() {
            0 => usize::MAX,
            size => isize::MAX as usize / size,
        }
    }

    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `0..len` is initialized
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: `0..len` is initialized
        unsafe { slice::from_raw_parts_mut(self.buf.as_ptr(), self.len) }
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `index >= len`
    pub fn at(&self, index: usize) -> Result<&T> {
        let len = self.len;
        self.get(index).ok_or(Error::OutOfRange { index, len })
    }

    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `index >= len`
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len;
        self.get_mut(index).ok_or(Error::OutOfRange { index, len })
    }

    pub fn front(&self) -> Result<&T> {
        self.as_slice().first().ok_or(Error::EmptyContainer)
    }

    pub fn front_mut(&mut self) -> Result<&mut T> {
        self.as_mut_slice().first_mut().ok_or(Error::EmptyContainer)
    }

    pub fn back(&self) -> Result<&T> {
        self.as_slice().last().ok_or(Error::EmptyContainer)
    }

    pub fn back_mut(&mut self) -> Result<&mut T> {
        self.as_mut_slice().last_mut().ok_or(Error::EmptyContainer)
    }

    /// Cursor at the first live element.
    pub fn begin(&self) -> SeqIter<'_, T> {
        SeqIter::new(self.as_slice(), 0)
    }

    /// Cursor one past the last live element.
    pub fn end(&self) -> SeqIter<'_, T> {
        SeqIter::new(self.as_slice(), self.len)
    }

    pub fn iter(&self) -> SeqIter<'_, T> {
        self.begin()
    }

    /// Replaces the contents with `n` clones of `value`, `len == capacity == n`.
    pub fn assign(&mut self, n: usize, value: T) -> Result<()>
    where
        T: Clone,
    {
        self.assign_with(n, || value.clone())
    }

    /// [`assign`](Self::assign) with default values.
    pub fn assign_default(&mut self, n: usize) -> Result<()>
    where
        T: Default,
    {
        self.assign_with(n, T::default)
    }

    pub fn assign_with(&mut self, n: usize, f: impl FnMut() -> T) -> Result<()> {
        // old contents survive a failed allocation
        let fresh = RawBuf::allocate(n)?;
        self.clear();
        self.adopt(fresh);
        self.fill_to(n, f);
        Ok(())
    }

    /// Copy-assignment: `self` becomes an independent copy of `source`.
    pub fn assign_copy(&mut self, source: &Self) -> Result<&mut Self>
    where
        T: Clone,
    {
        *self = source.try_clone()?;
        Ok(self)
    }

    /// Move-assignment: `self` takes the storage of `source`, `source` is left empty.
    pub fn assign_move(&mut self, source: &mut Self) -> &mut Self {
        *self = source.take();
        self
    }

    /// Moves the contents out, leaving `self` empty without storage.
    #[must_use]
    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::with_policy())
    }

    /// Deep copy with the same capacity.
    pub fn try_clone(&self) -> Result<Self>
    where
        T: Clone,
    {
        let mut copy = Self::with_capacity(self.capacity())?;
        for item in self.as_slice() {
            // SAFETY: `copy.len < self.len <= copy.capacity`
            unsafe { copy.push_unchecked(item.clone()) };
        }
        Ok(copy)
    }

    /// Drops live elements, the capacity is kept.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }
        // SAFETY: `len < self.len`, so the tail is inside the live range
        let tail =
            ptr::slice_from_raw_parts_mut(unsafe { self.buf.as_ptr().add(len) }, self.len - len);
        // shorten first: a panicking `Drop` must not see the tail as live
        self.len = len;
        // SAFETY: the tail is initialized and no longer reachable
        unsafe { ptr::drop_in_place(tail) }
    }

    pub fn reverse(&mut self) {
        let items = self.as_mut_slice();
        let Some(mut right) = items.len().checked_sub(1) else {
            return;
        };
        let mut left = 0;
        while left < right {
            items.swap(left, right);
            left += 1;
            right -= 1;
        }
    }

    /// Reallocates to exactly `len` slots.
    pub fn shrink_to_fit(&mut self) -> Result<()> {
        if self.capacity() != self.len {
            self.realloc(self.len)?;
        }
        Ok(())
    }

    /// Sets `len` to `n`, new slots are [`Default`].
    ///
    /// Past the capacity, the array grows to `max(G::grow(capacity), n)`.
    pub fn resize(&mut self, n: usize) -> Result<()>
    where
        T: Default,
    {
        self.resize_with(n, T::default)
    }

    pub fn resize_with(&mut self, n: usize, f: impl FnMut() -> T) -> Result<()> {
        if n > self.capacity() {
            let cap = self.grown(n)?;
            self.realloc(cap)?;
        }
        if n <= self.len {
            self.truncate(n);
        } else {
            self.fill_to(n, f);
        }
        Ok(())
    }

    /// Inserts `value` at `index`, shifting `index..len` to the right.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `index > len`, `value` is dropped
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        let len = self.len;
        if index > len {
            return Err(Error::OutOfRange { index, len });
        }
        self.reserve_one()?;

        // SAFETY: `len < capacity`, so `index..=len` are allocated slots
        unsafe {
            let place = self.buf.as_ptr().add(index);
            ptr::copy(place, place.add(1), len - index);
            place.write(value);
        }
        self.len += 1;
        Ok(())
    }

    /// Removes the element at `index`, shifting `index + 1..len` to the left.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `index >= len`
    pub fn erase(&mut self, index: usize) -> Result<T> {
        let len = self.len;
        if index >= len {
            return Err(Error::OutOfRange { index, len });
        }

        // SAFETY: `index < len`, the removed slot is overwritten by the shift
        unsafe {
            let place = self.buf.as_ptr().add(index);
            let value = place.read();
            ptr::copy(place.add(1), place, len - index - 1);
            self.len -= 1;
            Ok(value)
        }
    }

    pub fn push_back(&mut self, value: T) -> Result<()> {
        self.reserve_one()?;
        // SAFETY: `reserve_one` leaves at least one free slot
        unsafe { self.push_unchecked(value) };
        Ok(())
    }

    /// # Errors
    ///
    /// [`Error::EmptyContainer`] if there is nothing to remove
    pub fn pop_back(&mut self) -> Result<T> {
        if self.len == 0 {
            return Err(Error::EmptyContainer);
        }
        self.len -= 1;
        // SAFETY: the slot was the last live one and is no longer reachable
        Ok(unsafe { self.buf.as_ptr().add(self.len).read() })
    }

    /// Exchanges storage with `other`, no element is touched.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.buf, &mut other.buf);
        mem::swap(&mut self.len, &mut other.len);
    }

    fn grown(&self, required: usize) -> Result<usize> {
        let cap = G::grow(self.capacity()).ok_or(Error::CapacityOverflow)?;
        Ok(cap.max(required))
    }

    fn reserve_one(&mut self) -> Result<()> {
        if self.len == self.capacity() {
            let required = self.len.checked_add(1).ok_or(Error::CapacityOverflow)?;
            let cap = self.grown(required)?;
            self.realloc(cap)?;
        }
        Ok(())
    }

    /// # Safety
    ///
    /// `len < capacity`
    unsafe fn push_unchecked(&mut self, value: T) {
        debug_assert!(self.len < self.capacity());
        self.buf.as_ptr().add(self.len).write(value);
        self.len += 1;
    }

    fn fill_to(&mut self, len: usize, mut f: impl FnMut() -> T) {
        assert!(len <= self.capacity());
        while self.len < len {
            // SAFETY: checked above
            unsafe { self.push_unchecked(f()) };
        }
    }

    /// Moves the live range into a new buffer of exactly `cap` slots.
    ///
    /// Every capacity change goes through [`adopt`](Self::adopt).
    fn realloc(&mut self, cap: usize) -> Result<()> {
        let fresh = RawBuf::allocate(cap)?;
        self.adopt(fresh);
        Ok(())
    }

    fn adopt(&mut self, fresh: RawBuf<T>) {
        assert!(fresh.cap() >= self.len);
        tracing::trace!(from = self.capacity(), to = fresh.cap(), len = self.len, "reallocate");

        // SAFETY: distinct allocations, both hold at least `len` slots
        unsafe { ptr::copy_nonoverlapping(self.buf.as_ptr(), fresh.as_ptr(), self.len) };
        // elements were moved out, so the old buffer is only deallocated
        self.buf = fresh;
    }
}

/// Panics on errors of the infallible std traits, like `Vec` does.
fn infallible<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(Error::AllocError { layout }) => handle_alloc_error(layout),
        Err(err) => panic!("{err}"),
    }
}

impl<T, G> Drop for GrowableArray<T, G> {
    fn drop(&mut self) {
        let live = ptr::slice_from_raw_parts_mut(self.buf.as_ptr(), self.len);
        // SAFETY: `0..len` is initialized, `RawBuf` releases the memory afterwards
        unsafe { ptr::drop_in_place(live) }
    }
}

impl<T, G: GrowthPolicy> Default for GrowableArray<T, G> {
    fn default() -> Self {
        Self::with_policy()
    }
}

impl<T: Clone, G: GrowthPolicy> Clone for GrowableArray<T, G> {
    fn clone(&self) -> Self {
        infallible(self.try_clone())
    }

    fn clone_from(&mut self, source: &Self) {
        infallible(self.assign_copy(source));
    }
}

impl<T: fmt::Debug, G> fmt::Debug for GrowableArray<T, G> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // SAFETY: `0..len` is initialized
        let live = unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) };
        f.debug_list().entries(live).finish()
    }
}

impl<T: PartialEq, G: GrowthPolicy, H: GrowthPolicy> PartialEq<GrowableArray<T, H>>
    for GrowableArray<T, G>
{
    fn eq(&self, other: &GrowableArray<T, H>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, G: GrowthPolicy> Eq for GrowableArray<T, G> {}

impl<T, G: GrowthPolicy> Index<usize> for GrowableArray<T, G> {
    type Output = T;

    /// # Panics
    ///
    /// Panics with [`Error::OutOfRange`] if `index >= len`
    fn index(&self, index: usize) -> &T {
        match self.at(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T, G: GrowthPolicy> IndexMut<usize> for GrowableArray<T, G> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.at_mut(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T, G: GrowthPolicy> AsRef<[T]> for GrowableArray<T, G> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, G: GrowthPolicy> AsMut<[T]> for GrowableArray<T, G> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, G: GrowthPolicy> Extend<T> for GrowableArray<T, G> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            infallible(self.push_back(item));
        }
    }
}

impl<T, G: GrowthPolicy> FromIterator<T> for GrowableArray<T, G> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::with_policy();
        array.extend(iter);
        array
    }
}

impl<'a, T, G: GrowthPolicy> IntoIterator for &'a GrowableArray<T, G> {
    type Item = &'a T;
    type IntoIter = SeqIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, G> IntoIterator for GrowableArray<T, G> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        // elements now belong to the iterator
        let mut array = ManuallyDrop::new(self);
        let buf = mem::replace(&mut array.buf, RawBuf::dangling());
        IntoIter::new(buf, array.len)
    }
}
