use {
    crate::{Error, Result},
    allocator_api2::alloc::{Allocator, Global},
    std::{
        alloc::Layout,
        fmt::{self, Formatter},
        marker::PhantomData,
        mem,
        ptr::NonNull,
    },
};

/// Single owned block of `cap` slots.
///
/// `RawBuf` knows nothing about which slots are initialized: it never reads,
/// writes or drops elements, it only allocates and releases the memory.
pub struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
    // for dropck: the owner of `RawBuf` owns `T`
    _marker: PhantomData<T>,
}

impl<T> RawBuf<T> {
    pub const fn dangling() -> Self {
        Self { ptr: NonNull::dangling(), cap: 0, _marker: PhantomData }
    }

    /// Allocates uninitialized memory for exactly `cap` elements.
    ///
    /// # Errors
    ///
    /// [`Error::CapacityOverflow`] if `cap` elements do not fit into `isize::MAX` bytes,
    /// [`Error::AllocError`] if the allocator refuses the request
    pub fn allocate(cap: usize) -> Result<Self> {
        if cap == 0 {
            return Ok(Self::dangling());
        }

        let layout = Layout::array::<T>(cap)?;
        if layout.size() == 0 {
            // zero-sized `T` never touches the allocator
            return Ok(Self { ptr: NonNull::dangling(), cap, _marker: PhantomData });
        }

        let ptr = Global.allocate(layout).map_err(|_| Error::AllocError { layout })?;
        tracing::trace!(cap, bytes = layout.size(), "allocated buffer");

        Ok(Self { ptr: ptr.cast(), cap, _marker: PhantomData })
    }

    pub const fn cap(&self) -> usize {
        self.cap
    }

    pub const fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    fn current_memory(&self) -> Option<(NonNull<u8>, Layout)> {
        if self.cap == 0 || mem::size_of::<T>() == 0 {
            None
        } else {
            // SAFETY: we would use `Layout::array`, but memory is allocated yet
            // and it's size+align is always valid (because we already alloc it by `Layout::array`)
            unsafe {
                let layout = Layout::from_size_align_unchecked(
                    mem::size_of::<T>() * self.cap,
                    mem::align_of::<T>(),
                );
                Some((self.ptr.cast(), layout))
            }
        }
    }
}

impl<T> fmt::Debug for RawBuf<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}..{})", self.ptr, self.cap)
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        if let Some((ptr, layout)) = self.current_memory() {
            // SAFETY: `ptr` was allocated by `Global` with exactly this `layout`
            unsafe { Global.deallocate(ptr, layout) }
        }
    }
}

unsafe impl<T: Sync> Sync for RawBuf<T> {}
unsafe impl<T: Send> Send for RawBuf<T> {}
