use core::alloc::Layout;
use core::mem;
use core::ptr::{self, NonNull};

use alloc::alloc::{alloc, dealloc};

use crate::error::GrowVecError;

/// Owner of a single heap allocation of `cap` elements.
///
/// Every slot is default-initialized when the allocation is created and stays
/// initialized until the buffer is dropped or released, so the drop path
/// always drops exactly `cap` elements. The buffer has no notion of a logical
/// length and performs no bounds checking against one; that discipline
/// belongs to the owning container.
pub(crate) struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
}

// The buffer is the sole owner of its allocation, so sending it to another
// thread moves the elements with it. Concurrent mutation stays excluded by
// the usual borrow rules.
unsafe impl<T: Send> Send for RawBuf<T> {}
unsafe impl<T: Sync> Sync for RawBuf<T> {}

/// Drops the initialized prefix and frees the allocation if element
/// construction panics while a new buffer is being filled.
struct InitGuard<T> {
    ptr: NonNull<T>,
    initialized: usize,
    layout: Layout,
}

impl<T> Drop for InitGuard<T> {
    fn drop(&mut self) {
        // Safety: exactly `initialized` leading slots hold live values, and
        // `layout` is the layout the allocation was created with.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.ptr.as_ptr(),
                self.initialized,
            ));
            if self.layout.size() != 0 {
                dealloc(self.ptr.as_ptr().cast(), self.layout);
            }
        }
    }
}

impl<T> RawBuf<T> {
    /// Creates a buffer that owns no allocation.
    pub(crate) const fn empty() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
        }
    }

    /// Allocates room for exactly `n` elements, default-initializing each slot.
    ///
    /// `n == 0` and zero-sized element types own no memory; the pointer stays
    /// dangling but well-aligned.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::CapacityOverflow` if no memory layout exists for
    /// `n` elements, and `GrowVecError::AllocationFailed` if the allocator
    /// cannot provide one.
    pub(crate) fn allocate(n: usize) -> Result<Self, GrowVecError>
    where
        T: Default,
    {
        if n == 0 {
            return Ok(Self::empty());
        }

        let layout = Layout::array::<T>(n)
            .map_err(|_| GrowVecError::CapacityOverflow { elements: n })?;

        let ptr = if layout.size() == 0 {
            NonNull::dangling()
        } else {
            // Safety: the layout has non-zero size.
            let raw = unsafe { alloc(layout) };
            NonNull::new(raw.cast::<T>()).ok_or(GrowVecError::AllocationFailed {
                elements: n,
                bytes: layout.size(),
            })?
        };

        let mut guard = InitGuard {
            ptr,
            initialized: 0,
            layout,
        };
        for i in 0..n {
            // Safety: slot `i` is within the allocation and not yet initialized.
            unsafe { ptr.as_ptr().add(i).write(T::default()) };
            guard.initialized = i + 1;
        }
        mem::forget(guard);

        Ok(Self { ptr, cap: n })
    }

    #[must_use]
    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    /// Full-capacity view over all allocated slots, including those beyond
    /// the owner's logical length.
    #[must_use]
    pub(crate) fn as_slice(&self) -> &[T] {
        // Safety: all `cap` slots are initialized (allocate postcondition).
        unsafe { core::slice::from_raw_parts(self.ptr.as_ptr(), self.cap) }
    }

    #[must_use]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        // Safety: all `cap` slots are initialized and we hold `&mut self`.
        unsafe { core::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.cap) }
    }

    /// Exchanges the two buffers' allocations without moving any element.
    pub(crate) fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.ptr, &mut other.ptr);
        mem::swap(&mut self.cap, &mut other.cap);
    }

    /// Hands the allocation out without freeing it, leaving this buffer empty.
    ///
    /// Returns `None` for a buffer that owns nothing. The caller takes over
    /// dropping the `cap` initialized elements and freeing the memory.
    pub(crate) fn release(&mut self) -> Option<(NonNull<T>, usize)> {
        if self.cap == 0 {
            return None;
        }
        let ptr = mem::replace(&mut self.ptr, NonNull::dangling());
        let cap = mem::replace(&mut self.cap, 0);
        Some((ptr, cap))
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        let Some((ptr, cap)) = self.release() else {
            return;
        };
        // Safety: release() yields a live allocation of `cap` initialized
        // slots, created with the array layout recomputed here.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(ptr.as_ptr(), cap));
            if let Ok(layout) = Layout::array::<T>(cap) {
                if layout.size() != 0 {
                    dealloc(ptr.as_ptr().cast(), layout);
                }
            }
        }
    }
}
