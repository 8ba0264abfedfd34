use crate::error::Error;
use std::alloc::{alloc, dealloc, Layout};
use std::ptr::NonNull;

struct Block {
    ptr: NonNull<u8>,
    layout: Layout,
    free: bool,
}

/// A block-based arena allocator.
///
/// The arena hands out aligned blocks of raw memory and reclaims them in
/// bulk: [`free`](Arena::free) marks a block reusable by a later
/// [`alloc`](Arena::alloc) of the same or smaller size,
/// [`reset`](Arena::reset) marks every block reusable at once, and dropping
/// the arena returns all memory to the system. Pointers obtained before a
/// [`reset`](Arena::reset) must not be used afterwards.
///
/// Requests are served first-fit from reusable blocks; a miss allocates a
/// fresh block of at least the configured block size, so many small
/// allocations share few system allocations. Accounting
/// ([`used_size`](Arena::used_size), [`total_size`](Arena::total_size)) is
/// in whole blocks.
pub struct Arena {
    blocks: Vec<Block>,
    block_size: usize,
    alignment: usize,
    total_allocated: usize,
    total_used: usize,
}

impl Arena {
    /// Creates an arena handing out blocks of at least `block_size` bytes
    /// aligned to `alignment`.
    ///
    /// The alignment is rounded up to the next power of two. Returns
    /// [`Error::InvalidParameter`] if either argument is zero.
    pub fn new(block_size: usize, alignment: usize) -> Result<Self, Error> {
        if block_size == 0 || alignment == 0 {
            return Err(Error::InvalidParameter.record());
        }
        Ok(Arena {
            blocks: Vec::new(),
            block_size,
            alignment: alignment.next_power_of_two(),
            total_allocated: 0,
            total_used: 0,
        })
    }

    /// Allocates `size` bytes, aligned to the arena's alignment.
    ///
    /// The pointer is valid until it is passed to [`free`](Arena::free),
    /// the arena is [reset](Arena::reset), or the arena is dropped.
    /// Returns [`Error::InvalidParameter`] for a zero `size` and
    /// [`Error::AllocationFailure`] if the system allocator fails.
    pub fn alloc(&mut self, size: usize) -> Result<NonNull<u8>, Error> {
        if size == 0 {
            return Err(Error::InvalidParameter.record());
        }
        let aligned_size = size
            .checked_add(self.alignment - 1)
            .ok_or(Error::InvalidParameter)
            .map_err(Error::record)?
            & !(self.alignment - 1);

        // First fit among reusable blocks.
        for block in &mut self.blocks {
            if block.free && block.layout.size() >= aligned_size {
                block.free = false;
                self.total_used += block.layout.size();
                return Ok(block.ptr);
            }
        }

        let alloc_size = aligned_size.max(self.block_size);
        let layout = Layout::from_size_align(alloc_size, self.alignment)
            .map_err(|_| Error::InvalidParameter.record())?;
        // SAFETY: layout has nonzero size.
        let ptr = unsafe { alloc(layout) };
        let Some(ptr) = NonNull::new(ptr) else {
            return Err(Error::AllocationFailure.record());
        };
        self.blocks.push(Block {
            ptr,
            layout,
            free: false,
        });
        self.total_allocated += alloc_size;
        self.total_used += alloc_size;
        Ok(ptr)
    }

    /// Marks the block starting at `ptr` as reusable.
    ///
    /// Pointers not obtained from [`alloc`](Arena::alloc) on this arena,
    /// and blocks already freed, are ignored.
    pub fn free(&mut self, ptr: NonNull<u8>) {
        for block in &mut self.blocks {
            if block.ptr == ptr {
                if !block.free {
                    block.free = true;
                    self.total_used -= block.layout.size();
                }
                return;
            }
        }
    }

    /// Marks every block as reusable. Pointers previously handed out must
    /// not be used after this call.
    pub fn reset(&mut self) {
        for block in &mut self.blocks {
            block.free = true;
        }
        self.total_used = 0;
    }

    /// The number of bytes currently handed out, in whole blocks.
    pub fn used_size(&self) -> usize {
        self.total_used
    }

    /// The number of bytes obtained from the system allocator.
    pub fn total_size(&self) -> usize {
        self.total_allocated
    }
}

impl Drop for Arena {
    fn drop(&mut self) {
        for block in &self.blocks {
            // SAFETY: every block was obtained from alloc with this layout
            // and is deallocated exactly once.
            unsafe { dealloc(block.ptr.as_ptr(), block.layout) };
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_zero_arguments_are_rejected() {
        assert!(matches!(Arena::new(0, 8), Err(Error::InvalidParameter)));
        assert!(matches!(Arena::new(64, 0), Err(Error::InvalidParameter)));
        let mut arena = Arena::new(64, 8).unwrap();
        assert!(matches!(arena.alloc(0), Err(Error::InvalidParameter)));
    }

    #[test]
    fn test_alignment_is_rounded_to_power_of_two() -> Result<(), Error> {
        let mut arena = Arena::new(64, 3)?;
        let ptr = arena.alloc(1)?;
        assert_eq!(ptr.as_ptr() as usize % 4, 0);
        Ok(())
    }

    #[test]
    fn test_small_allocations_share_block_size() -> Result<(), Error> {
        let mut arena = Arena::new(256, 8)?;
        arena.alloc(10)?;
        // A request smaller than the block size still consumes one block.
        assert_eq!(arena.total_size(), 256);
        assert_eq!(arena.used_size(), 256);
        // A request larger than the block size gets a block of its own.
        arena.alloc(1000)?;
        assert_eq!(arena.total_size(), 256 + 1000);
        Ok(())
    }

    #[test]
    fn test_free_enables_first_fit_reuse() -> Result<(), Error> {
        let mut arena = Arena::new(64, 8)?;
        let first = arena.alloc(64)?;
        arena.free(first);
        assert_eq!(arena.used_size(), 0);
        // The freed block fits the smaller request and is reused.
        let second = arena.alloc(16)?;
        assert_eq!(second, first);
        assert_eq!(arena.total_size(), 64);
        // Double frees are ignored.
        arena.free(second);
        arena.free(second);
        assert_eq!(arena.used_size(), 0);
        Ok(())
    }

    #[test]
    fn test_reset_reclaims_everything() -> Result<(), Error> {
        let mut arena = Arena::new(32, 8)?;
        arena.alloc(32)?;
        arena.alloc(32)?;
        assert_eq!(arena.used_size(), 64);
        arena.reset();
        assert_eq!(arena.used_size(), 0);
        assert_eq!(arena.total_size(), 64);
        // Both blocks are reusable without new system allocations.
        arena.alloc(32)?;
        arena.alloc(32)?;
        assert_eq!(arena.total_size(), 64);
        Ok(())
    }
}
