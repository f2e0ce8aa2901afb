//! Input buffer shared by every kernel of a benchmark run.
//!
//! The buffer is allocated once, filled once, and then only read. Inner
//! product reads two sequences, one from each half; minimum reads one
//! sequence from the start.

use crate::element::{Element, Floating};
use crate::error::{Error, Result};
use crate::utils::bench::{fill_uniform, seeded_rng};

const fn parse_bufsize(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut value = 0usize;
    let mut i = 0;
    while i < bytes.len() {
        assert!(bytes[i].is_ascii_digit(), "REDUCE_BUFSIZE must be decimal");
        value = value * 10 + (bytes[i] - b'0') as usize;
        i += 1;
    }
    value
}

/// Maximum buffer size in bytes, fixed at build time (`REDUCE_BUFSIZE`).
pub const MAX_BUFFER_BYTES: usize = parse_bufsize(env!("REDUCE_BUFSIZE"));

/// Where the input buffer lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemoryLayout {
    Static,
    Heap,
}

impl MemoryLayout {
    /// Layout selected by the `static_memory` feature.
    pub const fn configured() -> Self {
        if cfg!(feature = "static_memory") {
            MemoryLayout::Static
        } else {
            MemoryLayout::Heap
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MemoryLayout::Static => "static memory",
            MemoryLayout::Heap => "heap memory",
        }
    }
}

#[cfg(feature = "static_memory")]
mod statik {
    use super::{Floating, MAX_BUFFER_BYTES};
    use std::sync::atomic::{AtomicBool, Ordering};

    const ELEMENTS: usize = MAX_BUFFER_BYTES / std::mem::size_of::<Floating>();

    static mut STORAGE: [Floating; ELEMENTS] = [0.0; ELEMENTS];
    static TAKEN: AtomicBool = AtomicBool::new(false);

    /// Hand out the static storage, at most once per process.
    pub fn take() -> Option<&'static mut [Floating]> {
        if TAKEN.swap(true, Ordering::AcqRel) {
            return None;
        }
        // SAFETY: the flag above guarantees this is the only reference ever created
        let storage = unsafe { &mut *std::ptr::addr_of_mut!(STORAGE) };
        Some(&mut storage[..])
    }
}

enum Storage {
    #[cfg(feature = "static_memory")]
    Static(&'static mut [Floating]),
    Heap(Vec<Floating>),
}

/// Pre-generated input reused across kernels and sizes.
pub struct InputBuffer {
    storage: Storage,
    len: usize,
}

impl InputBuffer {
    /// Allocate room for `bytes` bytes in the configured memory layout and
    /// fill it from `seed`.
    pub fn allocate(bytes: usize, seed: u64) -> Result<Self> {
        Self::allocate_in(MemoryLayout::configured(), bytes, seed)
    }

    /// Like [`allocate`](Self::allocate) with an explicit layout.
    ///
    /// A static layout is only available with the `static_memory` feature;
    /// without it, the request falls back to the heap.
    pub fn allocate_in(layout: MemoryLayout, bytes: usize, seed: u64) -> Result<Self> {
        if bytes > MAX_BUFFER_BYTES {
            return Err(Error::BudgetExceeded {
                requested: bytes,
                budget: MAX_BUFFER_BYTES,
            });
        }
        let len = bytes / std::mem::size_of::<Floating>();

        let storage = match layout {
            #[cfg(feature = "static_memory")]
            MemoryLayout::Static => Storage::Static(statik::take().ok_or(Error::StaticBufferTaken)?),
            _ => Storage::Heap(vec![Floating::ZERO; len]),
        };

        let mut buffer = Self { storage, len };
        fill_uniform(buffer.as_mut_slice(), &mut seeded_rng(seed));
        Ok(buffer)
    }

    pub fn layout(&self) -> MemoryLayout {
        match self.storage {
            #[cfg(feature = "static_memory")]
            Storage::Static(_) => MemoryLayout::Static,
            Storage::Heap(_) => MemoryLayout::Heap,
        }
    }

    /// Usable size in bytes.
    pub fn bytes(&self) -> usize {
        self.len * std::mem::size_of::<Floating>()
    }

    pub fn as_slice(&self) -> &[Floating] {
        match &self.storage {
            #[cfg(feature = "static_memory")]
            Storage::Static(s) => &s[..self.len],
            Storage::Heap(v) => &v[..self.len],
        }
    }

    fn as_mut_slice(&mut self) -> &mut [Floating] {
        match &mut self.storage {
            #[cfg(feature = "static_memory")]
            Storage::Static(s) => &mut s[..self.len],
            Storage::Heap(v) => &mut v[..self.len],
        }
    }

    /// The single sequence a minimum kernel reads when processing `bytes`.
    pub fn sequence(&self, bytes: usize) -> &[Floating] {
        let n = (bytes / std::mem::size_of::<Floating>()).min(self.len);
        &self.as_slice()[..n]
    }

    /// The two equal-length sequences an inner-product kernel reads when
    /// processing `bytes`: `x` from the first half, `y` from the second.
    pub fn pair(&self, bytes: usize) -> (&[Floating], &[Floating]) {
        let half = self.len / 2;
        let n = ((bytes / 2) / std::mem::size_of::<Floating>()).min(half);
        let data = self.as_slice();
        (&data[..n], &data[half..half + n])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_is_enforced() {
        let err = InputBuffer::allocate_in(MemoryLayout::Heap, MAX_BUFFER_BYTES + 1, 1);
        assert!(matches!(err, Err(Error::BudgetExceeded { .. })));
    }

    #[test]
    fn test_pair_halves_are_disjoint_and_equal_length() {
        let buffer = InputBuffer::allocate_in(MemoryLayout::Heap, 1024, 3).unwrap();
        let size = std::mem::size_of::<Floating>();
        let (x, y) = buffer.pair(1024);
        assert_eq!(x.len(), 512 / size);
        assert_eq!(y.len(), x.len());
        assert_eq!(y.as_ptr(), buffer.as_slice()[1024 / size / 2..].as_ptr());
    }

    #[test]
    fn test_sequence_is_prefix() {
        let buffer = InputBuffer::allocate_in(MemoryLayout::Heap, 2048, 3).unwrap();
        let size = std::mem::size_of::<Floating>();
        assert_eq!(buffer.sequence(1024).len(), 1024 / size);
        assert_eq!(buffer.sequence(1 << 20).len(), 2048 / size);
        assert_eq!(buffer.layout(), MemoryLayout::Heap);
        assert_eq!(buffer.bytes(), 2048);
    }

    #[test]
    fn test_same_seed_same_contents() {
        let a = InputBuffer::allocate_in(MemoryLayout::Heap, 4096, 11).unwrap();
        let b = InputBuffer::allocate_in(MemoryLayout::Heap, 4096, 11).unwrap();
        assert_eq!(a.as_slice(), b.as_slice());
    }
}
