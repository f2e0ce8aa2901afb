//! Thread pinning for timing samples.
//!
//! A sample that migrates between cores mid-measurement picks up cold caches
//! and frequency changes. On Linux the thread is pinned with
//! `sched_setaffinity` and the previous mask restored afterwards; elsewhere
//! pinning is a no-op.

#[cfg(target_os = "linux")]
mod platform {
    use std::cell::RefCell;

    thread_local! {
        static SAVED_MASK: RefCell<Option<libc::cpu_set_t>> = const { RefCell::new(None) };
    }

    pub fn current_cpu() -> Option<usize> {
        // SAFETY: sched_getcpu has no preconditions
        let cpu = unsafe { libc::sched_getcpu() };
        (cpu >= 0).then_some(cpu as usize)
    }

    pub fn pin(core: usize) -> bool {
        // SAFETY: the masks are plain data owned by this frame
        unsafe {
            let size = std::mem::size_of::<libc::cpu_set_t>();
            let mut saved: libc::cpu_set_t = std::mem::zeroed();
            if libc::sched_getaffinity(0, size, &mut saved) != 0 {
                return false;
            }

            let mut set: libc::cpu_set_t = std::mem::zeroed();
            libc::CPU_ZERO(&mut set);
            libc::CPU_SET(core, &mut set);
            if libc::sched_setaffinity(0, size, &set) != 0 {
                return false;
            }

            SAVED_MASK.with(|cell| *cell.borrow_mut() = Some(saved));
            true
        }
    }

    pub fn unpin() -> bool {
        SAVED_MASK.with(|cell| match cell.borrow_mut().take() {
            // SAFETY: `set` is a mask previously returned by sched_getaffinity
            Some(set) => unsafe {
                libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set) == 0
            },
            None => false,
        })
    }
}

#[cfg(not(target_os = "linux"))]
mod platform {
    pub fn current_cpu() -> Option<usize> {
        None
    }

    pub fn pin(_core: usize) -> bool {
        false
    }

    pub fn unpin() -> bool {
        false
    }
}

/// Pin the current thread to the core it is running on (or core 0 if that
/// is unknown). Returns the core on success.
pub fn pin_to_current_core() -> Option<usize> {
    let core = platform::current_cpu().unwrap_or(0);
    platform::pin(core).then_some(core)
}

/// Restore the affinity mask saved by the last successful pin.
pub fn unpin() -> bool {
    platform::unpin()
}

/// RAII guard for CPU pinning - pins on creation, unpins on drop.
pub struct CpuPinGuard {
    pinned_core: Option<usize>,
}

impl CpuPinGuard {
    pub fn new() -> Self {
        Self {
            pinned_core: pin_to_current_core(),
        }
    }

    pub fn core_id(&self) -> Option<usize> {
        self.pinned_core
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned_core.is_some()
    }
}

impl Drop for CpuPinGuard {
    fn drop(&mut self) {
        if self.pinned_core.is_some() {
            unpin();
        }
    }
}

impl Default for CpuPinGuard {
    fn default() -> Self {
        Self::new()
    }
}
