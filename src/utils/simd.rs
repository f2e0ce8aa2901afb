//! Vector backend selection.
//!
//! The hardware is queried once, on first use, and the answer is kept for the
//! lifetime of the process. Every vector kernel dispatches on that answer.

use std::sync::OnceLock;

/// Instruction set used by the vector kernels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VectorBackend {
    /// 256-bit registers, 8 x f32 or 4 x f64.
    Avx2,
    /// 128-bit registers, 4 x f32 or 2 x f64. Baseline on x86_64.
    Sse2,
    /// 128-bit registers, 4 x f32 or 2 x f64. Baseline on aarch64.
    Neon,
    /// No vector unit known to us: the unrolled kernel is used instead.
    Fallback,
}

impl VectorBackend {
    pub fn name(self) -> &'static str {
        match self {
            VectorBackend::Avx2 => "x86_64-avx2",
            VectorBackend::Sse2 => "x86_64-sse2",
            VectorBackend::Neon => "aarch64-neon",
            VectorBackend::Fallback => "unrolled fallback",
        }
    }

    /// Bytes held by one vector register.
    pub fn register_bytes(self) -> usize {
        match self {
            VectorBackend::Avx2 => 32,
            VectorBackend::Sse2 | VectorBackend::Neon => 16,
            VectorBackend::Fallback => 0,
        }
    }
}

static BACKEND: OnceLock<VectorBackend> = OnceLock::new();

/// The backend picked for this process.
pub fn backend() -> VectorBackend {
    *BACKEND.get_or_init(detect)
}

fn detect() -> VectorBackend {
    #[cfg(target_arch = "x86_64")]
    {
        if is_x86_feature_detected!("avx2") {
            return VectorBackend::Avx2;
        }
        return VectorBackend::Sse2;
    }

    #[cfg(target_arch = "aarch64")]
    {
        if std::arch::is_aarch64_feature_detected!("neon") {
            return VectorBackend::Neon;
        }
    }

    #[allow(unreachable_code)]
    VectorBackend::Fallback
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_is_cached() {
        assert_eq!(backend(), backend());
    }

    #[test]
    fn test_backend_matches_arch() {
        let b = backend();
        #[cfg(target_arch = "x86_64")]
        assert!(matches!(b, VectorBackend::Avx2 | VectorBackend::Sse2));
        #[cfg(target_arch = "aarch64")]
        assert_eq!(b, VectorBackend::Neon);
        #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
        assert_eq!(b, VectorBackend::Fallback);
        let _ = b.name();
    }
}
