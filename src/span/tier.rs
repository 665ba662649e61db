/// Block width used by the span primitives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SpanTier {
    /// 64-bit blocks.
    B64,
    /// 128-bit blocks.
    B128,
    /// 256-bit blocks.
    B256,
    /// 512-bit blocks.
    B512,
    /// 1024-bit blocks.
    B1024,
}

impl SpanTier {
    /// All tiers, narrowest first.
    pub const ALL: [Self; 5] = [Self::B64, Self::B128, Self::B256, Self::B512, Self::B1024];

    /// Block width in bytes.
    pub const fn bytes(self) -> usize {
        match self {
            Self::B64 => 8,
            Self::B128 => 16,
            Self::B256 => 32,
            Self::B512 => 64,
            Self::B1024 => 128,
        }
    }

    /// Widest tier worth using on the compilation target.
    pub const fn native_max() -> Self {
        if cfg!(target_feature = "avx512f") {
            Self::B1024
        } else if cfg!(target_feature = "avx2") {
            Self::B512
        } else if cfg!(any(target_feature = "sse2", target_feature = "neon")) {
            Self::B256
        } else {
            Self::B128
        }
    }

    /// Largest tier not exceeding `len_bytes`, capped at [`SpanTier::native_max`].
    ///
    /// `None` when the run is shorter than the narrowest block.
    pub fn for_len(len_bytes: usize) -> Option<Self> {
        Self::for_len_capped(len_bytes, Self::native_max())
    }

    pub(crate) fn for_len_capped(len_bytes: usize, cap: Self) -> Option<Self> {
        Self::ALL
            .into_iter()
            .rev()
            .filter(|t| *t <= cap)
            .find(|t| t.bytes() <= len_bytes)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/span/tier.rs"]
mod tests;
