/// Bit flags selecting health states in queries. Values combine with `|`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HealthStateFilter(pub i32);

impl HealthStateFilter {
    pub const DEFAULT: Self = Self(0);
    pub const NONE: Self = Self(1);
    pub const OK: Self = Self(2);
    pub const WARNING: Self = Self(4);
    pub const ERROR: Self = Self(8);
    pub const ALL: Self = Self(65535);
}

impl std::ops::BitOr for HealthStateFilter {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl Default for HealthStateFilter {
    fn default() -> Self {
        Self::DEFAULT
    }
}
