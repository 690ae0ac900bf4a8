//! Store configuration parameters.

/// Configuration for the particle store.
///
/// Immutable after the store is created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    /// Number of slots added each time the store runs out of room.
    ///
    /// Default: 128. Must be non-zero.
    pub growth_increment: usize,
}

impl StoreConfig {
    /// Default growth increment in particle slots.
    pub const DEFAULT_GROWTH_INCREMENT: usize = 128;

    /// Create a store config with the given growth increment.
    pub fn new(growth_increment: usize) -> Self {
        Self { growth_increment }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_GROWTH_INCREMENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_increment_is_128() {
        assert_eq!(StoreConfig::default().growth_increment, 128);
    }
}
