use rand::Rng;

/// A fixed, pre-generated sequence of logical addresses to translate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessPattern {
    addresses: Vec<u64>,
}

impl AccessPattern {
    /// `count` addresses drawn uniformly from `[0, memory_size)`.
    ///
    /// An empty address space yields an empty pattern.
    pub fn random<R: Rng>(count: usize, memory_size: u64, rng: &mut R) -> Self {
        if memory_size == 0 {
            return Self::from_addresses(Vec::new());
        }
        let addresses = (0..count).map(|_| rng.gen_range(0..memory_size)).collect();
        Self { addresses }
    }

    pub fn from_addresses(addresses: Vec<u64>) -> Self {
        Self { addresses }
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    pub fn addresses(&self) -> &[u64] {
        &self.addresses
    }

    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.addresses.iter().copied()
    }
}

impl From<Vec<u64>> for AccessPattern {
    fn from(addresses: Vec<u64>) -> Self {
        Self::from_addresses(addresses)
    }
}
