use simon_engine::{ScoreStore, StoreUnavailable};

/// In-memory score store. Nothing survives the process; useful for tests
/// and for running without a writable data directory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Option<u32>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_score(score: u32) -> Self {
        Self { value: Some(score) }
    }
}

impl ScoreStore for MemoryStore {
    fn load(&mut self) -> Result<Option<u32>, StoreUnavailable> {
        Ok(self.value)
    }

    fn save(&mut self, high_score: u32) -> Result<(), StoreUnavailable> {
        self.value = Some(high_score);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_loads_none() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryStore::new();
        store.save(9).unwrap();
        assert_eq!(store.load().unwrap(), Some(9));
    }

    #[test]
    fn test_preseeded_store() {
        let mut store = MemoryStore::with_score(7);
        assert_eq!(store.load().unwrap(), Some(7));
    }
}
