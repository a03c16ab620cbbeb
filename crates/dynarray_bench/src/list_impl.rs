use anyhow::{Result, ensure};
use dynarray::{DynamicArray, List};

/// Operations every benchmarked list exposes.
pub trait ListBenchmark: Sized {
    fn name() -> &'static str;

    fn create() -> Self;

    fn append(&mut self, value: u64);

    fn insert_front(&mut self, value: u64) -> Result<()>;

    fn remove_front(&mut self) -> Result<u64>;

    fn read(&self, index: usize) -> Result<u64>;

    fn sort(&mut self);

    fn len(&self) -> usize;
}

impl ListBenchmark for DynamicArray<u64> {
    fn name() -> &'static str {
        "dynarray"
    }

    fn create() -> Self {
        DynamicArray::new()
    }

    fn append(&mut self, value: u64) {
        self.add(value);
    }

    fn insert_front(&mut self, value: u64) -> Result<()> {
        Ok(self.add_at(0, value)?)
    }

    fn remove_front(&mut self) -> Result<u64> {
        Ok(self.remove(0)?)
    }

    fn read(&self, index: usize) -> Result<u64> {
        Ok(*self.get(index)?)
    }

    fn sort(&mut self) {
        List::sort(self, u64::cmp);
    }

    fn len(&self) -> usize {
        List::len(self)
    }
}

impl ListBenchmark for Vec<u64> {
    fn name() -> &'static str {
        "std vec"
    }

    fn create() -> Self {
        Vec::new()
    }

    fn append(&mut self, value: u64) {
        self.push(value);
    }

    fn insert_front(&mut self, value: u64) -> Result<()> {
        self.insert(0, value);
        Ok(())
    }

    fn remove_front(&mut self) -> Result<u64> {
        ensure!(!self.is_empty(), "remove from empty vec");
        Ok(self.remove(0))
    }

    fn read(&self, index: usize) -> Result<u64> {
        self.get(index)
            .copied()
            .ok_or_else(|| anyhow::anyhow!("index {index} out of bounds for length {}", self.len()))
    }

    fn sort(&mut self) {
        self.sort_unstable();
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}
