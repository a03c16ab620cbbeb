use std::{
    hint::black_box,
    time::{Duration, Instant},
};

use anyhow::{Result, ensure};
use dynarray::DynamicArray;
use rand::{Rng, SeedableRng, rngs::StdRng};

mod list_impl;

pub use list_impl::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Workload {
    /// Appends every value at the end.
    Append,
    /// Inserts every value at position 0, shifting the whole list each time.
    InsertFront,
    /// Fills the list, then removes from position 0 until empty.
    RemoveFront,
    /// Fills the list, then reads random positions.
    RandomGet,
    /// Fills the list with random values, then sorts.
    Sort,
    /// Fills the list with ascending values, then sorts.
    SortPresorted,
}

impl Workload {
    pub const ALL: [Workload; 6] = [
        Workload::Append,
        Workload::InsertFront,
        Workload::RemoveFront,
        Workload::RandomGet,
        Workload::Sort,
        Workload::SortPresorted,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Workload::Append => "append",
            Workload::InsertFront => "insert_front",
            Workload::RemoveFront => "remove_front",
            Workload::RandomGet => "random_get",
            Workload::Sort => "sort",
            Workload::SortPresorted => "sort_presorted",
        }
    }
}

#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub element_count: usize,
    pub seed: u64,
    pub workloads: Vec<Workload>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            element_count: 20_000,
            seed: 42,
            workloads: Workload::ALL.to_vec(),
        }
    }
}

/// Input shared by both list types within a config.
struct Dataset {
    values: Vec<u64>,
    indices: Vec<usize>,
}

impl Dataset {
    fn generate(config: &BenchConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let values = (0..config.element_count).map(|_| rng.random()).collect();
        let indices = if config.element_count == 0 {
            Vec::new()
        } else {
            (0..config.element_count)
                .map(|_| rng.random_range(0..config.element_count))
                .collect()
        };
        Self { values, indices }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Measurement {
    pub elapsed: Duration,
    pub checksum: u64,
}

pub fn run(configs: &[BenchConfig]) -> Result<()> {
    for config in configs {
        println!(
            "\n== {} elements (seed {}) ==",
            config.element_count, config.seed
        );
        println!(
            "{:<16} {:>14} {:>14}",
            "workload",
            <DynamicArray<u64> as ListBenchmark>::name(),
            <Vec<u64> as ListBenchmark>::name()
        );

        let dataset = Dataset::generate(config);

        for &workload in &config.workloads {
            let ours = measure::<DynamicArray<u64>>(workload, &dataset)?;
            let std = measure::<Vec<u64>>(workload, &dataset)?;

            ensure!(
                ours.checksum == std.checksum,
                "{} checksum mismatch: {} != {}",
                workload.name(),
                ours.checksum,
                std.checksum
            );

            println!(
                "{:<16} {:>14} {:>14}",
                workload.name(),
                format!("{:.2?}", ours.elapsed),
                format!("{:.2?}", std.elapsed)
            );
        }
    }

    Ok(())
}

fn fill<L: ListBenchmark>(list: &mut L, values: &[u64]) {
    for &value in values {
        list.append(value);
    }
}

fn measure<L: ListBenchmark>(workload: Workload, dataset: &Dataset) -> Result<Measurement> {
    let mut list = L::create();
    let mut checksum = 0_u64;

    let start = Instant::now();
    match workload {
        Workload::Append => {
            fill(&mut list, &dataset.values);
            checksum = list.len() as u64;
        }
        Workload::InsertFront => {
            for &value in &dataset.values {
                list.insert_front(value)?;
            }
            if list.len() > 0 {
                checksum = list.read(0)?;
            }
        }
        Workload::RemoveFront => {
            fill(&mut list, &dataset.values);
            while list.len() > 0 {
                checksum = checksum.wrapping_add(list.remove_front()?);
            }
        }
        Workload::RandomGet => {
            fill(&mut list, &dataset.values);
            for &index in &dataset.indices {
                checksum = checksum.wrapping_add(list.read(index)?);
            }
        }
        Workload::Sort => {
            fill(&mut list, &dataset.values);
            list.sort();
            if list.len() > 0 {
                checksum = list.read(list.len() / 2)?;
            }
        }
        Workload::SortPresorted => {
            for value in 0..dataset.values.len() as u64 {
                list.append(value);
            }
            list.sort();
            checksum = list.len() as u64;
        }
    }
    let elapsed = start.elapsed();

    Ok(Measurement {
        elapsed,
        checksum: black_box(checksum),
    })
}
