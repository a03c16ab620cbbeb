use dynarray_bench::{BenchConfig, Workload, run};

fn main() -> anyhow::Result<()> {
    let configs = vec![
        BenchConfig::default(),
        BenchConfig {
            element_count: 1_000_000,
            workloads: vec![Workload::Append, Workload::RandomGet, Workload::Sort],
            ..Default::default()
        },
        BenchConfig {
            element_count: 1_000,
            workloads: vec![Workload::SortPresorted],
            ..Default::default()
        },
    ];
    run(&configs)
}
