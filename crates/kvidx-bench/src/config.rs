use clap::Parser;

///
/// Config
///
/// CLI configuration for the benchmark tool. The store is in-process; the
/// simulated round-trip latency is the only "endpoint" knob.
///

#[derive(Parser, Clone, Debug)]
#[command(
    name = "kvidx-bench",
    about = "Index maintenance benchmark: per-command vs pipelined execution"
)]
pub struct Config {
    /// Entities created per tier and mode
    #[arg(long, default_value_t = 10_000, env = "KVIDX_BENCH_ENTITIES")]
    pub entities: u32,

    /// Comma-separated tier sizes (indexed attributes per entity, 1..=8)
    #[arg(long, value_delimiter = ',', default_value = "1,2,4,8")]
    pub tiers: Vec<usize>,

    /// Simulated store round-trip latency in microseconds
    #[arg(long, default_value_t = 0, env = "KVIDX_BENCH_LATENCY_US")]
    pub latency_us: u64,

    /// Also benchmark the delete path
    #[arg(long, default_value_t = false)]
    pub include_delete: bool,

    /// Emit the report as JSON instead of a table
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Print available tier models and exit
    #[arg(long, default_value_t = false)]
    pub list_tiers: bool,
}
