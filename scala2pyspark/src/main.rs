//! Main binary entry point for scala2pyspark.
//!
//! This binary delegates to `entry_point::run_with_args()` so it behaves exactly
//! like the `scala2pyspark-cli` binary.

use anyhow::Result;

fn main() -> Result<()> {
    let code = scala2pyspark::entry_point::run_with_args(std::env::args().skip(1).collect())?;
    std::process::exit(code);
}
