//! Commands module - CLI subcommand implementations.

mod convert;
mod init;
mod stages;
mod utils;

pub use convert::{convert_files, output_path, run_convert, ConvertOptions};
pub use init::{run_init, run_init_in};
pub use stages::run_stages;
pub use utils::{collect_scala_files, find_scala_files, is_excluded};
