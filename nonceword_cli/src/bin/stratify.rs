// CLI entry point for list stratification.
//
// Reads the two entry tables written by `generate` and partitions them into
// quota-balanced lists, one TSV per list.
//
// Usage:
//   stratify [OPTIONS]
//     --monosyllables <PATH>   (default: monosyllables.tsv)
//     --disyllables <PATH>     (default: disyllables.tsv)
//     --config <PATH>          Stratification config JSON (default: embedded)
//     --out-dir <DIR>          Output directory (default: .)
//     --prefix <PREFIX>        List file prefix (default: eng-list-)
//     --log-level <LEVEL>      Log level (default: info)

use clap::Parser;
use nonceword_cli::{StratifyArgs, init_logging, run_stratify};

fn main() {
    let args = StratifyArgs::parse();
    init_logging(&args.log_level);
    if let Err(e) = run_stratify(&args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
