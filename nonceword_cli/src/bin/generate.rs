// CLI entry point for nonce-word synthesis.
//
// Enumerates every candidate the grammar licenses, drops phonologically
// inadmissible forms and real words, and writes the survivors to
// `monosyllables.tsv` and `disyllables.tsv` in the output directory.
//
// Usage:
//   generate [OPTIONS]
//     --lexicon <PATH>         Pronunciation lexicon (repeatable)
//     --extra-lexicon <PATH>   Supplementary exclusions (env NONCEWORD_EXTRA_LEXICON)
//     --grammar <PATH>         Grammar revision JSON (default: embedded)
//     --out-dir <DIR>          Output directory (default: .)
//     --log-level <LEVEL>      Log level (default: info)

use clap::Parser;
use nonceword_cli::{GenerateArgs, init_logging, run_generate};

fn main() {
    let args = GenerateArgs::parse();
    init_logging(&args.log_level);
    if let Err(e) = run_generate(&args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
