// Command-line drivers: `generate` and `stratify`.
//
// Each binary is a thin `main` over a `run_*` function here, so the whole
// pipeline can be driven from integration tests without spawning processes.
//
// - `run_generate`: load lexicon(s) and grammar, synthesize, write
//   `monosyllables.tsv` and `disyllables.tsv`, log filter counts per file.
// - `run_stratify`: read those tables, partition per the stratification
//   config, write `<prefix>01.tsv` .. `<prefix>NN.tsv`.
//
// Configuration comes from flags (clap derive) plus the embedded defaults in
// `data/`; the only environment variable is `NONCEWORD_EXTRA_LEXICON`.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use log::{LevelFilter, info, warn};
use nonceword_lists::{EntryTable, ListError, StratifyConfig, default_config, stratify};
use nonceword_phon::grammar::GrammarLoadError;
use nonceword_phon::{GrammarConfig, Lexicon, PhonError, default_grammar, synthesize};
use thiserror::Error;

pub const MONOSYLLABLES: &str = "monosyllables.tsv";
pub const DISYLLABLES: &str = "disyllables.tsv";

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("grammar {}: {source}", path.display())]
    Grammar {
        path: PathBuf,
        source: GrammarLoadError,
    },

    #[error(transparent)]
    Phon(#[from] PhonError),

    #[error(transparent)]
    List(#[from] ListError),
}

/// Enumerate nonce-word candidates, drop real words, write entry tables.
#[derive(Debug, Clone, Parser)]
#[command(name = "generate")]
pub struct GenerateArgs {
    /// Pronunciation lexicon, one transcription per line (repeatable).
    #[arg(long = "lexicon")]
    pub lexicons: Vec<PathBuf>,

    /// Supplementary list of pronunciations to exclude.
    #[arg(long, env = "NONCEWORD_EXTRA_LEXICON")]
    pub extra_lexicon: Option<PathBuf>,

    /// Grammar revision JSON (default: the embedded revision).
    #[arg(long)]
    pub grammar: Option<PathBuf>,

    /// Directory for monosyllables.tsv and disyllables.tsv.
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Partition entry tables into quota-balanced experiment lists.
#[derive(Debug, Clone, Parser)]
#[command(name = "stratify")]
pub struct StratifyArgs {
    #[arg(long, default_value = MONOSYLLABLES)]
    pub monosyllables: PathBuf,

    #[arg(long, default_value = DISYLLABLES)]
    pub disyllables: PathBuf,

    /// Stratification config JSON (default: the embedded config).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory for the list files.
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// List file name prefix; files are `<prefix>NN.tsv`.
    #[arg(long, default_value = "eng-list-")]
    pub prefix: String,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Parse a `--log-level` value, falling back to `info` for anything unknown.
pub fn parse_level(level: &str) -> LevelFilter {
    level.parse().unwrap_or(LevelFilter::Info)
}

/// Initialize `env_logger` in `LEVEL: message` format. Call once, from
/// `main`. Module directives in `RUST_LOG` still apply; the flag sets the
/// default level.
pub fn init_logging(level: &str) {
    env_logger::Builder::from_default_env()
        .filter_level(parse_level(level))
        .format(|buf, record| writeln!(buf, "{}: {}", record.level(), record.args()))
        .init();
}

/// Path of list `index` (1-based).
pub fn list_path(out_dir: &Path, prefix: &str, index: usize) -> PathBuf {
    out_dir.join(format!("{prefix}{index:02}.tsv"))
}

fn read_to_string(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn load_lexicon(args: &GenerateArgs) -> Result<Lexicon, CliError> {
    let mut lexicon = Lexicon::new();
    for path in args.lexicons.iter().chain(&args.extra_lexicon) {
        let read = lexicon.load_file(path).map_err(|source| CliError::Read {
            path: path.clone(),
            source,
        })?;
        info!("{}: {read} pronunciations", path.display());
    }
    if lexicon.is_empty() {
        warn!("empty lexicon; only phonological filtering applies");
    }
    info!("{} lexicon entries", lexicon.len());
    Ok(lexicon)
}

fn load_grammar(path: Option<&Path>) -> Result<GrammarConfig, CliError> {
    match path {
        None => Ok(default_grammar()),
        Some(path) => {
            GrammarConfig::from_json(&read_to_string(path)?).map_err(|source| CliError::Grammar {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<StratifyConfig, CliError> {
    match path {
        None => Ok(default_config()),
        Some(path) => Ok(StratifyConfig::from_json(&read_to_string(path)?)?),
    }
}

fn create_dir(dir: &Path) -> Result<(), CliError> {
    fs::create_dir_all(dir).map_err(|source| CliError::Write {
        path: dir.to_path_buf(),
        source,
    })
}

/// Paths written by `run_generate`.
#[derive(Debug, Clone)]
pub struct GenerateOutput {
    pub monosyllables: PathBuf,
    pub disyllables: PathBuf,
}

pub fn run_generate(args: &GenerateArgs) -> Result<GenerateOutput, CliError> {
    let lexicon = load_lexicon(args)?;
    let grammar = load_grammar(args.grammar.as_deref())?;
    let synthesis = synthesize(&grammar, &lexicon)?;

    create_dir(&args.out_dir)?;
    let output = GenerateOutput {
        monosyllables: args.out_dir.join(MONOSYLLABLES),
        disyllables: args.out_dir.join(DISYLLABLES),
    };
    for (batch, path, label) in [
        (&synthesis.monosyllables, &output.monosyllables, "monosyllables"),
        (&synthesis.disyllables, &output.disyllables, "disyllables"),
    ] {
        EntryTable::from_entries(&batch.entries).write_path(path)?;
        let stats = batch.stats;
        info!(
            "{label}: {} kept of {}; {} phonologically inadmissible, {} lexical",
            stats.kept, stats.examined, stats.phonological, stats.lexical
        );
    }
    Ok(output)
}

pub fn run_stratify(args: &StratifyArgs) -> Result<Vec<PathBuf>, CliError> {
    let config = load_config(args.config.as_deref())?;
    let tables = [
        EntryTable::read_path(&args.monosyllables)?,
        EntryTable::read_path(&args.disyllables)?,
    ];
    let result = stratify(&tables, &config)?;
    for summary in &result.report {
        match summary.quota {
            Some(quota) => info!(
                "{}: {} entries, {quota} per list, slack {}",
                summary.category,
                summary.size,
                summary.slack(config.n_lists)
            ),
            None => info!("{}: {} entries, not sampled", summary.category, summary.size),
        }
    }

    create_dir(&args.out_dir)?;
    let mut paths = Vec::with_capacity(result.lists.len());
    for (i, list) in result.lists.iter().enumerate() {
        let path = list_path(&args.out_dir, &args.prefix, i + 1);
        list.write_path(&path)?;
        paths.push(path);
    }
    info!("wrote {} lists to {}", paths.len(), args.out_dir.display());
    Ok(paths)
}
