use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser as ClapParser;

use tok_script::analysis::StringUsage;
use tok_script::{CompiledUnit, DecodeOptions, Decompiler, MarkerSkipRule, SymbolTables};

mod batch;

#[derive(ClapParser, Debug)]
#[command(version, about = "Emperor .tok mission script decompiler")]
struct Args {
    /// A `.tok` unit, or a directory of them.
    #[arg(short, long)]
    input: PathBuf,

    /// Output file (single unit, stdout if omitted) or directory (batch).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// YAML symbol tables; the built-in tables are used otherwise.
    #[arg(long)]
    symbols: Option<PathBuf>,

    /// Write the symbol tables in use to this YAML file.
    #[arg(long)]
    dump_symbols: Option<PathBuf>,

    /// Leave `STR[n]` references unresolved.
    #[arg(long)]
    no_strings: bool,

    /// Lookahead threshold for skipping a lone accumulator marker: 81 or 83.
    #[arg(long, default_value = "81", value_parser = parse_marker_rule)]
    marker_rule: MarkerSkipRule,

    /// Write a YAML report of string-table references.
    #[arg(long)]
    report: Option<PathBuf>,
}

fn parse_marker_rule(s: &str) -> std::result::Result<MarkerSkipRule, String> {
    match s.trim().trim_start_matches("0x") {
        "81" => Ok(MarkerSkipRule::AtLeast81),
        "83" => Ok(MarkerSkipRule::AtLeast83),
        other => Err(format!("unknown marker rule: {other} (expected 81 or 83)")),
    }
}

const DEFAULT_BATCH_OUTPUT: &str = "decompiled_missions";

fn load_tables(args: &Args) -> Result<SymbolTables> {
    let tables = match &args.symbols {
        Some(path) => SymbolTables::load(path)
            .with_context(|| format!("loading symbols: {}", path.display()))?,
        None => SymbolTables::default(),
    };
    if args.no_strings {
        return Ok(tables.without_strings());
    }
    Ok(tables)
}

fn decompile_single(decompiler: &Decompiler<'_>, input: &Path, output: Option<&Path>) -> Result<StringUsage> {
    let Some(output) = output else {
        let bytes = fs::read(input).with_context(|| format!("read {}", input.display()))?;
        let unit = CompiledUnit::parse(&bytes).with_context(|| format!("parse {}", input.display()))?;
        let name = input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let listing = decompiler.decompile_unit(&unit);
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", listing.render_with_banner(&name))?;

        return Ok(StringUsage::collect(
            &name,
            &unit,
            decompiler.tables(),
            decompiler.options(),
        ));
    };

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    batch::decompile_file(decompiler, input, output)
}

fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    let args = Args::parse();

    let tables = load_tables(&args)?;
    if let Some(path) = &args.dump_symbols {
        tables
            .export_yaml(path)
            .with_context(|| format!("writing symbols: {}", path.display()))?;
        log::info!("symbol tables written to {}", path.display());
    }

    let options = DecodeOptions {
        marker_rule: args.marker_rule,
    };
    let decompiler = Decompiler::new(&tables).with_options(options);

    let usage = if args.input.is_dir() {
        let output = args
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BATCH_OUTPUT));
        let summary = batch::run(&decompiler, &args.input, &output)?;
        log::info!(
            "Done: {} files decompiled, {} errors",
            summary.decompiled,
            summary.errors
        );
        summary.usage
    } else {
        decompile_single(&decompiler, &args.input, args.output.as_deref())?
    };

    if let Some(path) = &args.report {
        fs::write(path, usage.to_yaml()?)
            .with_context(|| format!("writing report: {}", path.display()))?;
        log::info!("{} string references reported to {}", usage.len(), path.display());
    }

    Ok(())
}
