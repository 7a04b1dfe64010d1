use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;

use tok_script::analysis::StringUsage;
use tok_script::{CompiledUnit, Decompiler};

/// Shared header unit in the MISSIONS archive; not a script.
const HEADER_UNIT: &str = "header.tok";

#[derive(Debug, Default)]
pub struct Summary {
    pub decompiled: usize,
    pub errors: usize,
    pub usage: StringUsage,
}

pub fn output_name(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or(input.as_os_str());
    let mut name = stem.to_os_string();
    name.push(".txt");
    PathBuf::from(name)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// All `.tok` units in `dir`, sorted, without the archive header.
pub fn find_units(dir: &Path) -> Result<Vec<PathBuf>> {
    let dir = glob::Pattern::escape(&dir.to_string_lossy());
    let pattern = Path::new(&dir).join("*.tok");
    let mut units = Vec::new();
    for entry in glob::glob(&pattern.to_string_lossy()).context("bad input directory pattern")? {
        let path = entry?;
        if file_name(&path) != HEADER_UNIT {
            units.push(path);
        }
    }
    units.sort();
    Ok(units)
}

/// Decompile `input`, write the listing to `output` and return the unit's
/// string-table usage.
pub fn decompile_file(decompiler: &Decompiler<'_>, input: &Path, output: &Path) -> Result<StringUsage> {
    let bytes = fs::read(input).with_context(|| format!("read {}", input.display()))?;
    let unit = CompiledUnit::parse(&bytes).with_context(|| format!("parse {}", input.display()))?;
    let name = file_name(input);

    let listing = decompiler.decompile_unit(&unit);
    fs::write(output, listing.render_with_banner(&name))
        .with_context(|| format!("write {}", output.display()))?;

    Ok(StringUsage::collect(
        &name,
        &unit,
        decompiler.tables(),
        decompiler.options(),
    ))
}

/// Decompile every unit in `input_dir` into `output_dir`. A unit that fails is
/// logged and skipped.
pub fn run(decompiler: &Decompiler<'_>, input_dir: &Path, output_dir: &Path) -> Result<Summary> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("create {}", output_dir.display()))?;

    let units = find_units(input_dir)?;
    log::info!("decompiling {} units from {}", units.len(), input_dir.display());

    let results: Vec<(PathBuf, PathBuf, Result<StringUsage>)> = units
        .par_iter()
        .map(|input| {
            let output = output_dir.join(output_name(input));
            let result = decompile_file(decompiler, input, &output);
            (input.clone(), output, result)
        })
        .collect();

    let mut summary = Summary::default();
    for (input, output, result) in results {
        match result {
            Ok(usage) => {
                log::info!("  {} -> {}", file_name(&input), output.display());
                summary.usage.merge(usage);
                summary.decompiled += 1;
            }
            Err(e) => {
                log::error!("  {}: {:#}", file_name(&input), e);
                summary.errors += 1;
            }
        }
    }

    Ok(summary)
}
