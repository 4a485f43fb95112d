// SPDX-License-Identifier: MIT

//! Search command implementation.
//!
//! Wires the plumbing together: load the pattern list, build the
//! automaton once, scan every target, filter per the flags, and
//! print text or JSON per target.

use std::borrow::Cow;
use std::io::Write;
use std::path::Path;

use anyhow::Context;

use msearch::automaton::{Automaton, AutomatonBuilder, Match};
use msearch::cli::{Cli, OutputFormat};
use msearch::file_reader::FileContent;
use msearch::filter;
use msearch::normalize;
use msearch::patterns;
use msearch::timer::Timer;

/// Run a full search over every target file.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    // Fail fast on any missing file before scanning starts.
    ensure_file_exists(&cli.patterns)?;
    for target in &cli.targets {
        ensure_file_exists(target)?;
    }

    let patterns = patterns::load(&cli.patterns)?;
    tracing::debug!(count = patterns.len(), "patterns loaded");

    let mut build_timer = Timer::start();
    let automaton = build_automaton(&patterns);
    build_timer.stop();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut scan_timer = Timer::start();

    for target in &cli.targets {
        let content = FileContent::read(target)
            .with_context(|| format!("failed to read {}", target.display()))?;
        let text = content
            .as_str()
            .map_err(|_| anyhow::anyhow!("{} is not valid UTF-8", target.display()))?;
        let text: Cow<'_, str> = if cli.normalize {
            Cow::Owned(normalize::normalize(text))
        } else {
            Cow::Borrowed(text)
        };

        scan_timer.restart();
        let raw: Vec<Match<'_, '_>> = automaton.scan(&text).collect();
        scan_timer.stop();
        tracing::debug!(target = %target.display(), raw = raw.len(), "scan complete");

        let matches = apply_filters(cli, &text, raw);
        match cli.output {
            OutputFormat::Text => write_text(&mut out, target, &matches)?,
            OutputFormat::Json => write_json(&mut out, target, &matches)?,
        }
    }

    if cli.timing {
        eprintln!("automaton build: {}", build_timer.total());
        eprintln!(
            "scans: {} laps, total {}, mean {}",
            scan_timer.laps(),
            scan_timer.total(),
            scan_timer
        );
    }
    Ok(())
}

fn ensure_file_exists(path: &Path) -> anyhow::Result<()> {
    anyhow::ensure!(path.is_file(), "file does not exist: {}", path.display());
    Ok(())
}

fn build_automaton(patterns: &[patterns::Pattern]) -> Automaton {
    let mut builder = AutomatonBuilder::new();
    for pattern in patterns {
        builder.insert(&pattern.text, pattern.tag.as_deref());
    }
    builder.build()
}

/// Boundary filter first, then dedup, matching the canonical order;
/// either may be off.
fn apply_filters<'a, 't>(cli: &Cli, text: &str, raw: Vec<Match<'a, 't>>) -> Vec<Match<'a, 't>> {
    let matches = if cli.word_boundaries {
        filter::word_bounded(text, raw)
    } else {
        raw
    };
    if cli.unique {
        filter::dedup_by_tag(matches)
    } else {
        matches
    }
}

fn write_text(out: &mut impl Write, target: &Path, matches: &[Match<'_, '_>]) -> anyhow::Result<()> {
    writeln!(out, "target file: {}", target.display())?;
    for m in matches {
        writeln!(
            out,
            "location: [{:6}, {:6}] matched: {}",
            m.start, m.end, m.text
        )?;
    }
    Ok(())
}

fn write_json(out: &mut impl Write, target: &Path, matches: &[Match<'_, '_>]) -> anyhow::Result<()> {
    let doc = serde_json::json!({
        "target": target.display().to_string(),
        "matches": matches,
    });
    serde_json::to_writer_pretty(&mut *out, &doc)?;
    writeln!(out)?;
    Ok(())
}
