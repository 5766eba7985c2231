use std::io::{self, BufRead, BufWriter};

use anyhow::Context;
use dnscewl_common::utils::wordfile::{read_lines, read_wordlist};
use dnscewl_common::{Config, ConfigError, RangeSpec, WordSources};
use dnscewl_core::engine;
use tracing::{debug, warn};

use crate::commands::CommandLine;
use crate::terminal::print;

pub fn generate(args: &CommandLine) -> anyhow::Result<()> {
    let cfg: Config = build_config(args)?;
    let stdin = io::stdin();
    let sources: WordSources = load_sources(args, stdin.lock())?;

    if let Some(limit) = cfg.limit {
        warn!("--limit {limit} is accepted but not enforced, every candidate is printed");
    }

    let stdout = io::stdout();
    let report = engine::generate(&sources, &cfg, BufWriter::new(stdout.lock()))
        .context("Writing the wordlist failed")?;

    print::summary(report.results.len(), report.printed, args.no_banner);
    Ok(())
}

/// Builds the run configuration. An invalid `--range` is fatal.
pub fn build_config(args: &CommandLine) -> Result<Config, ConfigError> {
    let range = match args.range.as_deref() {
        None | Some("") => None,
        Some(input) => Some(input.parse::<RangeSpec>()?),
    };

    if let Some(spec) = &range {
        debug!(
            range_string = args.range.as_deref().unwrap_or_default(),
            range = spec.value,
            one_sided = spec.one_sided,
            "Parsed range"
        );
    }

    Ok(Config {
        level: args.level,
        range,
        include_original: args.include_original,
        subs_only: args.subs,
        no_repeats: args.no_repeats,
        limit: args.limit,
    })
}

/// Loads targets and word lists. `stdin` is only read when neither
/// `--target` nor `--target-list` was given.
pub fn load_sources<R: BufRead>(args: &CommandLine, stdin: R) -> Result<WordSources, ConfigError> {
    if args.append_list.is_none() && args.prepend_list.is_none() && args.set_list.is_none() {
        return Err(ConfigError::MissingWordList);
    }

    let mut sources = WordSources::default();

    if let Some(path) = &args.append_list {
        debug!("Reading append list.");
        sources.append = read_wordlist(path)?;
        if let Some(ignored) = &args.prepend_list {
            warn!(
                "Append list supplied, prepend list {} is ignored",
                ignored.display()
            );
        }
    } else if let Some(path) = &args.prepend_list {
        debug!("Reading prepend list.");
        sources.prepend = read_wordlist(path)?;
    }

    sources.targets = load_targets(args, stdin)?;

    if let Some(path) = &args.exclude_list {
        sources.exclude = read_wordlist(path)?.into_iter().collect();
    }
    if let Some(path) = &args.set_list {
        sources.set = read_wordlist(path)?.into_iter().collect();
    }
    if let Some(path) = &args.domain_extension {
        sources.extensions = read_wordlist(path)?;
    }

    Ok(sources)
}

fn load_targets<R: BufRead>(args: &CommandLine, stdin: R) -> Result<Vec<String>, ConfigError> {
    let mut targets = Vec::new();

    if let Some(target) = &args.target {
        debug!("Adding target [{target}] to list.");
        targets.push(target.clone());
    }
    if let Some(path) = &args.target_list {
        targets.extend(read_wordlist(path)?);
    }
    if args.target.is_none() && args.target_list.is_none() {
        debug!("Reading targets from stdin.");
        targets = read_lines(stdin).map_err(|e| ConfigError::unreadable("<stdin>", e))?;
    }

    if targets.is_empty() {
        return Err(ConfigError::NoTargets);
    }
    Ok(targets)
}
