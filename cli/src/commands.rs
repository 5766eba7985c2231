pub mod generate;

use std::path::PathBuf;

use clap::Parser;
use dnscewl_common::Level;

#[derive(Parser, Debug)]
#[command(name = "dnscewl", version)]
#[command(
    about = "When provided with a list of domain names, generate a wordlist of potential subdomains to be tested for."
)]
pub struct CommandLine {
    /// Specify a single target.
    #[arg(short = 't', long)]
    pub target: Option<String>,

    /// Specify a list of targets. Targets are read from stdin when neither this nor --target is given.
    #[arg(short = 'l', long = "target-list", visible_alias = "tL")]
    pub target_list: Option<PathBuf>,

    /// Specify a list of words to substitute matching labels with.
    #[arg(long = "set-list", visible_alias = "sL")]
    pub set_list: Option<PathBuf>,

    /// Specify a list of targets to exclude.
    #[arg(short = 'e', long = "exclude-list", visible_alias = "eL")]
    pub exclude_list: Option<PathBuf>,

    /// Specify a list of domain extensions to substitute with.
    #[arg(long = "domain-extension", visible_alias = "eX")]
    pub domain_extension: Option<PathBuf>,

    /// Specify a file of words to append to a host.
    #[arg(short = 'a', long = "append-list")]
    pub append_list: Option<PathBuf>,

    /// Specify a file of words to prepend to a host.
    #[arg(short = 'p', long = "prepend-list")]
    pub prepend_list: Option<PathBuf>,

    /// Display debug output in the terminal.
    #[arg(short = 'v', long = "verbose_flag", visible_alias = "verbose")]
    pub verbose: bool,

    /// Include original words when substituting from the set list.
    #[arg(short = 'i', long = "include-original")]
    pub include_original: bool,

    /// Range for integer permutations. A leading + or - makes it one-sided.
    #[arg(long, allow_hyphen_values = true)]
    pub range: Option<String>,

    /// Only print candidates that are subdomains (three or more labels).
    #[arg(short = 's', long = "subs")]
    pub subs: bool,

    /// Strip foreground and background colours.
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Specify a fixed word limit to output.
    #[arg(long)]
    pub limit: Option<usize>,

    /// Level of results to output (0, 1 or 2). Level 2 also expands numeric labels.
    #[arg(long, default_value = "0")]
    pub level: Level,

    /// Prevent repeated structures such as one.one.com.
    #[arg(long = "no-repeats")]
    pub no_repeats: bool,

    /// Do not print the banner and summary.
    #[arg(long = "no-banner")]
    pub no_banner: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
