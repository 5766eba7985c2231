use dnscewl_common::{Config, Level, RangeSpec, WordSources};
use dnscewl_core::engine;
use dnscewl_core::sink::RunReport;

fn run(sources: &WordSources, cfg: &Config) -> (RunReport, Vec<String>) {
    let mut out: Vec<u8> = Vec::new();
    let report = engine::generate(sources, cfg, &mut out).expect("generation failed");
    let printed = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect();
    (report, printed)
}

/// Append, set substitution, extension swap and range expansion in one run,
/// checked for rule order and target-major ordering.
#[test]
fn all_rules_in_order() {
    let sources = WordSources::new(["dev.1.example.com"])
        .with_append(["x"])
        .with_set(["dev", "qa"])
        .with_extensions([".net"]);
    let cfg = Config {
        level: Level::One,
        range: Some(RangeSpec::new(2, true)),
        ..Config::default()
    };

    let (report, printed) = run(&sources, &cfg);

    assert_eq!(
        report.results,
        vec![
            "dev-x.1.example.com",
            "devx.1.example.com",
            "qa.1.example.com",
            "dev.1.example.net",
            "dev.1.example.com",
            "dev.2.example.com",
        ]
    );
    assert_eq!(printed, report.results);
    assert_eq!(report.printed, 6);
}

#[test]
fn prepend_ignored_when_append_present() {
    let sources = WordSources::new(["example.com"])
        .with_append(["api"])
        .with_prepend(["never"]);
    let (report, _) = run(&sources, &Config::default());

    assert!(report.results.iter().all(|c| !c.contains("never")));
    assert_eq!(report.results, vec!["example-api.com", "example.api.com", "exampleapi.com"]);
}

#[test]
fn filters_only_affect_printing() {
    let sources = WordSources::new(["www.example.com", "example.com"])
        .with_prepend(["www"])
        .with_exclude(["example.com"]);
    let cfg = Config {
        subs_only: true,
        no_repeats: true,
        ..Config::default()
    };

    let (report, printed) = run(&sources, &cfg);

    assert_eq!(
        report.results,
        vec!["wwwwww.example.com", "www-www.example.com", "www.www.example.com"]
    );
    // "www.www.example.com" repeats a label.
    assert_eq!(printed, vec!["wwwwww.example.com", "www-www.example.com"]);
    assert_eq!(report.printed, 2);
}

#[test]
fn level_two_expands_without_explicit_range() {
    let sources = WordSources::new(["host.7.example.com"]).with_prepend(["a"]);
    let cfg = Config {
        level: Level::Two,
        ..Config::default()
    };

    let (report, _) = run(&sources, &cfg);
    let expanded: Vec<&String> = report
        .results
        .iter()
        .filter(|c| c.starts_with("host."))
        .collect();

    assert_eq!(expanded.len(), 200);
    assert_eq!(expanded[0], "host.-93.example.com");
    assert_eq!(expanded[199], "host.106.example.com");
}

#[test]
fn multiple_targets_are_target_major() {
    let sources = WordSources::new(["a.io", "b.io"]).with_set(["a", "b", "c"]);
    let (report, _) = run(&sources, &Config::default());

    assert_eq!(report.results, vec!["b.io", "c.io", "a.io", "c.io"]);
}
