//! Range resolution for numeric label permutations.

/// Half-width of the window used when no explicit range offset is set.
pub const DEFAULT_WINDOW: i64 = 100;

/// Computes the `[lower, upper)` window to permute a numeric label `n` over.
///
/// | range | one_sided | lower       | upper       |
/// |-------|-----------|-------------|-------------|
/// | < 0   | false     | n + range   | n - range   |
/// | < 0   | true      | n + range   | n           |
/// | = 0   | any       | n - 100     | n + 100     |
/// | > 0   | false     | n - range   | n + range   |
/// | > 0   | true      | n           | n + range   |
pub fn resolve_bounds(n: i64, range: i64, one_sided: bool) -> (i64, i64) {
    match (range.signum(), one_sided) {
        (0, _) => (n.saturating_sub(DEFAULT_WINDOW), n.saturating_add(DEFAULT_WINDOW)),
        (-1, false) => (n.saturating_add(range), n.saturating_sub(range)),
        (-1, true) => (n.saturating_add(range), n),
        (_, false) => (n.saturating_sub(range), n.saturating_add(range)),
        (_, true) => (n, n.saturating_add(range)),
    }
}
