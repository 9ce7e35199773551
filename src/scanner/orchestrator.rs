//! Scan orchestration: the single entry point a page view goes through.
//!
//! The engine resolves a catalogue logic key against the registry, runs the
//! predicate, applies diversity selection where the scan opted in, and
//! enforces the minimum-result floor. Unknown keys are never an error — the
//! page still renders, backed by a plain capped slice of the universe.

use crate::constants::{MIN_RESULTS, RESULT_CAP};
use crate::models::AssetRecord;
use crate::scanner::diversity::{select_diverse, select_diverse_by_sector, UsedSymbols};
use crate::scanner::registry::ScanKind;
use std::collections::HashSet;
use tracing::warn;

/// One scan-browsing session: runs scans and remembers which symbols they
/// surfaced so later scans in the same session prefer fresh ones.
///
/// Not safe for unsynchronized concurrent use — callers sharing an engine
/// across requests must serialize access or keep one engine per session.
#[derive(Debug, Default)]
pub struct ScanEngine {
    used: UsedSymbols,
}

impl ScanEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget every symbol surfaced so far. Call once per fresh multi-scan
    /// sequence, e.g. when the user lands on a new scanner page.
    pub fn reset_session(&mut self) {
        self.used.clear();
    }

    /// Run the scan registered under `logic_key` against a universe.
    ///
    /// Unknown keys fall back to the first [`RESULT_CAP`] records of the
    /// universe, with a warning. Whatever ran, the result is padded from the
    /// universe up to [`MIN_RESULTS`] records when the universe allows it.
    pub fn run(&mut self, universe: &[AssetRecord], logic_key: &str) -> Vec<AssetRecord> {
        let Some(kind) = ScanKind::from_key(logic_key) else {
            warn!(key = logic_key, "no scan logic registered, returning capped universe");
            let fallback: Vec<AssetRecord> = universe.iter().take(RESULT_CAP).cloned().collect();
            return pad_to_floor(universe, fallback);
        };

        let filtered = kind.run(universe);
        let result = if kind.uses_sector_diversity() {
            select_diverse_by_sector(filtered, &mut self.used, RESULT_CAP, MIN_RESULTS)
        } else {
            filtered
        };

        pad_to_floor(universe, result)
    }

    /// Like [`run`](Self::run), but wraps any resolvable scan with the plain
    /// diversity policy, regardless of whether the scan opted in.
    pub fn run_diversified(&mut self, universe: &[AssetRecord], logic_key: &str) -> Vec<AssetRecord> {
        let Some(kind) = ScanKind::from_key(logic_key) else {
            warn!(key = logic_key, "no scan logic registered, returning capped universe");
            let fallback: Vec<AssetRecord> = universe.iter().take(RESULT_CAP).cloned().collect();
            return pad_to_floor(universe, fallback);
        };

        let filtered = kind.run(universe);
        let result = select_diverse(filtered, &mut self.used, RESULT_CAP, MIN_RESULTS);
        pad_to_floor(universe, result)
    }

    /// Number of symbols surfaced so far in this session
    pub fn used_count(&self) -> usize {
        self.used.len()
    }
}

/// Pad a result from the universe, preserving universe order, until it holds
/// [`MIN_RESULTS`] records or the universe is exhausted. Padding records are
/// not marked as used — they fill space, they were not selected.
fn pad_to_floor(universe: &[AssetRecord], mut result: Vec<AssetRecord>) -> Vec<AssetRecord> {
    if result.len() >= MIN_RESULTS || universe.len() < MIN_RESULTS {
        return result;
    }

    let present: HashSet<&str> = result.iter().map(|a| a.symbol.as_str()).collect();
    let needed = MIN_RESULTS - result.len();
    let padding: Vec<AssetRecord> = universe
        .iter()
        .filter(|a| !present.contains(a.symbol.as_str()))
        .take(needed)
        .cloned()
        .collect();
    result.extend(padding);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AssetType;

    fn equity(symbol: &str, change: Option<f64>) -> AssetRecord {
        AssetRecord {
            symbol: symbol.to_string(),
            name: symbol.to_string(),
            sector: "Technology".to_string(),
            asset_type: AssetType::Equity,
            daily_change_pct: change,
            ..AssetRecord::default()
        }
    }

    fn crypto(symbol: &str) -> AssetRecord {
        AssetRecord {
            symbol: symbol.to_string(),
            name: symbol.to_string(),
            sector: "Cryptocurrency".to_string(),
            asset_type: AssetType::Crypto,
            ..AssetRecord::default()
        }
    }

    /// Six records: three equities with computed changes, three cryptos without
    fn mixed_universe() -> Vec<AssetRecord> {
        vec![
            equity("TCS", Some(12.0)),
            equity("INFY", Some(7.0)),
            equity("WIPRO", Some(-3.0)),
            crypto("BTC"),
            crypto("ETH"),
            crypto("SOL"),
        ]
    }

    #[test]
    fn test_top_gainers_returns_positive_movers_in_order() {
        let mut engine = ScanEngine::new();
        let result = engine.run(&mixed_universe(), "topGainers");
        // Two real matches, padded up to the four-record floor
        assert_eq!(result.len(), 4);
        assert_eq!(result[0].symbol, "TCS");
        assert_eq!(result[1].symbol, "INFY");
    }

    #[test]
    fn test_empty_scan_result_pads_to_floor() {
        let mut engine = ScanEngine::new();
        // No crypto in this universe has a computed change, so the scan
        // matches nothing and padding supplies the first four records
        let result = engine.run(&mixed_universe(), "cryptoTopGainers");
        assert_eq!(result.len(), 4);
        let symbols: Vec<&str> = result.iter().map(|a| a.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["TCS", "INFY", "WIPRO", "BTC"]);
    }

    #[test]
    fn test_unknown_key_falls_back_to_capped_universe() {
        let mut engine = ScanEngine::new();
        let universe: Vec<AssetRecord> = (0..80)
            .map(|i| equity(&format!("S{i}"), None))
            .collect();
        let result = engine.run(&universe, "doesNotExist");
        assert_eq!(result.len(), RESULT_CAP);
        assert_eq!(result[0].symbol, "S0");
    }

    #[test]
    fn test_small_universe_is_not_padded_beyond_itself() {
        let mut engine = ScanEngine::new();
        let universe = vec![equity("ONLY", None), equity("TWO", None)];
        let result = engine.run(&universe, "topGainers");
        // Universe has fewer than four records, so the floor cannot apply
        assert!(result.len() <= universe.len());
    }

    #[test]
    fn test_floor_invariant_for_every_catalogue_key() {
        let universe = mixed_universe();
        for scan in crate::models::scan_configs() {
            let mut engine = ScanEngine::new();
            let result = engine.run(&universe, scan.logic_key);
            assert!(
                result.len() >= MIN_RESULTS.min(universe.len()),
                "scan {} returned {} records",
                scan.logic_key,
                result.len()
            );
            assert!(result.len() <= RESULT_CAP);
        }
    }

    #[test]
    fn test_same_scan_twice_is_pure_after_reset() {
        let universe = mixed_universe();
        let mut engine = ScanEngine::new();

        let first = engine.run(&universe, "highDividend");
        engine.reset_session();
        let second = engine.run(&universe, "highDividend");

        let first_symbols: Vec<&str> = first.iter().map(|a| a.symbol.as_str()).collect();
        let second_symbols: Vec<&str> = second.iter().map(|a| a.symbol.as_str()).collect();
        assert_eq!(first_symbols, second_symbols);
    }

    #[test]
    fn test_sector_diversity_applies_only_to_enrolled_scans() {
        // highDividend is diversity-wrapped: running it marks symbols used
        let universe: Vec<AssetRecord> = (0..10)
            .map(|i| AssetRecord {
                div_yield: 5.0,
                ..equity(&format!("S{i}"), None)
            })
            .collect();
        let mut engine = ScanEngine::new();
        engine.run(&universe, "highDividend");
        assert!(engine.used_count() > 0);

        // mostActive is not wrapped: it leaves the session state alone
        let mut engine = ScanEngine::new();
        engine.run(&universe, "mostActive");
        assert_eq!(engine.used_count(), 0);
    }

    #[test]
    fn test_run_diversified_avoids_repeats_across_scans() {
        let universe: Vec<AssetRecord> = (0..45)
            .map(|i| AssetRecord {
                volume: 1_000.0 + f64::from(i),
                ..equity(&format!("S{i}"), None)
            })
            .collect();
        let mut engine = ScanEngine::new();

        let first = engine.run_diversified(&universe[..25], "mostActive");
        let second = engine.run_diversified(&universe[20..], "mostActive");

        let first_symbols: HashSet<&str> = first.iter().map(|a| a.symbol.as_str()).collect();
        let overlap = second
            .iter()
            .filter(|a| first_symbols.contains(a.symbol.as_str()))
            .count();
        assert_eq!(overlap, 0);
    }

    #[test]
    fn test_every_catalogue_scan_against_sample_universe() {
        // Full pipeline over the built-in dataset. The merge injects random
        // enrichment, so only the engine's invariants are asserted here;
        // exact membership is covered by the fixture tests above.
        let mut engine = ScanEngine::new();
        for scan in crate::models::scan_configs() {
            let universe = crate::services::universe(scan.dataset);
            engine.reset_session();
            let results = engine.run(&universe, scan.logic_key);

            assert!(results.len() <= RESULT_CAP, "scan {}", scan.slug);
            assert!(
                results.len() >= MIN_RESULTS.min(universe.len()),
                "scan {} returned {} of {}",
                scan.slug,
                results.len(),
                universe.len()
            );

            // Secondary filters with no bounds set must be an identity pass
            let unfiltered =
                crate::scanner::apply_all_filters(&results, &crate::models::FilterState::default());
            assert_eq!(unfiltered.len(), results.len(), "scan {}", scan.slug);
        }
    }

    #[test]
    fn test_reset_session_clears_diversity_state() {
        let universe: Vec<AssetRecord> = (0..10)
            .map(|i| AssetRecord {
                div_yield: 5.0,
                ..equity(&format!("S{i}"), None)
            })
            .collect();
        let mut engine = ScanEngine::new();
        engine.run(&universe, "highDividend");
        assert!(engine.used_count() > 0);
        engine.reset_session();
        assert_eq!(engine.used_count(), 0);
    }
}
