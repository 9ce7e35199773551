//! Diversity-aware result selection.
//!
//! Scan pages in one browsing session share a [`UsedSymbols`] set; selection
//! prefers symbols no earlier scan has surfaced, so the same handful of
//! assets does not headline every page. Both policies guarantee the
//! [`MIN_RESULTS`](crate::constants::MIN_RESULTS) floor whenever the scan
//! itself matched that many records, and never return more than
//! `max_results`.

use crate::constants::{DIVERSE_SHARE, DIVERSITY_POOL_MIN};
use crate::models::AssetRecord;
use std::collections::HashSet;

/// Symbols surfaced by earlier scans in the current session.
///
/// Insert-only between [`clear`](UsedSymbols::clear) calls; the orchestrator
/// clears it when a fresh multi-scan sequence starts.
#[derive(Debug, Default)]
pub struct UsedSymbols {
    symbols: HashSet<String>,
}

impl UsedSymbols {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.symbols.contains(symbol)
    }

    pub fn mark(&mut self, symbol: &str) {
        self.symbols.insert(symbol.to_string());
    }

    pub fn clear(&mut self) {
        self.symbols.clear();
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

fn mark_all(used: &mut UsedSymbols, selected: &[AssetRecord]) {
    for asset in selected {
        used.mark(&asset.symbol);
    }
}

/// Select up to `max_results` from a scan's already-ranked output, preferring
/// symbols the session has not shown yet.
///
/// Selection policy, in priority order:
/// 1. Enough unused matches: take them alone.
/// 2. Enough matches overall: reserve ~70% of the budget for unused symbols,
///    fill the rest from the ranked output in order.
/// 3. Thin result set: return the ranked output as-is, capped.
pub fn select_diverse(
    filtered: Vec<AssetRecord>,
    used: &mut UsedSymbols,
    max_results: usize,
    min_results: usize,
) -> Vec<AssetRecord> {
    let available: Vec<AssetRecord> = filtered
        .iter()
        .filter(|a| !used.contains(&a.symbol))
        .cloned()
        .collect();

    if available.len() >= DIVERSITY_POOL_MIN.min(max_results) {
        let result: Vec<AssetRecord> = available.into_iter().take(max_results).collect();
        mark_all(used, &result);
        return result;
    }

    if filtered.len() >= min_results {
        let diverse_budget = ((max_results as f64) * DIVERSE_SHARE).floor() as usize;
        let mut result: Vec<AssetRecord> = available
            .into_iter()
            .take(diverse_budget)
            .collect();

        let remaining_budget = (min_results.saturating_sub(result.len()))
            .max(max_results.saturating_sub(result.len()));
        let selected: HashSet<&str> = result.iter().map(|a| a.symbol.as_str()).collect();
        let remaining: Vec<AssetRecord> = filtered
            .iter()
            .filter(|a| !selected.contains(a.symbol.as_str()))
            .take(remaining_budget)
            .cloned()
            .collect();

        result.extend(remaining);
        mark_all(used, &result);
        return result;
    }

    let result: Vec<AssetRecord> = filtered
        .into_iter()
        .take(min_results.max(max_results))
        .collect();
    mark_all(used, &result);
    result
}

/// Sector-aware variant of [`select_diverse`].
///
/// Unused matches are bucketed by sector and drawn round-robin — one pass
/// across the buckets — before falling back to ranked order, so a single hot
/// sector cannot fill the whole page. The same minimum-results fallback
/// applies.
pub fn select_diverse_by_sector(
    filtered: Vec<AssetRecord>,
    used: &mut UsedSymbols,
    max_results: usize,
    min_results: usize,
) -> Vec<AssetRecord> {
    let available: Vec<AssetRecord> = filtered
        .iter()
        .filter(|a| !used.contains(&a.symbol))
        .cloned()
        .collect();

    // Not enough unused symbols to bother with sector spreading
    if available.len() < min_results && filtered.len() >= min_results {
        let result: Vec<AssetRecord> = filtered
            .into_iter()
            .take(min_results.max(max_results))
            .collect();
        mark_all(used, &result);
        return result;
    }

    // Bucket by sector, keeping first-seen sector order
    let mut sectors: Vec<String> = Vec::new();
    let mut buckets: Vec<Vec<AssetRecord>> = Vec::new();
    for asset in &available {
        let sector = if asset.sector.is_empty() {
            "Other"
        } else {
            asset.sector.as_str()
        };
        match sectors.iter().position(|s| s == sector) {
            Some(i) => buckets[i].push(asset.clone()),
            None => {
                sectors.push(sector.to_string());
                buckets.push(vec![asset.clone()]);
            }
        }
    }

    let mut result: Vec<AssetRecord> = Vec::new();
    if !sectors.is_empty() {
        let mut sector_index = 0usize;
        while result.len() < max_results && result.len() < available.len() {
            let bucket = &mut buckets[sector_index % sectors.len()];
            if !bucket.is_empty() {
                let asset = bucket.remove(0);
                used.mark(&asset.symbol);
                result.push(asset);
            }

            sector_index += 1;

            // One full pass done; top up from the remaining pool in ranked order
            if sector_index >= sectors.len() && result.len() < max_results {
                let selected: HashSet<&str> = result.iter().map(|a| a.symbol.as_str()).collect();
                let needed = max_results - result.len();
                let fill: Vec<AssetRecord> = available
                    .iter()
                    .filter(|a| !selected.contains(a.symbol.as_str()))
                    .take(needed)
                    .cloned()
                    .collect();
                mark_all(used, &fill);
                result.extend(fill);
                break;
            }
        }
    }

    // Floor fallback: pad from the full ranked output
    if result.len() < min_results {
        let selected: HashSet<&str> = result.iter().map(|a| a.symbol.as_str()).collect();
        let needed = min_results - result.len();
        let additional: Vec<AssetRecord> = filtered
            .iter()
            .filter(|a| !selected.contains(a.symbol.as_str()))
            .take(needed)
            .cloned()
            .collect();
        mark_all(used, &additional);
        result.extend(additional);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{MIN_RESULTS, RESULT_CAP};
    use crate::models::AssetType;

    fn asset(symbol: &str, sector: &str) -> AssetRecord {
        AssetRecord {
            symbol: symbol.to_string(),
            name: symbol.to_string(),
            sector: sector.to_string(),
            asset_type: AssetType::Equity,
            ..AssetRecord::default()
        }
    }

    fn assets(count: usize, sector: &str) -> Vec<AssetRecord> {
        (0..count).map(|i| asset(&format!("S{i}"), sector)).collect()
    }

    #[test]
    fn test_plain_selection_prefers_unused_pool() {
        let mut used = UsedSymbols::new();
        let filtered = assets(30, "Technology");

        let result = select_diverse(filtered.clone(), &mut used, RESULT_CAP, MIN_RESULTS);
        assert_eq!(result.len(), 30);
        assert_eq!(used.len(), 30);

        // Order preserved from the ranked input
        assert_eq!(result[0].symbol, "S0");
        assert_eq!(result[29].symbol, "S29");
    }

    #[test]
    fn test_plain_selection_mixes_unused_and_used() {
        let mut used = UsedSymbols::new();
        let filtered = assets(10, "Technology");
        // Mark most of the pool as already shown
        for asset in &filtered[..8] {
            used.mark(&asset.symbol);
        }

        let result = select_diverse(filtered, &mut used, RESULT_CAP, MIN_RESULTS);
        // Unused symbols lead, then the ranked output tops the list up
        assert_eq!(result[0].symbol, "S8");
        assert_eq!(result[1].symbol, "S9");
        assert_eq!(result.len(), 10);
    }

    #[test]
    fn test_plain_selection_thin_matches_returned_whole() {
        let mut used = UsedSymbols::new();
        used.mark("S0");
        used.mark("S1");
        let filtered = assets(3, "Energy");

        let result = select_diverse(filtered, &mut used, RESULT_CAP, MIN_RESULTS);
        assert_eq!(result.len(), 3);
        // S0/S1 were already in the set, so only S2 is new
        assert_eq!(used.len(), 3);
    }

    #[test]
    fn test_cap_respected_with_small_budget() {
        let mut used = UsedSymbols::new();
        let result = select_diverse(assets(30, "Technology"), &mut used, 10, MIN_RESULTS);
        assert_eq!(result.len(), 10);
    }

    #[test]
    fn test_sector_round_robin_spreads_first_picks() {
        let mut used = UsedSymbols::new();
        let mut filtered = Vec::new();
        for i in 0..4 {
            filtered.push(asset(&format!("T{i}"), "Technology"));
        }
        for i in 0..4 {
            filtered.push(asset(&format!("F{i}"), "Financial"));
        }
        for i in 0..4 {
            filtered.push(asset(&format!("H{i}"), "Healthcare"));
        }

        let result = select_diverse_by_sector(filtered, &mut used, RESULT_CAP, MIN_RESULTS);
        assert_eq!(result.len(), 12);
        // First cycle takes one asset from each sector in first-seen order
        let head: Vec<&str> = result[..3].iter().map(|a| a.symbol.as_str()).collect();
        assert_eq!(head, vec!["T0", "F0", "H0"]);
    }

    #[test]
    fn test_sector_selection_falls_back_when_pool_exhausted() {
        let mut used = UsedSymbols::new();
        let filtered = assets(6, "Technology");
        for asset in &filtered[..4] {
            used.mark(&asset.symbol);
        }

        // Only 2 unused remain, but 6 matched: plain capped slice keeps the floor
        let result = select_diverse_by_sector(filtered, &mut used, RESULT_CAP, MIN_RESULTS);
        assert_eq!(result.len(), 6);
        assert_eq!(result[0].symbol, "S0");
    }

    #[test]
    fn test_floor_guarantee_never_shrinks_small_scans() {
        let mut used = UsedSymbols::new();
        let filtered = assets(2, "Utilities");

        let result = select_diverse_by_sector(filtered.clone(), &mut used, RESULT_CAP, MIN_RESULTS);
        assert_eq!(result.len(), filtered.len());
    }

    #[test]
    fn test_used_set_grows_monotonically() {
        let mut used = UsedSymbols::new();
        select_diverse(assets(25, "Technology"), &mut used, RESULT_CAP, MIN_RESULTS);
        let after_first = used.len();
        select_diverse(
            (25..50).map(|i| asset(&format!("S{i}"), "Energy")).collect(),
            &mut used,
            RESULT_CAP,
            MIN_RESULTS,
        );
        assert!(used.len() > after_first);
    }

    #[test]
    fn test_two_scans_with_large_pools_do_not_overlap() {
        let mut used = UsedSymbols::new();
        let pool = assets(45, "Technology");

        // The scans overlap on S20-S24, but both leave at least 20 unused
        // symbols, so selection stays inside the unused pool
        let first = select_diverse(pool[..25].to_vec(), &mut used, RESULT_CAP, MIN_RESULTS);
        let second = select_diverse(pool[20..45].to_vec(), &mut used, RESULT_CAP, MIN_RESULTS);

        let first_symbols: HashSet<&str> = first.iter().map(|a| a.symbol.as_str()).collect();
        let overlap = second
            .iter()
            .filter(|a| first_symbols.contains(a.symbol.as_str()))
            .count();
        assert_eq!(overlap, 0);
    }
}
