use crate::error::{AppError, Result};
use crate::models::find_scan;
use crate::scanner::ScanEngine;
use crate::services;
use crate::utils::{format_asset_price, format_change_pct, format_market_cap};

pub fn run(slug: &str, limit: Option<usize>, diversify: bool) {
    match execute(slug, limit, diversify) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            eprintln!("💡 Use 'marketscan list' to see available scans");
            std::process::exit(1);
        }
    }
}

fn execute(slug: &str, limit: Option<usize>, diversify: bool) -> Result<()> {
    let scan = find_scan(slug).ok_or_else(|| AppError::NotFound(format!("scan '{slug}'")))?;

    let universe = services::universe(scan.dataset);
    let mut engine = ScanEngine::new();
    let mut results = if diversify {
        engine.run_diversified(&universe, scan.logic_key)
    } else {
        engine.run(&universe, scan.logic_key)
    };
    if let Some(limit) = limit {
        results.truncate(limit);
    }

    println!("🔍 {} — {}", scan.scan_name, scan.title);
    println!(
        "   {} of {} assets matched\n",
        results.len(),
        universe.len()
    );

    println!(
        "{:<12} {:<34} {:>12} {:>9} {:>20}  {}",
        "SYMBOL", "NAME", "PRICE", "CHANGE", "MARKET CAP", "SECTOR"
    );
    println!("{:-<110}", "");

    for asset in &results {
        let mut name = asset.name.clone();
        if name.len() > 32 {
            name.truncate(31);
            name.push('…');
        }
        println!(
            "{:<12} {:<34} {:>12} {:>9} {:>20}  {}",
            asset.symbol,
            name,
            format_asset_price(asset),
            format_change_pct(asset.daily_change_pct),
            format_market_cap(asset.market_cap),
            asset.sector
        );
    }

    Ok(())
}
