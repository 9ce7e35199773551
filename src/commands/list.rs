use crate::models::{scan_configs, ScanCategory};

pub fn run() {
    println!("📋 Available Scans\n");

    for category in [
        ScanCategory::Equity,
        ScanCategory::Crypto,
        ScanCategory::CrossAsset,
    ] {
        let scans: Vec<_> = scan_configs()
            .into_iter()
            .filter(|s| s.category == category)
            .collect();
        if scans.is_empty() {
            continue;
        }

        println!("━━━ {} ({} scans) ━━━", category, scans.len());
        for scan in scans {
            println!("  {:<24} {}", scan.slug, scan.scan_name);
        }
        println!();
    }

    println!("💡 Run one with: marketscan scan <slug>");
}
