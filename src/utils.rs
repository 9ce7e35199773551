use crate::models::{AssetRecord, AssetType};

/// Group digits with commas: 45000000 -> "45,000,000"
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Format a market cap already expressed in crores, switching to lakh crores
/// for the largest companies
pub fn format_market_cap(crores: f64) -> String {
    let lakh_crores = crores / 100_000.0;
    if lakh_crores >= 1.0 {
        format!("₹{lakh_crores:.1} lakh crores")
    } else {
        format!("₹{} crores", format_number(crores.round() as u64))
    }
}

/// Format a price in the asset's native currency unit
pub fn format_asset_price(asset: &AssetRecord) -> String {
    match asset.asset_type {
        AssetType::Equity => format!("₹{:.2}", asset.price),
        AssetType::Crypto => format!("${:.2}", asset.price),
    }
}

/// Format an optional percentage with a sign, or a dash when absent
pub fn format_change_pct(change: Option<f64>) -> String {
    match change {
        Some(pct) => format!("{pct:+.2}%"),
        None => "—".to_string(),
    }
}
