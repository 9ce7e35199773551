use serde::{Deserialize, Serialize};
use std::fmt;

/// Grouping of a scan: which universe it draws from and where it is listed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScanCategory {
    Equity,
    Crypto,
    CrossAsset,
}

impl fmt::Display for ScanCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanCategory::Equity => write!(f, "equity"),
            ScanCategory::Crypto => write!(f, "crypto"),
            ScanCategory::CrossAsset => write!(f, "cross-asset"),
        }
    }
}

/// One catalogue entry: display metadata plus the `logic_key` that selects
/// the predicate in the scan registry. The engine itself only consumes
/// `logic_key` and `dataset`; everything else is presentation metadata.
#[derive(Debug, Clone, Serialize)]
pub struct ScanConfig {
    pub category: ScanCategory,
    pub scan_name: &'static str,
    pub slug: &'static str,
    pub dataset: ScanCategory,
    pub logic_key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Look up a catalogue entry by its URL slug
pub fn find_scan(slug: &str) -> Option<ScanConfig> {
    scan_configs().into_iter().find(|s| s.slug == slug)
}

/// The full scan catalogue, in listing order.
///
/// A few entries reference logic keys with no registry predicate behind them
/// (`near52wLow`, `dividendGrowth`, `debtReduction`, `rsiOverbought`); those
/// pages resolve through the orchestrator's unknown-key fallback and show a
/// plain capped slice of their universe.
pub fn scan_configs() -> Vec<ScanConfig> {
    use ScanCategory::*;
    let entry = |category, scan_name, slug, dataset, logic_key, title, description| ScanConfig {
        category,
        scan_name,
        slug,
        dataset,
        logic_key,
        title,
        description,
    };

    vec![
        entry(
            Equity,
            "High Dividend",
            "high-dividend",
            Equity,
            "highDividend",
            "High Dividend Yield Stocks",
            "Stocks paying a dividend yield above 2.5%, highest payers first.",
        ),
        entry(
            Equity,
            "RSI Oversold Scan",
            "rsi-oversold-scan",
            Equity,
            "rsiOversoldScan",
            "RSI Oversold Stocks",
            "Stocks with 14-day RSI under 35, most oversold first.",
        ),
        entry(
            Equity,
            "Debt - All time low",
            "debt-all-time-low",
            Equity,
            "debtAllTimeLow",
            "Lowest Debt Stocks",
            "Stocks with debt-to-equity under 0.3, least leveraged first.",
        ),
        entry(
            Equity,
            "Price - All time high",
            "price-all-time-high",
            Equity,
            "priceAllTimeHigh",
            "Stocks at All-Time Highs",
            "Stocks closing within 2% of their 52-week high.",
        ),
        entry(
            Equity,
            "IPO Gainers",
            "ipo-gainers",
            Equity,
            "ipoGainers",
            "Fast-Growing Gainers",
            "Stocks with EPS growth above 30% trading up on the day.",
        ),
        entry(
            Equity,
            "Top Gainers",
            "top-gainers",
            Equity,
            "topGainers",
            "Top Gaining Stocks Today",
            "Equities with the largest positive daily change.",
        ),
        entry(
            Equity,
            "Top Losers",
            "top-losers",
            Equity,
            "topLosers",
            "Top Losing Stocks Today",
            "Equities with the largest negative daily change.",
        ),
        entry(
            Crypto,
            "Crypto Top Gainers",
            "crypto-top-gainers",
            Crypto,
            "cryptoTopGainers",
            "Top Gaining Cryptocurrencies",
            "Cryptocurrencies with the largest positive daily change.",
        ),
        entry(
            Crypto,
            "Crypto Top Losers",
            "crypto-top-losers",
            Crypto,
            "cryptoTopLosers",
            "Top Losing Cryptocurrencies",
            "Cryptocurrencies with the largest negative daily change.",
        ),
        entry(
            Equity,
            "Most Active",
            "most-active",
            Equity,
            "mostActive",
            "Most Active Stocks",
            "Equities ranked by traded volume.",
        ),
        entry(
            Crypto,
            "Crypto Most Active",
            "crypto-most-active",
            Crypto,
            "cryptoMostActive",
            "Most Active Cryptocurrencies",
            "Cryptocurrencies ranked by 24-hour volume.",
        ),
        entry(
            Equity,
            "Near 52W Low",
            "near-52w-low",
            Equity,
            "near52wLow",
            "Stocks Near 52-Week Lows",
            "Equities trading close to their 52-week low.",
        ),
        entry(
            Crypto,
            "Near All-Time High",
            "near-ath",
            Crypto,
            "nearATH",
            "Cryptocurrencies Near All-Time Highs",
            "Cryptocurrencies closing within 5% of their yearly high.",
        ),
        entry(
            Equity,
            "Large Deals",
            "large-deals",
            Equity,
            "largeDeals",
            "Large Deal Activity",
            "Equities with volume above one million shares.",
        ),
        entry(
            Crypto,
            "Whale Movements",
            "whale-movements",
            Crypto,
            "whaleMovements",
            "High Whale Activity",
            "Cryptocurrencies with whale activity scores above 70.",
        ),
        entry(
            CrossAsset,
            "News-Linked Moves",
            "news-linked-moves",
            CrossAsset,
            "newsLinkedMoves",
            "News-Linked Price Moves",
            "Assets moving more than 5% in either direction today.",
        ),
        entry(
            Equity,
            "Low PE High ROCE",
            "low-pe-high-roce",
            Equity,
            "lowPE_highROCE",
            "Quality at a Reasonable Price",
            "Stocks with P/E under 20 and ROCE above 15%.",
        ),
        entry(
            Equity,
            "Dividend Growth",
            "dividend-growth",
            Equity,
            "dividendGrowth",
            "Dividend Growth Stocks",
            "Stocks with a record of growing dividend payouts.",
        ),
        entry(
            Equity,
            "Debt Reduction",
            "debt-reduction",
            Equity,
            "debtReduction",
            "Deleveraging Companies",
            "Companies actively reducing their debt load.",
        ),
        entry(
            Equity,
            "High EPS Growth",
            "high-eps-growth",
            Equity,
            "highEPSGrowth",
            "High Earnings Growth",
            "Stocks with EPS growth above 20%.",
        ),
        entry(
            Equity,
            "RSI Overbought",
            "rsi-overbought",
            Equity,
            "rsiOverbought",
            "RSI Overbought Stocks",
            "Stocks with stretched momentum readings.",
        ),
        entry(
            Equity,
            "MACD Bullish Crossover",
            "macd-bullish-crossover",
            Equity,
            "macdBullishCrossover",
            "MACD Bullish Crossovers",
            "Stocks whose MACD line crossed above its signal line.",
        ),
        entry(
            Equity,
            "SMA Golden Cross",
            "sma-golden-cross",
            Equity,
            "smaGoldenCross",
            "Golden Cross Stocks",
            "Stocks with the 50-day average above the 200-day average.",
        ),
        entry(
            Equity,
            "High Volume",
            "high-volume",
            Equity,
            "highVolume",
            "Highest Volume Stocks",
            "Equities ranked by traded volume.",
        ),
        entry(
            Crypto,
            "High Market Cap",
            "high-market-cap-crypto",
            Crypto,
            "highMarketCapCrypto",
            "Largest Cryptocurrencies",
            "Cryptocurrencies with market cap above one billion dollars.",
        ),
        entry(
            Crypto,
            "High Volume 24h",
            "high-volume-24h",
            Crypto,
            "highVolume24h",
            "Highest 24h Volume",
            "Cryptocurrencies with 24-hour volume above $100M.",
        ),
        entry(
            Crypto,
            "Healthy Tokenomics",
            "healthy-tokenomics",
            Crypto,
            "healthyTokenomics",
            "Healthy Tokenomics",
            "Cryptocurrencies with tokenomics health scores above 80.",
        ),
        entry(
            Crypto,
            "High Active Addresses",
            "high-active-addresses",
            Crypto,
            "highActiveAddresses",
            "Most Used Networks",
            "Cryptocurrencies with more than 100k active addresses.",
        ),
        entry(
            Crypto,
            "Low Gas Fees",
            "low-gas-fees",
            Crypto,
            "lowGasFees",
            "Cheapest Networks",
            "Cryptocurrencies with average fees under $1.",
        ),
        entry(
            Crypto,
            "High TVL",
            "high-tvl",
            Crypto,
            "highTVL",
            "Highest Total Value Locked",
            "Cryptocurrencies with more than $1B locked in their ecosystem.",
        ),
        entry(
            Crypto,
            "High Staking Ratio",
            "high-staking-ratio",
            Crypto,
            "highStakingRatio",
            "Most Staked Networks",
            "Cryptocurrencies with over half their supply staked.",
        ),
        entry(
            Crypto,
            "Crypto RSI Oversold",
            "crypto-rsi-oversold",
            Crypto,
            "cryptoRSIOversold",
            "Oversold Cryptocurrencies",
            "Cryptocurrencies with 14-day RSI under 30.",
        ),
        entry(
            Crypto,
            "Crypto MACD Bullish",
            "crypto-macd-bullish",
            Crypto,
            "cryptoMACDBullish",
            "Crypto MACD Crossovers",
            "Cryptocurrencies whose MACD line crossed above its signal line.",
        ),
        entry(
            CrossAsset,
            "Momentum Scanner",
            "momentum-scanner",
            CrossAsset,
            "momentum",
            "Momentum Leaders",
            "Assets with RSI above 50 trading over their 50-day average.",
        ),
        entry(
            CrossAsset,
            "Value Scanner",
            "value-scanner",
            CrossAsset,
            "value",
            "Value Picks",
            "Profitable stocks trading under 15x earnings.",
        ),
        entry(
            CrossAsset,
            "High Credibility",
            "high-credibility",
            CrossAsset,
            "highCredibility",
            "Most Credible Assets",
            "Assets with data credibility scores above 80.",
        ),
        entry(
            CrossAsset,
            "News Sentiment Positive",
            "news-sentiment-positive",
            CrossAsset,
            "newsSentimentPositive",
            "Positive News Flow",
            "Assets with net-positive news sentiment today.",
        ),
    ]
}
