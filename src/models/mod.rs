mod asset;
mod filter_config;
mod scan_config;
mod source;

pub use asset::{AssetRecord, AssetType, NewsSentiment};
pub use filter_config::{
    BollingerSignal, EmaSignal, FilterState, FundamentalFilters, MaSignal, MacdDirection,
    MarketCapRange, TechnicalFilters, VwapSignal, Week52Signal,
};
pub use scan_config::{find_scan, scan_configs, ScanCategory, ScanConfig};
pub use source::{
    CredibilityScore, CryptoFundamentalRow, FundamentalRow, NewsItem, TechnicalRow,
    WhaleTransaction, WhaleTransactionType,
};

/// Full candidate set for one page view
pub type Universe = Vec<AssetRecord>;
