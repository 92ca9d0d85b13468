use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Location marker attached to every manually recorded trade
pub const OTC_TRADE_LOCATION: &str = "external";

/// Trade direction; accepts "buy"/"sell" in any case from the frontend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum TradeType {
    #[default]
    Buy,
    Sell,
}

impl TradeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeType::Buy => "buy",
            TradeType::Sell => "sell",
        }
    }
}

impl fmt::Display for TradeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TradeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "buy" => Ok(TradeType::Buy),
            "sell" => Ok(TradeType::Sell),
            other => Err(format!("Unknown trade type: {}", other)),
        }
    }
}

impl TryFrom<String> for TradeType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Existing OTC trade as handed to the form for editing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtcTrade {
    pub trade_id: String,
    pub pair: String,
    pub timestamp: i64,
    pub amount: String,
    pub rate: String,
    pub fee: String,
    pub fee_currency: String,
    pub link: String,
    pub notes: String,
    pub trade_type: TradeType,
}

/// Normalized trade emitted on save
///
/// `trade_id` is only set when an existing trade is being edited; its absence
/// asks the receiver to register a new trade. `timestamp` is `None` when the
/// entered date/time could not be parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_id: Option<String>,
    pub pair: String,
    pub timestamp: Option<i64>,
    pub amount: String,
    pub rate: String,
    pub fee: String,
    pub fee_currency: String,
    pub link: String,
    pub notes: String,
    pub trade_type: TradeType,
    pub location: String,
}
