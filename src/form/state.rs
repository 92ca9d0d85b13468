use serde::{Deserialize, Serialize};

use super::datetime;
use crate::models::{OtcTrade, TradeType};

/// Editable field values of the OTC trade form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormState {
    pub trade_id: String,
    pub pair: String,
    /// Date/time in the configured display format
    pub datetime: String,
    pub amount: String,
    pub rate: String,
    pub fee: String,
    pub fee_currency: String,
    pub link: String,
    pub notes: String,
    pub trade_type: TradeType,
}

impl FormState {
    /// Create-mode defaults: empty fields, buy, current moment
    pub fn blank(datetime_format: &str) -> Self {
        Self {
            datetime: datetime::now_display(datetime_format),
            ..Default::default()
        }
    }

    pub fn from_record(trade: &OtcTrade, datetime_format: &str) -> Self {
        let datetime = match datetime::timestamp_to_display(trade.timestamp, datetime_format) {
            Ok(display) => display,
            Err(e) => {
                log::warn!("Trade {} has an unusable timestamp: {}", trade.trade_id, e);
                String::new()
            }
        };

        Self {
            trade_id: trade.trade_id.clone(),
            pair: trade.pair.clone(),
            datetime,
            amount: trade.amount.clone(),
            rate: trade.rate.clone(),
            fee: trade.fee.clone(),
            fee_currency: trade.fee_currency.clone(),
            link: trade.link.clone(),
            notes: trade.notes.clone(),
            trade_type: trade.trade_type,
        }
    }

    pub fn apply(&mut self, input: FieldInput) {
        match input {
            FieldInput::Pair(value) => self.pair = value,
            FieldInput::Datetime(value) => self.datetime = value,
            FieldInput::Amount(value) => self.amount = value,
            FieldInput::Rate(value) => self.rate = value,
            FieldInput::Fee(value) => self.fee = value,
            FieldInput::FeeCurrency(value) => self.fee_currency = value,
            FieldInput::Link(value) => self.link = value,
            FieldInput::Notes(value) => self.notes = value,
            FieldInput::TradeType(value) => self.trade_type = value,
        }
    }
}

/// Single-field change coming from an input widget
///
/// The identifier is not user editable and has no variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum FieldInput {
    Pair(String),
    Datetime(String),
    Amount(String),
    Rate(String),
    Fee(String),
    FeeCurrency(String),
    Link(String),
    Notes(String),
    TradeType(TradeType),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_input_from_frontend_json() {
        let input: FieldInput = serde_json::from_str(r#"{"field": "fee_currency", "value": "EUR"}"#).unwrap();
        assert_eq!(input, FieldInput::FeeCurrency("EUR".to_string()));

        let input: FieldInput = serde_json::from_str(r#"{"field": "trade_type", "value": "sell"}"#).unwrap();
        assert_eq!(input, FieldInput::TradeType(TradeType::Sell));

        // Select widgets may hand over the option label as-is
        let input: FieldInput = serde_json::from_str(r#"{"field": "trade_type", "value": "Sell"}"#).unwrap();
        assert_eq!(input, FieldInput::TradeType(TradeType::Sell));

        assert!(serde_json::from_str::<FieldInput>(r#"{"field": "trade_id", "value": "x"}"#).is_err());
    }

    #[test]
    fn test_apply_touches_only_one_field() {
        let mut state = FormState::default();
        state.apply(FieldInput::Rate("9000".to_string()));
        assert_eq!(
            state,
            FormState {
                rate: "9000".to_string(),
                ..Default::default()
            }
        );
    }
}
