use super::datetime;
use super::error::FormError;
use super::events::{FormEvent, FormEventSink};
use super::state::{FieldInput, FormState};
use crate::models::{FormConfig, OtcTrade, OTC_TRADE_LOCATION, TradePayload};

/// Controller behind the manual OTC trade entry form
///
/// The owner passes the edit-mode flag and calls [`OtcTradeForm::apply_record`]
/// every time the trade under edit changes. Field widgets write through
/// [`OtcTradeForm::update`] and read back through [`OtcTradeForm::state`].
pub struct OtcTradeForm<S> {
    edit_mode: bool,
    config: FormConfig,
    state: FormState,
    /// Timestamp of the applied record and the display string derived from it
    source: Option<(i64, String)>,
    sink: S,
}

impl<S: FormEventSink> OtcTradeForm<S> {
    pub fn new(edit_mode: bool, config: FormConfig, sink: S) -> Self {
        Self::with_record(edit_mode, None, config, sink)
    }

    pub fn with_record(
        edit_mode: bool,
        record: Option<&OtcTrade>,
        config: FormConfig,
        sink: S,
    ) -> Self {
        let mut form = Self {
            edit_mode,
            state: FormState::default(),
            source: None,
            config,
            sink,
        };
        form.apply_record(record);
        form
    }

    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    pub fn set_edit_mode(&mut self, edit_mode: bool) {
        if self.edit_mode != edit_mode {
            log::debug!("OTC form edit mode: {} -> {}", self.edit_mode, edit_mode);
        }
        self.edit_mode = edit_mode;
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Re-derive every field from `record`, or reset to defaults when absent
    pub fn apply_record(&mut self, record: Option<&OtcTrade>) {
        match record {
            Some(trade) => {
                log::debug!("Populating OTC form from trade {}", trade.trade_id);
                let state = FormState::from_record(trade, &self.config.datetime_format);
                self.source = Some((trade.timestamp, state.datetime.clone()));
                self.state = state;
            }
            None => self.reset(),
        }
    }

    pub fn update(&mut self, input: FieldInput) {
        self.state.apply(input);
    }

    /// Convert the current fields into the outgoing payload
    ///
    /// Unless `reject_invalid_datetime` is set, an unparseable date/time yields
    /// a payload without timestamp instead of an error.
    pub fn build_payload(&self) -> Result<TradePayload, FormError> {
        let timestamp = match self.resolve_timestamp() {
            Ok(ts) => Some(ts),
            Err(e) if self.config.reject_invalid_datetime => return Err(e),
            Err(e) => {
                log::warn!("Submitting OTC trade without a valid timestamp: {}", e);
                None
            }
        };

        let state = &self.state;
        Ok(TradePayload {
            trade_id: self.edit_mode.then(|| state.trade_id.clone()),
            pair: state.pair.clone(),
            timestamp,
            amount: state.amount.clone(),
            rate: state.rate.clone(),
            fee: state.fee.clone(),
            fee_currency: state.fee_currency.clone(),
            link: state.link.clone(),
            notes: state.notes.clone(),
            trade_type: state.trade_type,
            location: OTC_TRADE_LOCATION.to_string(),
        })
    }

    /// Emit a save event for the current fields
    ///
    /// Fields are left untouched; the owner resets the form by applying a new
    /// record once the save went through.
    pub fn submit(&self) -> Result<TradePayload, FormError> {
        let payload = self.build_payload()?;
        log::info!(
            "Submitting OTC trade ({}) for {}",
            if self.edit_mode { "edit" } else { "create" },
            payload.pair
        );
        self.sink.emit(FormEvent::Save(payload.clone()));
        Ok(payload)
    }

    pub fn cancel(&mut self) {
        log::debug!("OTC form cancelled");
        self.reset();
        self.sink.emit(FormEvent::Cancel);
    }

    fn reset(&mut self) {
        self.state = FormState::blank(&self.config.datetime_format);
        self.source = None;
    }

    fn resolve_timestamp(&self) -> Result<i64, FormError> {
        // An untouched date/time keeps the record's full precision
        if let Some((timestamp, display)) = &self.source {
            if *display == self.state.datetime {
                return Ok(*timestamp);
            }
        }
        datetime::display_to_timestamp(&self.state.datetime, &self.config.datetime_format)
    }
}
