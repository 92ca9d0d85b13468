use serde::Serialize;
use tokio::sync::mpsc::UnboundedSender;

use crate::models::TradePayload;

/// Event raised by the form towards its owner
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum FormEvent {
    Save(TradePayload),
    Cancel,
}

/// Receiver of form events
///
/// Emission is fire-and-forget: implementations must not block and have no way
/// to report delivery failures back to the form.
pub trait FormEventSink {
    fn emit(&self, event: FormEvent);
}

impl FormEventSink for UnboundedSender<FormEvent> {
    fn emit(&self, event: FormEvent) {
        if self.send(event).is_err() {
            log::warn!("Form event dropped: listener is gone");
        }
    }
}

/// Sink forwarding every event to a closure
pub struct CallbackSink<F>(pub F);

impl<F> FormEventSink for CallbackSink<F>
where
    F: Fn(FormEvent),
{
    fn emit(&self, event: FormEvent) {
        (self.0)(event)
    }
}
