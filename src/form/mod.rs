pub mod controller;
pub mod datetime;
pub mod error;
pub mod events;
pub mod state;

pub use controller::OtcTradeForm;
pub use error::FormError;
pub use events::{CallbackSink, FormEvent, FormEventSink};
pub use state::{FieldInput, FormState};
