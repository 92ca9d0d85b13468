#[cfg(feature = "desktop")]
pub mod commands;
pub mod form;
pub mod models;

pub use form::{
    CallbackSink, FieldInput, FormError, FormEvent, FormEventSink, FormState, OtcTradeForm,
};
pub use models::{FormConfig, OtcTrade, OTC_TRADE_LOCATION, TradePayload, TradeType};

#[cfg(feature = "desktop")]
use std::sync::Mutex;
#[cfg(feature = "desktop")]
use tauri::{
    plugin::{Builder, TauriPlugin},
    Manager, Runtime,
};

#[cfg(feature = "desktop")]
pub const PLUGIN_NAME: &str = "otc-trade-form";

/// Tauri plugin hosting the OTC trade form
///
/// Configuration is read from `plugins.otc-trade-form` in the app config; a
/// missing block falls back to [`FormConfig::default`].
#[cfg(feature = "desktop")]
pub fn init<R: Runtime>() -> TauriPlugin<R, Option<FormConfig>> {
    Builder::<R, Option<FormConfig>>::new(PLUGIN_NAME)
        .invoke_handler(tauri::generate_handler![
            commands::set_props,
            commands::update_field,
            commands::get_state,
            commands::submit,
            commands::cancel,
        ])
        .setup(|app, api| {
            let config = api.config().clone().unwrap_or_default();
            config.validate()?;
            log::info!(
                "OTC trade form ready (datetime format: {})",
                config.datetime_format
            );

            let form = OtcTradeForm::new(false, config, commands::AppEmitter::new(app.clone()));
            app.manage(commands::ManagedForm {
                form: Mutex::new(form),
            });

            Ok(())
        })
        .build()
}
