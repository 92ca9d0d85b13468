use std::sync::Mutex;
use tauri::{AppHandle, Emitter, Runtime, State};

use crate::form::{FieldInput, FormEvent, FormEventSink, FormState, OtcTradeForm};
use crate::models::{OtcTrade, TradePayload};

pub const SAVE_EVENT: &str = "otc-trade-save";
pub const CANCEL_EVENT: &str = "otc-trade-cancel";

/// Forwards form events to the webview as Tauri events
pub struct AppEmitter<R: Runtime> {
    app_handle: AppHandle<R>,
}

impl<R: Runtime> AppEmitter<R> {
    pub fn new(app_handle: AppHandle<R>) -> Self {
        Self { app_handle }
    }
}

impl<R: Runtime> FormEventSink for AppEmitter<R> {
    fn emit(&self, event: FormEvent) {
        let result = match &event {
            FormEvent::Save(payload) => self.app_handle.emit(SAVE_EVENT, payload),
            FormEvent::Cancel => self.app_handle.emit(CANCEL_EVENT, ()),
        };
        if let Err(e) = result {
            log::error!("Failed to emit OTC form event: {}", e);
        }
    }
}

/// Form instance held in the app's managed state
pub struct ManagedForm<R: Runtime> {
    pub form: Mutex<OtcTradeForm<AppEmitter<R>>>,
}

/// Push the owner's inputs: edit mode and the trade under edit (if any)
#[tauri::command]
pub async fn set_props<R: Runtime>(
    state: State<'_, ManagedForm<R>>,
    edit_mode: bool,
    record: Option<OtcTrade>,
) -> Result<FormState, String> {
    let mut form = state.form.lock().map_err(|e| e.to_string())?;
    form.set_edit_mode(edit_mode);
    form.apply_record(record.as_ref());
    Ok(form.state().clone())
}

#[tauri::command]
pub async fn update_field<R: Runtime>(
    state: State<'_, ManagedForm<R>>,
    input: FieldInput,
) -> Result<FormState, String> {
    let mut form = state.form.lock().map_err(|e| e.to_string())?;
    form.update(input);
    Ok(form.state().clone())
}

#[tauri::command]
pub async fn get_state<R: Runtime>(
    state: State<'_, ManagedForm<R>>,
) -> Result<FormState, String> {
    let form = state.form.lock().map_err(|e| e.to_string())?;
    Ok(form.state().clone())
}

#[tauri::command]
pub async fn submit<R: Runtime>(
    state: State<'_, ManagedForm<R>>,
) -> Result<TradePayload, String> {
    let form = state.form.lock().map_err(|e| e.to_string())?;
    Ok(form.submit()?)
}

#[tauri::command]
pub async fn cancel<R: Runtime>(
    state: State<'_, ManagedForm<R>>,
) -> Result<FormState, String> {
    let mut form = state.form.lock().map_err(|e| e.to_string())?;
    form.cancel();
    Ok(form.state().clone())
}
