//! `ClaimerApp`: the handle the views hold.
//!
//! Each method forwards to one store operation. Collections come back as
//! plain JS objects with the same camelCase keys used in storage.

use bc_core::display;
use bc_core::{AppStore, BlockReason, MonitoringOutcome, StoreConfig};
use bc_types::{
    LogStatus, NewAccount, NewChannel, NewCryptoBox, NewLogEntry, SettingsPatch, WizardStep,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::storage::{JsClock, LocalStorageStore};
use crate::toast::ToastNotifier;

type BrowserStore = AppStore<LocalStorageStore, ToastNotifier, JsClock>;

#[derive(Serialize)]
struct MonitoringView {
    outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'static str>,
}

impl From<MonitoringOutcome> for MonitoringView {
    fn from(outcome: MonitoringOutcome) -> Self {
        match outcome {
            MonitoringOutcome::Started => Self {
                outcome: "started",
                reason: None,
            },
            MonitoringOutcome::Stopped => Self {
                outcome: "stopped",
                reason: None,
            },
            MonitoringOutcome::Blocked(BlockReason::NoActiveAccounts) => Self {
                outcome: "blocked",
                reason: Some("no-active-accounts"),
            },
            MonitoringOutcome::Blocked(BlockReason::NoActiveChannels) => Self {
                outcome: "blocked",
                reason: Some("no-active-channels"),
            },
        }
    }
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(JsValue::from)
}

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct ClaimerApp {
    store: BrowserStore,
}

#[wasm_bindgen]
impl ClaimerApp {
    /// Restores state from `localStorage`. `on_toast` receives every notification.
    #[wasm_bindgen(constructor)]
    pub fn new(on_toast: Option<js_sys::Function>) -> ClaimerApp {
        let store = AppStore::with_parts(
            LocalStorageStore,
            ToastNotifier::new(on_toast),
            JsClock,
            StoreConfig::default(),
        );
        gloo_console::log!(format!(
            "claimer state restored, step: {}",
            store.wizard_step()
        ));
        ClaimerApp { store }
    }

    // ── Wizard ──

    #[wasm_bindgen(js_name = wizardStep)]
    pub fn wizard_step(&self) -> String {
        self.store.wizard_step().to_string()
    }

    #[wasm_bindgen(js_name = setWizardStep)]
    pub fn set_wizard_step(&mut self, step: &str) -> Result<(), JsValue> {
        let step: WizardStep = step.parse().map_err(js_error)?;
        self.store.set_wizard_step(step);
        Ok(())
    }

    // ── Accounts ──

    pub fn accounts(&self) -> Result<JsValue, JsValue> {
        to_js(self.store.accounts())
    }

    #[wasm_bindgen(js_name = addAccount)]
    pub fn add_account(
        &mut self,
        name: String,
        api_key: String,
        secret_key: String,
        is_active: bool,
    ) -> Result<JsValue, JsValue> {
        let account = self.store.add_account(NewAccount {
            name,
            api_key,
            secret_key,
            is_active,
        });
        to_js(&account)
    }

    #[wasm_bindgen(js_name = removeAccount)]
    pub fn remove_account(&mut self, id: &str) -> bool {
        self.store.remove_account(id)
    }

    #[wasm_bindgen(js_name = toggleAccountActive)]
    pub fn toggle_account_active(&mut self, id: &str) -> Option<bool> {
        self.store.toggle_account_active(id)
    }

    #[wasm_bindgen(js_name = accountName)]
    pub fn account_name(&self, id: &str) -> Option<String> {
        self.store.account_name(id).map(str::to_owned)
    }

    // ── Channels ──

    pub fn channels(&self) -> Result<JsValue, JsValue> {
        to_js(self.store.channels())
    }

    #[wasm_bindgen(js_name = addChannel)]
    pub fn add_channel(
        &mut self,
        name: String,
        url: String,
        is_active: bool,
    ) -> Result<JsValue, JsValue> {
        let channel = self.store.add_channel(NewChannel {
            name,
            url,
            is_active,
        });
        to_js(&channel)
    }

    #[wasm_bindgen(js_name = removeChannel)]
    pub fn remove_channel(&mut self, id: &str) -> bool {
        self.store.remove_channel(id)
    }

    #[wasm_bindgen(js_name = toggleChannelActive)]
    pub fn toggle_channel_active(&mut self, id: &str) -> Option<bool> {
        self.store.toggle_channel_active(id)
    }

    // ── Activity log ──

    pub fn logs(&self) -> Result<JsValue, JsValue> {
        to_js(self.store.logs())
    }

    #[wasm_bindgen(js_name = logsWithStatus)]
    pub fn logs_with_status(&self, status: &str) -> Result<JsValue, JsValue> {
        let status: LogStatus = status.parse().map_err(js_error)?;
        to_js(&self.store.logs_with_status(status))
    }

    #[wasm_bindgen(js_name = addLog)]
    pub fn add_log(
        &mut self,
        message: String,
        status: &str,
        account_id: Option<String>,
        channel_id: Option<String>,
    ) -> Result<JsValue, JsValue> {
        let status: LogStatus = status.parse().map_err(js_error)?;
        let entry = self.store.add_log(NewLogEntry {
            message,
            status,
            account_id,
            channel_id,
        });
        to_js(&entry)
    }

    #[wasm_bindgen(js_name = clearLogs)]
    pub fn clear_logs(&mut self) {
        self.store.clear_logs();
    }

    // ── Settings ──

    pub fn settings(&self) -> Result<JsValue, JsValue> {
        to_js(&self.store.settings())
    }

    /// Accepts any subset of `{ language, soundEnabled, vibrationEnabled, notificationsEnabled }`.
    #[wasm_bindgen(js_name = updateSettings)]
    pub fn update_settings(&mut self, patch: JsValue) -> Result<JsValue, JsValue> {
        let patch: SettingsPatch = serde_wasm_bindgen::from_value(patch)?;
        to_js(&self.store.update_settings(patch))
    }

    // ── Monitoring ──

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.store.is_running()
    }

    #[wasm_bindgen(js_name = toggleRunning)]
    pub fn toggle_running(&mut self) -> bool {
        self.store.toggle_running()
    }

    /// Start/stop button: `{ outcome: "started" | "stopped" | "blocked", reason? }`.
    #[wasm_bindgen(js_name = requestMonitoringToggle)]
    pub fn request_monitoring_toggle(&mut self) -> Result<JsValue, JsValue> {
        let view = MonitoringView::from(self.store.request_monitoring_toggle());
        to_js(&view)
    }

    #[wasm_bindgen(js_name = statusSummary)]
    pub fn status_summary(&self) -> Result<JsValue, JsValue> {
        to_js(&self.store.status_summary())
    }

    // ── Claims ──

    pub fn claims(&self) -> Result<JsValue, JsValue> {
        to_js(self.store.claims())
    }

    #[wasm_bindgen(js_name = addCryptoBox)]
    pub fn add_crypto_box(
        &mut self,
        coin_name: String,
        amount: f64,
        account_id: String,
    ) -> Result<JsValue, JsValue> {
        let claim = self.store.add_crypto_box(NewCryptoBox {
            coin_name,
            amount,
            account_id,
        });
        to_js(&claim)
    }
}

#[wasm_bindgen(js_name = maskApiKey)]
pub fn mask_api_key(key: &str) -> String {
    display::mask_api_key(key)
}

#[wasm_bindgen(js_name = extractChannelName)]
pub fn extract_channel_name(url: &str) -> String {
    display::extract_channel_name(url)
}
