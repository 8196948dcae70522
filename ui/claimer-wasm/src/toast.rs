//! Toast forwarding.
//!
//! The view passes a callback taking `{ title, description, severity }`.
//! Without one, notifications go to the browser console.

use bc_core::Notifier;
use bc_types::Notification;
use wasm_bindgen::JsValue;

#[derive(Default)]
pub struct ToastNotifier {
    callback: Option<js_sys::Function>,
}

impl ToastNotifier {
    pub fn new(callback: Option<js_sys::Function>) -> Self {
        Self { callback }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notification: Notification) {
        let Some(callback) = &self.callback else {
            gloo_console::log!(format!(
                "[{:?}] {}: {}",
                notification.severity, notification.title, notification.description
            ));
            return;
        };

        match serde_wasm_bindgen::to_value(&notification) {
            Ok(value) => {
                if let Err(err) = callback.call1(&JsValue::NULL, &value) {
                    gloo_console::error!("toast callback threw", err);
                }
            }
            Err(err) => gloo_console::error!(format!("failed to encode toast: {err}")),
        }
    }
}
