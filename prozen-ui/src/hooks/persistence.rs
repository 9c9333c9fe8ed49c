// prozen-ui/src/hooks/persistence.rs
//! Settings backends for the browser.
//! The host normally owns plugin data: it hands over what it loaded and gets
//! every save back through a callback. Standalone pages fall back to
//! localStorage.

use crate::config::STORAGE_KEY;
use gloo_utils::format::JsValueSerdeExt;
use js_sys::Function;
use prozen_core::{SettingsStorage, StorageError};
use serde_json::Value;
use std::cell::RefCell;
use wasm_bindgen::JsValue;

/// JSON record under a fixed localStorage key.
#[derive(Clone, Debug)]
pub struct LocalStorage {
    key: String,
}

impl LocalStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window =
            web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".into()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".into()))
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new(STORAGE_KEY)
    }
}

impl SettingsStorage for LocalStorage {
    fn read(&self) -> Result<Option<Value>, StorageError> {
        let storage = Self::storage()?;
        let Some(json) = storage
            .get_item(&self.key)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
        else {
            return Ok(None);
        };

        match serde_json::from_str(&json) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                log::warn!("Failed to parse stored settings: {}", e);
                Ok(None)
            }
        }
    }

    fn write(&self, data: &Value) -> Result<(), StorageError> {
        let json = serde_json::to_string(data)?;
        Self::storage()?
            .set_item(&self.key, &json)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

/// Plugin data owned by the host.
///
/// Seeded with the record the host already loaded; each write is passed to
/// the host's save function, whose returned promise is not awaited.
#[derive(Debug)]
pub struct HostDataStorage {
    snapshot: RefCell<Option<Value>>,
    save_data: Option<Function>,
}

impl HostDataStorage {
    pub fn new(data: &JsValue, save_data: Option<Function>) -> Self {
        let snapshot = if data.is_null() || data.is_undefined() {
            None
        } else {
            match data.into_serde::<Value>() {
                Ok(value) => Some(value),
                Err(e) => {
                    log::warn!("Host plugin data is not JSON: {}", e);
                    None
                }
            }
        };
        Self {
            snapshot: RefCell::new(snapshot),
            save_data,
        }
    }
}

impl SettingsStorage for HostDataStorage {
    fn read(&self) -> Result<Option<Value>, StorageError> {
        Ok(self.snapshot.borrow().clone())
    }

    fn write(&self, data: &Value) -> Result<(), StorageError> {
        *self.snapshot.borrow_mut() = Some(data.clone());

        let Some(save) = &self.save_data else {
            return Ok(());
        };
        let js_data = JsValue::from_serde(data)?;
        save.call1(&JsValue::NULL, &js_data)
            .map(|_| ())
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

/// Backend chosen at plugin construction.
#[derive(Debug)]
pub enum PluginStorage {
    Host(HostDataStorage),
    Local(LocalStorage),
}

impl SettingsStorage for PluginStorage {
    fn read(&self) -> Result<Option<Value>, StorageError> {
        match self {
            PluginStorage::Host(s) => s.read(),
            PluginStorage::Local(s) => s.read(),
        }
    }

    fn write(&self, data: &Value) -> Result<(), StorageError> {
        match self {
            PluginStorage::Host(s) => s.write(data),
            PluginStorage::Local(s) => s.write(data),
        }
    }
}
