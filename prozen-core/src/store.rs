//! Settings persistence.
//!
//! The store keeps the in-memory [`ZenSettings`] and writes the full record
//! through a [`SettingsStorage`] backend after every edit.

use crate::settings::{SettingUpdate, ZenSettings};
use serde_json::Value;
use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write settings: {0}")]
    Write(String),
}

/// Backend holding the plugin's persisted record.
pub trait SettingsStorage {
    /// Read the persisted record. `Ok(None)` means nothing was ever saved.
    fn read(&self) -> Result<Option<Value>, StorageError>;

    /// Replace the persisted record.
    fn write(&self, data: &Value) -> Result<(), StorageError>;
}

/// In-process storage. Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    slot: Rc<RefCell<Option<Value>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with a record, as if saved by an earlier session.
    pub fn with_data(data: Value) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(data))),
        }
    }

    pub fn data(&self) -> Option<Value> {
        self.slot.borrow().clone()
    }
}

impl SettingsStorage for MemoryStorage {
    fn read(&self) -> Result<Option<Value>, StorageError> {
        Ok(self.slot.borrow().clone())
    }

    fn write(&self, data: &Value) -> Result<(), StorageError> {
        *self.slot.borrow_mut() = Some(data.clone());
        Ok(())
    }
}

/// Owns the live settings record for one plugin lifetime.
#[derive(Debug)]
pub struct SettingsStore<S> {
    storage: S,
    settings: ZenSettings,
}

impl<S: SettingsStorage> SettingsStore<S> {
    /// Store holding the defaults. Call [`load`](Self::load) to pick up
    /// persisted values.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            settings: ZenSettings::default(),
        }
    }

    /// Read persisted data and merge it over the defaults.
    ///
    /// Never fails: an unreadable backend is treated like an empty record.
    pub fn load(&mut self) -> &ZenSettings {
        let persisted = match self.storage.read() {
            Ok(data) => data,
            Err(e) => {
                log::warn!("Failed to read settings, using defaults: {e}");
                None
            }
        };
        self.settings = ZenSettings::merged(persisted.as_ref());
        log::debug!("Loaded settings: {:?}", self.settings);
        &self.settings
    }

    /// Write the full in-memory record.
    pub fn save(&self) -> Result<(), StorageError> {
        let data = self.settings.to_value()?;
        self.storage.write(&data)
    }

    /// Apply one edit and persist immediately.
    pub fn set(&mut self, update: SettingUpdate) -> Result<(), StorageError> {
        self.settings.apply(update);
        self.save()
    }

    pub fn settings(&self) -> &ZenSettings {
        &self.settings
    }
}
