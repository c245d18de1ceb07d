//! Persistence helpers for the app shell and the notebook snapshot.

use crate::core::theme::ThemeMode;
use crate::i18n::{DEFAULT_LOCALE, LocaleCode};
use crate::core::snapshot::{SnapshotLoad, decode_snapshot};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;
use notebook_models::Notebook;
use serde::Serialize;

pub(crate) const THEME_KEY: &str = "notebook.theme";
pub(crate) const LOCALE_KEY: &str = "notebook.locale";
pub(crate) const NOTEBOOK_KEY: &str = "notebook.data";
pub(crate) const NOTEBOOK_BACKUP_KEY: &str = "notebook.data.corrupt";

pub(crate) fn load_theme() -> ThemeMode {
    LocalStorage::get::<String>(THEME_KEY)
        .map(|value| ThemeMode::from_value(&value))
        .unwrap_or_default()
}

pub(crate) fn load_locale() -> LocaleCode {
    if let Ok(value) = LocalStorage::get::<String>(LOCALE_KEY) {
        if let Some(locale) = LocaleCode::from_lang_tag(&value) {
            return locale;
        }
    }
    if let Some(nav) = window().navigator().language() {
        if let Some(locale) = LocaleCode::from_lang_tag(&nav) {
            return locale;
        }
    }
    DEFAULT_LOCALE
}

/// Load the stored notebook. Text that fails to parse is copied to
/// [`NOTEBOOK_BACKUP_KEY`] and the session starts empty.
pub(crate) fn load_notebook() -> Notebook {
    let raw = match LocalStorage::raw().get_item(NOTEBOOK_KEY) {
        Ok(raw) => raw,
        Err(err) => {
            log_storage_error("get", NOTEBOOK_KEY, &format!("{err:?}"));
            None
        }
    };
    let load = decode_snapshot(raw);
    if let SnapshotLoad::Corrupt { reason, .. } = &load {
        log_storage_error("parse", NOTEBOOK_KEY, reason);
    }
    if let Some(raw) = load.backup() {
        if let Err(err) = LocalStorage::raw().set_item(NOTEBOOK_BACKUP_KEY, raw) {
            log_storage_error("set", NOTEBOOK_BACKUP_KEY, &format!("{err:?}"));
        }
    }
    load.into_notebook()
}

pub(crate) fn persist_theme(theme: ThemeMode) {
    set_storage(THEME_KEY, theme.as_str());
}

pub(crate) fn persist_locale(locale: LocaleCode) {
    set_storage(LOCALE_KEY, locale.code());
}

pub(crate) fn persist_notebook(notebook: &Notebook) {
    set_storage(NOTEBOOK_KEY, notebook);
}

fn set_storage<T: Serialize>(key: &'static str, value: T) {
    if let Err(err) = LocalStorage::set(key, value) {
        log_storage_error("set", key, &err.to_string());
    }
}

fn log_storage_error(operation: &'static str, key: &'static str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
