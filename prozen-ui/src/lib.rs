pub mod components;
pub mod config;
pub mod dom;
pub mod hooks;

use crate::components::{SettingsPanel, SharedStore};
use crate::dom::{ActiveView, DomDocument};
use crate::hooks::{FullscreenListener, HostDataStorage, LocalStorage, PluginStorage};
use js_sys::Function;
use prozen_core::{Command, ModeController, SettingsStore, ZenMode, ZEN_MODE};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

struct PluginState {
    store: SharedStore,
    controller: RefCell<ModeController>,
    /// View zen mode was entered on, reverted when fullscreen ends elsewhere
    zen_view: RefCell<Option<ActiveView>>,
    listener: RefCell<Option<FullscreenListener>>,
    settings_panel: RefCell<Option<SettingsPanel>>,
}

impl PluginState {
    fn new(storage: PluginStorage) -> Self {
        Self {
            store: Rc::new(RefCell::new(SettingsStore::new(storage))),
            controller: RefCell::new(ModeController::new()),
            zen_view: RefCell::new(None),
            listener: RefCell::new(None),
            settings_panel: RefCell::new(None),
        }
    }

    fn toggle(&self, view: Option<ActiveView>) {
        let Some(document) = DomDocument::current() else {
            return;
        };
        let settings = self.store.borrow().settings().clone();
        let next = self
            .controller
            .borrow_mut()
            .toggle(&document, view.as_ref(), &settings);

        match next {
            Some(ZenMode::Zen) => *self.zen_view.borrow_mut() = view,
            Some(ZenMode::Normal) => {
                self.zen_view.borrow_mut().take();
            }
            None => {}
        }
    }

    /// Fullscreen ended without the command, e.g. Escape.
    fn on_fullscreen_change(&self, fullscreen: bool) {
        if fullscreen {
            return;
        }
        let Some(view) = self.zen_view.borrow_mut().take() else {
            return;
        };
        log::debug!("Fullscreen ended outside zen mode command");
        self.controller.borrow_mut().release(&view);
    }

    fn leave_zen(&self) {
        let view = self.zen_view.borrow_mut().take();
        if view.is_some() && self.controller.borrow().is_zen() {
            self.toggle(view);
        }
    }
}

/// Zen mode plugin instance driven by the host glue.
#[wasm_bindgen]
pub struct ProzenPlugin {
    state: Rc<PluginState>,
}

impl ProzenPlugin {
    fn with_storage(storage: PluginStorage) -> ProzenPlugin {
        ProzenPlugin {
            state: Rc::new(PluginState::new(storage)),
        }
    }
}

#[wasm_bindgen]
impl ProzenPlugin {
    /// Plugin backed by host plugin data: `data` is what the host loaded,
    /// `save_data` receives every updated record.
    #[wasm_bindgen(constructor)]
    pub fn new(data: JsValue, save_data: Option<Function>) -> ProzenPlugin {
        Self::with_storage(PluginStorage::Host(HostDataStorage::new(&data, save_data)))
    }

    /// Plugin persisting its settings in localStorage.
    #[wasm_bindgen(js_name = withLocalStorage)]
    pub fn with_local_storage() -> ProzenPlugin {
        Self::with_storage(PluginStorage::Local(LocalStorage::default()))
    }

    pub fn onload(&self) {
        console_error_panic_hook::set_once();
        _ = console_log::init_with_level(log::Level::Debug);

        self.state.store.borrow_mut().load();

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::warn!("No document, zen mode will not track fullscreen changes");
            return;
        };
        let state = Rc::downgrade(&self.state);
        match FullscreenListener::install(document, move |fullscreen| {
            if let Some(state) = state.upgrade() {
                state.on_fullscreen_change(fullscreen);
            }
        }) {
            Ok(listener) => *self.state.listener.borrow_mut() = Some(listener),
            Err(e) => log::warn!("Failed to watch fullscreen changes: {:?}", e),
        }

        log::info!("Zen mode plugin loaded");
    }

    pub fn onunload(&self) {
        self.state.listener.borrow_mut().take();
        self.state.settings_panel.borrow_mut().take();
        self.state.leave_zen();
        log::info!("Zen mode plugin unloaded");
    }

    /// Enter or leave zen mode. `view` is the active view, if any.
    #[wasm_bindgen(js_name = toggleZenMode)]
    pub fn toggle_zen_mode(&self, view: Option<ActiveView>) {
        self.state.toggle(view);
    }

    /// Run a registered command. Returns false for unknown ids.
    #[wasm_bindgen(js_name = runCommand)]
    pub fn run_command(&self, id: &str, view: Option<ActiveView>) -> bool {
        match Command::find(id) {
            Some(command) if command == ZEN_MODE => {
                self.state.toggle(view);
                true
            }
            _ => {
                log::warn!("Unknown command: {}", id);
                false
            }
        }
    }

    /// Render the settings panel into the host's settings container.
    #[wasm_bindgen(js_name = displaySettings)]
    pub fn display_settings(&self, container: HtmlElement) {
        // Dispose the previous panel before building the next one.
        self.state.settings_panel.borrow_mut().take();
        let panel = SettingsPanel::mount(container, Rc::clone(&self.state.store));
        *self.state.settings_panel.borrow_mut() = Some(panel);
    }

    #[wasm_bindgen(js_name = isZen)]
    pub fn is_zen(&self) -> bool {
        self.state.controller.borrow().is_zen()
    }

    /// Current settings record as JSON.
    #[wasm_bindgen(js_name = settingsJson)]
    pub fn settings_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.state.store.borrow().settings())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = commandId)]
    pub fn command_id() -> String {
        ZEN_MODE.id.to_string()
    }

    #[wasm_bindgen(js_name = commandName)]
    pub fn command_name() -> String {
        ZEN_MODE.name.to_string()
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Document, Element};

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    fn div(class: &str) -> Element {
        let el = document().create_element("div").unwrap();
        el.set_class_name(class);
        el
    }

    fn plugin() -> ProzenPlugin {
        let data = js_sys::JSON::parse(r#"{"showScroll": false}"#).unwrap();
        let plugin = ProzenPlugin::new(data, None);
        plugin.onload();
        plugin
    }

    #[wasm_bindgen_test]
    fn command_toggles_zen_mode() {
        let plugin = plugin();
        let content = div("view-content");
        let view = || {
            ActiveView::new(
                "markdown".into(),
                div("workspace-leaf"),
                content.clone(),
                None,
            )
        };

        assert!(plugin.run_command("zenmode", Some(view())));
        assert!(plugin.is_zen());
        assert!(content.class_list().contains("noscroll"));

        assert!(plugin.run_command("zenmode", Some(view())));
        assert!(!plugin.is_zen());
        assert_eq!(content.class_name(), "view-content");
    }

    #[wasm_bindgen_test]
    fn unknown_command_and_missing_view_are_ignored() {
        let plugin = plugin();
        assert!(!plugin.run_command("focus", None));
        assert!(plugin.run_command("zenmode", None));
        assert!(!plugin.is_zen());
    }

    #[wasm_bindgen_test]
    fn fullscreen_exit_elsewhere_releases_zen_mode() {
        let plugin = plugin();
        let content = div("view-content");
        plugin.toggle_zen_mode(Some(ActiveView::new(
            "graph".into(),
            div("workspace-leaf"),
            content.clone(),
            None,
        )));
        assert!(plugin.is_zen());

        let event = web_sys::Event::new(crate::config::FULLSCREEN_CHANGE_EVENT).unwrap();
        document().dispatch_event(&event).unwrap();

        assert!(!plugin.is_zen());
        assert_eq!(content.class_name(), "view-content");
        plugin.onunload();
    }

    fn settings_container() -> HtmlElement {
        let container: HtmlElement = div("vertical-tab-content").dyn_into().unwrap();
        document().body().unwrap().append_child(&container).unwrap();
        container
    }

    fn setting_rows(container: &HtmlElement) -> u32 {
        container.query_selector_all(".setting-item").unwrap().length()
    }

    #[wasm_bindgen_test]
    fn reopening_settings_replaces_the_panel() {
        let plugin = plugin();
        let container = settings_container();

        plugin.display_settings(container.clone());
        plugin.display_settings(container.clone());
        assert_eq!(setting_rows(&container), 5);

        plugin.display_settings(container.clone());
        assert_eq!(setting_rows(&container), 5);
    }

    #[wasm_bindgen_test]
    fn unload_tears_down_settings_panel() {
        let plugin = plugin();
        let container = settings_container();

        plugin.display_settings(container.clone());
        assert_eq!(setting_rows(&container), 5);

        plugin.onunload();
        assert_eq!(setting_rows(&container), 0);
    }

    #[wasm_bindgen_test]
    fn settings_json_reflects_host_data() {
        let plugin = plugin();
        let json: serde_json::Value =
            serde_json::from_str(&plugin.settings_json().unwrap()).unwrap();
        assert_eq!(json["showScroll"], serde_json::json!(false));
        assert_eq!(json["vignetteScale"], serde_json::json!(20.0));
        assert_eq!(ProzenPlugin::command_id(), "zenmode");
        assert_eq!(ProzenPlugin::command_name(), "Zen mode");
    }
}
