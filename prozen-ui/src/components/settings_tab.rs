//! Zen mode settings panel.

use crate::components::{SettingSlider, SettingText, SettingToggle};
use crate::hooks::PluginStorage;
use leptos::leptos_dom::Mountable;
use leptos::*;
use prozen_core::settings::{
    ANIMATION_DURATION_PLACEHOLDER, VIGNETTE_OPACITY_MAX, VIGNETTE_OPACITY_MIN,
    VIGNETTE_OPACITY_STEP, VIGNETTE_SCALE_MAX, VIGNETTE_SCALE_MIN, VIGNETTE_SCALE_STEP,
};
use prozen_core::{parse_duration, SettingUpdate, SettingsStore};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::HtmlElement;

/// Settings store shared between the plugin and its settings panel.
pub type SharedStore = Rc<RefCell<SettingsStore<PluginStorage>>>;

/// One row per setting. Every edit is saved immediately.
#[component]
pub fn SettingsTab(store: SharedStore) -> impl IntoView {
    let initial = store.borrow().settings().clone();
    let store = store_value(store);

    let (opacity, set_opacity) = create_signal(initial.vignette_opacity);
    let (scale, set_scale) = create_signal(initial.vignette_scale);
    let (show_header, set_show_header) = create_signal(initial.show_header);
    let (show_scroll, set_show_scroll) = create_signal(initial.show_scroll);

    let save = move |update: SettingUpdate| {
        store.with_value(|store| {
            if let Err(e) = store.borrow_mut().set(update) {
                log::error!("Failed to save settings: {}", e);
            }
        });
    };

    view! {
        <div class="prozen-settings">
            <SettingSlider
                name="Vignette opacity"
                desc="Opacity of the vignette's initial color. The higher the value the more saturated the color is. Set to 0 to turn vignetting off."
                value=opacity.into()
                on_change=Callback::new(move |v: f64| {
                    set_opacity.set(v);
                    save(SettingUpdate::VignetteOpacity(v));
                })
                min=VIGNETTE_OPACITY_MIN
                max=VIGNETTE_OPACITY_MAX
                step=VIGNETTE_OPACITY_STEP
            />
            <SettingSlider
                name="Vignette scale"
                desc="How far the vignetting spreads. The higher the value the closer it is to the middle."
                value=scale.into()
                on_change=Callback::new(move |v: f64| {
                    set_scale.set(v);
                    save(SettingUpdate::VignetteScale(v));
                })
                min=VIGNETTE_SCALE_MIN
                max=VIGNETTE_SCALE_MAX
                step=VIGNETTE_SCALE_STEP
            />
            <SettingText
                name="Fade-in duration"
                desc="The duration (in seconds) of fade-in animation on entering Zen mode"
                placeholder=ANIMATION_DURATION_PLACEHOLDER
                initial=initial.animation_duration.to_string()
                on_change=Callback::new(move |text: String| {
                    save(SettingUpdate::AnimationDuration(parse_duration(&text)));
                })
            />
            <SettingToggle
                name="Show header"
                desc="Show the tab's header in Zen mode"
                checked=show_header.into()
                on_change=Callback::new(move |v: bool| {
                    set_show_header.set(v);
                    save(SettingUpdate::ShowHeader(v));
                })
            />
            <SettingToggle
                name="Show scrollbar"
                desc="Show the scrollbar in Zen mode. If it is hidden, scrolling is still available with mousewheel, arrows, touchpad, etc."
                checked=show_scroll.into()
                on_change=Callback::new(move |v: bool| {
                    set_show_scroll.set(v);
                    save(SettingUpdate::ShowScroll(v));
                })
            />
        </div>
    }
}

/// A mounted settings panel. Dropping it disposes the panel's reactive
/// scope and empties the container.
pub struct SettingsPanel {
    container: HtmlElement,
    _view: View,
    _disposer: Disposer,
}

impl SettingsPanel {
    /// Replace the container's content with a fresh panel.
    pub fn mount(container: HtmlElement, store: SharedStore) -> Self {
        container.set_inner_html("");

        let build = as_child_of_current_owner(|store: SharedStore| {
            view! { <SettingsTab store=store /> }.into_view()
        });
        let (view, disposer) = build(store);
        if let Err(e) = container.append_child(&view.get_mountable_node()) {
            log::warn!("Failed to mount settings panel: {:?}", e);
        }

        Self {
            container,
            _view: view,
            _disposer: disposer,
        }
    }
}

impl Drop for SettingsPanel {
    fn drop(&mut self) {
        self.container.set_inner_html("");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::hooks::HostDataStorage;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_test::*;
    use web_sys::{HtmlElement, HtmlInputElement};

    wasm_bindgen_test_configure!(run_in_browser);

    fn store() -> SharedStore {
        let storage = PluginStorage::Host(HostDataStorage::new(&JsValue::UNDEFINED, None));
        let mut store = SettingsStore::new(storage);
        store.load();
        Rc::new(RefCell::new(store))
    }

    fn mount(store: &SharedStore) -> HtmlElement {
        let document = web_sys::window().unwrap().document().unwrap();
        let container: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
        document.body().unwrap().append_child(&container).unwrap();
        let panel_store = Rc::clone(store);
        mount_to(container.clone(), move || view! { <SettingsTab store=panel_store /> });
        container
    }

    fn input(container: &HtmlElement, selector: &str) -> HtmlInputElement {
        container
            .query_selector(selector)
            .unwrap()
            .unwrap()
            .dyn_into()
            .unwrap()
    }

    fn type_into(el: &HtmlInputElement, value: &str) {
        el.set_value(value);
        let init = web_sys::EventInit::new();
        init.set_bubbles(true);
        let event = web_sys::Event::new_with_event_init_dict("input", &init).unwrap();
        el.dispatch_event(&event).unwrap();
    }

    #[wasm_bindgen_test]
    fn renders_five_controls() {
        let container = mount(&store());
        assert_eq!(container.query_selector_all(".setting-item").unwrap().length(), 5);
        assert_eq!(container.query_selector_all("input[type=range]").unwrap().length(), 2);
        assert_eq!(container.query_selector_all("input[type=checkbox]").unwrap().length(), 2);
        assert!(container.text_content().unwrap().contains(" 0.5"));
    }

    #[wasm_bindgen_test]
    fn opacity_slider_saves_and_refreshes_readout() {
        let store = store();
        let container = mount(&store);

        type_into(&input(&container, "input[type=range]"), "0.8");

        assert_eq!(store.borrow().settings().vignette_opacity, 0.8);
        assert!(container.text_content().unwrap().contains(" 0.8"));
    }

    #[wasm_bindgen_test]
    fn duration_field_keeps_invalid_text_as_nan() {
        let store = store();
        let container = mount(&store);

        type_into(&input(&container, "input[type=text]"), "slow");

        assert!(store.borrow().settings().animation_duration.is_nan());
    }

    #[wasm_bindgen_test]
    fn header_toggle_saves() {
        let store = store();
        let container = mount(&store);

        input(&container, "input[type=checkbox]").click();

        assert!(store.borrow().settings().show_header);
    }
}
