//! web-sys adapters for the zen mode controller.

use prozen_core::{Marker, Region, ZenDocument, ZenView};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

/// Handle to the host's active view, built by the host glue on each command.
#[wasm_bindgen]
#[derive(Clone, Debug)]
pub struct ActiveView {
    view_type: String,
    container_el: Element,
    content_el: Element,
    header_el: Option<Element>,
}

#[wasm_bindgen]
impl ActiveView {
    #[wasm_bindgen(constructor)]
    pub fn new(
        view_type: String,
        container_el: Element,
        content_el: Element,
        header_el: Option<Element>,
    ) -> ActiveView {
        ActiveView {
            view_type,
            container_el,
            content_el,
            header_el,
        }
    }

    #[wasm_bindgen(getter, js_name = viewType)]
    pub fn js_view_type(&self) -> String {
        self.view_type.clone()
    }
}

impl ActiveView {
    fn region(&self, region: Region) -> Option<&Element> {
        match region {
            Region::Content => Some(&self.content_el),
            Region::Header => self.header_el.as_ref(),
        }
    }
}

impl ZenView for ActiveView {
    fn view_type(&self) -> &str {
        &self.view_type
    }

    fn request_fullscreen(&self) {
        if let Err(e) = self.container_el.request_fullscreen() {
            log::warn!("Fullscreen request rejected: {:?}", e);
        }
    }

    fn add_markers(&self, region: Region, markers: &[Marker]) {
        let Some(el) = self.region(region) else {
            return;
        };
        let class_list = el.class_list();
        for marker in markers {
            if let Err(e) = class_list.add_1(marker.class_name()) {
                log::warn!("Failed to add class {}: {:?}", marker.class_name(), e);
            }
        }
    }

    fn remove_markers(&self, region: Region, markers: &[Marker]) {
        let Some(el) = self.region(region) else {
            return;
        };
        let class_list = el.class_list();
        for marker in markers {
            if let Err(e) = class_list.remove_1(marker.class_name()) {
                log::warn!("Failed to remove class {}: {:?}", marker.class_name(), e);
            }
        }
    }
}

/// The global document, for root style properties and fullscreen release.
pub struct DomDocument {
    document: Document,
}

impl DomDocument {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn current() -> Option<Self> {
        web_sys::window()?.document().map(Self::new)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn root(&self) -> Option<HtmlElement> {
        self.document.document_element()?.dyn_into().ok()
    }
}

impl ZenDocument for DomDocument {
    fn set_style_property(&self, name: &str, value: &str) {
        let Some(root) = self.root() else {
            log::warn!("No document root to set {} on", name);
            return;
        };
        if let Err(e) = root.style().set_property(name, value) {
            log::warn!("Failed to set {}: {:?}", name, e);
        }
    }

    fn exit_fullscreen(&self) {
        self.document.exit_fullscreen();
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use prozen_core::{ModeController, ZenMode, ZenSettings, VIGNETTE_SCALE_VAR};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn div(document: &Document, class: &str) -> Element {
        let el = document.create_element("div").unwrap();
        el.set_class_name(class);
        el
    }

    fn view(view_type: &str) -> ActiveView {
        let document = web_sys::window().unwrap().document().unwrap();
        ActiveView::new(
            view_type.to_string(),
            div(&document, "workspace-leaf"),
            div(&document, "view-content"),
            Some(div(&document, "view-header")),
        )
    }

    #[wasm_bindgen_test]
    fn toggle_applies_and_reverts_classes() {
        let doc = DomDocument::current().unwrap();
        let view = view("markdown");
        let mut controller = ModeController::new();
        let settings = ZenSettings {
            show_scroll: false,
            ..ZenSettings::default()
        };

        assert_eq!(
            controller.toggle(&doc, Some(&view), &settings),
            Some(ZenMode::Zen)
        );
        assert_eq!(view.content_el.class_name(), "view-content noscroll animate vignette");
        assert_eq!(view.header_el.as_ref().unwrap().class_name(), "view-header hide");

        controller.toggle(&doc, Some(&view), &settings);
        assert_eq!(view.content_el.class_name(), "view-content");
        assert_eq!(view.header_el.as_ref().unwrap().class_name(), "view-header");
    }

    #[wasm_bindgen_test]
    fn enter_writes_root_style_properties() {
        let doc = DomDocument::current().unwrap();
        let view = view("graph");
        let mut controller = ModeController::new();
        let settings = ZenSettings {
            vignette_scale: 30.0,
            ..ZenSettings::default()
        };

        controller.toggle(&doc, Some(&view), &settings);
        let root: HtmlElement = doc.document().document_element().unwrap().dyn_into().unwrap();
        assert_eq!(
            root.style().get_property_value(VIGNETTE_SCALE_VAR).unwrap(),
            "30%"
        );
        assert!(view.content_el.class_list().contains("vignette-radial"));

        controller.release(&view);
    }

    #[wasm_bindgen_test]
    fn missing_header_is_skipped() {
        let doc = DomDocument::current().unwrap();
        let document = doc.document().clone();
        let view = ActiveView::new(
            "markdown".to_string(),
            div(&document, "workspace-leaf"),
            div(&document, "view-content"),
            None,
        );
        let mut controller = ModeController::new();

        controller.toggle(&doc, Some(&view), &ZenSettings::default());
        assert!(view.content_el.class_list().contains("animate"));
        controller.release(&view);
    }
}
