use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlImageElement, KeyboardEvent};

use crate::config::PageConfig;
use crate::overlay::{self, OverlayCore};
use crate::viewport::PinchUnlock;

#[allow(dead_code)]
pub(crate) const VIEWPORT_META_SELECTOR: &str = "meta[name=viewport]";
#[allow(dead_code)]
pub(crate) const ESCAPE_KEY: &str = "Escape";

/// One instance per page session. Owns both enhancement behaviors and the
/// listener handles that keep them wired.
#[allow(dead_code)]
pub(crate) struct PageApp {
    document: Document,
    overlay: Element,
    asset_base: String,
    overlay_core: RefCell<OverlayCore>,
    pinch: RefCell<PinchUnlock>,
    listeners: RefCell<Vec<EventListener>>,
}

pub(crate) fn run() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return;
        };
        let overlay_el = match document.get_element_by_id(overlay::OVERLAY_ID) {
            Some(element) => element,
            None => {
                crate::boot::fail("overlay-missing", "#image-overlay element not found");
                panic!("#image-overlay element not found");
            }
        };
        let page_config = crate::config::load_page_config(&document);
        let app = Rc::new(PageApp::new(document, overlay_el, page_config));
        app.install();
        PAGE_APP.with(|slot| {
            *slot.borrow_mut() = Some(app);
        });
        crate::boot::ready();
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        eprintln!("raitobokkusu only runs on wasm32 targets");
    }
}

thread_local! {
    static PAGE_APP: RefCell<Option<Rc<PageApp>>> = RefCell::new(None);
}

#[allow(dead_code)]
impl PageApp {
    pub(crate) fn new(document: Document, overlay: Element, page_config: PageConfig) -> Self {
        Self {
            document,
            overlay,
            asset_base: page_config.asset_base,
            overlay_core: RefCell::new(OverlayCore::new()),
            pinch: RefCell::new(PinchUnlock::new()),
            listeners: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn install(self: &Rc<Self>) {
        self.install_viewport_fix();
        let wired = self.install_lightbox();
        gloo::console::log!("raitobokkusu ready", wired);
    }

    /// Clamps the viewport meta tag until the first pinch gesture, then
    /// widens it once. Pages without the tag are left alone.
    pub(crate) fn install_viewport_fix(self: &Rc<Self>) {
        let Ok(metas) = self.document.query_selector_all(VIEWPORT_META_SELECTOR) else {
            return;
        };
        let length = metas.length();
        if length == 0 {
            return;
        }
        let Some(node) = metas.item(length - 1) else {
            return;
        };
        let Ok(meta) = node.dyn_into::<Element>() else {
            return;
        };
        let _ = meta.set_attribute("content", &self.pinch.borrow().content());

        let view = Rc::clone(self);
        let listener = EventListener::once_with_options(
            &self.document,
            "gesturestart",
            EventListenerOptions {
                phase: EventListenerPhase::Capture,
                passive: true,
            },
            move |_event: &Event| {
                let Some(content) = view.pinch.borrow_mut().unlock() else {
                    return;
                };
                let _ = meta.set_attribute("content", &content);
            },
        );
        self.listeners.borrow_mut().push(listener);
    }

    /// Wires every image present in the document right now; images added
    /// later are not picked up. Returns the number of wired images.
    pub(crate) fn install_lightbox(self: &Rc<Self>) -> u32 {
        let mut listeners = self.listeners.borrow_mut();

        let view = Rc::clone(self);
        let listener = EventListener::new(&self.overlay, "click", move |_event: &Event| {
            view.hide_overlay();
        });
        listeners.push(listener);

        let images = self.document.images();
        let count = images.length();
        for index in 0..count {
            let Some(element) = images.item(index) else {
                continue;
            };
            let Ok(image) = element.dyn_into::<HtmlImageElement>() else {
                continue;
            };
            let view = Rc::clone(self);
            let target = image.clone();
            let listener = EventListener::new(&target, "click", move |_event: &Event| {
                view.show_image(&image);
            });
            listeners.push(listener);
        }

        let view = Rc::clone(self);
        let listener = EventListener::new(&self.document, "keyup", move |event: &Event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if event.key() != ESCAPE_KEY {
                return;
            }
            let visible = view.overlay_core.borrow().is_visible();
            if visible {
                view.hide_overlay();
            }
        });
        listeners.push(listener);

        count
    }

    fn show_image(&self, image: &HtmlImageElement) {
        self.overlay.set_inner_html("");
        let close = HtmlImageElement::new().expect("create close icon");
        close.set_src(&overlay::close_icon_url(&self.asset_base));
        close.set_alt("close");
        close.set_class_name("lightbox-close");
        let full = HtmlImageElement::new().expect("create lightbox image");
        full.set_src(&image.src());
        full.set_alt(&image.alt());
        full.set_class_name("lightbox-image");
        let _ = self.overlay.append_child(&close);
        let _ = self.overlay.append_child(&full);
        self.overlay_core.borrow_mut().show();
        let _ = self.overlay.class_list().remove_1(overlay::HIDDEN_CLASS);
    }

    fn hide_overlay(&self) {
        self.overlay_core.borrow_mut().hide();
        let _ = self.overlay.class_list().add_1(overlay::HIDDEN_CLASS);
    }
}
