//! Callbacks into the optional `window.__RB_BOOT` object so the host page
//! can react to the enhancements coming up (or failing to).

#[cfg(target_arch = "wasm32")]
use std::cell::Cell;

#[cfg(target_arch = "wasm32")]
use js_sys::{Array, Function, Reflect};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};

#[cfg(target_arch = "wasm32")]
const BOOT_GLOBAL: &str = "__RB_BOOT";

#[cfg(target_arch = "wasm32")]
thread_local! {
    static READY_SENT: Cell<bool> = Cell::new(false);
}

#[cfg(target_arch = "wasm32")]
fn boot_object() -> Option<js_sys::Object> {
    let window = web_sys::window()?;
    let value = Reflect::get(&window, &JsValue::from_str(BOOT_GLOBAL)).ok()?;
    value.dyn_into::<js_sys::Object>().ok()
}

#[cfg(target_arch = "wasm32")]
fn invoke(method: &str, args: &Array) {
    let Some(boot) = boot_object() else {
        return;
    };
    let Ok(value) = Reflect::get(&boot, &JsValue::from_str(method)) else {
        return;
    };
    let Ok(func) = value.dyn_into::<Function>() else {
        return;
    };
    let _ = func.apply(&boot, args);
}

pub(crate) fn fail(code: &str, message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        invoke(
            "fail",
            &Array::of2(&JsValue::from_str(code), &JsValue::from_str(message)),
        );
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (code, message);
    }
}

pub(crate) fn ready() {
    #[cfg(target_arch = "wasm32")]
    {
        if READY_SENT.with(|flag| flag.replace(true)) {
            return;
        }
        invoke("ready", &Array::new());
    }
}
