//! Browser implementations of the playground collaborators.

use std::future::Future;

use js_sys::{Function, Promise};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlDocument, HtmlTextAreaElement};
use wdte_playground::{Clipboard, ClipboardError, Interpreter, InterpreterError, Location};

#[wasm_bindgen]
extern "C" {
    /// `window.WDTE.run(input, (err, output) => ...)`, installed by the
    /// interpreter's own WebAssembly module.
    #[wasm_bindgen(js_namespace = WDTE, js_name = run, catch)]
    fn wdte_run(input: &str, callback: &Function) -> Result<(), JsValue>;
}

/// Turn a thrown or rejected JS value into display text.
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        text
    } else if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        String::from(error.to_string())
    } else {
        format!("{:?}", value)
    }
}

/// The WDTE interpreter loaded into the page.
pub struct JsInterpreter;

impl Interpreter for JsInterpreter {
    fn run(&self, source: &str) -> impl Future<Output = Result<String, InterpreterError>> {
        let source = source.to_string();
        async move {
            let promise = Promise::new(&mut |resolve: Function, reject: Function| {
                let on_reject = reject.clone();
                let callback = Closure::once_into_js(move |err: JsValue, output: JsValue| {
                    let _ = if err.is_null() || err.is_undefined() {
                        resolve.call1(&JsValue::NULL, &output)
                    } else {
                        reject.call1(&JsValue::NULL, &err)
                    };
                });
                // Missing runtime: WDTE is not defined yet.
                if let Err(e) = wdte_run(&source, callback.unchecked_ref()) {
                    let _ = on_reject.call1(&JsValue::NULL, &e);
                }
            });

            JsFuture::from(promise)
                .await
                .map(|output| output.as_string().unwrap_or_default())
                .map_err(|e| InterpreterError(js_error_message(&e)))
        }
    }
}

/// Clipboard access through a hidden textarea and `execCommand("copy")`.
pub struct DomClipboard;

impl Clipboard for DomClipboard {
    fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        copy_with_textarea(text).map_err(|e| ClipboardError(js_error_message(&e)))
    }
}

fn copy_with_textarea(text: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no document body"))?;

    let textarea: HtmlTextAreaElement = document
        .create_element("textarea")?
        .dyn_into()
        .map_err(JsValue::from)?;
    textarea.set_value(text);
    body.append_child(&textarea)?;

    let copied = (|| -> Result<bool, JsValue> {
        textarea.focus()?;
        textarea.select();
        document
            .dyn_ref::<HtmlDocument>()
            .ok_or_else(|| JsValue::from_str("not an HTML document"))?
            .exec_command("copy")
    })();

    // The textarea goes away even when copying failed.
    body.remove_child(&textarea)?;

    if copied? {
        Ok(())
    } else {
        Err(JsValue::from_str("copy failed"))
    }
}

/// `window.location`.
pub struct WindowLocation;

fn location() -> Option<web_sys::Location> {
    web_sys::window().map(|w| w.location())
}

impl Location for WindowLocation {
    fn fragment(&self) -> Option<String> {
        let hash = location()?.hash().ok()?;
        let fragment = hash.strip_prefix('#').unwrap_or(&hash);
        (!fragment.is_empty()).then(|| fragment.to_string())
    }

    fn set_fragment(&self, fragment: &str) {
        if let Some(location) = location()
            && let Err(e) = location.set_hash(fragment)
        {
            log::warn!("could not update location hash: {}", js_error_message(&e));
        }
    }

    fn origin(&self) -> String {
        location().and_then(|l| l.origin().ok()).unwrap_or_default()
    }

    fn path(&self) -> String {
        location().and_then(|l| l.pathname().ok()).unwrap_or_default()
    }
}
