use crate::constants::document_parsed;
use crate::core::EffectElement;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

impl EffectElement for web::HtmlElement {
    #[inline]
    fn set_css_text(&self, css: &str) {
        self.style().set_css_text(css);
    }

    #[inline]
    fn set_property(&self, name: &str, value: &str) {
        _ = self.style().set_property(name, value);
    }

    #[inline]
    fn reflow(&self) {
        // reading layout flushes pending style
        _ = self.offset_width();
    }
}

/// Append `count` hidden `<div class={class}>` elements to `body`.
pub fn create_pool_elements(
    document: &web::Document,
    body: &web::HtmlElement,
    class: &str,
    count: usize,
) -> anyhow::Result<Vec<web::HtmlElement>> {
    (0..count)
        .map(|_| -> anyhow::Result<web::HtmlElement> {
            let el: web::HtmlElement = document
                .create_element("div")
                .map_err(|e| anyhow::anyhow!("create_element failed: {:?}", e))?
                .dyn_into()
                .map_err(|e| anyhow::anyhow!("not an HtmlElement: {:?}", e))?;
            el.set_class_name(class);
            el.style().set_css_text(crate::core::style::HIDDEN);
            body.append_child(&el)
                .map_err(|e| anyhow::anyhow!("append_child failed: {:?}", e))?;
            Ok(el)
        })
        .collect()
}

/// Resolves once the document's structure is parsed (`DOMContentLoaded`),
/// or immediately if that already happened.
pub async fn document_ready(document: &web::Document) -> anyhow::Result<()> {
    if document_parsed(&document.ready_state()) {
        return Ok(());
    }
    let doc = document.clone();
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let opts = web::AddEventListenerOptions::new();
        opts.set_once(true);
        _ = doc.add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            &resolve,
            &opts,
        );
    });
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("waiting for DOMContentLoaded: {:?}", e))?;
    Ok(())
}
