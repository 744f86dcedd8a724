use crate::runtime::Runtime;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_input_handlers(document: &web::Document, runtime: Rc<Runtime>) {
    wire_mousemove(document, runtime.clone());
    wire_click(document, runtime);
}

fn wire_mousemove(document: &web::Document, runtime: Rc<Runtime>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        runtime.pointer_move(
            ev.client_x() as f32,
            ev.client_y() as f32,
            js_sys::Date::now(),
        );
    }) as Box<dyn FnMut(_)>);

    _ = document.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());

    closure.forget();
}

fn wire_click(document: &web::Document, runtime: Rc<Runtime>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        runtime.click(ev.client_x() as f32, ev.client_y() as f32);
    }) as Box<dyn FnMut(_)>);

    _ = document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());

    closure.forget();
}
