//! Calculus Workbook entry point
//!
//! Wires the page's form controls to the workbook and re-renders after
//! every change.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

    use calculus_workbook::persistence::LocalStorage;
    use calculus_workbook::platform::{self, Timeout};
    use calculus_workbook::view::WorkbookView;
    use calculus_workbook::{FieldUpdate, Settings, Weekday, Workbook, WorkbookRecord};

    /// Page instance holding all state
    struct App {
        workbook: Workbook<LocalStorage>,
        ack_timer: Timeout,
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Calculus Workbook starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let workbook = Workbook::start(LocalStorage::new(), &Settings::default());
        populate_controls(&document, workbook.record());
        render_notice(&document, &workbook);

        let app = Rc::new(RefCell::new(App {
            workbook,
            ack_timer: Timeout::default(),
        }));

        setup_input_handler(&document, app.clone());
        setup_save_button(&document, app.clone());
        setup_print_button(&document);
        setup_notice_dismiss(&document, app.clone());

        render(&document, &app.borrow().workbook.view());

        log::info!("Calculus Workbook ready");
    }

    /// Read the current value of a text input, textarea, select or radio
    fn control_value(el: &Element) -> Option<String> {
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            if input.type_() == "radio" && !input.checked() {
                return None;
            }
            return Some(input.value());
        }
        if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            return Some(area.value());
        }
        el.dyn_ref::<HtmlSelectElement>().map(|select| select.value())
    }

    /// Map an input event's target to a field update
    fn field_update(target: &Element) -> Option<FieldUpdate> {
        let value = control_value(target)?;
        if let Some(day) = target.get_attribute("data-day") {
            let day = day.parse::<usize>().ok().and_then(Weekday::from_index)?;
            return Some(FieldUpdate::WeeklyLog { day, text: value });
        }
        let field = target.get_attribute("data-field")?;
        FieldUpdate::from_input(&field, &value)
    }

    fn setup_input_handler(document: &Document, app: Rc<RefCell<App>>) {
        let doc = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
            let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            let Some(update) = field_update(&target) else {
                return;
            };
            let view = {
                let mut a = app.borrow_mut();
                a.workbook.apply(update);
                a.workbook.view()
            };
            render(&doc, &view);
        });
        let _ = document.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_save_button(document: &Document, app: Rc<RefCell<App>>) {
        let Some(btn) = document.get_element_by_id("save-btn") else {
            log::warn!("save-btn missing");
            return;
        };
        let doc = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            let view = {
                let mut a = app.borrow_mut();
                let outcome = a.workbook.save(platform::now_ms());
                let app_for_timer = app.clone();
                let doc_for_timer = doc.clone();
                a.ack_timer.restart(outcome.reset_after_ms, move || {
                    let view = {
                        let mut a = app_for_timer.borrow_mut();
                        if !a.workbook.tick(platform::now_ms()) {
                            return;
                        }
                        a.workbook.view()
                    };
                    render(&doc_for_timer, &view);
                });
                a.workbook.view()
            };
            render(&doc, &view);
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_print_button(document: &Document) {
        if let Some(btn) = document.get_element_by_id("print-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                platform::print();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_notice_dismiss(document: &Document, app: Rc<RefCell<App>>) {
        if let Some(btn) = document.get_element_by_id("load-notice-close") {
            let doc = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let mut a = app.borrow_mut();
                a.workbook.dismiss_notice();
                render_notice(&doc, &a.workbook);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Copy the hydrated record into the form controls (once, at start)
    fn populate_controls(document: &Document, record: &WorkbookRecord) {
        let fields = [
            ("currentStatus", record.current_status.as_str()),
            ("idealStatus", record.ideal_status.as_str()),
            ("currentAction", record.current_action.as_str()),
            ("actionFrequency", record.action_frequency.as_str()),
            ("actionUnit", record.action_unit.as_str()),
            ("newAction", record.new_action.as_str()),
        ];
        for (field, value) in fields {
            let selector = format!("[data-field=\"{}\"]", field);
            if let Some(el) = document.query_selector(&selector).ok().flatten() {
                set_control_value(&el, value);
            }
        }
        for day in Weekday::ALL {
            let selector = format!("textarea[data-day=\"{}\"]", day.index());
            if let Some(el) = document.query_selector(&selector).ok().flatten() {
                set_control_value(&el, record.day(day));
            }
        }
    }

    fn set_control_value(el: &Element, value: &str) {
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(value);
        } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
            select.set_value(value);
        }
    }

    fn set_hidden(document: &Document, id: &str, hidden: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.class_list().toggle_with_force("hidden", hidden);
        }
    }

    fn set_checked(document: &Document, id: &str, checked: bool) {
        if let Some(input) = document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        {
            input.set_checked(checked);
        }
        if let Some(el) = document.get_element_by_id(&format!("{}-label", id)) {
            let _ = el.class_list().toggle_with_force("selected", checked);
        }
    }

    fn render_notice(document: &Document, workbook: &Workbook<LocalStorage>) {
        match workbook.load_notice() {
            Some(notice) => {
                if let Some(el) = document.get_element_by_id("load-notice-text") {
                    el.set_text_content(Some(notice.message()));
                }
                set_hidden(document, "load-notice", false);
            }
            None => set_hidden(document, "load-notice", true),
        }
    }

    /// Update everything derived from the current state
    fn render(document: &Document, view: &WorkbookView) {
        if let Some(el) = document.get_element_by_id("projection") {
            el.set_text_content(Some(&view.projection_line()));
            let _ = el
                .class_list()
                .toggle_with_force("placeholder", view.projection.total().is_none());
        }

        if let Some(btn) = document.get_element_by_id("save-btn") {
            btn.set_text_content(Some(view.save_label()));
            let _ = btn.set_attribute("class", view.save_class());
        }

        set_checked(document, "reachable-yes", view.reachable_checked);
        set_checked(document, "reachable-no", view.not_reachable_checked);
        set_hidden(document, "panel-affirmation", !view.panel.shows_affirmation());
        set_hidden(document, "panel-revision", !view.panel.shows_revision());

        for (i, has_entry) in view.day_markers.iter().enumerate() {
            let selector = format!(".day-marker[data-day=\"{}\"]", i);
            if let Some(el) = document.query_selector(&selector).ok().flatten() {
                let _ = el.class_list().toggle_with_force("hidden", !has_entry);
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use calculus_workbook::persistence::MemoryStorage;
    use calculus_workbook::{Settings, Workbook};

    env_logger::init();
    log::info!("Calculus Workbook (native) starting...");
    log::info!("The workbook runs in the browser - build with `trunk serve` for the web version");

    let workbook = Workbook::start(MemoryStorage::new(), &Settings::default());
    println!("{}", workbook.view().projection_line());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
