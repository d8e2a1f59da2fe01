use std::cell::{Cell, RefCell};
use std::rc::Rc;

use summarizer_core::{update, FormConfig, FormState, InputMode, Msg};
use summarizer_logging::{form_debug, form_error, form_info, form_warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, EventTarget};

use super::config::PageConfig;
use super::effects::EffectRunner;
use super::elements::FormElements;
use super::ui::constants::CONFIG_SCRIPT_ID;
use super::ui::{self, Role};

thread_local! {
    static PAGE_FORM: RefCell<Option<MountedForm>> = const { RefCell::new(None) };
    /// Set while a DOMContentLoaded mount is still owed to `boot`.
    static BOOT_PENDING: Cell<bool> = const { Cell::new(false) };
}

/// Mounts the form once the document has been parsed.
pub fn boot() {
    let Some(document) = document() else {
        form_error!("no document available; summarize form not mounted");
        return;
    };
    if document.ready_state() != "loading" {
        mount_page(None);
        return;
    }

    arm_deferred_mount();
    let on_ready = Closure::once_into_js(move || {
        if take_deferred_mount() {
            mount_page(None);
        } else {
            form_debug!("deferred mount skipped, form was mounted or unmounted explicitly");
        }
    });
    if let Err(err) =
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
    {
        cancel_deferred_mount();
        form_error!("could not wait for DOMContentLoaded: {:?}", err);
    }
}

/// Binds the form for the page lifetime, replacing any earlier mount.
///
/// Without an explicit JSON config the page's embedded config (or the
/// defaults) is used. A config that does not parse is logged and the
/// defaults are mounted instead.
pub fn mount_page(config_json: Option<&str>) {
    let Some(document) = document() else {
        form_error!("no document available; summarize form not mounted");
        return;
    };
    let config = match config_json {
        Some(raw) => PageConfig::from_json_or_default(raw),
        None => embedded_config(&document),
    };

    unmount_page();
    let mounted = MountedForm::mount(&document, config);
    PAGE_FORM.with(|slot| *slot.borrow_mut() = Some(mounted));
}

/// Detaches the current mount and cancels a pending boot mount.
pub fn unmount_page() {
    cancel_deferred_mount();
    let previous = PAGE_FORM.with(|slot| slot.borrow_mut().take());
    if let Some(mounted) = previous {
        mounted.unmount();
    }
}

fn arm_deferred_mount() {
    BOOT_PENDING.with(|pending| pending.set(true));
}

fn cancel_deferred_mount() {
    BOOT_PENDING.with(|pending| pending.set(false));
}

/// True exactly once per arm, and never after a cancel.
fn take_deferred_mount() -> bool {
    BOOT_PENDING.with(|pending| pending.replace(false))
}

fn document() -> Option<Document> {
    web_sys::window().and_then(|window| window.document())
}

fn embedded_config(document: &Document) -> PageConfig {
    document
        .get_element_by_id(CONFIG_SCRIPT_ID)
        .and_then(|element| element.text_content())
        .map(|raw| PageConfig::from_json_or_default(&raw))
        .unwrap_or_default()
}

/// Owns the element handles and the form state for one mount.
struct FormController {
    elements: FormElements,
    state: FormState,
    effects: EffectRunner,
}

impl FormController {
    fn new(elements: FormElements, config: FormConfig) -> Self {
        Self {
            elements,
            state: FormState::with_config(config),
            effects: EffectRunner::new(),
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            self.elements.apply(&ui::render::render(&state.view()));
        }
        self.state = state;
        self.effects.run(effects, &self.elements);
    }
}

/// An attached DOM listener; detaches itself when dropped.
struct Listener {
    target: EventTarget,
    event: String,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn attach(
        target: &EventTarget,
        event: &str,
        callback: Closure<dyn FnMut(Event)>,
    ) -> Result<Self, JsValue> {
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event: event.to_string(),
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(&self.event, self.callback.as_ref().unchecked_ref())
        {
            form_warn!("could not detach {} listener: {:?}", self.event, err);
        }
    }
}

struct MountedForm {
    controller: Rc<RefCell<FormController>>,
    listeners: Vec<Listener>,
}

impl MountedForm {
    fn mount(document: &Document, config: PageConfig) -> Self {
        let PageConfig { form, dom } = config;
        let tab_event = dom.tab_shown_event.clone();
        let elements = FormElements::lookup(document, dom);
        let tabs_present =
            elements.get(Role::UrlTab).is_some() && elements.get(Role::PdfTab).is_some();

        let mut mounted = Self {
            controller: Rc::new(RefCell::new(FormController::new(elements, form))),
            listeners: Vec::new(),
        };

        mounted.listen(Role::Form, "submit", |ctl, event| {
            event.prevent_default();
            Some(Msg::SubmitRequested(ctl.elements.snapshot()))
        });

        // Tab handlers only make sense as a pair.
        if tabs_present {
            mounted.listen(Role::UrlTab, &tab_event, |_, _| {
                Some(Msg::TabShown(InputMode::Url))
            });
            mounted.listen(Role::PdfTab, &tab_event, |_, _| {
                Some(Msg::TabShown(InputMode::Pdf))
            });
        }

        mounted.listen(Role::UrlInput, "input", |ctl, _| {
            ctl.elements.url_value().map(Msg::UrlInput)
        });
        mounted.listen(Role::UrlInput, "blur", |ctl, _| {
            ctl.elements.url_value().map(Msg::UrlBlur)
        });
        mounted.listen(Role::PdfInput, "change", |ctl, _| {
            ctl.elements
                .selected_pdf_files()
                .map(Msg::PdfSelectionChanged)
        });

        form_info!(
            "summarize form mounted with {} listeners",
            mounted.listeners.len()
        );
        mounted
    }

    /// Subscribes `to_msg` to `event` on the element playing `role`. Missing
    /// elements get no listener.
    fn listen<F>(&mut self, role: Role, event: &str, mut to_msg: F)
    where
        F: FnMut(&FormController, &Event) -> Option<Msg> + 'static,
    {
        let target: EventTarget = {
            let controller = self.controller.borrow();
            let Some(element) = controller.elements.get(role) else {
                return;
            };
            let target: &EventTarget = element.as_ref();
            target.clone()
        };

        let controller = Rc::clone(&self.controller);
        let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            summarizer_logging::next_event_seq();
            let Ok(mut ctl) = controller.try_borrow_mut() else {
                form_warn!("{} event ignored while another is being handled", event.type_());
                return;
            };
            if let Some(msg) = to_msg(&*ctl, &event) {
                form_debug!("{} -> {:?}", event.type_(), msg);
                ctl.dispatch(msg);
            }
        });

        match Listener::attach(&target, event, callback) {
            Ok(listener) => self.listeners.push(listener),
            Err(err) => form_warn!("could not listen for {} on {:?}: {:?}", event, role, err),
        }
    }

    fn unmount(self) {
        form_info!(
            "summarize form unmounted, dropping {} listeners",
            self.listeners.len()
        );
        drop(self.listeners);
        drop(self.controller);
    }
}
