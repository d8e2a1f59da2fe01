use summarizer_core::Effect;
use summarizer_logging::{form_error, form_info, form_warn};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use super::elements::FormElements;

pub struct EffectRunner {
    scroll: ScrollIntoViewOptions,
}

impl EffectRunner {
    pub fn new() -> Self {
        let scroll = ScrollIntoViewOptions::new();
        scroll.set_behavior(ScrollBehavior::Smooth);
        Self { scroll }
    }

    /// Runs effects after the view has been rendered, so the page already
    /// shows the processing state or the banner when these fire.
    pub fn run(&self, effects: Vec<Effect>, elements: &FormElements) {
        for effect in effects {
            match effect {
                Effect::SubmitForm => {
                    let Some(form) = elements.form() else {
                        form_warn!("submission accepted but the form element is missing");
                        continue;
                    };
                    form_info!("submitting form natively");
                    // Native submit() does not re-dispatch the submit event.
                    if let Err(err) = form.submit() {
                        form_error!("native form submission failed: {:?}", err);
                    }
                }
                Effect::ErrorShown { message } => match elements.error_banner() {
                    Some(banner) => {
                        banner.scroll_into_view_with_scroll_into_view_options(&self.scroll)
                    }
                    None => form_error!("Error showing message: {}", message),
                },
            }
        }
    }
}
