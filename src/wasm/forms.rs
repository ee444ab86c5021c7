use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, Event, HtmlButtonElement, HtmlFormElement, Window};

use crate::config::FormConfig;
use crate::error::Result;
use crate::form::{run_stage, timeline, SubmitAction, SubmitTarget, SUCCESS_CLASS};

use super::dom::{listen, select_all};

/// The submit button of one form, plus the label to restore afterwards.
struct SubmitButton {
    form: HtmlFormElement,
    button: HtmlButtonElement,
    label: String,
}

impl SubmitTarget for SubmitButton {
    fn apply(&mut self, action: &SubmitAction) {
        let classes = self.button.class_list();
        let result = match action {
            SubmitAction::DisableButton => {
                self.button.set_disabled(true);
                Ok(())
            }
            SubmitAction::SetButtonHtml(html) => {
                self.button.set_inner_html(html);
                Ok(())
            }
            SubmitAction::AddSuccessClass => classes.add_1(SUCCESS_CLASS),
            SubmitAction::EnableButton => {
                self.button.set_disabled(false);
                Ok(())
            }
            SubmitAction::RestoreLabel => {
                self.button.set_text_content(Some(&self.label));
                Ok(())
            }
            SubmitAction::RemoveSuccessClass => classes.remove_1(SUCCESS_CLASS),
            SubmitAction::ResetForm => {
                self.form.reset();
                Ok(())
            }
        };
        if let Err(err) = result {
            log::warn!("{action:?} failed: {err:?}");
        }
    }
}

/// Resolves after `ms` milliseconds via `setTimeout`.
async fn sleep(window: &Window, ms: u32) -> Result<()> {
    let mut scheduled = Ok(0);
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        scheduled =
            window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms as i32);
    });
    scheduled?;
    JsFuture::from(promise).await?;
    Ok(())
}

/// Hooks the simulated submit timeline onto every form on the page.
pub fn wire(window: &Window, document: &Document, cfg: &FormConfig) -> Result<()> {
    for form in select_all(document, "form")? {
        let Ok(form) = form.dyn_into::<HtmlFormElement>() else {
            continue;
        };
        let Some(button) = form
            .query_selector(r#"button[type="submit"]"#)?
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
        else {
            log::warn!("form without a submit button left alone");
            continue;
        };

        let win = window.clone();
        let cfg = cfg.clone();
        let owner = form.clone();
        listen(&form, "submit", move |event: Event| {
            event.prevent_default();
            let mut target = SubmitButton {
                form: owner.clone(),
                button: button.clone(),
                label: button.text_content().unwrap_or_default(),
            };
            let stages = timeline(&cfg);
            let win = win.clone();
            spawn_local(async move {
                for stage in &stages {
                    if stage.delay_ms > 0 {
                        if let Err(err) = sleep(&win, stage.delay_ms).await {
                            log::error!("form timer: {err}");
                            return;
                        }
                    }
                    run_stage(stage, &mut target);
                }
                log::debug!("form submission simulated");
            });
        })?;
    }
    Ok(())
}
