//! Simulated form submission.
//!
//! Nothing leaves the page: a submit walks the button through a fixed
//! timeline of UI changes. The timeline is plain data so the browser driver
//! can replay it with real timers and tests can inspect it directly.

use crate::config::FormConfig;

pub const SUCCESS_CLASS: &str = "success";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitAction {
    DisableButton,
    /// Replace the button content with this markup.
    SetButtonHtml(&'static str),
    AddSuccessClass,
    EnableButton,
    /// Put back the label the button had before the submit.
    RestoreLabel,
    RemoveSuccessClass,
    ResetForm,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stage {
    /// Wait before this stage, counted from the previous one.
    pub delay_ms: u32,
    pub actions: Vec<SubmitAction>,
}

pub fn timeline(cfg: &FormConfig) -> Vec<Stage> {
    use SubmitAction::*;
    vec![
        Stage {
            delay_ms: 0,
            actions: vec![DisableButton, SetButtonHtml(cfg.spinner_html)],
        },
        Stage {
            delay_ms: cfg.submit_delay_ms,
            actions: vec![SetButtonHtml(cfg.success_label), AddSuccessClass],
        },
        Stage {
            delay_ms: cfg.success_hold_ms,
            actions: vec![EnableButton, RestoreLabel, RemoveSuccessClass, ResetForm],
        },
    ]
}

/// Receives timeline actions; the browser implementation mutates the button.
pub trait SubmitTarget {
    fn apply(&mut self, action: &SubmitAction);
}

/// Applies a stage's actions in order.
pub fn run_stage<T: SubmitTarget + ?Sized>(stage: &Stage, target: &mut T) {
    for action in &stage.actions {
        log::trace!("form action {action:?}");
        target.apply(action);
    }
}
