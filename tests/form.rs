use dalexor_site::config::FormConfig;
use dalexor_site::form::{run_stage, timeline, SubmitAction, SubmitTarget};

/// Button and form state as the page would show it.
#[derive(Debug)]
struct FakeForm {
    disabled: bool,
    label: String,
    original: String,
    success: bool,
    field: String,
    log: Vec<SubmitAction>,
}

impl FakeForm {
    fn new() -> Self {
        Self {
            disabled: false,
            label: "Send".into(),
            original: "Send".into(),
            success: false,
            field: "me@example.com".into(),
            log: Vec::new(),
        }
    }
}

impl SubmitTarget for FakeForm {
    fn apply(&mut self, action: &SubmitAction) {
        match action {
            SubmitAction::DisableButton => self.disabled = true,
            SubmitAction::SetButtonHtml(html) => self.label = html.to_string(),
            SubmitAction::AddSuccessClass => self.success = true,
            SubmitAction::EnableButton => self.disabled = false,
            SubmitAction::RestoreLabel => self.label = self.original.clone(),
            SubmitAction::RemoveSuccessClass => self.success = false,
            SubmitAction::ResetForm => self.field.clear(),
        }
        self.log.push(action.clone());
    }
}

#[test]
fn timeline_waits_two_then_three_seconds() {
    let stages = timeline(&FormConfig::default());
    let delays: Vec<u32> = stages.iter().map(|s| s.delay_ms).collect();
    assert_eq!(delays, vec![0, 2000, 3000]);

    let at: Vec<u32> = stages
        .iter()
        .scan(0, |t, s| {
            *t += s.delay_ms;
            Some(*t)
        })
        .collect();
    assert_eq!(at, vec![0, 2000, 5000]);
}

#[test]
fn submit_walks_the_button_through_each_state() {
    let cfg = FormConfig::default();
    let stages = timeline(&cfg);
    let mut form = FakeForm::new();

    run_stage(&stages[0], &mut form);
    assert!(form.disabled);
    assert_eq!(form.label, r#"<span class="loading-spinner"></span>"#);
    assert!(!form.success);

    run_stage(&stages[1], &mut form);
    assert!(form.disabled);
    assert_eq!(form.label, "✓ Submitted");
    assert!(form.success);
    assert_eq!(form.field, "me@example.com");

    run_stage(&stages[2], &mut form);
    assert!(!form.disabled);
    assert_eq!(form.label, "Send");
    assert!(!form.success);
    assert!(form.field.is_empty());

    use SubmitAction::*;
    assert_eq!(
        form.log,
        vec![
            DisableButton,
            SetButtonHtml(cfg.spinner_html),
            SetButtonHtml(cfg.success_label),
            AddSuccessClass,
            EnableButton,
            RestoreLabel,
            RemoveSuccessClass,
            ResetForm,
        ]
    );
}
