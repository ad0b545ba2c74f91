use std::collections::BTreeMap;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use log::{debug, error, info};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::js_sys::{self, Array, Function};
use web_sys::{FormData, HtmlButtonElement, HtmlFormElement};

use crate::config::{SUBMITTING_LABEL, SUBMIT_PLACEHOLDER_DELAY_MS};
use crate::dom;

const SUBMIT_BUTTON_SELECTOR: &str = "button[type=\"submit\"]";

/// Submitted fields by name. Serializes to a plain JS object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormFields(pub BTreeMap<String, String>);

impl FormFields {
    /// Later entries with the same name win. Entries without a text value
    /// (file inputs) are skipped.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Option<String>)>,
    {
        Self(
            entries
                .into_iter()
                .filter_map(|(name, value)| value.map(|value| (name, value)))
                .collect(),
        )
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }
}

pub type SubmitCallback = dyn Fn(FormFields) -> Result<(), JsValue>;

/// Holds the submit button disabled for as long as it lives.
struct SubmitGuard {
    button: HtmlButtonElement,
    label: Option<String>,
}

impl SubmitGuard {
    fn acquire(button: HtmlButtonElement) -> Self {
        let label = button.text_content();
        button.set_disabled(true);
        button.set_text_content(Some(SUBMITTING_LABEL));
        Self { button, label }
    }
}

impl Drop for SubmitGuard {
    fn drop(&mut self) {
        self.button.set_disabled(false);
        self.button.set_text_content(self.label.as_deref());
    }
}

/// Intercepts submits on `form` and hands the collected fields to `on_done`.
/// No request is sent yet; a fixed delay stands in for it.
pub fn handle_form_submit<F>(form: &HtmlFormElement, on_done: F) -> Result<(), JsValue>
where
    F: Fn(FormFields) -> Result<(), JsValue> + 'static,
{
    let on_done: Rc<SubmitCallback> = Rc::new(on_done);
    let submitted = form.clone();
    dom::listen(form, "submit", move |event| {
        event.prevent_default();
        let form = submitted.clone();
        let on_done = on_done.clone();
        spawn_local(async move {
            if let Err(err) = submit(&form, on_done.as_ref()).await {
                error!("Form submission error: {}", dom::js_error_message(&err));
            }
        });
    })
}

/// JS entry point: `callback` receives the fields as a plain object.
#[wasm_bindgen(js_name = handleFormSubmit)]
pub fn handle_form_submit_js(form: HtmlFormElement, callback: Option<Function>) -> Result<(), JsValue> {
    handle_form_submit(&form, move |fields| {
        let Some(callback) = &callback else {
            return Ok(());
        };
        let payload = serde_wasm_bindgen::to_value(&fields)?;
        callback.call1(&JsValue::NULL, &payload)?;
        Ok(())
    })
}

async fn submit(form: &HtmlFormElement, on_done: &SubmitCallback) -> Result<(), JsValue> {
    let fields = collect_fields(form)?;
    let button = form
        .query_selector(SUBMIT_BUTTON_SELECTOR)?
        .ok_or_else(|| JsValue::from_str("form has no submit button"))?
        .dyn_into::<HtmlButtonElement>()
        .map_err(JsValue::from)?;

    let _guard = SubmitGuard::acquire(button);
    TimeoutFuture::new(SUBMIT_PLACEHOLDER_DELAY_MS).await;

    debug!(
        "Submitted fields: {}",
        serde_json::to_string(&fields).unwrap_or_default()
    );
    on_done(fields)?;
    form.reset();
    info!("Form submitted");
    Ok(())
}

fn collect_fields(form: &HtmlFormElement) -> Result<FormFields, JsValue> {
    let data = FormData::new_with_form(form)?;
    let entries = js_sys::try_iter(&data)?
        .ok_or_else(|| JsValue::from_str("form data is not iterable"))?;

    let mut pairs = Vec::new();
    for entry in entries {
        let pair: Array = entry?.dyn_into()?;
        if let Some(name) = pair.get(0).as_string() {
            pairs.push((name, pair.get(1).as_string()));
        }
    }
    Ok(FormFields::from_entries(pairs))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, value: &str) -> (String, Option<String>) {
        (name.to_string(), Some(value.to_string()))
    }

    #[test]
    fn last_value_for_a_name_wins() {
        let fields = FormFields::from_entries(vec![
            entry("email", "old@worktune.ai"),
            entry("name", "Jana"),
            entry("email", "jana@worktune.ai"),
        ]);
        assert_eq!(fields.get("email"), Some("jana@worktune.ai"));
        assert_eq!(fields.get("name"), Some("Jana"));
        assert_eq!(fields.0.len(), 2);
    }

    #[test]
    fn entries_without_text_are_skipped() {
        let fields = FormFields::from_entries(vec![
            entry("company", "Acme"),
            ("attachment".to_string(), None),
        ]);
        assert_eq!(fields.get("attachment"), None);
        assert_eq!(fields.0.len(), 1);
    }

    #[test]
    fn serializes_as_a_flat_object() {
        let fields = FormFields::from_entries(vec![entry("b", "2"), entry("a", "1")]);
        assert_eq!(serde_json::to_string(&fields).unwrap(), r#"{"a":"1","b":"2"}"#);
    }
}
