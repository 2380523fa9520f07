use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Clone)]
pub struct FormState {
    pub error: String,
    pub success: String,
    pub field_errors: BTreeMap<&'static str, &'static str>,
    pub handle_success: Callback<String>,
    pub handle_error: Callback<String>,
    pub handle_field_errors: Callback<BTreeMap<&'static str, &'static str>>,
}

impl FormState {
    pub fn field_error(&self, field: &str) -> Option<&'static str> {
        self.field_errors.get(field).copied()
    }
}

#[hook]
pub fn use_form_state() -> FormState {
    let error = use_state(String::new);
    let success = use_state(String::new);
    let field_errors = use_state(BTreeMap::<&'static str, &'static str>::new);

    let handle_success = {
        let success = success.clone();
        let error = error.clone();
        let field_errors = field_errors.clone();
        Callback::from(move |msg: String| {
            success.set(msg);
            error.set(String::new());
            field_errors.set(BTreeMap::new());
        })
    };

    let handle_error = {
        let error = error.clone();
        let success = success.clone();
        Callback::from(move |msg: String| {
            error.set(msg);
            success.set(String::new());
        })
    };

    let handle_field_errors = {
        let field_errors = field_errors.clone();
        let success = success.clone();
        Callback::from(move |errors: BTreeMap<&'static str, &'static str>| {
            field_errors.set(errors);
            success.set(String::new());
        })
    };

    FormState {
        error: (*error).clone(),
        success: (*success).clone(),
        field_errors: (*field_errors).clone(),
        handle_success,
        handle_error,
        handle_field_errors,
    }
}
