use dioxus::prelude::*;
use shared_types::ApiSettings;
use shared_ui::{
    use_toast, Button, ButtonType, ButtonVariant, Card, CardContent, CardHeader, CardSubtitle,
    CardTitle, Form, FormActions, Input, ToastOptions,
};

use crate::context::use_api;

/// Credentials for the docket source and the summarizer.
#[component]
pub fn ApiSection() -> Element {
    let api = use_api();
    let toast = use_toast();

    let mut form = use_signal(ApiSettings::default);
    let mut saving = use_signal(|| false);

    rsx! {
        Card {
            CardHeader {
                CardTitle { "API Credentials" }
                CardSubtitle { "Used by the backend when pulling new orders and writing summaries." }
            }
            CardContent {
                Form {
                    onsubmit: move |_| async move {
                        saving.set(true);
                        let settings = form.read().clone();
                        match api.current().save_api_settings(&settings).await {
                            Ok(()) => {
                                toast.success(
                                    "API settings saved successfully".to_string(),
                                    ToastOptions::new(),
                                );
                            }
                            Err(e) => {
                                tracing::warn!(error = %e, "saving API settings failed");
                                toast.error(e.friendly_message(), ToastOptions::new());
                            }
                        }
                        saving.set(false);
                    },

                    Input {
                        label: "Docket Alarm Username",
                        name: "docketAlarmUsername",
                        value: form.read().docket_alarm_username.clone(),
                        on_input: move |evt: FormEvent| form.write().docket_alarm_username = evt.value(),
                    }
                    Input {
                        label: "Docket Alarm Password",
                        name: "docketAlarmPassword",
                        input_type: "password",
                        value: form.read().docket_alarm_password.clone(),
                        on_input: move |evt: FormEvent| form.write().docket_alarm_password = evt.value(),
                    }
                    Input {
                        label: "OpenAI API Key",
                        name: "openaiApiKey",
                        input_type: "password",
                        value: form.read().openai_api_key.clone(),
                        on_input: move |evt: FormEvent| form.write().openai_api_key = evt.value(),
                    }

                    FormActions {
                        Button {
                            variant: ButtonVariant::Primary,
                            button_type: ButtonType::Submit,
                            disabled: saving(),
                            if saving() { "Saving..." } else { "Save API Settings" }
                        }
                    }
                }
            }
        }
    }
}
