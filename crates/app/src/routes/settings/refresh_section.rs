use dioxus::prelude::*;
use shared_types::{days_back_label, RefreshSettings, DAYS_BACK_OPTIONS};
use shared_ui::{
    use_toast, Button, ButtonType, ButtonVariant, Card, CardContent, CardHeader, CardSubtitle,
    CardTitle, Form, FormActions, FormSelect, Input, LabeledSwitch, ToastOptions,
};

use crate::context::use_api;

/// Automatic refresh schedule.
#[component]
pub fn RefreshSection() -> Element {
    let api = use_api();
    let toast = use_toast();

    let mut form = use_signal(RefreshSettings::default);
    let mut saving = use_signal(|| false);

    let auto_refresh = form.read().auto_refresh;

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Refresh Schedule" }
                CardSubtitle { "When the backend checks for newly denied motions." }
            }
            CardContent {
                Form {
                    onsubmit: move |_| async move {
                        saving.set(true);
                        let settings = form.read().clone();
                        match api.current().save_refresh_settings(&settings).await {
                            Ok(()) => {
                                toast.success(
                                    "Refresh settings saved successfully".to_string(),
                                    ToastOptions::new(),
                                );
                            }
                            Err(e) => {
                                tracing::warn!(error = %e, "saving refresh settings failed");
                                toast.error(e.friendly_message(), ToastOptions::new());
                            }
                        }
                        saving.set(false);
                    },

                    LabeledSwitch {
                        id: "autoRefresh",
                        label: "Enable automatic daily refresh",
                        checked: auto_refresh,
                        on_change: move |on: bool| form.write().auto_refresh = on,
                    }
                    Input {
                        label: "Refresh Time",
                        name: "refreshTime",
                        input_type: "time",
                        value: form.read().refresh_time.clone(),
                        disabled: !auto_refresh,
                        help: "Local time of day the refresh runs.",
                        on_input: move |evt: FormEvent| form.write().refresh_time = evt.value(),
                    }
                    FormSelect {
                        label: "Days to Look Back",
                        name: "daysBack",
                        value: form.read().days_back.to_string(),
                        onchange: move |evt: Event<FormData>| {
                            match evt.value().parse::<u32>() {
                                Ok(days) => form.write().days_back = days,
                                Err(e) => tracing::warn!(error = %e, "ignoring bad days back value"),
                            }
                        },
                        for days in DAYS_BACK_OPTIONS.iter().copied() {
                            option { key: "{days}", value: "{days}", "{days_back_label(days)}" }
                        }
                    }

                    FormActions {
                        Button {
                            variant: ButtonVariant::Primary,
                            button_type: ButtonType::Submit,
                            disabled: saving(),
                            if saving() { "Saving..." } else { "Save Refresh Settings" }
                        }
                    }
                }
            }
        }
    }
}
