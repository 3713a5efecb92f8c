pub mod analytics;
pub mod dashboard;
pub mod motions;
pub mod not_found;
pub mod settings;

use chrono::Utc;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdClock, LdFileText, LdLayoutDashboard, LdScale, LdSettings,
};
use dioxus_free_icons::Icon;
use shared_types::{refresh_success_message, MANUAL_REFRESH_DAYS_BACK};
use shared_ui::{
    AlertDialogAction, AlertDialogActions, AlertDialogContent, AlertDialogDescription,
    AlertDialogRoot, AlertDialogTitle, Button, ButtonVariant, ErrorBanner,
};

use crate::context::{use_api, use_refresh};
use crate::format_helpers::format_refresh_time;

use analytics::Analytics;
use dashboard::Dashboard;
use not_found::NotFound;
use settings::Settings;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Dashboard {},
    #[route("/motions")]
    MotionList {},
    #[route("/motions/:id")]
    MotionDetail { id: String },
    #[route("/analytics")]
    Analytics {},
    #[route("/settings")]
    Settings {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Header with navigation and the manual refresh control, above the page.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let api = use_api();
    let refresh = use_refresh();
    let mut log = refresh.log;

    let mut refreshing = use_signal(|| false);
    let mut refresh_error = use_signal(|| Option::<String>::None);
    let mut found_message = use_signal(|| Option::<String>::None);

    let store = refresh.store.clone();
    let handle_refresh = move |_: MouseEvent| {
        let store = store.clone();
        let client = api.current();
        async move {
            refreshing.set(true);
            refresh_error.set(None);
            match client.refresh(MANUAL_REFRESH_DAYS_BACK).await {
                Ok(found) => {
                    tracing::info!(found, "manual refresh finished");
                    if let Err(e) = log.write().record(store.as_ref(), Utc::now()) {
                        tracing::warn!(error = %e, "could not persist last refresh time");
                    }
                    found_message.set(Some(refresh_success_message(found)));
                }
                Err(e) => {
                    refresh_error.set(Some(e.friendly_message()));
                }
            }
            refreshing.set(false);
        }
    };

    let last_refresh = log.read().last_refresh.map(format_refresh_time);

    let dashboard_class = nav_class(matches!(route, Route::Dashboard {}));
    let motions_class = nav_class(matches!(
        route,
        Route::MotionList {} | Route::MotionDetail { .. }
    ));
    let analytics_class = nav_class(matches!(route, Route::Analytics {}));
    let settings_class = nav_class(matches!(route, Route::Settings {}));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "app-shell",
            header { class: "app-header",
                Link { to: Route::Dashboard {}, class: "app-brand",
                    Icon::<LdScale> { icon: LdScale, width: 20, height: 20 }
                    span { "LegalMotion Tracker" }
                }

                nav { class: "app-nav",
                    Link {
                        to: Route::Dashboard {},
                        class: "{dashboard_class}",
                        Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
                        "Dashboard"
                    }
                    Link {
                        to: Route::MotionList {},
                        class: "{motions_class}",
                        Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 }
                        "Motions"
                    }
                    Link {
                        to: Route::Analytics {},
                        class: "{analytics_class}",
                        Icon::<LdScale> { icon: LdScale, width: 18, height: 18 }
                        "Analytics"
                    }
                    Link {
                        to: Route::Settings {},
                        class: "{settings_class}",
                        Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 }
                        "Settings"
                    }
                }

                div { class: "app-header-spacer" }

                div { class: "app-refresh",
                    if let Some(at) = last_refresh {
                        span { class: "app-last-refresh",
                            Icon::<LdClock> { icon: LdClock, width: 14, height: 14 }
                            "Last refreshed: {at}"
                        }
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        disabled: refreshing(),
                        onclick: handle_refresh,
                        {refresh_label(refreshing())}
                    }
                }
            }

            if let Some(message) = refresh_error() {
                ErrorBanner {
                    message: message,
                    on_dismiss: move |_| refresh_error.set(None),
                }
            }

            main { class: "page-content",
                Outlet::<Route> {}
            }
        }

        AlertDialogRoot {
            open: found_message.read().is_some(),
            on_open_change: move |open: bool| {
                if !open {
                    found_message.set(None);
                }
            },
            AlertDialogContent {
                AlertDialogTitle { "Refresh Complete" }
                AlertDialogDescription {
                    {found_message().unwrap_or_default()}
                }
                AlertDialogActions {
                    AlertDialogAction {
                        on_click: move |_| found_message.set(None),
                        "OK"
                    }
                }
            }
        }
    }
}

fn refresh_label(refreshing: bool) -> &'static str {
    if refreshing {
        "Refreshing..."
    } else {
        "Refresh Motions"
    }
}

fn nav_class(active: bool) -> &'static str {
    if active {
        "app-nav-link active"
    } else {
        "app-nav-link"
    }
}

#[component]
fn MotionList() -> Element {
    motions::list::MotionListPage()
}

#[component]
fn MotionDetail(id: String) -> Element {
    rsx! { motions::detail::MotionDetailPage { id: id } }
}
