use dioxus::prelude::*;
use shared_types::{Motion, Party, ViewState};
use shared_ui::{
    Card, CardContent, CardHeader, CardTitle, DetailGrid, DetailItem,
    DetailList, DetailText, EmptyState, ErrorPanel, PageHeader, PageSubtitle, PageTitle,
    SkeletonLines,
};

use crate::context::use_api;
use crate::fetch_guard::use_fetch_guard;
use crate::format_helpers::format_date_human;
use crate::routes::Route;

/// Everything known about one motion.
#[component]
pub fn MotionDetailPage(id: String) -> Element {
    let api = use_api();
    let guard = use_fetch_guard();

    let motion = use_resource(use_reactive!(|id| {
        let client = api.current();
        let guard = guard.clone();
        async move { guard.run(client.motion(&id)).await }
    }));

    // A new id goes back to the skeleton instead of showing the old motion.
    let state = if matches!(*motion.state().read(), UseResourceState::Pending) {
        ViewState::Loading
    } else {
        ViewState::from_result(motion.read().clone().flatten())
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./motions.css") }

        div { class: "motion-detail-page",
            Link { to: Route::MotionList {}, class: "motion-back-link", "← Back to Motions" }

            match state {
                ViewState::Loading => rsx! {
                    Card {
                        CardContent { SkeletonLines { count: 6 } }
                    }
                },
                ViewState::Error(message) => rsx! { ErrorPanel { message: message } },
                ViewState::Ready(motion) => rsx! { MotionBody { motion: motion } },
            }
        }
    }
}

#[component]
fn MotionBody(motion: Motion) -> Element {
    rsx! {
        PageHeader {
            PageTitle { "{motion.case_name}" }
            PageSubtitle {
                span { class: "motion-type-label", "{motion.motion_type}" }
            }
        }

        DetailGrid {
            Card {
                CardHeader { CardTitle { "Case Information" } }
                CardContent {
                    DetailList {
                        DetailItem { label: "Court", value: motion.court.clone() }
                        DetailItem { label: "Docket Number", value: motion.docket_number.clone() }
                        DetailItem { label: "Judge", value: motion.judge.clone() }
                        DetailItem { label: "Motion Type", value: motion.motion_type.clone() }
                        DetailItem { label: "Order Date", value: format_date_human(&motion.order_date) }
                        DetailItem { label: "Document Number", value: motion.document_number.clone() }
                    }
                }
            }

            Card {
                CardHeader { CardTitle { "Parties & Representation" } }
                CardContent {
                    if motion.has_parties() {
                        div { class: "motion-parties",
                            for (i, party) in motion.parties.iter().enumerate() {
                                PartyEntry { key: "{i}", party: party.clone() }
                            }
                        }
                    } else {
                        EmptyState { message: "No party information available" }
                    }
                }
            }
        }

        Card {
            CardHeader { CardTitle { "Order Summary" } }
            CardContent {
                match motion.summary_text() {
                    Some(text) => rsx! { DetailText { text: text.to_string() } },
                    None => rsx! { EmptyState { message: "No summary available" } },
                }
            }
        }

        Card {
            CardHeader { CardTitle { "Order Description" } }
            CardContent {
                match motion.order_description_text() {
                    Some(text) => rsx! { DetailText { text: text.to_string() } },
                    None => rsx! { EmptyState { message: "No order description available" } },
                }
            }
        }
    }
}

#[component]
fn PartyEntry(party: Party) -> Element {
    rsx! {
        div { class: "motion-party",
            h4 { class: "motion-party-heading", "{party.heading()}" }
            if party.has_attorneys() {
                ul { class: "motion-attorneys",
                    for (i, attorney) in party.attorneys.iter().enumerate() {
                        li { key: "{i}", "{attorney.display()}" }
                    }
                }
            } else {
                p { class: "motion-no-attorneys", "No attorney information available" }
            }
        }
    }
}
