use dioxus::prelude::*;
use shared_types::{combine, Motion, Stats, ViewState, SUMMARY_PREVIEW_CHARS};
use shared_ui::{
    BarChart, Card, CardContent, CardFooter, CardGrid, CardHeader, CardSubtitle, CardTitle,
    ChartFrame, EmptyState, ErrorPanel, PageHeader, PageTitle, PieChart, Skeleton, StatCard,
};

use crate::chart_data::{count_series, has_pie_data, trend_series};
use crate::context::use_api;
use crate::fetch_guard::use_fetch_guard;
use crate::format_helpers::{format_count, format_date_human};
use crate::routes::Route;

/// How many recent motions the dashboard lists.
const RECENT_LIMIT: u32 = 5;

/// Number of skeleton cards shown while data is loading.
const SKELETON_COUNT: usize = 4;

/// Headline numbers, the trend, motions per court and the latest motions.
#[component]
pub fn Dashboard() -> Element {
    let api = use_api();
    let stats_guard = use_fetch_guard();
    let recent_guard = use_fetch_guard();

    let stats = use_resource(move || {
        let client = api.current();
        let guard = stats_guard.clone();
        async move { guard.run(client.stats()).await }
    });

    let recent = use_resource(move || {
        let client = api.current();
        let guard = recent_guard.clone();
        async move { guard.run(client.recent_motions(RECENT_LIMIT)).await }
    });

    let state = combine(stats.read().clone().flatten(), recent.read().clone().flatten());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard-page",
            PageHeader {
                PageTitle { "Dashboard" }
            }

            match state {
                ViewState::Loading => rsx! { LoadingSkeletons {} },
                ViewState::Error(message) => rsx! { ErrorPanel { message: message } },
                ViewState::Ready((stats, motions)) => rsx! {
                    StatsGrid { stats: stats.clone() }
                    div { class: "dashboard-charts",
                        ChartFrame { title: "Recent Trend",
                            if stats.recent_trend.is_empty() {
                                EmptyState { message: "No trend data available" }
                            } else {
                                BarChart { data: trend_series(&stats.recent_trend) }
                            }
                        }
                        ChartFrame { title: "Motions by Court",
                            if !has_pie_data(&stats.by_court) {
                                EmptyState { message: "No court data available" }
                            } else {
                                PieChart { data: count_series(&stats.by_court) }
                            }
                        }
                    }
                    RecentMotions { motions: motions }
                },
            }
        }
    }
}

#[component]
fn LoadingSkeletons() -> Element {
    rsx! {
        CardGrid {
            for _ in 0..SKELETON_COUNT {
                Card {
                    CardHeader {
                        Skeleton { style: "height: 1rem; width: 60%;" }
                    }
                    CardContent {
                        Skeleton { style: "height: 2rem; width: 40%;" }
                    }
                }
            }
        }
        Skeleton { style: "height: 300px; width: 100%; margin-top: 1.5rem;" }
    }
}

#[component]
fn StatsGrid(stats: Stats) -> Element {
    rsx! {
        CardGrid { columns: 4,
            StatCard { label: "Total Motions", value: format_count(stats.total_motions) }
            StatCard { label: "Courts", value: format_count(stats.court_count() as u64) }
            StatCard { label: "Judges", value: format_count(stats.judge_count() as u64) }
            StatCard { label: "Motion Types", value: format_count(stats.motion_type_count() as u64) }
        }
    }
}

#[component]
fn RecentMotions(motions: Vec<Motion>) -> Element {
    rsx! {
        section { class: "dashboard-recent",
            div { class: "dashboard-recent-header",
                h2 { "Recent Denied Motions" }
                Link { to: Route::MotionList {}, class: "dashboard-view-all", "View All Motions" }
            }

            if motions.is_empty() {
                EmptyState { message: "No recent motions available" }
            } else {
                div { class: "dashboard-recent-list",
                    for motion in motions {
                        RecentMotionCard { key: "{motion.id}", motion: motion }
                    }
                }
            }
        }
    }
}

#[component]
fn RecentMotionCard(motion: Motion) -> Element {
    let summary = match motion.summary_text() {
        Some(_) => motion.summary_preview(SUMMARY_PREVIEW_CHARS),
        None => "No summary available".to_string(),
    };

    rsx! {
        Card {
            CardHeader {
                CardTitle { "{motion.case_name}" }
                CardSubtitle {
                    "{motion.court} · {motion.judge} · {format_date_human(&motion.order_date)}"
                }
            }
            CardContent {
                p { class: "dashboard-motion-type", "{motion.motion_type}" }
                p { class: "dashboard-summary", "{summary}" }
            }
            CardFooter {
                Link {
                    to: Route::MotionDetail { id: motion.id.clone() },
                    "View Details"
                }
            }
        }
    }
}
