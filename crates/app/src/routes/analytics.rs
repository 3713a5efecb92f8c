use dioxus::prelude::*;
use shared_types::{combine, LawFirmCount, Stats, ViewState};
use shared_ui::{
    BarChart, Card, CardContent, CardHeader, CardTitle, ChartFrame, DataTable, DataTableBody,
    DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, EmptyState, ErrorPanel,
    LineChart, PageHeader, PageSubtitle, PageTitle, PieChart, Skeleton, PALETTE,
};

use crate::chart_data::{count_series, has_pie_data, trend_series};
use crate::context::use_api;
use crate::fetch_guard::use_fetch_guard;
use crate::format_helpers::format_count;

/// Judge and court names are long; give the bar labels more room.
const NAME_LABEL_CHARS: usize = 18;

#[component]
pub fn Analytics() -> Element {
    let api = use_api();
    let stats_guard = use_fetch_guard();
    let firms_guard = use_fetch_guard();

    let stats = use_resource(move || {
        let client = api.current();
        let guard = stats_guard.clone();
        async move { guard.run(client.stats()).await }
    });

    let firms = use_resource(move || {
        let client = api.current();
        let guard = firms_guard.clone();
        async move { guard.run(client.law_firms()).await }
    });

    let state = combine(stats.read().clone().flatten(), firms.read().clone().flatten());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./analytics.css") }

        div { class: "analytics-page",
            PageHeader {
                PageTitle { "Analytics" }
                PageSubtitle { "Patterns across courts and judges" }
            }

            match state {
                ViewState::Loading => rsx! {
                    div { class: "analytics-grid",
                        for _ in 0..4 {
                            Skeleton { style: "height: 320px; width: 100%;" }
                        }
                    }
                },
                ViewState::Error(message) => rsx! { ErrorPanel { message: message } },
                ViewState::Ready((stats, firms)) => rsx! {
                    AnalyticsCharts { stats: stats }
                    LawFirmTable { firms: firms }
                },
            }
        }
    }
}

#[component]
fn AnalyticsCharts(stats: Stats) -> Element {
    rsx! {
        div { class: "analytics-grid",
            ChartFrame { title: "Motion Trend",
                if stats.recent_trend.is_empty() {
                    EmptyState { message: "No trend data available" }
                } else {
                    LineChart { data: trend_series(&stats.recent_trend) }
                }
            }
            ChartFrame { title: "Motion Types",
                if !has_pie_data(&stats.by_motion_type) {
                    EmptyState { message: "No motion type data available" }
                } else {
                    PieChart { data: count_series(&stats.by_motion_type) }
                }
            }
            ChartFrame { title: "Top Judges",
                if stats.by_judge.is_empty() {
                    EmptyState { message: "No judge data available" }
                } else {
                    BarChart {
                        data: count_series(stats.top_judges()),
                        color: PALETTE[1].to_string(),
                        label_chars: NAME_LABEL_CHARS,
                    }
                }
            }
            ChartFrame { title: "Motions by Court",
                if stats.by_court.is_empty() {
                    EmptyState { message: "No court data available" }
                } else {
                    BarChart {
                        data: count_series(&stats.by_court),
                        color: PALETTE[3].to_string(),
                        label_chars: NAME_LABEL_CHARS,
                    }
                }
            }
        }
    }
}

/// Firms in the order the server ranked them.
#[component]
fn LawFirmTable(firms: Vec<LawFirmCount>) -> Element {
    rsx! {
        Card {
            CardHeader { CardTitle { "Law Firms" } }
            CardContent {
                if firms.is_empty() {
                    EmptyState { message: "No law firm data available" }
                } else {
                    DataTable {
                        DataTableHeader {
                            DataTableColumn { "Rank" }
                            DataTableColumn { "Law Firm" }
                            DataTableColumn { "Motions" }
                        }
                        DataTableBody {
                            for (i, firm) in firms.iter().enumerate() {
                                DataTableRow { key: "{i}",
                                    DataTableCell { "{i + 1}" }
                                    DataTableCell { "{firm.law_firm}" }
                                    DataTableCell { "{format_count(firm.count)}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
