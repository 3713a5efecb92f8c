use dioxus::prelude::*;
use shared_types::{
    list_content, FilterField, ListContent, ListRequest, Motion, MotionListState,
    MOTION_TYPE_OPTIONS,
};
use shared_ui::{
    Button, ButtonVariant, DataTable, DataTableBody, DataTableCell, DataTableColumn,
    DataTableHeader, DataTableMessage, DataTableRow, FilterBar, FormSelect, Input, PageHeader,
    PageSubtitle, PageTitle, Pagination, SkeletonLines,
};

use crate::context::use_api;
use crate::fetch_guard::use_fetch_guard;
use crate::format_helpers::format_date_human;
use crate::routes::Route;

const COLUMN_COUNT: u32 = 6;

/// Filterable, paginated table of denied motions.
#[component]
pub fn MotionListPage() -> Element {
    let api = use_api();
    let guard = use_fetch_guard();
    let mut list_state = use_signal(MotionListState::default);

    // Only transitions that change the request re-run the fetch; recording
    // the total after a response does not.
    let request = use_memo(move || list_state.read().request());

    let page = use_resource(move || {
        let client = api.current();
        let guard = guard.clone();
        let ListRequest { revision, query } = request();
        async move {
            let result = guard.run(client.filter_motions(&query)).await?;
            if let Ok(page) = &result {
                tracing::debug!(
                    revision,
                    rows = page.motions.len(),
                    total = ?page.total,
                    "motion page loaded"
                );
                list_state.write().apply_total(page.total);
            }
            Some(result)
        }
    });

    let content = list_content(page.read().as_ref().and_then(Option::as_ref));
    let filters = list_state.read().filters.clone();
    let pagination = list_state.read().pagination;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./motions.css") }

        div { class: "motions-page",
            PageHeader {
                PageTitle { "Denied Motions" }
                PageSubtitle { "Browse and filter motions denied by federal courts" }
            }

            FilterBar {
                actions: rsx! {
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| list_state.write().reset_filters(),
                        "Reset Filters"
                    }
                },
                Input {
                    label: "Court",
                    name: FilterField::Court.form_name().to_string(),
                    value: filters.court.clone(),
                    placeholder: "Any court",
                    on_input: move |evt: FormEvent| {
                        list_state.write().edit_filter(FilterField::Court, evt.value());
                    },
                }
                Input {
                    label: "Judge",
                    name: FilterField::Judge.form_name().to_string(),
                    value: filters.judge.clone(),
                    placeholder: "Any judge",
                    on_input: move |evt: FormEvent| {
                        list_state.write().edit_filter(FilterField::Judge, evt.value());
                    },
                }
                FormSelect {
                    label: "Motion Type",
                    name: FilterField::MotionType.form_name().to_string(),
                    value: filters.motion_type.clone(),
                    onchange: move |evt: Event<FormData>| {
                        list_state.write().edit_filter(FilterField::MotionType, evt.value());
                    },
                    option { value: "", "All Types" }
                    for motion_type in MOTION_TYPE_OPTIONS {
                        option { key: "{motion_type}", value: "{motion_type}", "{motion_type}" }
                    }
                }
                Input {
                    label: "Start Date",
                    name: FilterField::StartDate.form_name().to_string(),
                    input_type: "date",
                    value: filters.start_date.clone(),
                    on_input: move |evt: FormEvent| {
                        list_state.write().edit_filter(FilterField::StartDate, evt.value());
                    },
                }
                Input {
                    label: "End Date",
                    name: FilterField::EndDate.form_name().to_string(),
                    input_type: "date",
                    value: filters.end_date.clone(),
                    on_input: move |evt: FormEvent| {
                        list_state.write().edit_filter(FilterField::EndDate, evt.value());
                    },
                }
            }

            DataTable {
                DataTableHeader {
                    DataTableColumn { "Case Name" }
                    DataTableColumn { "Court" }
                    DataTableColumn { "Judge" }
                    DataTableColumn { "Motion Type" }
                    DataTableColumn { "Order Date" }
                    DataTableColumn { "" }
                }
                DataTableBody {
                    match content {
                        ListContent::Loading => rsx! {
                            DataTableMessage { colspan: COLUMN_COUNT,
                                SkeletonLines { count: 5 }
                            }
                        },
                        ListContent::Failed(message) => rsx! {
                            DataTableMessage { colspan: COLUMN_COUNT, error: true,
                                "Error: {message}"
                            }
                        },
                        ListContent::NoResults => rsx! {
                            DataTableMessage { colspan: COLUMN_COUNT,
                                "No motions found matching your criteria"
                            }
                        },
                        ListContent::Rows(motions) => rsx! {
                            for motion in motions {
                                MotionRow { key: "{motion.id}", motion: motion }
                            }
                        },
                    }
                }
            }

            Pagination {
                current_page: pagination.current_page,
                total_pages: pagination.total_pages,
                on_page_change: move |target: i64| {
                    if !list_state.write().change_page(target) {
                        tracing::debug!(page = target, "page change ignored");
                    }
                },
            }
        }
    }
}

#[component]
fn MotionRow(motion: Motion) -> Element {
    rsx! {
        DataTableRow {
            DataTableCell { "{motion.case_name}" }
            DataTableCell { "{motion.court}" }
            DataTableCell { "{motion.judge}" }
            DataTableCell {
                span { class: "motion-type-label", "{motion.motion_type}" }
            }
            DataTableCell { "{format_date_human(&motion.order_date)}" }
            DataTableCell {
                Link {
                    to: Route::MotionDetail { id: motion.id.clone() },
                    class: "motion-view-link",
                    "View"
                }
            }
        }
    }
}
