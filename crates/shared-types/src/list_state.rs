use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::filter::{FilterField, FilterState};
use crate::motion::Motion;
use crate::pagination::{PaginationState, ITEMS_PER_PAGE};
use crate::responses::MotionPage;

/// Query sent to `GET /motions/filter`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotionQuery {
    pub limit: u64,
    pub offset: u64,
    pub filters: FilterState,
}

impl MotionQuery {
    /// `limit` and `offset` first, then the non-empty filters.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("limit", self.limit.to_string()),
            ("offset", self.offset.to_string()),
        ];
        params.extend(self.filters.query_params());
        params
    }
}

/// A query stamped with the state revision that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    pub revision: u64,
    pub query: MotionQuery,
}

/// Filter and page state of the motion list.
///
/// Every transition that should trigger a refetch bumps `revision`;
/// no-op transitions leave it untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MotionListState {
    pub filters: FilterState,
    pub pagination: PaginationState,
    pub revision: u64,
}

impl MotionListState {
    pub fn edit_filter(&mut self, field: FilterField, value: impl Into<String>) {
        self.filters.set(field, value);
        self.pagination.reset();
        self.revision += 1;
    }

    pub fn reset_filters(&mut self) {
        self.filters.clear();
        self.pagination.reset();
        self.revision += 1;
    }

    /// Returns whether a refetch is needed.
    pub fn change_page(&mut self, target: i64) -> bool {
        let changed = self.pagination.go_to(target);
        if changed {
            self.revision += 1;
        }
        changed
    }

    pub fn apply_total(&mut self, total: Option<u64>) {
        self.pagination.apply_total(total);
    }

    pub fn request(&self) -> ListRequest {
        ListRequest {
            revision: self.revision,
            query: MotionQuery {
                limit: ITEMS_PER_PAGE,
                offset: self.pagination.offset(),
                filters: self.filters.clone(),
            },
        }
    }
}

/// What the motion table body should show.
#[derive(Debug, Clone, PartialEq)]
pub enum ListContent {
    Loading,
    Failed(String),
    NoResults,
    Rows(Vec<Motion>),
}

pub fn list_content(result: Option<&Result<MotionPage, ApiError>>) -> ListContent {
    match result {
        None => ListContent::Loading,
        Some(Err(e)) => ListContent::Failed(e.friendly_message()),
        Some(Ok(page)) if page.motions.is_empty() => ListContent::NoResults,
        Some(Ok(page)) => ListContent::Rows(page.motions.clone()),
    }
}
