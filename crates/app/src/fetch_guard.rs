use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use dioxus::prelude::*;
use shared_types::FetchTracker;

/// Gate between an in-flight fetch and the state it would update.
///
/// Each call to [`FetchGuard::run`] takes a new ticket; the result is only
/// handed back if no newer fetch started and the owning component is still
/// mounted.
#[derive(Clone, Default)]
pub struct FetchGuard(Rc<RefCell<FetchTracker>>);

impl FetchGuard {
    pub async fn run<T>(&self, fetch: impl Future<Output = T>) -> Option<T> {
        let ticket = self.0.borrow_mut().begin();
        let value = fetch.await;
        if self.0.borrow().is_current(ticket) {
            Some(value)
        } else {
            tracing::debug!("dropping superseded response");
            None
        }
    }

    pub fn cancel(&self) {
        self.0.borrow_mut().cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.borrow().is_cancelled()
    }
}

/// One guard per resource, cancelled when the component unmounts.
pub fn use_fetch_guard() -> FetchGuard {
    let guard = use_hook(FetchGuard::default);
    let on_unmount = guard.clone();
    use_drop(move || on_unmount.cancel());
    guard
}
