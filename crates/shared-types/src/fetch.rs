/// Hands out tickets for in-flight fetches so a resumed fetch can tell
/// whether it may still commit its result.
///
/// A ticket is current while no newer ticket has been issued and the tracker
/// has not been cancelled (owning view torn down).
#[derive(Debug, Default)]
pub struct FetchTracker {
    latest: u64,
    cancelled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

impl FetchTracker {
    pub fn begin(&mut self) -> FetchTicket {
        self.latest += 1;
        FetchTicket(self.latest)
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        !self.cancelled && ticket.0 == self.latest
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}
