//! Frame scheduling and resize subscription supplied by the host.
//!
//! A window host maps [`FrameHost::request_frame`] to a redraw request and
//! delivers the returned handle back when the redraw arrives. [`ManualHost`]
//! does the same bookkeeping without a window, for headless drivers and
//! tests.

/// Identifies one requested frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// Identifies one resize subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Host-side scheduling and viewport notifications.
pub trait FrameHost {
    /// Ask for one frame callback. The host later invokes the session with
    /// the returned handle.
    fn request_frame(&mut self) -> FrameHandle;

    /// Withdraw a pending frame request. Unknown or already delivered
    /// handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);

    /// Start delivering viewport resize notifications.
    fn add_resize_listener(&mut self) -> ListenerId;

    /// Stop delivering resize notifications. Unknown ids are ignored.
    fn remove_resize_listener(&mut self, id: ListenerId);
}

/// A host with no window: frame requests queue up until [`ManualHost::take_pending`].
///
/// Keeps counters of every call so a driver can check the session's
/// bookkeeping.
#[derive(Debug, Default)]
pub struct ManualHost {
    next_id: u64,
    pending: Option<FrameHandle>,
    listener: Option<ListenerId>,
    requests: u64,
    cancels: u64,
    removals: u64,
}

impl ManualHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the pending frame request, if any, as the host would when the
    /// next frame is due.
    pub fn take_pending(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }

    /// The pending frame request, left in place.
    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Whether a resize listener is currently registered.
    pub fn is_listening(&self) -> bool {
        self.listener.is_some()
    }

    /// Total `request_frame` calls.
    pub fn request_count(&self) -> u64 {
        self.requests
    }

    /// Total `cancel_frame` calls that withdrew a pending request.
    pub fn cancel_count(&self) -> u64 {
        self.cancels
    }

    /// Total `remove_resize_listener` calls that removed a listener.
    pub fn removal_count(&self) -> u64 {
        self.removals
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl FrameHost for ManualHost {
    fn request_frame(&mut self) -> FrameHandle {
        let handle = FrameHandle(self.next_id());
        self.pending = Some(handle);
        self.requests += 1;
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
            self.cancels += 1;
        }
    }

    fn add_resize_listener(&mut self) -> ListenerId {
        let id = ListenerId(self.next_id());
        self.listener = Some(id);
        id
    }

    fn remove_resize_listener(&mut self, id: ListenerId) {
        if self.listener == Some(id) {
            self.listener = None;
            self.removals += 1;
        }
    }
}
