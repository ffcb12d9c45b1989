/// Timing passed to every frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameTick {
    pub delta_secs: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

/// Callbacks receive the state explicitly instead of capturing it.
pub type FrameCallback<S> = fn(&mut S, FrameTick);

/// Source of per-frame callbacks. A registration stays active until it is
/// cancelled.
pub trait FrameScheduler<S> {
    fn request_frame(&mut self, callback: FrameCallback<S>) -> FrameHandle;

    /// Returns `false` when the handle was not registered.
    fn cancel(&mut self, handle: FrameHandle) -> bool;
}

/// Scheduler advanced by hand: tests step it directly and the app steps it
/// once per Bevy update.
#[derive(Debug)]
pub struct ManualClock<S> {
    callbacks: Vec<(FrameHandle, FrameCallback<S>)>,
    next_handle: u64,
    invocations: u64,
}

impl<S> Default for ManualClock<S> {
    fn default() -> Self {
        Self {
            callbacks: Vec::new(),
            next_handle: 0,
            invocations: 0,
        }
    }
}

impl<S> ManualClock<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one frame: every registered callback, in registration order.
    pub fn advance(&mut self, state: &mut S, delta_secs: f32) {
        let tick = FrameTick { delta_secs };
        for (_, callback) in &self.callbacks {
            callback(state, tick);
            self.invocations += 1;
        }
    }

    /// Total callback invocations since creation.
    pub fn invocations(&self) -> u64 {
        self.invocations
    }

    pub fn registered(&self) -> usize {
        self.callbacks.len()
    }
}

impl<S> FrameScheduler<S> for ManualClock<S> {
    fn request_frame(&mut self, callback: FrameCallback<S>) -> FrameHandle {
        let handle = FrameHandle(self.next_handle);
        self.next_handle += 1;
        self.callbacks.push((handle, callback));
        handle
    }

    fn cancel(&mut self, handle: FrameHandle) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(registered, _)| *registered != handle);
        self.callbacks.len() != before
    }
}
