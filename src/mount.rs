use leptos::*;

/// Whether the component tree has mounted in the browser.
///
/// Output that depends on the client clock or locale (relative day counts,
/// long dates) is only produced once `Ready`, so the first render never
/// disagrees with what the client would compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MountState {
    #[default]
    NotReady,
    Ready,
}

impl MountState {
    pub fn is_ready(self) -> bool {
        self == MountState::Ready
    }

    pub fn mark_ready(&mut self) {
        *self = MountState::Ready;
    }

    /// Run `f` only once mounted
    pub fn gate<T>(self, f: impl FnOnce() -> T) -> Option<T> {
        if self.is_ready() {
            Some(f())
        } else {
            None
        }
    }
}

/// Mount state of the calling component; flips to `Ready` after mount.
pub fn use_mount_state() -> ReadSignal<MountState> {
    let (state, set_state) = create_signal(MountState::NotReady);
    // Effects only run in the browser, after the view is attached
    create_effect(move |_| set_state.update(|s| s.mark_ready()));
    state
}
