/// Session-level state selecting what the renderer overlays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionState {
    Playing,
    Paused,
    GameOver,
}

impl SessionState {
    /// Returns the state after a pause toggle.
    ///
    /// A finished game stays finished.
    #[must_use]
    pub const fn toggled_pause(self) -> Self {
        match self {
            SessionState::Playing => SessionState::Paused,
            SessionState::Paused => SessionState::Playing,
            SessionState::GameOver => SessionState::GameOver,
        }
    }
}
