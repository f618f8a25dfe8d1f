//! Viewport observation sessions for result cards.
//!
//! The rendering layer supplies a [`VisibilityPort`]; this module only decides
//! when a card counts as "entered" and makes sure at most one session is
//! subscribed at a time.

use engine_logging::engine_trace;

/// Fraction of a card that must be visible before it counts as entered.
pub const REVEAL_THRESHOLD: f32 = 0.1;

/// Index of a card within the rendered result set.
pub type CardHandle = usize;

/// Identifies one observation session; matches the result set it observes.
pub type SessionId = u64;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityChange {
    pub handle: CardHandle,
    /// Visible fraction of the card, `0.0..=1.0`.
    pub ratio: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardEntered {
    pub session: SessionId,
    pub handle: CardHandle,
}

/// Capability offered by whatever draws the cards.
pub trait VisibilityPort {
    /// Start reporting visibility changes for `handle`.
    fn subscribe(&mut self, handle: CardHandle);
    /// Drop every subscription. No changes are reported until the next `subscribe`.
    fn disconnect(&mut self);
}

/// Subscriptions for one rendered result set.
#[derive(Debug)]
pub struct ObservationSession {
    id: SessionId,
    entered: Vec<bool>,
}

impl ObservationSession {
    fn new(id: SessionId, count: usize) -> Self {
        Self {
            id,
            entered: vec![false; count],
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    /// First crossing of the threshold yields an event; later ones do not.
    pub fn on_visibility(&mut self, change: VisibilityChange) -> Option<CardEntered> {
        if change.ratio < REVEAL_THRESHOLD {
            return None;
        }
        let seen = self.entered.get_mut(change.handle)?;
        if *seen {
            return None;
        }
        *seen = true;
        Some(CardEntered {
            session: self.id,
            handle: change.handle,
        })
    }
}

/// Owns the port and the single live observation session.
pub struct ViewportAnimator<P: VisibilityPort> {
    port: P,
    session: Option<ObservationSession>,
}

impl<P: VisibilityPort> ViewportAnimator<P> {
    pub fn new(port: P) -> Self {
        Self {
            port,
            session: None,
        }
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }

    #[cfg(test)]
    fn session_id(&self) -> Option<SessionId> {
        self.session.as_ref().map(ObservationSession::id)
    }

    /// Tear down the current session, then subscribe `count` fresh cards.
    pub fn observe(&mut self, id: SessionId, count: usize) {
        if let Some(previous) = self.session.take() {
            engine_trace!("disconnecting observation session {}", previous.id);
            self.port.disconnect();
        }
        for handle in 0..count {
            self.port.subscribe(handle);
        }
        self.session = Some(ObservationSession::new(id, count));
    }

    pub fn on_visibility(&mut self, change: VisibilityChange) -> Option<CardEntered> {
        self.session.as_mut()?.on_visibility(change)
    }

    pub fn disconnect(&mut self) {
        if self.session.take().is_some() {
            self.port.disconnect();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingPort {
        calls: Vec<String>,
        live: Vec<CardHandle>,
    }

    impl VisibilityPort for RecordingPort {
        fn subscribe(&mut self, handle: CardHandle) {
            self.calls.push(format!("sub {handle}"));
            self.live.push(handle);
        }

        fn disconnect(&mut self) {
            self.calls.push("disconnect".to_string());
            self.live.clear();
        }
    }

    fn seen(handle: CardHandle, ratio: f32) -> VisibilityChange {
        VisibilityChange { handle, ratio }
    }

    #[test]
    fn previous_session_is_released_before_new_one() {
        let mut animator = ViewportAnimator::new(RecordingPort::default());
        animator.observe(1, 2);
        animator.observe(2, 1);

        assert_eq!(
            animator.port().calls,
            vec!["sub 0", "sub 1", "disconnect", "sub 0"]
        );
        assert_eq!(animator.port().live, vec![0]);
        assert_eq!(animator.session_id(), Some(2));
    }

    #[test]
    fn threshold_and_idempotence() {
        let mut animator = ViewportAnimator::new(RecordingPort::default());
        animator.observe(7, 3);

        assert_eq!(animator.on_visibility(seen(0, 0.05)), None);
        assert_eq!(
            animator.on_visibility(seen(0, 0.1)),
            Some(CardEntered {
                session: 7,
                handle: 0
            })
        );
        assert_eq!(animator.on_visibility(seen(0, 0.0)), None);
        assert_eq!(animator.on_visibility(seen(0, 1.0)), None);
        assert_eq!(animator.on_visibility(seen(9, 1.0)), None);
    }

    #[test]
    fn nothing_reported_without_session() {
        let mut animator = ViewportAnimator::new(RecordingPort::default());
        assert_eq!(animator.on_visibility(seen(0, 1.0)), None);

        animator.observe(1, 1);
        animator.disconnect();
        assert_eq!(animator.on_visibility(seen(0, 1.0)), None);
        assert_eq!(animator.port().calls, vec!["sub 0", "disconnect"]);
    }
}
