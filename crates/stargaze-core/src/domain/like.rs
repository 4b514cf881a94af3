use serde::{Deserialize, Serialize};

/// The current user's like flag together with the observation's like count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeState {
    pub liked: bool,
    pub count: u32,
}

impl LikeState {
    /// Build a state, normalizing a liked observation to at least one like.
    pub fn new(liked: bool, count: u32) -> Self {
        let count = if liked { count.max(1) } else { count };
        Self { liked, count }
    }

    /// Flip the like flag.
    pub fn toggle(self) -> Self {
        self.set(!self.liked)
    }

    /// Move to `liked`. Setting the current value leaves the state unchanged.
    pub fn set(self, liked: bool) -> Self {
        match (self.liked, liked) {
            (false, true) => Self {
                liked: true,
                count: self.count.saturating_add(1),
            },
            (true, false) => Self {
                liked: false,
                count: self.count.saturating_sub(1),
            },
            _ => self,
        }
    }
}

/// A like operation's before and after states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeChange {
    pub before: LikeState,
    pub after: LikeState,
}

impl LikeChange {
    /// False when the operation repeated the current state.
    pub fn changed(&self) -> bool {
        self.before != self.after
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adjusts_count_by_one() {
        let state = LikeState::new(false, 24);
        let liked = state.toggle();
        assert_eq!(liked, LikeState::new(true, 25));
        assert_eq!(liked.toggle(), state);
    }

    #[test]
    fn toggle_twice_is_identity() {
        for liked in [false, true] {
            for count in [0, 1, 2, 67, 156] {
                let state = LikeState::new(liked, count);
                assert_eq!(state.toggle().toggle(), state);
            }
        }
    }

    #[test]
    fn count_never_goes_negative() {
        let mut state = LikeState::new(false, 0);
        for _ in 0..11 {
            state = state.toggle();
            assert!(state.count <= 1);
        }
        assert_eq!(state, LikeState::new(true, 1));

        let unnormalized = LikeState {
            liked: true,
            count: 0,
        };
        assert_eq!(unnormalized.toggle().count, 0);
    }

    #[test]
    fn liked_state_is_normalized_to_one_like() {
        assert_eq!(LikeState::new(true, 0).count, 1);
        assert_eq!(LikeState::new(false, 0).count, 0);
    }

    #[test]
    fn set_is_idempotent() {
        let state = LikeState::new(true, 67);
        assert_eq!(state.set(true), state);
        assert_eq!(state.set(false).set(false), LikeState::new(false, 66));
    }
}
