//! Per-screen fetch state machine.
//!
//! `Idle → Loading → {Loaded | NoFarm | Failed}`, re-entering `Loading` on
//! retry and after every mutation. There is no terminal state.

use crate::error::UseCaseError;

/// The state a resource screen renders from.
#[derive(Debug)]
pub enum ScreenState<T> {
    /// Nothing fetched yet.
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The user has no farm; callers route to farm creation instead of
    /// rendering a resource list.
    NoFarm,
    /// Items scoped to the selected farm. An empty list is a valid empty
    /// state, not an error.
    Loaded { farm_id: i64, items: Vec<T> },
    /// The fetch failed; the error is classified for the caller.
    Failed(UseCaseError),
}

impl<T> ScreenState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_no_farm(&self) -> bool {
        matches!(self, Self::NoFarm)
    }

    /// Returns the loaded items, if any.
    pub fn items(&self) -> Option<&[T]> {
        match self {
            Self::Loaded { items, .. } => Some(items),
            _ => None,
        }
    }

    /// Returns the selected farm id once loaded.
    pub fn farm_id(&self) -> Option<i64> {
        match self {
            Self::Loaded { farm_id, .. } => Some(*farm_id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loaded_accessors() {
        let state = ScreenState::Loaded {
            farm_id: 4,
            items: vec!["a", "b"],
        };
        assert_eq!(state.farm_id(), Some(4));
        assert_eq!(state.items(), Some(&["a", "b"][..]));
        assert!(!state.is_no_farm());
    }

    #[test]
    fn test_empty_loaded_is_valid_state() {
        let state: ScreenState<&str> = ScreenState::Loaded {
            farm_id: 4,
            items: vec![],
        };
        assert_eq!(state.items(), Some(&[][..]));
    }

    #[test]
    fn test_no_farm_has_no_farm_id() {
        let state: ScreenState<&str> = ScreenState::NoFarm;
        assert!(state.is_no_farm());
        assert_eq!(state.farm_id(), None);
        assert!(state.items().is_none());
    }
}
