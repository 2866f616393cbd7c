/*!
Per-container movement tracking.

The input layer records a movement code whenever focus moves inside a
container; movement queries classify the code until the next reset. The
update loop resets the tracker exactly once per cycle, which bounds how
long a "just moved" answer stays true.
*/

use crate::types::ControlId;
use std::collections::HashMap;

/// Transient movement question about a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MovementQuery {
  ScrollPrevious,
  MovePrevious,
  MoveNext,
  ScrollNext,
}

/// Movement codes recorded since the last reset.
///
/// Sign encodes direction (negative = toward previous), magnitude
/// encodes a single step (1) vs a continuous scroll (2). A container
/// is absent from the map when nothing moved it since the last reset -
/// absent means "no recent movement", not "stationary".
#[derive(Debug, Default)]
pub(crate) struct MovementTracker {
  moves: HashMap<ControlId, i8>,
}

impl MovementTracker {
  pub(crate) fn new() -> Self {
    Self::default()
  }

  /// Record a movement event for `container`.
  pub(crate) fn record(&mut self, container: ControlId, toward_next: bool, scrolling: bool) {
    let direction: i8 = if toward_next { 1 } else { -1 };
    let magnitude: i8 = if scrolling { 2 } else { 1 };
    self.moves.insert(container, direction * magnitude);
    log::trace!("container {container} moved: {}", direction * magnitude);
  }

  /// Forget all recorded movement. Called once per update cycle.
  pub(crate) fn reset(&mut self) {
    self.moves.clear();
  }

  /// Answer a movement query for `container`; `None` when nothing was
  /// recorded for it since the last reset.
  pub(crate) fn classify(&self, container: ControlId, query: MovementQuery) -> Option<bool> {
    let code = *self.moves.get(&container)?;
    Some(match query {
      MovementQuery::ScrollPrevious => code <= -2,
      MovementQuery::MovePrevious => code <= -1,
      MovementQuery::MoveNext => code >= 1,
      MovementQuery::ScrollNext => code >= 2,
    })
  }
}


#[cfg(test)]
mod proptests {
  use super::*;
  use proptest::prelude::*;

  proptest! {
    /// Exactly one direction answers true, and the scroll level answers
    /// true only when the event was a scroll.
    #[test]
    fn one_direction_matches_per_event(id in 1u32..1000, toward_next: bool, scrolling: bool) {
      let mut tracker = MovementTracker::new();
      tracker.record(ControlId(id), toward_next, scrolling);

      let move_next = tracker.classify(ControlId(id), MovementQuery::MoveNext);
      let move_previous = tracker.classify(ControlId(id), MovementQuery::MovePrevious);
      let scroll_next = tracker.classify(ControlId(id), MovementQuery::ScrollNext);
      let scroll_previous = tracker.classify(ControlId(id), MovementQuery::ScrollPrevious);

      prop_assert_eq!(move_next, Some(toward_next));
      prop_assert_eq!(move_previous, Some(!toward_next));
      prop_assert_eq!(scroll_next, Some(toward_next && scrolling));
      prop_assert_eq!(scroll_previous, Some(!toward_next && scrolling));
    }

    /// Reset always restores the "nothing recorded" state.
    #[test]
    fn reset_clears_any_history(events in prop::collection::vec((1u32..50, any::<bool>(), any::<bool>()), 0..32)) {
      let mut tracker = MovementTracker::new();
      for (id, toward_next, scrolling) in &events {
        tracker.record(ControlId(*id), *toward_next, *scrolling);
      }
      tracker.reset();
      for (id, _, _) in &events {
        prop_assert_eq!(tracker.classify(ControlId(*id), MovementQuery::MoveNext), None);
        prop_assert_eq!(tracker.classify(ControlId(*id), MovementQuery::MovePrevious), None);
      }
    }
  }
}
