use glam::Vec2;
use rustc_hash::FxHashSet;

use super::{Selection, SelectionNotifier};
use crate::picking::PickingService;
use crate::scene::{HighlightTarget, RenderableId};

/// Whether a tracker currently holds any highlights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerState {
    /// Nothing highlighted.
    Idle,
    /// At least one renderable highlighted.
    HasHighlights,
}

/// Keeps the highlight set of one interaction stream consistent with the
/// latest pick.
///
/// Every handle in the set has a highlight hold on the scene, and the
/// tracker holds nothing outside the set. Trackers never share a set: two
/// streams over the same scene each take their own holds.
#[derive(Debug, Clone)]
pub struct SelectionTracker {
    stream: String,
    threshold: usize,
    highlighted: FxHashSet<RenderableId>,
}

impl SelectionTracker {
    /// Create an idle tracker. Picks highlight only when they contain
    /// more than `threshold` objects.
    #[must_use]
    pub fn new(stream: impl Into<String>, threshold: usize) -> Self {
        Self {
            stream: stream.into(),
            threshold,
            highlighted: FxHashSet::default(),
        }
    }

    /// Stream name used in logs and notifications.
    #[must_use]
    pub fn stream(&self) -> &str {
        &self.stream
    }

    /// Minimum object count a pick must exceed to highlight.
    #[must_use]
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Change the threshold; takes effect on the next pick.
    pub fn set_threshold(&mut self, threshold: usize) {
        self.threshold = threshold;
    }

    /// Handles currently highlighted by this tracker.
    #[must_use]
    pub fn highlighted(&self) -> &FxHashSet<RenderableId> {
        &self.highlighted
    }

    /// Returns `true` if nothing is highlighted.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.highlighted.is_empty()
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> TrackerState {
        if self.is_idle() {
            TrackerState::Idle
        } else {
            TrackerState::HasHighlights
        }
    }

    /// Process one pick event at `point` (canvas coordinates).
    ///
    /// Clears this tracker's previous highlights, picks, and highlights
    /// every picked renderable if the pick holds more than
    /// [`threshold`](Self::threshold) objects, notifying `notifier` once.
    ///
    /// Returns `true` when the caller should redraw: something was
    /// un-highlighted, or the pick hit anything at all.
    pub fn handle_pick<S, N>(
        &mut self,
        scene: &mut S,
        point: Vec2,
        notifier: &mut N,
    ) -> bool
    where
        S: PickingService + HighlightTarget + ?Sized,
        N: SelectionNotifier + ?Sized,
    {
        let had_prior = self.clear(scene);

        let result = scene.pick(point);
        log::debug!(
            "[{}] pick at ({}, {}) returned {} object(s)",
            self.stream,
            point.x,
            point.y,
            result.len()
        );

        if result.len() > self.threshold {
            for id in result.renderables() {
                if self.highlighted.insert(id) {
                    scene.set_highlighted(id, true);
                }
            }
            log::info!(
                "[{}] highlighted {} renderable(s)",
                self.stream,
                self.highlighted.len()
            );
            notifier.on_qualifying_selection(&Selection {
                stream: &self.stream,
                objects: result.objects(),
            });
        }

        had_prior || !result.is_empty()
    }

    /// Release every highlight this tracker holds. Returns `true` if
    /// anything was highlighted.
    pub fn clear<S>(&mut self, scene: &mut S) -> bool
    where
        S: HighlightTarget + ?Sized,
    {
        let had_prior = !self.highlighted.is_empty();
        for id in self.highlighted.drain() {
            scene.set_highlighted(id, false);
        }
        had_prior
    }
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashMap;

    use super::*;
    use crate::geo::Position;
    use crate::picking::{PickResult, PickTarget};
    use crate::scene::LayerId;
    use crate::selection::NoopNotifier;

    fn id(index: u32) -> RenderableId {
        RenderableId::new(LayerId(0), index)
    }

    /// Deterministic scene: each x coordinate maps to a fixed set of
    /// renderables (plus terrain when `with_terrain`).
    #[derive(Default)]
    struct FakeScene {
        hits: FxHashMap<u32, Vec<RenderableId>>,
        flags: FxHashMap<RenderableId, bool>,
        with_terrain: bool,
    }

    impl FakeScene {
        fn hit(mut self, x: u32, ids: &[u32]) -> Self {
            let _ = self.hits.insert(x, ids.iter().map(|&i| id(i)).collect());
            self
        }

        fn flagged(&self) -> FxHashSet<RenderableId> {
            self.flags
                .iter()
                .filter(|&(_, &on)| on)
                .map(|(&id, _)| id)
                .collect()
        }
    }

    impl PickingService for FakeScene {
        fn pick(&self, point: Vec2) -> PickResult {
            let mut result: PickResult = self
                .hits
                .get(&(point.x as u32))
                .into_iter()
                .flatten()
                .map(|&id| PickTarget::Renderable(id))
                .collect();
            if self.with_terrain {
                result.push(PickTarget::Terrain(Position::default()), None);
            }
            result
        }
    }

    impl HighlightTarget for FakeScene {
        fn set_highlighted(&mut self, id: RenderableId, highlighted: bool) {
            let _ = self.flags.insert(id, highlighted);
        }

        fn is_highlighted(&self, id: RenderableId) -> bool {
            self.flags.get(&id).copied().unwrap_or(false)
        }
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<(String, usize)>,
    }

    impl SelectionNotifier for Recorder {
        fn on_qualifying_selection(&mut self, selection: &Selection<'_>) {
            self.calls
                .push((selection.stream.to_owned(), selection.objects.len()));
        }
    }

    fn at(x: u32) -> Vec2 {
        Vec2::new(x as f32, 0.0)
    }

    fn set(ids: &[u32]) -> FxHashSet<RenderableId> {
        ids.iter().map(|&i| id(i)).collect()
    }

    #[test]
    fn threshold_boundary_two_does_not_highlight() {
        let mut scene =
            FakeScene::default().hit(1, &[0, 1]).hit(2, &[0, 1, 2]);
        let mut tracker = SelectionTracker::new("click", 2);
        let mut recorder = Recorder::default();

        let redraw = tracker.handle_pick(&mut scene, at(1), &mut recorder);
        assert!(redraw, "a non-empty pick always redraws");
        assert!(tracker.is_idle());
        assert!(recorder.calls.is_empty());

        let redraw = tracker.handle_pick(&mut scene, at(2), &mut recorder);
        assert!(redraw);
        assert_eq!(tracker.highlighted(), &set(&[0, 1, 2]));
        assert_eq!(scene.flagged(), set(&[0, 1, 2]));
        assert_eq!(recorder.calls, vec![("click".to_owned(), 3)]);
    }

    #[test]
    fn lower_threshold_highlights_pairs() {
        let mut scene = FakeScene::default().hit(1, &[4, 5]);
        let mut tracker = SelectionTracker::new("hover", 1);

        let redraw = tracker.handle_pick(&mut scene, at(1), &mut NoopNotifier);
        assert!(redraw);
        assert_eq!(tracker.highlighted(), &set(&[4, 5]));
        assert_eq!(tracker.state(), TrackerState::HasHighlights);
    }

    #[test]
    fn empty_pick_on_idle_tracker_needs_no_redraw() {
        let mut scene = FakeScene::default();
        let mut tracker = SelectionTracker::new("click", 2);

        let redraw = tracker.handle_pick(&mut scene, at(7), &mut NoopNotifier);
        assert!(!redraw);
        assert!(tracker.is_idle());
    }

    #[test]
    fn clearing_prior_highlights_always_redraws() {
        let mut scene = FakeScene::default().hit(1, &[0, 1, 2]);
        let mut tracker = SelectionTracker::new("click", 2);
        let _ = tracker.handle_pick(&mut scene, at(1), &mut NoopNotifier);

        // Empty pick after a highlight: cleared, so redraw
        let redraw = tracker.handle_pick(&mut scene, at(9), &mut NoopNotifier);
        assert!(redraw);
        assert!(tracker.is_idle());
        assert!(scene.flagged().is_empty());
    }

    #[test]
    fn repeated_pick_is_idempotent() {
        let mut scene = FakeScene::default().hit(3, &[1, 2, 3]);
        let mut tracker = SelectionTracker::new("click", 2);

        let _ = tracker.handle_pick(&mut scene, at(3), &mut NoopNotifier);
        let first = tracker.highlighted().clone();
        let _ = tracker.handle_pick(&mut scene, at(3), &mut NoopNotifier);

        assert_eq!(tracker.highlighted(), &first);
        assert_eq!(scene.flagged(), first);
    }

    #[test]
    fn set_tracks_latest_qualifying_pick() {
        let mut scene = FakeScene::default()
            .hit(1, &[0, 1, 2])
            .hit(2, &[3, 4, 5, 6])
            .hit(3, &[7]);
        let mut tracker = SelectionTracker::new("click", 2);

        for (x, expected) in [
            (1, set(&[0, 1, 2])),
            (2, set(&[3, 4, 5, 6])),
            (3, set(&[])),
            (1, set(&[0, 1, 2])),
            (8, set(&[])),
        ] {
            let _ = tracker.handle_pick(&mut scene, at(x), &mut NoopNotifier);
            assert_eq!(tracker.highlighted(), &expected, "after pick at {x}");
            assert_eq!(scene.flagged(), expected, "scene after pick at {x}");
        }
    }

    #[test]
    fn terrain_counts_toward_threshold_but_is_not_highlighted() {
        let mut scene = FakeScene::default().hit(1, &[0, 1]);
        scene.with_terrain = true;
        let mut tracker = SelectionTracker::new("click", 2);
        let mut recorder = Recorder::default();

        let _ = tracker.handle_pick(&mut scene, at(1), &mut recorder);
        assert_eq!(tracker.highlighted(), &set(&[0, 1]));
        assert_eq!(recorder.calls, vec![("click".to_owned(), 3)]);

        // Terrain alone: redraw, but below threshold
        let redraw = tracker.handle_pick(&mut scene, at(5), &mut recorder);
        assert!(redraw);
        assert!(tracker.is_idle());
    }

    #[test]
    fn notifier_called_once_per_event() {
        let mut scene = FakeScene::default().hit(1, &[0, 1, 2, 3, 4]);
        let mut tracker = SelectionTracker::new("click", 0);
        let mut recorder = Recorder::default();

        let _ = tracker.handle_pick(&mut scene, at(1), &mut recorder);
        assert_eq!(recorder.calls.len(), 1);
    }

    #[test]
    fn explicit_clear_reports_change() {
        let mut scene = FakeScene::default().hit(1, &[0, 1, 2]);
        let mut tracker = SelectionTracker::new("click", 2);
        assert!(!tracker.clear(&mut scene));

        let _ = tracker.handle_pick(&mut scene, at(1), &mut NoopNotifier);
        assert!(tracker.clear(&mut scene));
        assert!(scene.flagged().is_empty());
        assert_eq!(tracker.state(), TrackerState::Idle);
    }

    /// Click and hover handlers sharing a single highlight list.
    struct SharedListHandler {
        threshold: usize,
    }

    impl SharedListHandler {
        fn handle(
            &self,
            shared: &mut Vec<RenderableId>,
            scene: &mut FakeScene,
            point: Vec2,
        ) {
            for id in shared.drain(..) {
                scene.set_highlighted(id, false);
            }
            let result = scene.pick(point);
            if result.len() > self.threshold {
                for id in result.renderables() {
                    scene.set_highlighted(id, true);
                    shared.push(id);
                }
            }
        }
    }

    #[test]
    fn shared_highlight_list_diverges_from_intent() {
        let mut scene =
            FakeScene::default().hit(1, &[0, 1, 2]).hit(2, &[5, 6]);
        let click = SharedListHandler { threshold: 2 };
        let hover = SharedListHandler { threshold: 1 };
        let mut shared = Vec::new();

        click.handle(&mut shared, &mut scene, at(1));
        hover.handle(&mut shared, &mut scene, at(2));

        // The click stream still intends {0, 1, 2}, but the hover handler
        // cleared them through the shared list.
        let click_intent = set(&[0, 1, 2]);
        assert!(click_intent.is_disjoint(&scene.flagged()));
        assert_eq!(scene.flagged(), set(&[5, 6]));
    }

    #[test]
    fn isolated_trackers_keep_their_own_sets() {
        let mut scene =
            FakeScene::default().hit(1, &[0, 1, 2]).hit(2, &[5, 6]);
        let mut click = SelectionTracker::new("click", 2);
        let mut hover = SelectionTracker::new("hover", 1);

        let _ = click.handle_pick(&mut scene, at(1), &mut NoopNotifier);
        let _ = hover.handle_pick(&mut scene, at(2), &mut NoopNotifier);

        assert_eq!(click.highlighted(), &set(&[0, 1, 2]));
        assert_eq!(hover.highlighted(), &set(&[5, 6]));
        assert_eq!(scene.flagged(), set(&[0, 1, 2, 5, 6]));
    }
}
