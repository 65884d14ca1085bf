//! The diff event contract.
//!
//! The engine reports its findings SAX-style: `on_before_start` once, then
//! `handle` for every common or different segment in left-to-right order,
//! then `on_done` once with the final similarity. A sink that only cares
//! about some of these overrides just those methods.

use crate::primitives::Range;
use crate::sequence::Sequence;

/// Kind of segment being reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EventType {
    /// A run shared by both sequences. Left and right ranges have equal length.
    CommonPart,
    /// A stretch with no usable run. Left and right ranges may differ in length.
    DifferentPart,
}

/// Which of the two compared sequences a segment belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(&self) -> Side {
        return match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        };
    }
}

/// Receives diff events from a comparison.
pub trait DiffSink<T> {
    /// Called once, before any other event.
    fn on_before_start(&mut self) {}

    /// Called for every reported segment.
    fn handle(&mut self, sequence: &Sequence<T>, range: Range, event: EventType, side: Side);

    /// Called once after the comparison with a similarity in `[0, 1]`.
    fn on_done(&mut self, _similarity: f64) {}
}

impl<T, S: DiffSink<T> + ?Sized> DiffSink<T> for &mut S {
    fn on_before_start(&mut self) {
        (**self).on_before_start();
    }

    fn handle(&mut self, sequence: &Sequence<T>, range: Range, event: EventType, side: Side) {
        (**self).handle(sequence, range, event, side);
    }

    fn on_done(&mut self, similarity: f64) {
        (**self).on_done(similarity);
    }
}

/// A sink that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl<T> DiffSink<T> for NoopSink {
    #[inline]
    fn handle(&mut self, _: &Sequence<T>, _: Range, _: EventType, _: Side) {}
}

/// One recorded segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiffEvent {
    pub kind: EventType,
    pub side: Side,
    pub range: Range,
}

impl DiffEvent {
    pub fn new(kind: EventType, side: Side, range: Range) -> DiffEvent {
        return DiffEvent { kind, side, range };
    }

    /// The same event seen from the other side.
    pub fn mirrored(&self) -> DiffEvent {
        return DiffEvent {
            kind: self.kind,
            side: self.side.opposite(),
            range: self.range,
        };
    }
}

/// Records the full event stream of a comparison.
///
/// Tokens are not copied; events refer to the compared sequences by range.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transcript {
    started: bool,
    events: Vec<DiffEvent>,
    similarity: Option<f64>,
}

impl Transcript {
    pub fn new() -> Transcript {
        return Transcript::default();
    }

    /// Whether `on_before_start` was received.
    pub fn started(&self) -> bool {
        return self.started;
    }

    pub fn events(&self) -> &[DiffEvent] {
        return &self.events;
    }

    /// The similarity passed to `on_done`, if it was called.
    pub fn similarity(&self) -> Option<f64> {
        return self.similarity;
    }

    /// Total length of the `kind` segments reported for `side`.
    pub fn covered(&self, kind: EventType, side: Side) -> usize {
        return self
            .events
            .iter()
            .filter(|e| e.kind == kind && e.side == side)
            .map(|e| e.range.len())
            .sum();
    }

    pub fn common_len(&self, side: Side) -> usize {
        return self.covered(EventType::CommonPart, side);
    }

    pub fn different_len(&self, side: Side) -> usize {
        return self.covered(EventType::DifferentPart, side);
    }
}

impl<T> DiffSink<T> for Transcript {
    fn on_before_start(&mut self) {
        self.started = true;
        self.events.clear();
        self.similarity = None;
    }

    fn handle(&mut self, _sequence: &Sequence<T>, range: Range, event: EventType, side: Side) {
        self.events.push(DiffEvent::new(event, side, range));
    }

    fn on_done(&mut self, similarity: f64) {
        self.similarity = Some(similarity);
    }
}
