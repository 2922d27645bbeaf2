//! Sweep-line lane allocation for spanning segments.
//!
//! Edges are visited in a canonical total order. Each open takes the lowest
//! free lane and each close frees the lane of its segment. Alongside, the
//! sweep records how many lanes are in use from each ordinal onward, which is
//! the vertical space a day cell must reserve above its own events.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use super::edges::{Edge, EdgeId};
use super::event::Event;

/// Result of a lane sweep.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaneAssignment {
    /// Reserved lanes keyed by the ordinal where the value takes effect.
    pub reserved: BTreeMap<i64, usize>,
    /// Total lanes ever used, the maximum concurrency over the year.
    pub lane_count: usize,
}

impl LaneAssignment {
    /// Lanes reserved at `ord`: the last record at or before it.
    pub fn reserved_at(&self, ord: i64) -> usize {
        self.reserved
            .range(..=ord)
            .next_back()
            .map_or(0, |(_, lanes)| *lanes)
    }
}

/// Orders two edges for the sweep.
///
/// Ascending position; closes before opens so a lane freed at a position is
/// reusable by a segment starting there; week-break edges before true
/// boundaries so continuing segments claim low lanes first; then the owning
/// events' canonical order. Event and edge indices settle the rest, so the
/// order is strict for distinct edges.
pub fn compare_edges(
    edges: &[Edge],
    events: &[&Event],
    a_id: EdgeId,
    b_id: EdgeId,
) -> Ordering {
    let a = &edges[a_id];
    let b = &edges[b_id];

    a.position
        .cmp(&b.position)
        .then_with(|| b.is_close().cmp(&a.is_close()))
        .then_with(|| a.definite.cmp(&b.definite))
        .then_with(|| events[a.event].compare(events[b.event]))
        .then_with(|| a.event.cmp(&b.event))
        .then_with(|| a_id.cmp(&b_id))
}

/// Edge ids in sweep order.
pub fn canonical_order(edges: &[Edge], events: &[&Event]) -> Vec<EdgeId> {
    let mut order: Vec<EdgeId> = (0..edges.len()).collect();
    order.sort_unstable_by(|&a, &b| compare_edges(edges, events, a, b));
    order
}

/// Sweeps `edges` and writes a lane onto every open edge.
///
/// # Panics
///
/// Panics if a close edge refers to a segment that is not open, which means
/// the edge arena or the sweep order is broken.
pub fn allocate(edges: &mut [Edge], events: &[&Event]) -> LaneAssignment {
    let order = canonical_order(edges, events);
    let mut occupied: BTreeSet<usize> = BTreeSet::new();
    let mut assignment = LaneAssignment::default();

    for id in order {
        match edges[id].opened_by {
            None => {
                let lane = lowest_free_lane(&occupied);
                occupied.insert(lane);
                edges[id].lane = Some(lane);
                assignment.lane_count = assignment.lane_count.max(lane + 1);
            }
            Some(open_id) => {
                let lane = edges[open_id]
                    .lane
                    .unwrap_or_else(|| panic!("edge {id} closes segment {open_id} before it opened"));
                assert!(
                    occupied.remove(&lane),
                    "edge {id} frees lane {lane} which is not occupied"
                );
            }
        }

        assignment
            .reserved
            .insert(edges[id].position, watermark(&occupied));
    }

    tracing::debug!(
        edges = edges.len(),
        lanes = assignment.lane_count,
        "Allocated spanning lanes"
    );

    assignment
}

/// Lowest lane number not in `occupied`.
fn lowest_free_lane(occupied: &BTreeSet<usize>) -> usize {
    let mut lane = 0;
    for &taken in occupied {
        if taken != lane {
            break;
        }
        lane += 1;
    }
    lane
}

/// One past the highest occupied lane. Holes below it stay reserved.
fn watermark(occupied: &BTreeSet<usize>) -> usize {
    occupied.last().map_or(0, |lane| lane + 1)
}
