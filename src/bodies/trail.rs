//! Bounded position history used to draw orbit paths.

use std::collections::VecDeque;

use bevy::math::DVec2;

/// FIFO buffer of past positions, never longer than its cap.
#[derive(Clone, Debug, PartialEq)]
pub struct Trail {
    points: VecDeque<DVec2>,
    cap: usize,
}

impl Trail {
    /// Empty trail holding at most `cap` points.
    pub fn new(cap: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(cap.min(1024)),
            cap,
        }
    }

    /// Trail holding a single starting point.
    pub fn starting_at(cap: usize, point: DVec2) -> Self {
        let mut trail = Self::new(cap);
        trail.push(point);
        trail
    }

    /// Append a point, evicting the oldest ones once the cap is exceeded.
    pub fn push(&mut self, point: DVec2) {
        self.points.push_back(point);
        while self.points.len() > self.cap {
            self.points.pop_front();
        }
    }

    /// Drop all history and restart from `point`.
    pub fn reset(&mut self, point: DVec2) {
        self.points.clear();
        self.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Points from oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = DVec2> + ExactSizeIterator + '_ {
        self.points.iter().copied()
    }

    /// Most recent point, if any.
    pub fn latest(&self) -> Option<DVec2> {
        self.points.back().copied()
    }

    /// Whether the trail has enough points to draw at least one segment.
    pub fn is_drawable(&self) -> bool {
        self.points.len() > 1
    }
}
