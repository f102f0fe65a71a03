///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Imports
///
///////////////////////////////////////////////////////////////////////////////////////////////////
use std::time::Duration;

use druid::Data;

use super::spring::{Spring, SpringConfig};

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// StaggerConfig
///
///////////////////////////////////////////////////////////////////////////////////////////////////
/// Order in which the items of a [`Trail`] pick up a new target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Data, Default)]
pub enum StaggerDirection {
    #[default]
    Forward,
    Reverse,
    FromCenter,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaggerConfig {
    pub delay: Duration,
    pub direction: StaggerDirection,
}

impl StaggerConfig {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            direction: StaggerDirection::Forward,
        }
    }

    /// Every item starts at once.
    pub fn none() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn reverse(mut self) -> Self {
        self.direction = StaggerDirection::Reverse;
        self
    }

    pub fn from_center(mut self) -> Self {
        self.direction = StaggerDirection::FromCenter;
        self
    }

    pub fn delay_for_index(&self, index: usize, total: usize) -> Duration {
        let effective_index = match self.direction {
            StaggerDirection::Forward => index,
            StaggerDirection::Reverse => total.saturating_sub(1).saturating_sub(index),
            StaggerDirection::FromCenter => {
                let center = total / 2;
                if index <= center {
                    center - index
                } else {
                    index - center
                }
            }
        };
        let steps = u32::try_from(effective_index).unwrap_or(u32::MAX);
        self.delay.saturating_mul(steps)
    }
}

impl Default for StaggerConfig {
    fn default() -> Self {
        Self::new(Duration::from_millis(40))
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Trail
///
///////////////////////////////////////////////////////////////////////////////////////////////////
#[derive(Clone, Copy, Debug, PartialEq)]
struct Pending {
    target: f64,
    wait: f64,
}

#[derive(Clone, Debug, PartialEq)]
struct TrailItem {
    spring: Spring,
    requested: f64,
    pending: Option<Pending>,
}

/// A row of springs that all chase the same target, each one starting a little
/// after the previous one.
#[derive(Clone, Debug, PartialEq)]
pub struct Trail {
    items: Vec<TrailItem>,
    stagger: StaggerConfig,
}

impl Trail {
    pub fn new(count: usize, initial: f64, config: SpringConfig, stagger: StaggerConfig) -> Self {
        let items = (0..count)
            .map(|_| TrailItem {
                spring: Spring::new(initial, config),
                requested: initial,
                pending: None,
            })
            .collect();
        Self { items, stagger }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn stagger(&self) -> &StaggerConfig {
        &self.stagger
    }

    /// Requests `target` for every item. A pending request that has not started yet is replaced.
    pub fn start(&mut self, target: f64) {
        let total = self.items.len();
        for (index, item) in self.items.iter_mut().enumerate() {
            item.requested = target;
            let wait = self.stagger.delay_for_index(index, total).as_secs_f64();
            if wait > 0.0 {
                item.pending = Some(Pending { target, wait });
            } else {
                item.pending = None;
                item.spring.set_target(target);
            }
        }
    }

    /// Advances every item by `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }

        for item in self.items.iter_mut() {
            let mut remaining = dt;
            if let Some(pending) = item.pending.as_mut() {
                if pending.wait > remaining {
                    pending.wait -= remaining;
                    item.spring.step(remaining);
                    continue;
                }
                item.spring.step(pending.wait);
                item.spring.set_target(pending.target);
                remaining -= pending.wait;
                item.pending = None;
            }
            item.spring.step(remaining);
        }
    }

    pub fn value(&self, index: usize) -> Option<f64> {
        self.items.get(index).map(|item| item.spring.value())
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.items.iter().map(|item| item.spring.value())
    }

    /// The last target handed to [`Trail::start`] for this item, whether or not it has started moving.
    pub fn requested_target(&self, index: usize) -> Option<f64> {
        self.items.get(index).map(|item| item.requested)
    }

    pub fn is_animating(&self) -> bool {
        self.items
            .iter()
            .any(|item| item.pending.is_some() || !item.spring.is_settled())
    }
}
