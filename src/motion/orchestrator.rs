use std::collections::{BTreeMap, HashMap, HashSet};

use crate::foundation::core::TimeMs;
use crate::foundation::error::{FolioError, FolioResult};
use crate::motion::ease::Ease;
use crate::motion::tween::{Tween, VisualState};
use crate::motion::viewport::{Crossing, IntersectionObserver, Subscription, Trigger};

/// Lifecycle of one entrance animation. `Completed` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum AnimationState {
    /// Registered, not observed yet (or its element does not exist).
    Pending,
    /// Observed, waiting for its trigger.
    Armed,
    /// Tween scheduled or running.
    Playing,
    /// Reached its final state.
    Completed,
}

/// One element's entrance animation.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimationTarget {
    /// Element id; also the id of the observed element.
    pub id: String,
    /// State before the trigger fires.
    pub initial_state: VisualState,
    /// State after the tween ends.
    pub final_state: VisualState,
    /// Tween length.
    pub duration_ms: u64,
    /// Delay between trigger and tween start.
    #[serde(default)]
    pub delay_ms: u64,
    /// When the element counts as in view.
    #[serde(default)]
    pub trigger: Trigger,
    /// Easing of the tween.
    #[serde(default)]
    pub ease: Ease,
}

impl AnimationTarget {
    /// Target with no delay, the default trigger and the default ease.
    pub fn new(
        id: impl Into<String>,
        initial_state: VisualState,
        final_state: VisualState,
        duration_ms: u64,
    ) -> Self {
        Self {
            id: id.into(),
            initial_state,
            final_state,
            duration_ms,
            delay_ms: 0,
            trigger: Trigger::default(),
            ease: Ease::default(),
        }
    }

    /// Replace the delay.
    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Replace the trigger.
    pub fn with_trigger(mut self, trigger: Trigger) -> Self {
        self.trigger = trigger;
        self
    }

    /// Replace the ease.
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }
}

/// Staggered members plus an optional container with its own trigger.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationGroup {
    /// Member `i` is delayed by `base_delay_ms * (i + 1)`.
    pub base_delay_ms: u64,
    /// Members in stagger order.
    pub members: Vec<AnimationTarget>,
    /// Coarser fade-in of the enclosing section.
    pub container: Option<AnimationTarget>,
}

/// Emitted by [`AnimationOrchestrator::tick`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnimationEvent {
    /// The tween passed its start time.
    Started {
        /// Target id.
        id: String,
    },
    /// The target reached its final state.
    Completed {
        /// Target id.
        id: String,
    },
}

#[derive(Debug)]
struct Slot {
    target: AnimationTarget,
    state: AnimationState,
    subscription: Option<Subscription>,
    tween: Option<Tween<VisualState>>,
    started: bool,
    visual: VisualState,
}

/// Owns every registered entrance animation and drives it from crossings and the clock.
#[derive(Debug, Default)]
pub struct AnimationOrchestrator {
    slots: BTreeMap<String, Slot>,
    order: Vec<String>,
    by_subscription: HashMap<Subscription, String>,
}

impl AnimationOrchestrator {
    /// Empty orchestrator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a target in `Pending`. Ids must be unique.
    pub fn register(&mut self, target: AnimationTarget) -> FolioResult<()> {
        if self.slots.contains_key(&target.id) {
            return Err(FolioError::animation(format!(
                "animation target '{}' is already registered",
                target.id
            )));
        }
        let id = target.id.clone();
        self.slots.insert(
            id.clone(),
            Slot {
                visual: target.initial_state,
                target,
                state: AnimationState::Pending,
                subscription: None,
                tween: None,
                started: false,
            },
        );
        self.order.push(id);
        Ok(())
    }

    /// Register a staggered group. Member delays are overwritten with the stagger formula.
    ///
    /// The group is registered whole or not at all: an id that is already registered, or that
    /// appears twice in the group, rejects every member.
    pub fn register_group(&mut self, group: AnimationGroup) -> FolioResult<()> {
        let ids = group
            .members
            .iter()
            .map(|m| m.id.as_str())
            .chain(group.container.iter().map(|c| c.id.as_str()));
        let mut seen = HashSet::new();
        for id in ids {
            if self.slots.contains_key(id) {
                return Err(FolioError::animation(format!(
                    "animation target '{id}' is already registered"
                )));
            }
            if !seen.insert(id) {
                return Err(FolioError::animation(format!(
                    "animation target '{id}' appears twice in the group"
                )));
            }
        }
        for (i, member) in group.members.into_iter().enumerate() {
            let delay = group.base_delay_ms.saturating_mul(i as u64 + 1);
            self.register(member.with_delay(delay))?;
        }
        if let Some(container) = group.container {
            self.register(container)?;
        }
        Ok(())
    }

    /// Observe every `Pending` target through `observer`.
    ///
    /// Targets whose element does not exist stay `Pending`. `Immediate` targets start playing
    /// at `now` without waiting for a crossing. Returns the number of targets armed or started.
    pub fn arm<O: IntersectionObserver + ?Sized>(&mut self, observer: &mut O, now: TimeMs) -> usize {
        let mut armed = 0;
        for id in &self.order {
            let Some(slot) = self.slots.get_mut(id) else {
                continue;
            };
            if slot.state != AnimationState::Pending {
                continue;
            }
            let Some(sub) = observer.observe(id, slot.target.trigger) else {
                tracing::debug!(id = %id, "animation target has no element; left pending");
                continue;
            };
            armed += 1;
            if slot.target.trigger == Trigger::Immediate {
                observer.cancel(sub);
                start(id, slot, now);
            } else {
                slot.state = AnimationState::Armed;
                slot.subscription = Some(sub);
                self.by_subscription.insert(sub, id.clone());
                tracing::debug!(id = %id, "animation target armed");
            }
        }
        armed
    }

    /// Feed one viewport crossing.
    ///
    /// An entering crossing for an `Armed` target starts its tween at `now + delay_ms` and
    /// cancels the subscription. Returns `true` when a target started.
    pub fn on_crossing<O: IntersectionObserver + ?Sized>(
        &mut self,
        crossing: &Crossing,
        now: TimeMs,
        observer: &mut O,
    ) -> bool {
        if !crossing.entering {
            return false;
        }
        let Some(id) = self.by_subscription.remove(&crossing.subscription) else {
            return false;
        };
        observer.cancel(crossing.subscription);
        let Some(slot) = self.slots.get_mut(&id) else {
            return false;
        };
        if slot.state != AnimationState::Armed {
            return false;
        }
        slot.subscription = None;
        start(&id, slot, now);
        true
    }

    /// Advance every playing tween to `now`.
    pub fn tick(&mut self, now: TimeMs) -> Vec<AnimationEvent> {
        let mut events = Vec::new();
        for id in &self.order {
            let Some(slot) = self.slots.get_mut(id) else {
                continue;
            };
            let Some(tween) = &slot.tween else {
                continue;
            };
            slot.visual = tween.sample(now);
            if !slot.started && tween.has_started(now) {
                slot.started = true;
                events.push(AnimationEvent::Started { id: id.clone() });
            }
            if tween.is_finished(now) {
                slot.tween = None;
                slot.state = AnimationState::Completed;
                slot.visual = slot.target.final_state;
                tracing::debug!(id = %id, "animation completed");
                events.push(AnimationEvent::Completed { id: id.clone() });
            }
        }
        events
    }

    /// Lifecycle state of a target.
    pub fn state(&self, id: &str) -> Option<AnimationState> {
        self.slots.get(id).map(|s| s.state)
    }

    /// Current visual state of a target.
    pub fn visual(&self, id: &str) -> Option<VisualState> {
        self.slots.get(id).map(|s| s.visual)
    }

    /// Scheduled tween start of a playing target.
    pub fn scheduled_start(&self, id: &str) -> Option<TimeMs> {
        self.slots.get(id)?.tween.as_ref().map(Tween::start)
    }

    /// Registered target by id.
    pub fn target(&self, id: &str) -> Option<&AnimationTarget> {
        self.slots.get(id).map(|s| &s.target)
    }

    /// Number of registered targets.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Return `true` when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Remove a target, cancelling its subscription and dropping its tween.
    pub fn unmount<O: IntersectionObserver + ?Sized>(&mut self, id: &str, observer: &mut O) -> bool {
        let Some(slot) = self.slots.remove(id) else {
            return false;
        };
        self.order.retain(|o| o != id);
        if let Some(sub) = slot.subscription {
            self.by_subscription.remove(&sub);
            observer.cancel(sub);
        }
        tracing::debug!(id, state = ?slot.state, "animation target unmounted");
        true
    }

    /// Unmount every target.
    pub fn dispose<O: IntersectionObserver + ?Sized>(&mut self, observer: &mut O) {
        for sub in self.by_subscription.keys() {
            observer.cancel(*sub);
        }
        self.by_subscription.clear();
        self.slots.clear();
        self.order.clear();
    }
}

fn start(id: &str, slot: &mut Slot, now: TimeMs) {
    let t = &slot.target;
    slot.tween = Some(Tween::new(
        t.initial_state,
        t.final_state,
        now.after(t.delay_ms),
        t.duration_ms,
        t.ease,
    ));
    slot.state = AnimationState::Playing;
    tracing::debug!(id, delay_ms = t.delay_ms, "animation triggered");
}

#[cfg(test)]
#[path = "../../tests/unit/motion/orchestrator.rs"]
mod tests;
