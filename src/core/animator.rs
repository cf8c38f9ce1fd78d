use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::easing::Easing;
use super::error::{ConfiguratorError, Result};
use super::transform::{Transform, TransformRaw};

/// Where an item is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Scattered,
    TransitioningToSphere,
    AtSpherePosition,
    TransitioningToFront,
    AtFront,
    TransitioningToSphereFromFront,
}

/// The three named moves an item can make.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionKind {
    /// Lockstep move of the catalog onto its sphere targets.
    Assemble,
    ToFront,
    FromFront,
}

/// Terminal notifications. Every started transition ends in exactly one of
/// these; the lockstep assembly reports once for the whole catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimatorEvent {
    Assembled,
    Finished { item: usize, kind: TransitionKind },
    Superseded { item: usize, kind: TransitionKind },
}

/// Duration and curve of one kind of transition.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Timing {
    pub secs: f64,
    #[serde(default)]
    pub easing: Easing,
}

impl Timing {
    pub fn new(secs: f64, easing: Easing) -> Self {
        Self { secs, easing }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timings {
    pub assemble: Timing,
    pub to_front: Timing,
    pub to_sphere: Timing,
}

/// A wall-clock window plus the curve applied to it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timer {
    pub started_at: f64,
    pub timing: Timing,
}

impl Timer {
    pub fn new(started_at: f64, timing: Timing) -> Self {
        Self { started_at, timing }
    }

    /// Linear progress clamped to \[0, 1\]; zero-length timers are complete.
    pub fn progress(&self, now: f64) -> f32 {
        if self.timing.secs <= 0.0 {
            return 1.0;
        }
        ((now - self.started_at) / self.timing.secs).clamp(0.0, 1.0) as f32
    }

    pub fn eased(&self, now: f64) -> f32 {
        self.timing.easing.apply(self.progress(now))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Clock {
    /// Driven by the animator's shared assembly timer.
    Lockstep,
    Own(Timer),
}

/// An in-flight move from a captured start to an end transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionRequest {
    kind: TransitionKind,
    start: Transform,
    end: Transform,
    clock: Clock,
}

impl TransitionRequest {
    pub fn kind(&self) -> TransitionKind {
        self.kind
    }

    pub fn start(&self) -> Transform {
        self.start
    }

    pub fn end(&self) -> Transform {
        self.end
    }

    pub fn is_lockstep(&self) -> bool {
        self.clock == Clock::Lockstep
    }
}

/// Animator-owned state for one catalog item.
#[derive(Clone, Debug)]
pub struct ItemState {
    pub transform: Transform,
    pub visible: bool,
    pub phase: Phase,
    transition: Option<TransitionRequest>,
}

impl ItemState {
    fn new(transform: Transform) -> Self {
        Self {
            transform,
            visible: true,
            phase: Phase::Scattered,
            transition: None,
        }
    }

    pub fn transition(&self) -> Option<&TransitionRequest> {
        self.transition.as_ref()
    }

    pub fn raw(&self) -> TransformRaw {
        TransformRaw::new(&self.transform, self.visible)
    }
}

/// Drives every item between scattered, sphere and camera-front poses.
///
/// The animator never reads a clock; callers pass `now` in seconds. At most
/// one item occupies the front slot (moving to or resting at the front).
#[derive(Clone, Debug)]
pub struct Animator {
    items: Vec<ItemState>,
    targets: Vec<Transform>,
    timings: Timings,
    assembly: Option<Timer>,
    front: Option<usize>,
    pending: Vec<AnimatorEvent>,
}

impl Animator {
    /// One item per sphere target, all starting at the targets themselves in
    /// the `Scattered` phase until [`Animator::scatter`] moves them.
    pub fn new(targets: Vec<Transform>, timings: Timings) -> Self {
        let items = targets.iter().copied().map(ItemState::new).collect();
        Self {
            items,
            targets,
            timings,
            assembly: None,
            front: None,
            pending: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[ItemState] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&ItemState> {
        self.items.get(index)
    }

    pub fn phase(&self, index: usize) -> Option<Phase> {
        self.items.get(index).map(|s| s.phase)
    }

    pub fn transition(&self, index: usize) -> Option<&TransitionRequest> {
        self.items.get(index).and_then(|s| s.transition.as_ref())
    }

    pub fn target(&self, index: usize) -> Option<Transform> {
        self.targets.get(index).copied()
    }

    pub fn timings(&self) -> Timings {
        self.timings
    }

    /// Item currently moving to or resting at the camera-front pose.
    pub fn front_item(&self) -> Option<usize> {
        self.front
    }

    pub fn is_assembling(&self) -> bool {
        self.assembly.is_some()
    }

    pub fn is_animating(&self) -> bool {
        self.assembly.is_some() || self.items.iter().any(|s| s.transition.is_some())
    }

    /// Throw every item to a random spot inside a cube of half-size `extent`
    /// with zero rotation. Active transitions are superseded and the front
    /// slot is released.
    pub fn scatter<R: Rng + ?Sized>(&mut self, rng: &mut R, extent: f32) {
        self.assembly = None;
        self.front = None;
        for i in 0..self.items.len() {
            self.cancel(i);
            let position = if extent > 0.0 {
                Vec3::new(
                    rng.gen_range(-extent..extent),
                    rng.gen_range(-extent..extent),
                    rng.gen_range(-extent..extent),
                )
            } else {
                Vec3::ZERO
            };
            let item = &mut self.items[i];
            item.transform = Transform::new(position, Vec3::ZERO, 1.0);
            item.visible = true;
            item.phase = Phase::Scattered;
        }
        log::debug!("[animator] scattered {} items within ±{}", self.items.len(), extent);
    }

    /// Move every item outside the front slot onto its sphere target, all
    /// sharing one timer.
    pub fn begin_assembly(&mut self, now: f64) {
        self.sync_to(now);
        let timer = Timer::new(now, self.timings.assemble);
        if let Some(previous) = self.assembly.replace(timer) {
            log::debug!(
                "[animator] restarting assembly begun at {:.3}s",
                previous.started_at
            );
        }
        for i in 0..self.items.len() {
            if self.front == Some(i) {
                continue;
            }
            self.cancel(i);
            let item = &mut self.items[i];
            item.transition = Some(TransitionRequest {
                kind: TransitionKind::Assemble,
                start: item.transform,
                end: self.targets[i],
                clock: Clock::Lockstep,
            });
            item.visible = true;
            item.phase = Phase::TransitioningToSphere;
        }
        log::debug!("[animator] assembling {} items at {:.3}s", self.items.len(), now);
    }

    /// Start moving `index` to `pose`. Refused with `TransitionBusy` while
    /// another item holds the front slot.
    pub fn begin_front(&mut self, index: usize, pose: Transform, now: f64) -> Result<()> {
        if index >= self.items.len() {
            return Err(ConfiguratorError::UnknownItemIndex {
                index,
                count: self.items.len(),
            });
        }
        if let Some(active) = self.front {
            log::warn!("[animator] front busy with {}, refusing {}", active, index);
            return Err(ConfiguratorError::TransitionBusy {
                requested: index,
                active,
            });
        }
        self.sync_item(index, now);
        self.cancel(index);
        self.front = Some(index);
        let item = &mut self.items[index];
        item.transition = Some(TransitionRequest {
            kind: TransitionKind::ToFront,
            start: item.transform,
            end: pose,
            clock: Clock::Own(Timer::new(now, self.timings.to_front)),
        });
        item.phase = Phase::TransitioningToFront;
        log::debug!("[animator] item {} heading to front at {:.3}s", index, now);
        Ok(())
    }

    /// Send the front item back to its sphere target, starting from wherever
    /// it is at `now`. Returns the item, or `None` when the slot is empty.
    pub fn begin_reverse(&mut self, now: f64) -> Option<usize> {
        let index = self.front.take()?;
        self.sync_item(index, now);
        self.cancel(index);
        let item = &mut self.items[index];
        item.transition = Some(TransitionRequest {
            kind: TransitionKind::FromFront,
            start: item.transform,
            end: self.targets[index],
            clock: Clock::Own(Timer::new(now, self.timings.to_sphere)),
        });
        item.phase = Phase::TransitioningToSphereFromFront;
        log::debug!("[animator] item {} returning to sphere at {:.3}s", index, now);
        Some(index)
    }

    /// Interpolated transform of `index` at `now` without mutating anything.
    pub fn sample(&self, index: usize, now: f64) -> Option<Transform> {
        let item = self.items.get(index)?;
        Some(match &item.transition {
            Some(t) => t.start.lerp(&t.end, self.eased_for(t, now)),
            None => item.transform,
        })
    }

    /// Step every active transition to `now`, appending terminal events to
    /// `out` (including any queued by requests since the last step).
    pub fn advance<E: Extend<AnimatorEvent>>(&mut self, now: f64, out: &mut E) {
        out.extend(self.pending.drain(..));

        let lockstep = self.assembly.map(|t| (t.progress(now), t.eased(now)));
        for (i, item) in self.items.iter_mut().enumerate() {
            let Some(t) = item.transition else {
                continue;
            };
            let (progress, eased) = match t.clock {
                Clock::Lockstep => lockstep.unwrap_or((1.0, 1.0)),
                Clock::Own(timer) => (timer.progress(now), timer.eased(now)),
            };
            if progress < 1.0 {
                item.transform = t.start.lerp(&t.end, eased);
                continue;
            }
            item.transform = t.end;
            item.transition = None;
            match t.kind {
                TransitionKind::Assemble => item.phase = Phase::AtSpherePosition,
                TransitionKind::ToFront => {
                    item.phase = Phase::AtFront;
                    item.visible = false;
                }
                TransitionKind::FromFront => {
                    item.phase = Phase::AtSpherePosition;
                    item.visible = true;
                }
            }
            if t.kind != TransitionKind::Assemble {
                log::debug!("[animator] item {} finished {:?}", i, t.kind);
                out.extend(Some(AnimatorEvent::Finished { item: i, kind: t.kind }));
            }
        }

        if matches!(lockstep, Some((p, _)) if p >= 1.0) {
            self.assembly = None;
            log::debug!("[animator] assembly finished at {:.3}s", now);
            out.extend(Some(AnimatorEvent::Assembled));
        }
    }

    pub fn raw_transforms(&self) -> Vec<TransformRaw> {
        self.items.iter().map(ItemState::raw).collect()
    }

    fn eased_for(&self, t: &TransitionRequest, now: f64) -> f32 {
        match t.clock {
            Clock::Lockstep => self.assembly.map(|a| a.eased(now)).unwrap_or(1.0),
            Clock::Own(timer) => timer.eased(now),
        }
    }

    /// Bring one item's transform up to `now` so a new request captures it.
    fn sync_item(&mut self, index: usize, now: f64) {
        if let Some(sampled) = self.sample(index, now) {
            self.items[index].transform = sampled;
        }
    }

    fn sync_to(&mut self, now: f64) {
        for i in 0..self.items.len() {
            self.sync_item(i, now);
        }
    }

    /// Drop an item's transition, queueing a `Superseded` notice for it.
    fn cancel(&mut self, index: usize) {
        if let Some(t) = self.items[index].transition.take() {
            log::debug!("[animator] item {} {:?} superseded", index, t.kind);
            self.pending.push(AnimatorEvent::Superseded {
                item: index,
                kind: t.kind,
            });
        }
    }
}
