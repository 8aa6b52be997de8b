//! Minimal host that owns bodies and drives spring joints each step.

use crate::body::Body;
use crate::config::StepConfig;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::joint::{BreakAction, SpringJoint, StepResult};
use crate::observer::JointObserver;
use crate::vec::Vec;
use alloc::vec::Vec as AllocVec;

struct JointEntry<V: Vec> {
    joint: SpringJoint<V>,
    body: usize,
    connected: Option<usize>,
}

/// Bodies plus the spring joints between them.
///
/// Each sub-step evaluates every active joint against the current body
/// state, accumulates the returned forces, carries out break intents and
/// only then integrates. Destroying a body also removes every joint attached
/// to it. Handles are stable indices: destroyed bodies and joints leave an
/// empty slot behind.
pub struct JointSet<V: Vec> {
    bodies: AllocVec<Option<Body<V>>>,
    joints: AllocVec<Option<JointEntry<V>>>,
}

impl<V: Vec> JointSet<V> {
    pub fn new() -> Self {
        JointSet {
            bodies: AllocVec::new(),
            joints: AllocVec::new(),
        }
    }

    pub fn add_body(&mut self, body: Body<V>) -> usize {
        let idx = self.bodies.len();
        self.bodies.push(Some(body));
        idx
    }

    /// Attach `joint` to `body`, optionally connected to a second body.
    pub fn add_joint(
        &mut self,
        body: usize,
        connected: Option<usize>,
        joint: SpringJoint<V>,
    ) -> Result<usize, PhysicsError> {
        self.check_body(body)?;
        if let Some(c) = connected {
            self.check_body(c)?;
        }
        let idx = self.joints.len();
        self.joints.push(Some(JointEntry { joint, body, connected }));
        Ok(idx)
    }

    fn check_body(&self, index: usize) -> Result<(), PhysicsError> {
        match self.bodies.get(index) {
            Some(Some(_)) => Ok(()),
            _ => Err(PhysicsError::BodyOutOfBounds { index, count: self.bodies.len() }),
        }
    }

    pub fn step<O: JointObserver<V>>(
        &mut self,
        dt: V::Scalar,
        config: &StepConfig<V>,
        observer: &mut O,
    ) {
        let sub_steps = config.sub_steps.max(1);
        let sub_dt = dt / V::Scalar::from_f32(sub_steps as f32);
        let mut pending: AllocVec<(usize, V)> = AllocVec::new();
        let mut doomed: AllocVec<usize> = AllocVec::new();

        for _sub in 0..sub_steps {
            pending.clear();
            doomed.clear();
            self.evaluate_joints(&mut pending, &mut doomed, observer);

            // Destroy intents take effect after every joint has seen the same state.
            for &index in doomed.iter() {
                self.despawn(index);
            }
            for &(index, force) in pending.iter() {
                if let Some(Some(body)) = self.bodies.get_mut(index) {
                    body.apply_force(force);
                }
            }
            for body in self.bodies.iter_mut().flatten() {
                body.integrate(sub_dt, config.gravity);
            }
        }

        observer.on_step_complete();
    }

    fn evaluate_joints<O: JointObserver<V>>(
        &mut self,
        pending: &mut AllocVec<(usize, V)>,
        doomed: &mut AllocVec<usize>,
        observer: &mut O,
    ) {
        for (i, slot) in self.joints.iter_mut().enumerate() {
            let Some(entry) = slot.as_mut() else { continue };

            let Some(Some(body)) = self.bodies.get(entry.body) else { continue };
            let connected = match entry.connected {
                Some(c) => match self.bodies.get(c) {
                    Some(Some(b)) => Some(b),
                    _ => continue,
                },
                None => None,
            };

            match entry.joint.step(body, connected) {
                None => {}
                Some(StepResult::Applied(force)) => {
                    log::trace!("joint {} force {:?}", i, force);
                    pending.push((entry.body, force));
                    if let Some(c) = entry.connected {
                        pending.push((c, -force));
                    }
                    observer.on_force(i, force);
                }
                Some(StepResult::Broken(action)) => {
                    observer.on_break(i, action);
                    if action == BreakAction::Destroy {
                        doomed.push(entry.body);
                        doomed.extend(entry.connected);
                    }
                }
            }
        }
    }

    /// Remove a body along with every joint attached to it.
    fn despawn(&mut self, index: usize) {
        let Some(slot) = self.bodies.get_mut(index) else { return };
        if slot.take().is_none() {
            return;
        }
        log::debug!("despawned body {}", index);
        for (i, joint) in self.joints.iter_mut().enumerate() {
            let attached = joint
                .as_ref()
                .is_some_and(|e| e.body == index || e.connected == Some(index));
            if attached {
                log::debug!("removed joint {} with body {}", i, index);
                *joint = None;
            }
        }
    }

    /// Re-enable a joint disabled by a break. Returns `false` if it no longer exists.
    pub fn enable_joint(&mut self, index: usize) -> bool {
        match self.joints.get_mut(index) {
            Some(Some(entry)) => entry.joint.enable(),
            _ => false,
        }
    }

    pub fn is_alive(&self, index: usize) -> bool {
        matches!(self.bodies.get(index), Some(Some(_)))
    }

    pub fn body(&self, index: usize) -> Option<&Body<V>> {
        self.bodies.get(index).and_then(Option::as_ref)
    }

    pub fn body_mut(&mut self, index: usize) -> Option<&mut Body<V>> {
        self.bodies.get_mut(index).and_then(Option::as_mut)
    }

    pub fn joint(&self, index: usize) -> Option<&SpringJoint<V>> {
        self.joints.get(index).and_then(Option::as_ref).map(|e| &e.joint)
    }

    pub fn joint_mut(&mut self, index: usize) -> Option<&mut SpringJoint<V>> {
        self.joints.get_mut(index).and_then(Option::as_mut).map(|e| &mut e.joint)
    }

    /// Live bodies.
    pub fn body_count(&self) -> usize { self.bodies.iter().flatten().count() }

    /// Joints that have not been destroyed (active or disabled).
    pub fn joint_count(&self) -> usize { self.joints.iter().flatten().count() }
}

impl<V: Vec> Default for JointSet<V> {
    fn default() -> Self {
        Self::new()
    }
}
