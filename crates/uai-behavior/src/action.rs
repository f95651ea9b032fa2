//! The opaque action a behavior triggers when selected.

/// Zero-argument callback invoked by the agent every tick its behavior is
/// active.  The engine never inspects it.
///
/// Any `FnMut()` closure is an `Action`:
///
/// ```rust
/// use uai_behavior::Action;
///
/// let mut shots = 0;
/// let mut fire = || shots += 1;
/// fire.execute();
/// fire.execute();
/// drop(fire);
/// assert_eq!(shots, 2);
/// ```
pub trait Action {
    fn execute(&mut self);
}

impl<F: FnMut()> Action for F {
    #[inline]
    fn execute(&mut self) {
        self()
    }
}

/// An [`Action`] that does nothing.  Default for behaviors built without one.
pub struct NoopAction;

impl Action for NoopAction {
    fn execute(&mut self) {}
}
