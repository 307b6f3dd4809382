/// A sink for the steps taken by an algorithm, such as the rules applied by
/// [`simplify_with_steps`](crate::symbolic::simplify_with_steps).
///
/// Implemented for `()`, which discards every step, and for [`Vec`], which records them in the
/// order they are pushed.
pub trait StepCollector<S> {
    /// Records a step.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        Vec::push(self, step);
    }
}
