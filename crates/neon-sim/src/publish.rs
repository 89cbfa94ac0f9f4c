//! Publish contract between the managers and the rendering collaborator.
//!
//! Every mutation of a collection is followed by exactly one full-collection
//! publish. Sinks only ever see borrowed, ordered views; they cannot reach
//! into manager state.

/// Receives the full, ordered view list of one collection.
pub trait ViewSink<V> {
    fn publish(&mut self, views: &[V]);
}

impl<V, F> ViewSink<V> for F
where
    F: FnMut(&[V]),
{
    fn publish(&mut self, views: &[V]) {
        self(views)
    }
}

/// A sink that drops everything. Default until the host installs one.
pub fn discard<V: 'static>() -> Box<dyn ViewSink<V>> {
    Box::new(|_views: &[V]| {})
}
