//! One-way, ordered delivery of updates to a presentation-side consumer.

use tokio::sync::mpsc;
use tracing::debug;

/// Non-owning handle to an observer that drains updates on its own task.
///
/// The observer may go away at any time (screen torn down); emitting to a
/// gone observer does nothing.
#[derive(Debug)]
pub struct ObserverHandle<T> {
    sender: mpsc::UnboundedSender<T>,
}

impl<T> Clone for ObserverHandle<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: Send + 'static> ObserverHandle<T> {
    /// Creates a handle and the receiver the observer drains in order.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<T>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    pub fn emit(&self, update: T) {
        if self.sender.send(update).is_err() {
            debug!("Observer gone, update dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_updates_arrive_in_emission_order() {
        let (handle, mut receiver) = ObserverHandle::channel();
        for i in 0..5 {
            handle.emit(i);
        }
        for i in 0..5 {
            assert_eq!(receiver.recv().await, Some(i));
        }
    }

    #[test]
    fn test_emit_to_gone_observer_is_a_no_op() {
        let (handle, receiver) = ObserverHandle::channel();
        drop(receiver);
        assert!(handle.sender.is_closed());
        handle.emit("ignored");
        handle.clone().emit("also ignored");
    }
}
