//! Thread-safe event bus using mpsc channels.
//!
//! Any thread can publish events via [`EventPublisher::publish`]; the main
//! thread collects them in batch via [`EventBus::drain`]. Pure Rust, std
//! only.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use super::types::AppEvent;

/// Multi-producer, single-consumer event bus.
///
/// Workspace notification blocks and menu actions publish from wherever
/// they run; the main-loop dispatcher drains on a timer.
pub struct EventBus {
    sender: Sender<AppEvent>,
    receiver: Receiver<AppEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    /// A cloneable publisher handle for other threads and callbacks.
    pub fn publisher(&self) -> EventPublisher {
        EventPublisher {
            sender: self.sender.clone(),
        }
    }

    /// Next pending event, if any. Never blocks.
    pub fn try_recv(&self) -> Option<AppEvent> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Collect every pending event for batch processing.
    pub fn drain(&self) -> Vec<AppEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.try_recv() {
            events.push(event);
        }
        events
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// A cloneable, thread-safe publisher handle.
///
/// If the receiver is gone (app shutting down) the send silently fails;
/// that is intentional.
#[derive(Clone)]
pub struct EventPublisher {
    sender: Sender<AppEvent>,
}

impl EventPublisher {
    /// Create a publisher from an existing sender (used by the global
    /// accessor module).
    pub fn from_sender(sender: Sender<AppEvent>) -> Self {
        Self { sender }
    }

    pub fn publish(&self, event: AppEvent) {
        let _ = self.sender.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_bus_is_empty() {
        let bus = EventBus::new();
        assert!(bus.drain().is_empty());
        assert!(bus.try_recv().is_none());
    }

    #[test]
    fn publish_then_drain() {
        let bus = EventBus::new();
        let publisher = bus.publisher();

        publisher.publish(AppEvent::DockChanged);
        publisher.publish(AppEvent::FeatureToggled(false));

        let events = bus.drain();
        assert_eq!(
            events,
            vec![AppEvent::DockChanged, AppEvent::FeatureToggled(false)]
        );
    }

    #[test]
    fn drain_empties_the_queue() {
        let bus = EventBus::new();
        bus.publisher().publish(AppEvent::TrustGranted);

        assert_eq!(bus.drain().len(), 1);
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn events_arrive_in_publish_order() {
        let bus = EventBus::new();
        let publisher = bus.publisher();

        publisher.publish(AppEvent::TrustGranted);
        publisher.publish(AppEvent::DockChanged);

        assert_eq!(bus.try_recv(), Some(AppEvent::TrustGranted));
        assert_eq!(bus.try_recv(), Some(AppEvent::DockChanged));
        assert_eq!(bus.try_recv(), None);
    }

    #[test]
    fn cloned_publishers_feed_the_same_bus() {
        let bus = EventBus::new();
        let pub1 = bus.publisher();
        let pub2 = pub1.clone();

        pub1.publish(AppEvent::DockChanged);
        pub2.publish(AppEvent::DockChanged);

        assert_eq!(bus.drain().len(), 2);
    }

    #[test]
    fn publishing_from_another_thread() {
        let bus = EventBus::new();
        let publisher = bus.publisher();

        let handle = std::thread::spawn(move || {
            publisher.publish(AppEvent::DockChanged);
        });
        handle.join().unwrap();

        assert_eq!(bus.drain(), vec![AppEvent::DockChanged]);
    }
}
