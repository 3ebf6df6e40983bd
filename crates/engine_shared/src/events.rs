// crates/engine_shared/src/events.rs
//! Gameplay notifications.
//!
//! Producers hold a cheap `ReleaseNotifier` handed to them at construction.
//! Events are queued and only reach subscribers when the host calls
//! `EventHub::drain`, once per simulation step, on the simulation thread.

use crossbeam_channel::{Receiver, Sender};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A dragged item was let go. Carries no payload.
    ItemReleased,
}

#[derive(Clone)]
pub struct ReleaseNotifier {
    tx: Sender<GameEvent>,
}

impl ReleaseNotifier {
    /// A notifier whose events go nowhere.
    pub fn detached() -> Self {
        let (tx, _rx) = crossbeam_channel::unbounded();
        Self { tx }
    }

    pub fn item_released(&self) {
        // Fire-and-forget: a hub that has gone away just means nobody listens.
        if self.tx.send(GameEvent::ItemReleased).is_err() {
            tracing::trace!("item released with no event hub attached");
        }
    }
}

type Subscriber = Box<dyn FnMut(GameEvent)>;

pub struct EventHub {
    tx: Sender<GameEvent>,
    rx: Receiver<GameEvent>,
    subscribers: Vec<Subscriber>,
}

impl Default for EventHub {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHub {
    pub fn new() -> Self {
        let (tx, rx) = crossbeam_channel::unbounded();
        Self { tx, rx, subscribers: Vec::new() }
    }

    pub fn notifier(&self) -> ReleaseNotifier {
        ReleaseNotifier { tx: self.tx.clone() }
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(GameEvent) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn pending(&self) -> usize {
        self.rx.len()
    }

    /// Delivers every queued event to every subscriber. Returns the number of
    /// events drained.
    pub fn drain(&mut self) -> usize {
        let mut drained = 0;
        while let Ok(event) = self.rx.try_recv() {
            for subscriber in &mut self.subscribers {
                subscriber(event);
            }
            drained += 1;
        }
        drained
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn events_wait_for_drain() {
        let mut hub = EventHub::new();
        let seen = Rc::new(Cell::new(0));
        let counter = seen.clone();
        hub.subscribe(move |_| counter.set(counter.get() + 1));

        hub.notifier().item_released();
        assert_eq!(seen.get(), 0);
        assert_eq!(hub.pending(), 1);

        assert_eq!(hub.drain(), 1);
        assert_eq!(seen.get(), 1);
        assert_eq!(hub.drain(), 0);
    }

    #[test]
    fn every_subscriber_sees_each_event() {
        let mut hub = EventHub::new();
        let a = Rc::new(Cell::new(0));
        let b = Rc::new(Cell::new(0));
        let (ca, cb) = (a.clone(), b.clone());
        hub.subscribe(move |e| if e == GameEvent::ItemReleased { ca.set(ca.get() + 1) });
        hub.subscribe(move |_| cb.set(cb.get() + 1));

        let notifier = hub.notifier();
        notifier.item_released();
        notifier.item_released();
        hub.drain();

        assert_eq!((a.get(), b.get()), (2, 2));
    }

    #[test]
    fn drain_without_subscribers_still_empties_queue() {
        let mut hub = EventHub::new();
        hub.notifier().item_released();
        assert_eq!(hub.drain(), 1);
        assert_eq!(hub.pending(), 0);
    }

    #[test]
    fn detached_notifier_does_not_panic() {
        ReleaseNotifier::detached().item_released();
    }
}
