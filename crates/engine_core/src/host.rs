// crates/engine_core/src/host.rs

//! The one queue every platform event goes through. Producers may live on
//! any thread; the frame loop drains it on the thread that owns the world,
//! so a click is never handled in the middle of a draw.

use crossbeam_channel::{unbounded, Receiver, Sender};
use engine_shared::HostEvent;
use tracing::warn;

pub struct EventQueue {
    tx: Sender<HostEvent>,
    rx: Receiver<HostEvent>,
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl EventQueue {
    pub fn new() -> Self {
        let (tx, rx) = unbounded();
        Self { tx, rx }
    }

    /// A producer handle, e.g. for a scripted driver on another thread.
    pub fn sender(&self) -> Sender<HostEvent> {
        self.tx.clone()
    }

    pub fn push(&self, event: HostEvent) {
        if let Err(err) = self.tx.send(event) {
            warn!(event = ?err.into_inner(), "event queue closed, event dropped");
        }
    }

    /// Everything queued so far, in arrival order. Events pushed while the
    /// drain is being consumed wait for the next frame.
    pub fn drain(&self) -> Vec<HostEvent> {
        self.rx.try_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.rx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn drains_in_arrival_order() {
        let queue = EventQueue::new();
        queue.push(HostEvent::PointerMoved { clip: Vec2::X });
        queue.push(HostEvent::PointerPressed);
        queue.sender().send(HostEvent::Back).unwrap();

        assert_eq!(queue.len(), 3);
        assert_eq!(
            queue.drain(),
            vec![
                HostEvent::PointerMoved { clip: Vec2::X },
                HostEvent::PointerPressed,
                HostEvent::Back,
            ]
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn producers_on_other_threads_feed_the_same_queue() {
        let queue = EventQueue::new();
        let tx = queue.sender();
        std::thread::spawn(move || {
            for slot in 0..3 {
                tx.send(HostEvent::HotbarSlot(slot)).unwrap();
            }
        })
        .join()
        .unwrap();

        assert_eq!(queue.drain().len(), 3);
    }
}
