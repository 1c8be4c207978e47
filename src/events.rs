/// Notification events the UI layer subscribes to
///
/// The core has zero knowledge of any UI toolkit; it exposes an event stream
/// instead. Subscribers are plain closures invoked synchronously after each
/// successful mutation, in registration order.

use chrono::NaiveDateTime;

use crate::domain::Category;

#[derive(Debug, Clone, PartialEq)]
pub enum TrackerEvent {
    /// A not-yet-unlocked achievement crossed its target
    AchievementUnlocked {
        id: String,
        title: String,
        unlocked_at: NaiveDateTime,
    },
    /// A sample was recorded; carries the new daily and lifetime totals
    ProgressChanged {
        category: Category,
        day_total: f64,
        lifetime_total: f64,
    },
}

type Subscriber = Box<dyn Fn(&TrackerEvent)>;

/// Synchronous fan-out to registered subscribers
#[derive(Default)]
pub struct EventBus {
    subscribers: Vec<Subscriber>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, subscriber: impl Fn(&TrackerEvent) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn emit(&self, event: &TrackerEvent) {
        for subscriber in &self.subscribers {
            subscriber(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn subscribers_receive_events_in_registration_order() {
        let seen: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let mut bus = EventBus::new();

        for tag in ["first", "second"] {
            let seen = Rc::clone(&seen);
            bus.subscribe(move |event| {
                if let TrackerEvent::ProgressChanged { category, .. } = event {
                    seen.borrow_mut().push(format!("{}:{}", tag, category));
                }
            });
        }

        bus.emit(&TrackerEvent::ProgressChanged {
            category: Category::Water,
            day_total: 200.0,
            lifetime_total: 200.0,
        });

        assert_eq!(*seen.borrow(), vec!["first:Water", "second:Water"]);
    }
}
