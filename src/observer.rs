// Observer Pattern: a subject pushes each published value to every
// subscribed observer. Subscriptions are identified by the id returned from
// `subscribe`.

use crate::trace::Trace;

pub trait Observer<T> {
    fn update(&self, data: &T);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub struct Subject<T> {
    observers: Vec<(SubscriptionId, Box<dyn Observer<T>>)>,
    next_id: u64,
    trace: Trace,
}

impl<T> Subject<T> {
    pub fn new(trace: Trace) -> Self {
        Self {
            observers: Vec::new(),
            next_id: 0,
            trace,
        }
    }

    pub fn subscribe(&mut self, observer: Box<dyn Observer<T>>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        self.trace.line(format!(
            "[Subject] New observer subscribed. Total: {}",
            self.observers.len()
        ));
        id
    }

    /// Returns `false` when `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        let removed = self.observers.len() < before;
        if removed {
            self.trace.line(format!(
                "[Subject] An observer unsubscribed. Total: {}",
                self.observers.len()
            ));
        }
        removed
    }

    pub fn notify(&self, data: &T) {
        self.trace.line(format!(
            "[Subject] Notifying {} observers...",
            self.observers.len()
        ));
        for (_, observer) in &self.observers {
            observer.update(data);
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

pub struct NewsReader {
    name: String,
    trace: Trace,
}

impl NewsReader {
    pub fn new(name: impl Into<String>, trace: Trace) -> Self {
        Self {
            name: name.into(),
            trace,
        }
    }
}

impl Observer<String> for NewsReader {
    fn update(&self, title: &String) {
        self.trace
            .line(format!("[{}] Received new article: \"{}\"", self.name, title));
    }
}

pub struct EmailNotifier {
    trace: Trace,
}

impl EmailNotifier {
    pub fn new(trace: Trace) -> Self {
        Self { trace }
    }
}

impl Observer<String> for EmailNotifier {
    fn update(&self, title: &String) {
        self.trace.line(format!(
            "[Email Notifier] Simulating sending email for new article: \"{}\"",
            title
        ));
    }
}

pub fn run_demo(trace: &Trace) {
    trace.banner("Observer Pattern Example");

    let mut publisher: Subject<String> = Subject::new(trace.clone());

    publisher.subscribe(Box::new(NewsReader::new("Reader A", trace.clone())));
    let reader_b = publisher.subscribe(Box::new(NewsReader::new("Reader B", trace.clone())));
    publisher.subscribe(Box::new(EmailNotifier::new(trace.clone())));

    trace.separator();
    publisher.notify(&"Rust Design Patterns Released!".to_string());

    trace.separator();
    publisher.unsubscribe(reader_b);

    trace.separator();
    publisher.notify(&"The Power of Generics in Rust".to_string());
}
