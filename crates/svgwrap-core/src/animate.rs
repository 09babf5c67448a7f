//! Declarative `<animate>` elements.
//!
//! Only the attributes are modelled. Running the timeline is left to whatever
//! renders the document; hosts report progress by dispatching
//! `beginEvent`/`endEvent`/`repeatEvent` at the element.

use crate::element::Element;
use crate::events::{AnimationEvents, Event, ListenerId};
use crate::node::Node;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Value of `repeatCount`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Repeat {
    #[default]
    Indefinite,
    Count(f64),
}

impl fmt::Display for Repeat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Repeat::Indefinite => f.write_str("indefinite"),
            Repeat::Count(count) => write!(f, "{count}"),
        }
    }
}

impl FromStr for Repeat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "indefinite" => Ok(Repeat::Indefinite),
            other => other
                .parse()
                .map(Repeat::Count)
                .map_err(|_| format!("Invalid repeat count: {other}")),
        }
    }
}

/// Parse a clock value such as `2s`, `250ms` or `1.5`.
fn parse_clock_value(value: &str) -> Option<Duration> {
    let value = value.trim();
    let seconds = if let Some(ms) = value.strip_suffix("ms") {
        ms.trim().parse::<f64>().ok()? / 1000.0
    } else if let Some(s) = value.strip_suffix('s') {
        s.trim().parse::<f64>().ok()?
    } else {
        value.parse::<f64>().ok()?
    };
    Duration::try_from_secs_f64(seconds).ok()
}

/// Animates one attribute of its parent from one value to another.
#[derive(Debug, Clone, PartialEq)]
pub struct Animate {
    node: Node,
}

impl Animate {
    /// Animation repeating indefinitely.
    pub fn new(attribute: &str, from: impl ToString, to: impl ToString, duration: Duration) -> Self {
        let animate = Self {
            node: Node::create(Self::TAG),
        };
        animate
            .set_attribute_name(attribute)
            .set_from(from)
            .set_to(to)
            .set_duration(duration)
            .set_repeat(Repeat::Indefinite);
        animate
    }

    /// Name of the animated attribute on the parent.
    pub fn attribute_name(&self) -> String {
        self.node.attribute("attributeName").unwrap_or_default()
    }

    pub fn set_attribute_name(&self, attribute: &str) -> &Self {
        self.node.set_attribute("attributeName", attribute);
        self
    }

    pub fn from(&self) -> String {
        self.node.attribute("from").unwrap_or_default()
    }

    pub fn set_from(&self, from: impl ToString) -> &Self {
        self.node.set_attribute("from", from);
        self
    }

    pub fn to(&self) -> String {
        self.node.attribute("to").unwrap_or_default()
    }

    pub fn set_to(&self, to: impl ToString) -> &Self {
        self.node.set_attribute("to", to);
        self
    }

    /// Simple duration from `dur`. Missing or unparsable values read as zero.
    pub fn duration(&self) -> Duration {
        self.node
            .attribute("dur")
            .and_then(|value| parse_clock_value(&value))
            .unwrap_or_default()
    }

    pub fn set_duration(&self, duration: Duration) -> &Self {
        self.node
            .set_attribute("dur", format!("{}s", duration.as_secs_f64()));
        self
    }

    pub fn repeat(&self) -> Repeat {
        match self.node.attribute("repeatCount") {
            Some(value) => value.parse().unwrap_or_else(|e| {
                log::warn!("{e}");
                Repeat::default()
            }),
            None => Repeat::Count(1.0),
        }
    }

    pub fn set_repeat(&self, repeat: Repeat) -> &Self {
        self.node.set_attribute("repeatCount", repeat);
        self
    }

    pub fn on_animation(&self) -> AnimationEvents<'_> {
        AnimationEvents::new(&self.node)
    }

    pub fn on_begin(&self, callback: impl Fn(&Event) + 'static) -> ListenerId {
        self.on_animation().begin(callback)
    }

    pub fn on_end(&self, callback: impl Fn(&Event) + 'static) -> ListenerId {
        self.on_animation().end(callback)
    }

    pub fn on_repeat(&self, callback: impl Fn(&Event) + 'static) -> ListenerId {
        self.on_animation().repeat(callback)
    }
}

impl Element for Animate {
    const TAG: &'static str = "animate";

    fn node(&self) -> &Node {
        &self.node
    }

    fn from_node_unchecked(node: Node) -> Self {
        Self { node }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventType;
    use crate::shapes::Circle;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_attributes() {
        let animate = Animate::new("r", 5, 10, Duration::from_millis(1500));
        assert_eq!(animate.attribute_name(), "r");
        assert_eq!(animate.from(), "5");
        assert_eq!(animate.to(), "10");
        assert_eq!(animate.node().attribute("dur").unwrap(), "1.5s");
        assert_eq!(animate.duration(), Duration::from_millis(1500));
        assert_eq!(animate.repeat(), Repeat::Indefinite);

        animate.set_repeat(Repeat::Count(3.0));
        assert_eq!(animate.node().attribute("repeatCount").unwrap(), "3");
        assert_eq!(animate.repeat(), Repeat::Count(3.0));
    }

    #[test]
    fn test_clock_values() {
        assert_eq!(parse_clock_value("250ms"), Some(Duration::from_millis(250)));
        assert_eq!(parse_clock_value("2"), Some(Duration::from_secs(2)));
        assert_eq!(parse_clock_value("-1s"), None);
        assert_eq!(parse_clock_value("soon"), None);
    }

    #[test]
    fn test_repeat_parse() {
        assert_eq!("indefinite".parse::<Repeat>(), Ok(Repeat::Indefinite));
        assert_eq!(" 2.5 ".parse::<Repeat>(), Ok(Repeat::Count(2.5)));
        assert!("often".parse::<Repeat>().is_err());
    }

    #[test]
    fn test_animation_events_do_not_bubble() {
        let circle = Circle::new(0.0, 0.0, 5.0);
        let animate = Animate::new("r", 5, 10, Duration::from_secs(1));
        circle.nest(&animate);

        let ended = Rc::new(Cell::new(0));
        let seen = ended.clone();
        animate.on_end(move |_| seen.set(seen.get() + 1));
        let parent_calls = Rc::new(Cell::new(0));
        let seen_parent = parent_calls.clone();
        circle.add_event_listener(EventType::End, move |_| {
            seen_parent.set(seen_parent.get() + 1)
        });

        animate.dispatch_event(Event::new(EventType::End));
        assert_eq!(ended.get(), 1);
        assert_eq!(parent_calls.get(), 0);
    }
}
