//! Event types, listener options and shorthand subscription helpers.

use crate::node::Node;
use kurbo::Point;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Kind of event delivered to an element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventType {
    // General
    Abort,
    Error,
    Load,
    Resize,
    Scroll,
    Unload,
    // Clipboard
    Copy,
    Cut,
    Paste,
    // Composition
    CompositionStart,
    CompositionUpdate,
    CompositionEnd,
    // Focus
    Blur,
    Focus,
    FocusIn,
    FocusOut,
    // Fullscreen
    FullscreenChange,
    FullscreenError,
    // Keyboard
    KeyDown,
    KeyUp,
    // Mouse
    AuxClick,
    Click,
    DblClick,
    MouseDown,
    MouseEnter,
    MouseLeave,
    MouseOut,
    MouseOver,
    MouseUp,
    // Touch
    TouchStart,
    TouchMove,
    TouchEnd,
    TouchCancel,
    // Animation timeline
    Begin,
    End,
    Repeat,
    /// Any other event name.
    Custom(String),
}

impl EventType {
    /// Name of the event as used by the host.
    pub fn as_str(&self) -> &str {
        match self {
            EventType::Abort => "abort",
            EventType::Error => "error",
            EventType::Load => "load",
            EventType::Resize => "resize",
            EventType::Scroll => "scroll",
            EventType::Unload => "unload",
            EventType::Copy => "copy",
            EventType::Cut => "cut",
            EventType::Paste => "paste",
            EventType::CompositionStart => "compositionstart",
            EventType::CompositionUpdate => "compositionupdate",
            EventType::CompositionEnd => "compositionend",
            EventType::Blur => "blur",
            EventType::Focus => "focus",
            EventType::FocusIn => "focusin",
            EventType::FocusOut => "focusout",
            EventType::FullscreenChange => "fullscreenchange",
            EventType::FullscreenError => "fullscreenerror",
            EventType::KeyDown => "keydown",
            EventType::KeyUp => "keyup",
            EventType::AuxClick => "auxclick",
            EventType::Click => "click",
            EventType::DblClick => "dblclick",
            EventType::MouseDown => "mousedown",
            EventType::MouseEnter => "mouseenter",
            EventType::MouseLeave => "mouseleave",
            EventType::MouseOut => "mouseout",
            EventType::MouseOver => "mouseover",
            EventType::MouseUp => "mouseup",
            EventType::TouchStart => "touchstart",
            EventType::TouchMove => "touchmove",
            EventType::TouchEnd => "touchend",
            EventType::TouchCancel => "touchcancel",
            EventType::Begin => "beginEvent",
            EventType::End => "endEvent",
            EventType::Repeat => "repeatEvent",
            EventType::Custom(name) => name,
        }
    }

    /// Whether events of this type propagate to ancestors when dispatched.
    pub fn bubbles_by_default(&self) -> bool {
        !matches!(
            self,
            EventType::Blur
                | EventType::Focus
                | EventType::Load
                | EventType::Unload
                | EventType::MouseEnter
                | EventType::MouseLeave
                | EventType::Begin
                | EventType::End
                | EventType::Repeat
        )
    }
}

impl FromStr for EventType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "abort" => EventType::Abort,
            "error" => EventType::Error,
            "load" => EventType::Load,
            "resize" => EventType::Resize,
            "scroll" => EventType::Scroll,
            "unload" => EventType::Unload,
            "copy" => EventType::Copy,
            "cut" => EventType::Cut,
            "paste" => EventType::Paste,
            "compositionstart" => EventType::CompositionStart,
            "compositionupdate" => EventType::CompositionUpdate,
            "compositionend" => EventType::CompositionEnd,
            "blur" => EventType::Blur,
            "focus" => EventType::Focus,
            "focusin" => EventType::FocusIn,
            "focusout" => EventType::FocusOut,
            "fullscreenchange" => EventType::FullscreenChange,
            "fullscreenerror" => EventType::FullscreenError,
            "keydown" => EventType::KeyDown,
            "keyup" => EventType::KeyUp,
            "auxclick" => EventType::AuxClick,
            "click" => EventType::Click,
            "dblclick" => EventType::DblClick,
            "mousedown" => EventType::MouseDown,
            "mouseenter" => EventType::MouseEnter,
            "mouseleave" => EventType::MouseLeave,
            "mouseout" => EventType::MouseOut,
            "mouseover" => EventType::MouseOver,
            "mouseup" => EventType::MouseUp,
            "touchstart" => EventType::TouchStart,
            "touchmove" => EventType::TouchMove,
            "touchend" => EventType::TouchEnd,
            "touchcancel" => EventType::TouchCancel,
            "beginEvent" => EventType::Begin,
            "endEvent" => EventType::End,
            "repeatEvent" => EventType::Repeat,
            other => EventType::Custom(other.to_string()),
        })
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An event being delivered to listeners.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub event_type: EventType,
    /// ID of the element the event was aimed at.
    pub target: Option<String>,
    /// Pointer position for mouse and touch events.
    pub position: Option<Point>,
    /// Key name for keyboard events.
    pub key: Option<String>,
    pub bubbles: bool,
}

impl Event {
    pub fn new(event_type: EventType) -> Self {
        let bubbles = event_type.bubbles_by_default();
        Self {
            event_type,
            target: None,
            position: None,
            key: None,
            bubbles,
        }
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn with_position(mut self, position: Point) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_bubbles(mut self, bubbles: bool) -> Self {
        self.bubbles = bubbles;
        self
    }
}

/// Options applied when registering a listener.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListenerOptions {
    /// Remove the listener after its first invocation.
    pub once: bool,
}

/// Handle returned when registering a listener, used to remove it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub(crate) u64);

macro_rules! shorthand_group {
    ($(#[$doc:meta])* $name:ident { $($method:ident => $variant:ident),+ $(,)? }) => {
        $(#[$doc])*
        pub struct $name<'a> {
            node: &'a Node,
            options: ListenerOptions,
        }

        impl<'a> $name<'a> {
            pub(crate) fn new(node: &'a Node) -> Self {
                Self {
                    node,
                    options: ListenerOptions::default(),
                }
            }

            /// Register the following listeners with `options`.
            pub fn with_options(mut self, options: ListenerOptions) -> Self {
                self.options = options;
                self
            }

            /// Register the following listeners as one-shot.
            pub fn once(self) -> Self {
                self.with_options(ListenerOptions { once: true })
            }

            $(
                pub fn $method(&self, callback: impl Fn(&Event) + 'static) -> ListenerId {
                    self.node.add_listener(EventType::$variant, self.options, callback)
                }
            )+
        }
    };
}

shorthand_group!(
    /// General document events.
    GeneralEvents {
        abort => Abort,
        error => Error,
        load => Load,
        resize => Resize,
        scroll => Scroll,
        unload => Unload,
    }
);

shorthand_group!(
    ClipboardEvents {
        copy => Copy,
        cut => Cut,
        paste => Paste,
    }
);

shorthand_group!(
    CompositionEvents {
        start => CompositionStart,
        update => CompositionUpdate,
        end => CompositionEnd,
    }
);

shorthand_group!(
    FocusEvents {
        blur => Blur,
        focus => Focus,
        focus_in => FocusIn,
        focus_out => FocusOut,
    }
);

shorthand_group!(
    FullscreenEvents {
        change => FullscreenChange,
        error => FullscreenError,
    }
);

shorthand_group!(
    KeyboardEvents {
        down => KeyDown,
        up => KeyUp,
    }
);

shorthand_group!(
    /// Pointer events from a mouse.
    MouseEvents {
        aux_click => AuxClick,
        click => Click,
        double_click => DblClick,
        down => MouseDown,
        enter => MouseEnter,
        leave => MouseLeave,
        out => MouseOut,
        over => MouseOver,
        up => MouseUp,
    }
);

shorthand_group!(
    TouchEvents {
        start => TouchStart,
        r#move => TouchMove,
        end => TouchEnd,
        cancel => TouchCancel,
    }
);

shorthand_group!(
    /// Timeline events of animation elements.
    AnimationEvents {
        begin => Begin,
        end => End,
        repeat => Repeat,
    }
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_event_names_round_trip() {
        let types = [
            EventType::CompositionUpdate,
            EventType::FullscreenChange,
            EventType::FullscreenError,
            EventType::DblClick,
            EventType::TouchCancel,
            EventType::Begin,
        ];
        for event_type in types {
            let parsed: EventType = event_type.as_str().parse().unwrap();
            assert_eq!(parsed, event_type);
        }
        assert_eq!(EventType::FullscreenChange.as_str(), "fullscreenchange");
        assert_eq!(
            "pointermove".parse::<EventType>().unwrap(),
            EventType::Custom("pointermove".to_string())
        );
    }

    #[test]
    fn test_focus_does_not_bubble() {
        assert!(!Event::new(EventType::Focus).bubbles);
        assert!(Event::new(EventType::KeyDown).bubbles);
    }

    #[test]
    fn test_shorthand_registers_listener() {
        let node = Node::detached("rect");
        let keys = Rc::new(RefCell::new(Vec::new()));
        let seen = keys.clone();
        KeyboardEvents::new(&node).down(move |event| {
            seen.borrow_mut().extend(event.key.clone());
        });
        MouseEvents::new(&node).click(|_| {});

        assert_eq!(node.listener_count(&EventType::KeyDown), 1);
        assert_eq!(node.listener_count(&EventType::Click), 1);

        node.dispatch_event(&Event::new(EventType::KeyDown).with_key("Enter"));
        assert_eq!(keys.borrow().as_slice(), ["Enter".to_string()]);
    }

    #[test]
    fn test_once_shorthand() {
        let node = Node::detached("rect");
        let clicks = Rc::new(RefCell::new(0));
        let counter = clicks.clone();
        MouseEvents::new(&node).once().click(move |_| {
            *counter.borrow_mut() += 1;
        });
        FocusEvents::new(&node)
            .with_options(ListenerOptions::default())
            .focus(|_| {});

        node.dispatch_event(&Event::new(EventType::Click));
        node.dispatch_event(&Event::new(EventType::Click));
        assert_eq!(*clicks.borrow(), 1);
        assert_eq!(node.listener_count(&EventType::Click), 0);
        assert_eq!(node.listener_count(&EventType::Focus), 1);
    }
}
