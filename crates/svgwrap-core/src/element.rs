//! Behaviour shared by all element wrappers.
//!
//! [`Element`] covers identity, nesting and events; [`Graphic`] adds bounds and
//! transforms for rendered elements; [`Geometry`] adds paint styles and
//! hit-testing for basic shapes.

use crate::canvas::parse_view_box;
use crate::error::{SvgError, SvgResult};
use crate::events::{
    ClipboardEvents, CompositionEvents, Event, EventType, FocusEvents, FullscreenEvents,
    GeneralEvents, KeyboardEvents, ListenerId, ListenerOptions, MouseEvents, TouchEvents,
};
use crate::geometry;
use crate::node::Node;
use crate::styles::{FillStyle, PointerEvents, StrokeStyle, Style};
use crate::transform::{Transform, format_transform_list, parse_transform_list};
use kurbo::{Affine, Point, Rect};

/// Read a numeric attribute; missing or malformed values read as 0.
pub(crate) fn number(node: &Node, name: &str) -> f64 {
    node.attribute_f64(name).unwrap_or(0.0)
}

/// Reject nodes whose tag does not match the wrapper.
pub(crate) fn expect_tag(node: &Node, expected: &'static str) -> SvgResult<()> {
    let found = node.tag();
    if found != expected {
        return Err(SvgError::UnexpectedTag { expected, found });
    }
    Ok(())
}

/// A typed wrapper around one element of the tree.
pub trait Element {
    /// Tag name of the wrapped element.
    const TAG: &'static str;

    fn node(&self) -> &Node;

    /// Wrap a node without checking its tag.
    fn from_node_unchecked(node: Node) -> Self
    where
        Self: Sized;

    /// Wrap an existing node, failing when its tag does not match.
    fn from_node(node: Node) -> SvgResult<Self>
    where
        Self: Sized,
    {
        expect_tag(&node, Self::TAG)?;
        Ok(Self::from_node_unchecked(node))
    }

    /// Deep copy of the element with a fresh ID. The copy is not attached to any parent.
    fn duplicate(&self) -> Self
    where
        Self: Sized,
    {
        Self::from_node_unchecked(self.node().deep_clone())
    }

    fn tag(&self) -> String {
        self.node().tag()
    }

    fn id(&self) -> String {
        self.node().attribute("id").unwrap_or_default()
    }

    fn set_id(&self, id: &str) -> &Self {
        self.node().set_attribute("id", id);
        self
    }

    fn tab_index(&self) -> Option<i64> {
        self.node().attribute("tabindex")?.trim().parse().ok()
    }

    fn set_tab_index(&self, index: i64) -> &Self {
        self.node().set_attribute("tabindex", index);
        self
    }

    /// Append another element as the last child of this one.
    fn nest(&self, child: &impl Element) -> &Self {
        self.node().append_child(child.node());
        self
    }

    // Events

    fn add_event_listener(
        &self,
        event_type: EventType,
        callback: impl Fn(&Event) + 'static,
    ) -> ListenerId {
        self.node()
            .add_listener(event_type, ListenerOptions::default(), callback)
    }

    fn add_event_listener_with(
        &self,
        event_type: EventType,
        options: ListenerOptions,
        callback: impl Fn(&Event) + 'static,
    ) -> ListenerId {
        self.node().add_listener(event_type, options, callback)
    }

    fn remove_event_listener(&self, event_type: &EventType, id: ListenerId) -> bool {
        self.node().remove_listener(event_type, id)
    }

    /// Dispatch an event at this element. The event's target defaults to this element's ID.
    fn dispatch_event(&self, event: Event) -> usize {
        let event = match event.target {
            Some(_) => event,
            None => event.with_target(self.id()),
        };
        self.node().dispatch_event(&event)
    }

    fn on(&self) -> GeneralEvents<'_> {
        GeneralEvents::new(self.node())
    }

    fn on_clipboard(&self) -> ClipboardEvents<'_> {
        ClipboardEvents::new(self.node())
    }

    fn on_composition(&self) -> CompositionEvents<'_> {
        CompositionEvents::new(self.node())
    }

    fn on_focus(&self) -> FocusEvents<'_> {
        FocusEvents::new(self.node())
    }

    fn on_fullscreen(&self) -> FullscreenEvents<'_> {
        FullscreenEvents::new(self.node())
    }

    fn on_key(&self) -> KeyboardEvents<'_> {
        KeyboardEvents::new(self.node())
    }

    fn on_mouse(&self) -> MouseEvents<'_> {
        MouseEvents::new(self.node())
    }

    fn on_touch(&self) -> TouchEvents<'_> {
        TouchEvents::new(self.node())
    }
}

/// Mapping from an `svg` element's viewBox to its viewport.
fn viewport_transform(node: &Node) -> Affine {
    if node.tag() != "svg" {
        return Affine::IDENTITY;
    }
    let origin = Affine::translate((number(node, "x"), number(node, "y")));
    let Some(view_box) = node.attribute("viewBox").and_then(|v| parse_view_box(&v).ok()) else {
        return origin;
    };
    let (width, height) = (number(node, "width"), number(node, "height"));
    if view_box.width() <= 0.0 || view_box.height() <= 0.0 || width <= 0.0 || height <= 0.0 {
        return origin * Affine::translate((-view_box.x0, -view_box.y0));
    }
    origin
        * Affine::scale_non_uniform(width / view_box.width(), height / view_box.height())
        * Affine::translate((-view_box.x0, -view_box.y0))
}

/// An element that is rendered and can be transformed.
pub trait Graphic: Element {
    /// Bounding box in the element's own user space.
    fn bounding_box(&self) -> Rect {
        geometry::bounding_box(self.node())
    }

    /// Matrix from this element's user space to the nearest `svg` viewport.
    fn ctm(&self) -> Affine {
        let node = self.node();
        let mut matrix = geometry::local_transform(node);
        for ancestor in node.ancestors() {
            if ancestor.tag() == "svg" {
                break;
            }
            matrix = geometry::local_transform(&ancestor) * matrix;
        }
        matrix
    }

    /// Matrix from this element's user space to the root viewport, including viewBox scaling.
    fn screen_ctm(&self) -> Affine {
        let node = self.node();
        let mut matrix = geometry::local_transform(node);
        for ancestor in node.ancestors() {
            matrix = viewport_transform(&ancestor) * geometry::local_transform(&ancestor) * matrix;
        }
        matrix
    }

    /// Alias of [`Graphic::screen_ctm`].
    fn client_ctm(&self) -> Affine {
        self.screen_ctm()
    }

    /// Replace the `transform` attribute with a single translation.
    fn translate(&self, x: f64, y: f64) -> &Self {
        self.set_transforms(&[Transform::Translate { x, y }])
    }

    /// Replace the `transform` attribute with a rotation in degrees.
    fn rotate(&self, angle: f64) -> &Self {
        self.set_transforms(&[Transform::Rotate { angle }])
    }

    fn scale(&self, x: f64, y: f64) -> &Self {
        self.set_transforms(&[Transform::Scale { x, y }])
    }

    fn skew_x(&self, angle: f64) -> &Self {
        self.set_transforms(&[Transform::SkewX { angle }])
    }

    fn skew_y(&self, angle: f64) -> &Self {
        self.set_transforms(&[Transform::SkewY { angle }])
    }

    fn set_transforms(&self, transforms: &[Transform]) -> &Self {
        if transforms.is_empty() {
            self.node().remove_attribute("transform");
        } else {
            self.node()
                .set_attribute("transform", format_transform_list(transforms));
        }
        self
    }

    fn transforms(&self) -> SvgResult<Vec<Transform>> {
        match self.node().attribute("transform") {
            Some(value) => parse_transform_list(&value),
            None => Ok(Vec::new()),
        }
    }
}

/// A basic shape with paint styles.
pub trait Geometry: Graphic {
    fn set_fill_style(&self, style: &FillStyle) -> &Self {
        style.write_to(self.node());
        self
    }

    fn fill_style(&self) -> FillStyle {
        FillStyle::read_from(self.node())
    }

    fn set_stroke_style(&self, style: &StrokeStyle) -> &Self {
        style.write_to(self.node());
        self
    }

    fn stroke_style(&self) -> StrokeStyle {
        StrokeStyle::read_from(self.node())
    }

    fn set_opacity(&self, opacity: f64) -> &Self {
        self.node().set_attribute("opacity", opacity);
        self
    }

    /// Opacity, 1 when unset.
    fn opacity(&self) -> f64 {
        self.node().attribute_f64("opacity").unwrap_or(1.0)
    }

    fn set_pointer_events(&self, value: PointerEvents) -> &Self {
        self.node().set_attribute("pointer-events", value);
        self
    }

    fn pointer_events(&self) -> PointerEvents {
        self.node()
            .attribute("pointer-events")
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    /// Check if a point in user space is inside the filled area.
    fn is_point_in_fill(&self, point: Point) -> bool {
        geometry::is_point_in_fill(self.node(), point)
    }

    /// Check if a point in user space is on the stroke.
    fn is_point_in_stroke(&self, point: Point) -> bool {
        geometry::is_point_in_stroke(self.node(), point)
    }
}
