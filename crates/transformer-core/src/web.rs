//! DOM host binding (wasm32 only).
//!
//! Observes the container with a `ResizeObserver`, listens for presses on
//! the container and for pointer/keyboard events on the whole document, and
//! removes every observer and listener again on unsubscribe.
//!
//! Sizes and pointer positions are both taken from the container's padding
//! box, the box that percent `left`/`top`/`width`/`height` resolve against.

use crate::binding::{Callback, Channel, Host, HostEvent};
use crate::cursor::{CursorAdvisor, CursorKind};
use crate::geometry::padding_box_point;
use crate::input::{KeyEvent, MouseButton, PointerEvent};
use crate::transform::ContainerSize;
use kurbo::{Point, Vec2};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, EventTarget, HtmlElement, ResizeObserver};

/// Registration made by [`DomHost`].
pub enum DomSubscription {
    Observer {
        observer: ResizeObserver,
        _callback: Closure<dyn FnMut(js_sys::Array)>,
    },
    Listener {
        target: EventTarget,
        event: &'static str,
        callback: Closure<dyn FnMut(web_sys::Event)>,
    },
}

/// Host backed by the browser document.
#[derive(Debug, Clone)]
pub struct DomHost {
    document: Option<Document>,
    container: Option<Element>,
}

impl DomHost {
    /// Host for a container element. `None` skips container-scoped channels.
    pub fn new(container: Option<Element>) -> Self {
        Self {
            document: web_sys::window().and_then(|w| w.document()),
            container,
        }
    }

    /// Host for the container with the given DOM id, if it exists.
    pub fn from_id(container_id: &str) -> Self {
        let host = Self::new(None);
        let container = host
            .document
            .as_ref()
            .and_then(|d| d.get_element_by_id(container_id));
        if container.is_none() {
            log::warn!("Container #{} not found", container_id);
        }
        Self { container, ..host }
    }

    pub fn container(&self) -> Option<&Element> {
        self.container.as_ref()
    }

    fn observe_container(&self, mut callback: Callback) -> Option<DomSubscription> {
        let container = self.container.as_ref()?;
        let observed = container.clone();
        let closure = Closure::<dyn FnMut(js_sys::Array)>::new(move |_entries: js_sys::Array| {
            callback(HostEvent::ContainerResized(padding_box_size(&observed)));
        });
        let observer = match ResizeObserver::new(closure.as_ref().unchecked_ref()) {
            Ok(observer) => observer,
            Err(e) => {
                log::error!("Failed to create ResizeObserver: {:?}", e);
                return None;
            }
        };
        observer.observe(container);
        Some(DomSubscription::Observer {
            observer,
            _callback: closure,
        })
    }

    fn listen(
        &self,
        target: EventTarget,
        event: &'static str,
        translate: impl Fn(&web_sys::Event) -> Option<HostEvent> + 'static,
        mut callback: Callback,
    ) -> Option<DomSubscription> {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |e: web_sys::Event| {
            if let Some(event) = translate(&e) {
                callback(event);
            }
        });
        if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
            log::error!("Failed to listen for {}: {:?}", event, e);
            return None;
        }
        Some(DomSubscription::Listener {
            target,
            event,
            callback: closure,
        })
    }
}

/// Container size in pixels, padding included, borders and scrollbars excluded.
fn padding_box_size(container: &Element) -> ContainerSize {
    ContainerSize::new(
        f64::from(container.client_width()),
        f64::from(container.client_height()),
    )
}

/// Pointer position relative to the container's padding box.
fn local_position(event: &web_sys::MouseEvent, container: Option<&Element>) -> Point {
    let client = Point::new(f64::from(event.client_x()), f64::from(event.client_y()));
    let Some(container) = container else {
        return client;
    };
    let rect = container.get_bounding_client_rect();
    padding_box_point(
        client,
        Point::new(rect.left(), rect.top()),
        Vec2::new(
            f64::from(container.client_left()),
            f64::from(container.client_top()),
        ),
    )
}

impl Host for DomHost {
    type Subscription = DomSubscription;

    fn subscribe(&mut self, channel: Channel, callback: Callback) -> Option<DomSubscription> {
        let document: EventTarget = self.document.clone()?.into();
        let container = self.container.clone();

        match channel {
            Channel::ContainerResize => self.observe_container(callback),
            Channel::Press => {
                let target: EventTarget = container.clone()?.into();
                self.listen(
                    target,
                    "pointerdown",
                    move |e| {
                        let e = e.dyn_ref::<web_sys::MouseEvent>()?;
                        Some(HostEvent::Pointer(PointerEvent::Down {
                            position: local_position(e, container.as_ref()),
                            button: MouseButton::from_dom(e.button()),
                        }))
                    },
                    callback,
                )
            }
            Channel::PointerMove => self.listen(
                document,
                "pointermove",
                move |e| {
                    let e = e.dyn_ref::<web_sys::MouseEvent>()?;
                    Some(HostEvent::Pointer(PointerEvent::Move {
                        position: local_position(e, container.as_ref()),
                    }))
                },
                callback,
            ),
            Channel::PointerUp => self.listen(
                document,
                "pointerup",
                move |e| {
                    let e = e.dyn_ref::<web_sys::MouseEvent>()?;
                    Some(HostEvent::Pointer(PointerEvent::Up {
                        position: local_position(e, container.as_ref()),
                        button: MouseButton::from_dom(e.button()),
                    }))
                },
                callback,
            ),
            Channel::KeyDown => self.listen(
                document,
                "keydown",
                |e| {
                    let e = e.dyn_ref::<web_sys::KeyboardEvent>()?;
                    Some(HostEvent::Key(KeyEvent::Pressed(e.key())))
                },
                callback,
            ),
            Channel::KeyUp => self.listen(
                document,
                "keyup",
                |e| {
                    let e = e.dyn_ref::<web_sys::KeyboardEvent>()?;
                    Some(HostEvent::Key(KeyEvent::Released(e.key())))
                },
                callback,
            ),
        }
    }

    fn unsubscribe(&mut self, subscription: DomSubscription) {
        match subscription {
            DomSubscription::Observer { observer, .. } => observer.disconnect(),
            DomSubscription::Listener {
                target,
                event,
                callback,
            } => {
                if let Err(e) =
                    target.remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
                {
                    log::warn!("Failed to remove {} listener: {:?}", event, e);
                }
            }
        }
    }
}

/// Cursor advisor that sets the CSS `cursor` of an element.
#[derive(Debug, Clone)]
pub struct CssCursor {
    element: HtmlElement,
}

impl CssCursor {
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }
}

impl CursorAdvisor for CssCursor {
    fn set_cursor(&mut self, kind: CursorKind, angle: Option<f64>) {
        let css = kind.resolve(angle).css_name();
        if let Err(e) = self.element.style().set_property("cursor", css) {
            log::warn!("Failed to set cursor {}: {:?}", css, e);
        }
    }
}
