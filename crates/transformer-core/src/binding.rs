//! Host binding layer.
//!
//! A [`Host`] is whatever delivers container size changes and global
//! pointer/keyboard events: the DOM, a winit window, a test harness. A
//! [`HostBinding`] subscribes a shared [`Transformer`] to every channel the
//! host offers on [`HostBinding::start`] and releases all of those
//! subscriptions on [`HostBinding::stop`] or drop.

use crate::input::{KeyEvent, MouseButton, PointerEvent};
use crate::machine::Transformer;
use crate::transform::ContainerSize;
use kurbo::Point;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Event streams a host can offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Container box changes.
    ContainerResize,
    /// Presses inside the container (element or empty container area).
    Press,
    /// Pointer moves anywhere, so drags survive leaving the element.
    PointerMove,
    /// Pointer releases anywhere.
    PointerUp,
    KeyDown,
    KeyUp,
}

impl Channel {
    pub const ALL: [Channel; 6] = [
        Channel::ContainerResize,
        Channel::Press,
        Channel::PointerMove,
        Channel::PointerUp,
        Channel::KeyDown,
        Channel::KeyUp,
    ];
}

/// Event delivered by a host.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    ContainerResized(ContainerSize),
    Pointer(PointerEvent),
    Key(KeyEvent),
}

/// Callback registered with a host.
pub type Callback = Box<dyn FnMut(HostEvent)>;

/// Source of container and input events.
pub trait Host {
    /// Handle that releases one registration.
    type Subscription;

    /// Register `callback` on `channel`. Returns `None` when the host has
    /// nothing to observe for that channel (e.g. no container mounted).
    fn subscribe(&mut self, channel: Channel, callback: Callback) -> Option<Self::Subscription>;

    /// Release a registration.
    fn unsubscribe(&mut self, subscription: Self::Subscription);
}

/// Connects a transformer to a host for the lifetime of the binding.
pub struct HostBinding<H: Host> {
    host: H,
    transformer: Rc<RefCell<Transformer>>,
    subscriptions: Vec<H::Subscription>,
    active: bool,
}

impl<H: Host> HostBinding<H> {
    /// Create an inactive binding.
    pub fn new(host: H, transformer: Transformer) -> Self {
        Self {
            host,
            transformer: Rc::new(RefCell::new(transformer)),
            subscriptions: Vec::new(),
            active: false,
        }
    }

    /// Shared handle to the bound transformer.
    pub fn transformer(&self) -> Rc<RefCell<Transformer>> {
        Rc::clone(&self.transformer)
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Check if the binding is currently subscribed.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Number of live subscriptions.
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Subscribe to every channel the host offers. Calling it again while
    /// active does nothing.
    pub fn start(&mut self) {
        if self.active {
            return;
        }
        let id = self.transformer.borrow().id();
        for channel in Channel::ALL {
            let transformer = Rc::clone(&self.transformer);
            let callback: Callback = Box::new(move |event| dispatch(&transformer, event));
            match self.host.subscribe(channel, callback) {
                Some(subscription) => self.subscriptions.push(subscription),
                None => log::debug!("Transformer {}: host has no {:?} source", id, channel),
            }
        }
        self.active = true;
        log::debug!(
            "Transformer {}: bound with {} subscriptions",
            id,
            self.subscriptions.len()
        );
    }

    /// Release every subscription made by [`HostBinding::start`].
    pub fn stop(&mut self) {
        if !self.active {
            return;
        }
        for subscription in self.subscriptions.drain(..) {
            self.host.unsubscribe(subscription);
        }
        self.active = false;
        if let Ok(transformer) = self.transformer.try_borrow() {
            log::debug!("Transformer {}: unbound", transformer.id());
        }
    }
}

impl<H: Host> Drop for HostBinding<H> {
    fn drop(&mut self) {
        self.stop();
    }
}

impl<H: Host + fmt::Debug> fmt::Debug for HostBinding<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostBinding")
            .field("host", &self.host)
            .field("subscriptions", &self.subscriptions.len())
            .field("active", &self.active)
            .finish()
    }
}

/// Route one host event into the transformer.
fn dispatch(transformer: &RefCell<Transformer>, event: HostEvent) {
    // Events raised from inside a state callback would re-enter the machine
    let Ok(mut transformer) = transformer.try_borrow_mut() else {
        log::warn!("Dropping re-entrant host event {:?}", event);
        return;
    };
    match event {
        HostEvent::ContainerResized(size) => transformer.set_container_size(size),
        HostEvent::Pointer(pointer) => transformer.handle_pointer_event(pointer),
        HostEvent::Key(key) => transformer.handle_key_event(&key),
    }
}

/// Handle returned by [`EventHub::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HubSubscription {
    id: u64,
    channel: Channel,
}

impl HubSubscription {
    pub fn channel(&self) -> Channel {
        self.channel
    }
}

/// In-process host whose events are pushed by the embedding shell.
pub struct EventHub {
    has_container: bool,
    next_id: u64,
    callbacks: Vec<(HubSubscription, Callback)>,
}

impl EventHub {
    /// Hub with a container to observe.
    pub fn new() -> Self {
        Self {
            has_container: true,
            next_id: 0,
            callbacks: Vec::new(),
        }
    }

    /// Hub without a container: container observation is skipped.
    pub fn detached() -> Self {
        Self {
            has_container: false,
            ..Self::new()
        }
    }

    /// Number of live registrations.
    pub fn subscriber_count(&self) -> usize {
        self.callbacks.len()
    }

    /// Deliver `event` to every callback on `channel`. Returns how many
    /// callbacks received it.
    pub fn emit(&mut self, channel: Channel, event: HostEvent) -> usize {
        let mut delivered = 0;
        for (subscription, callback) in &mut self.callbacks {
            if subscription.channel == channel {
                callback(event.clone());
                delivered += 1;
            }
        }
        delivered
    }

    pub fn container_resized(&mut self, width: f64, height: f64) -> usize {
        self.emit(
            Channel::ContainerResize,
            HostEvent::ContainerResized(ContainerSize::new(width, height)),
        )
    }

    pub fn pointer_down(&mut self, position: Point, button: MouseButton) -> usize {
        self.emit(
            Channel::Press,
            HostEvent::Pointer(PointerEvent::Down { position, button }),
        )
    }

    pub fn pointer_move(&mut self, position: Point) -> usize {
        self.emit(
            Channel::PointerMove,
            HostEvent::Pointer(PointerEvent::Move { position }),
        )
    }

    pub fn pointer_up(&mut self, position: Point, button: MouseButton) -> usize {
        self.emit(
            Channel::PointerUp,
            HostEvent::Pointer(PointerEvent::Up { position, button }),
        )
    }

    pub fn key_down(&mut self, key: &str) -> usize {
        self.emit(Channel::KeyDown, HostEvent::Key(KeyEvent::Pressed(key.to_string())))
    }

    pub fn key_up(&mut self, key: &str) -> usize {
        self.emit(Channel::KeyUp, HostEvent::Key(KeyEvent::Released(key.to_string())))
    }
}

impl Default for EventHub {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EventHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHub")
            .field("has_container", &self.has_container)
            .field("subscribers", &self.callbacks.len())
            .finish()
    }
}

impl Host for EventHub {
    type Subscription = HubSubscription;

    fn subscribe(&mut self, channel: Channel, callback: Callback) -> Option<HubSubscription> {
        if channel == Channel::ContainerResize && !self.has_container {
            return None;
        }
        let subscription = HubSubscription {
            id: self.next_id,
            channel,
        };
        self.next_id += 1;
        self.callbacks.push((subscription, callback));
        Some(subscription)
    }

    fn unsubscribe(&mut self, subscription: HubSubscription) {
        self.callbacks.retain(|(s, _)| *s != subscription);
    }
}
