//! Browser wiring: subscribe an [`InteractionCore`] to a layer's DOM events.
//!
//! Mouse press/release/leave/move are read from the scene canvas and the
//! wheel from its container. Listeners live exactly as long as the returned
//! [`Attachment`]; dropping it (or calling [`Attachment::detach`])
//! unsubscribes all of them.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{AddEventListenerOptions, Event, EventTarget, HtmlCanvasElement, HtmlElement, MouseEvent, WheelEvent};

use crate::config::ControllerConfig;
use crate::engine::{Action, InteractionCore};
use crate::geo::{Point, WebMercator};
use crate::input::{Modifiers, WheelDelta};
use crate::view::MapView;

/// Error returned by [`attach`].
#[derive(Debug, thiserror::Error)]
pub enum AttachError {
    /// The browser refused to register a listener.
    #[error("failed to subscribe to {event} events: {message}")]
    Subscribe { event: &'static str, message: String },
}

/// The scene surfaces the controller listens on, and the view it drives.
pub struct Scene<V> {
    pub view: V,
    pub canvas: HtmlCanvasElement,
    pub container: HtmlElement,
    /// Called with no arguments after every event that changed the view,
    /// typically to schedule a `requestAnimationFrame`.
    pub request_render: Option<js_sys::Function>,
}

/// A render layer handle as handed over by the host.
pub struct Layer<V> {
    pub scene: Scene<V>,
}

/// The controller as shared between the host and its event closures.
pub type SharedCore<V> = Rc<RefCell<InteractionCore<V>>>;

struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

/// Live event subscriptions for one layer.
pub struct Attachment<V> {
    core: SharedCore<V>,
    listeners: Vec<Listener>,
}

/// Subscribe to `layer`'s canvas and container with default sensitivities.
///
/// # Errors
///
/// Returns [`AttachError::Subscribe`] if the browser rejects a listener.
pub fn attach<V: MapView + 'static>(layer: Layer<V>) -> Result<Attachment<V>, AttachError> {
    attach_with_config(layer, ControllerConfig::default())
}

/// Subscribe to `layer`'s canvas and container.
///
/// # Errors
///
/// Returns [`AttachError::Subscribe`] if the browser rejects a listener.
/// The subscriptions already made are removed before the error is returned.
pub fn attach_with_config<V: MapView + 'static>(
    layer: Layer<V>,
    config: ControllerConfig,
) -> Result<Attachment<V>, AttachError> {
    let Scene { view, canvas, container, request_render } = layer.scene;
    let core = Rc::new(RefCell::new(InteractionCore::with_projection(view, WebMercator, config)));
    let render: Rc<Option<js_sys::Function>> = Rc::new(request_render);
    let mut attachment = Attachment { core: Rc::clone(&core), listeners: Vec::new() };

    let canvas: &EventTarget = canvas.as_ref();
    let container: &EventTarget = container.as_ref();

    attachment.listen(canvas, "mousedown", mouse_handler(&core, &render, |core, ev| {
        core.on_press(client_point(ev))
    }))?;
    attachment.listen(canvas, "mouseup", mouse_handler(&core, &render, |core, _ev| core.on_release()))?;
    attachment.listen(canvas, "mouseleave", mouse_handler(&core, &render, |core, _ev| core.on_leave()))?;
    attachment.listen(canvas, "mousemove", mouse_handler(&core, &render, |core, ev| {
        core.on_move(client_point(ev), modifiers(ev))
    }))?;
    attachment.listen_non_passive(container, "wheel", wheel_handler(&core, &render))?;

    tracing::info!(listeners = attachment.listeners.len(), "interaction attached");
    Ok(attachment)
}

impl<V> Attachment<V> {
    /// The controller behind the listeners, for hosts that render from its view.
    #[must_use]
    pub fn core(&self) -> SharedCore<V> {
        Rc::clone(&self.core)
    }

    /// Unsubscribe every listener.
    pub fn detach(self) {
        tracing::info!("interaction detached");
    }

    fn listen(
        &mut self,
        target: &EventTarget,
        event: &'static str,
        callback: Closure<dyn FnMut(Event)>,
    ) -> Result<(), AttachError> {
        target
            .add_event_listener_with_callback(event, as_function(&callback))
            .map_err(|err| subscribe_error(event, &err))?;
        self.listeners.push(Listener { target: target.clone(), event, callback });
        Ok(())
    }

    /// Like `listen`, but allows the handler to call `preventDefault`.
    fn listen_non_passive(
        &mut self,
        target: &EventTarget,
        event: &'static str,
        callback: Closure<dyn FnMut(Event)>,
    ) -> Result<(), AttachError> {
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                as_function(&callback),
                &options,
            )
            .map_err(|err| subscribe_error(event, &err))?;
        self.listeners.push(Listener { target: target.clone(), event, callback });
        Ok(())
    }
}

impl<V> Drop for Attachment<V> {
    fn drop(&mut self) {
        for listener in self.listeners.drain(..) {
            if let Err(err) = listener
                .target
                .remove_event_listener_with_callback(listener.event, as_function(&listener.callback))
            {
                tracing::warn!(event = listener.event, error = ?err, "failed to remove listener");
            }
        }
    }
}

fn as_function(callback: &Closure<dyn FnMut(Event)>) -> &js_sys::Function {
    callback.as_ref().unchecked_ref()
}

fn subscribe_error(event: &'static str, err: &JsValue) -> AttachError {
    AttachError::Subscribe { event, message: format!("{err:?}") }
}

fn mouse_handler<V, F>(core: &SharedCore<V>, render: &RenderHook, mut handle: F) -> Closure<dyn FnMut(Event)>
where
    V: MapView + 'static,
    F: FnMut(&mut InteractionCore<V>, &MouseEvent) -> Vec<Action> + 'static,
{
    let core = Rc::clone(core);
    let render = Rc::clone(render);
    Closure::wrap(Box::new(move |ev: Event| {
        let Some(ev) = ev.dyn_ref::<MouseEvent>() else {
            return;
        };
        let Ok(mut core) = core.try_borrow_mut() else {
            tracing::warn!(event = %ev.type_(), "dropped re-entrant pointer event");
            return;
        };
        let actions = handle(&mut *core, ev);
        drop(core);
        apply(dispatch(&actions), ev, &render);
    }) as Box<dyn FnMut(Event)>)
}

fn wheel_handler<V: MapView + 'static>(core: &SharedCore<V>, render: &RenderHook) -> Closure<dyn FnMut(Event)> {
    let core = Rc::clone(core);
    let render = Rc::clone(render);
    Closure::wrap(Box::new(move |ev: Event| {
        let Some(ev) = ev.dyn_ref::<WheelEvent>() else {
            return;
        };
        let Ok(mut core) = core.try_borrow_mut() else {
            tracing::warn!("dropped re-entrant wheel event");
            return;
        };
        let actions = core.on_wheel(WheelDelta { dx: ev.delta_x(), dy: ev.delta_y() });
        drop(core);
        apply(dispatch(&actions), ev, &render);
    }) as Box<dyn FnMut(Event)>)
}

type RenderHook = Rc<Option<js_sys::Function>>;

/// What the host must do with the browser event after the core handled it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Dispatch {
    prevent_default: bool,
    render: bool,
}

fn dispatch(actions: &[Action]) -> Dispatch {
    actions.iter().fold(Dispatch::default(), |acc, action| match action {
        Action::PreventDefault => Dispatch { prevent_default: true, ..acc },
        Action::RenderNeeded => Dispatch { render: true, ..acc },
    })
}

fn apply(dispatch: Dispatch, ev: &Event, render: &RenderHook) {
    if dispatch.prevent_default {
        ev.prevent_default();
    }
    if dispatch.render {
        if let Some(request_render) = render.as_ref() {
            if let Err(err) = request_render.call0(&JsValue::NULL) {
                tracing::warn!(error = ?err, "render request failed");
            }
        }
    }
}

fn client_point(ev: &MouseEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

fn modifiers(ev: &MouseEvent) -> Modifiers {
    Modifiers { shift: ev.shift_key(), ctrl: ev.ctrl_key(), alt: ev.alt_key(), meta: ev.meta_key() }
}
