use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Window;
use yew::prelude::*;

pub fn is_past_threshold(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// A registered window `scroll` listener. The listener lives exactly as long
/// as this value; dropping it unregisters the callback.
pub struct ScrollSubscription {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollSubscription {
    /// Calls `on_scroll` with the window's vertical offset on every scroll
    /// event.
    pub fn new<F>(window: &Window, mut on_scroll: F) -> Result<Self, JsValue>
    where
        F: FnMut(f64) + 'static,
    {
        let source = window.clone();
        let callback = Closure::wrap(Box::new(move || {
            if let Ok(offset) = source.scroll_y() {
                on_scroll(offset);
            }
        }) as Box<dyn FnMut()>);

        window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())?;
        debug!("scroll listener registered");

        Ok(Self {
            window: window.clone(),
            callback,
        })
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        let removed = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
        match removed {
            Ok(()) => debug!("scroll listener removed"),
            Err(err) => warn!("failed to remove scroll listener: {:?}", err),
        }
    }
}

/// Tracks whether the window has scrolled past `threshold` pixels.
///
/// Starts out `false` and only re-renders the caller when the answer flips.
/// Without a usable window the flag simply stays `false`.
#[hook]
pub fn use_scrolled(threshold: f64) -> bool {
    let scrolled = use_state_eq(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |threshold| {
                let threshold = *threshold;
                let subscription = match web_sys::window() {
                    Some(window) => ScrollSubscription::new(&window, move |offset| {
                        scrolled.set(is_past_threshold(offset, threshold));
                    })
                    .map_err(|err| warn!("could not subscribe to scroll events: {:?}", err))
                    .ok(),
                    None => {
                        warn!("no window available, navigation bar stays transparent");
                        None
                    }
                };
                move || drop(subscription)
            },
            threshold,
        );
    }

    *scrolled
}
