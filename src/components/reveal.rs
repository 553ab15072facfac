use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};
use yew::prelude::*;

use crate::animation::{RevealTrigger, Transition};

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub transition: Transition,
    #[prop_or(RevealTrigger::Mount)]
    pub trigger: RevealTrigger,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps its children and plays `transition` once, either right after mount
/// or the first time the wrapper enters the viewport.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let revealed = use_state_eq(|| false);
    let node = use_node_ref();

    {
        let revealed = revealed.clone();
        let node = node.clone();
        use_effect_with_deps(
            move |trigger| {
                let release: Box<dyn FnOnce()> = match trigger {
                    RevealTrigger::Mount => {
                        // Next tick, so the initial state is painted first.
                        let timeout = Timeout::new(0, move || revealed.set(true));
                        Box::new(move || drop(timeout))
                    }
                    RevealTrigger::InView => match ViewportObserver::new(&node, revealed.clone()) {
                        Ok(observer) => Box::new(move || drop(observer)),
                        Err(err) => {
                            warn!("viewport observer unavailable, revealing now: {:?}", err);
                            revealed.set(true);
                            Box::new(|| ())
                        }
                    },
                };
                move || release()
            },
            props.trigger,
        );
    }

    html! {
        <div
            ref={node}
            class={classes!("reveal", props.class.clone())}
            style={props.transition.style(*revealed)}
        >
            { for props.children.iter() }
        </div>
    }
}

/// Intersection observer that flips `revealed` on first visibility and then
/// stops observing. Disconnects on drop.
struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ViewportObserver {
    fn new(node: &NodeRef, revealed: UseStateHandle<bool>) -> Result<Self, JsValue> {
        let element = node
            .cast::<Element>()
            .ok_or_else(|| JsValue::from_str("reveal target is not mounted"))?;

        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let visible = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());
            if visible {
                debug!("reveal target entered viewport");
                revealed.set(true);
                observer.disconnect();
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
        observer.observe(&element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
