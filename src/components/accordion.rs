//! Single-expansion, collapsible accordion.
//!
//! `Accordion` owns which item is open and hands it to its `AccordionItem`
//! descendants through context, so items can be wrapped in other components
//! (the FAQ wraps each one in a `Reveal`).

use yew::prelude::*;
use yew::virtual_dom::AttrValue;

/// Next open item after `clicked` is toggled. At most one item is open.
pub fn toggle_single(current: Option<&str>, clicked: &str) -> Option<String> {
    match current {
        Some(open) if open == clicked => None,
        _ => Some(clicked.to_string()),
    }
}

#[derive(Clone, PartialEq)]
pub struct AccordionContext {
    pub open: Option<AttrValue>,
    pub on_toggle: Callback<AttrValue>,
}

#[derive(Properties, PartialEq)]
pub struct AccordionProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Accordion)]
pub fn accordion(props: &AccordionProps) -> Html {
    let open = use_state(|| None::<AttrValue>);

    let on_toggle = {
        let open = open.clone();
        Callback::from(move |value: AttrValue| {
            let next = toggle_single(open.as_deref(), &value);
            open.set(next.map(AttrValue::from));
        })
    };

    let context = AccordionContext {
        open: (*open).clone(),
        on_toggle,
    };

    html! {
        <ContextProvider<AccordionContext> context={context}>
            <div class={classes!("accordion", props.class.clone())}>
                { for props.children.iter() }
            </div>
        </ContextProvider<AccordionContext>>
    }
}

#[derive(Properties, PartialEq)]
pub struct AccordionItemProps {
    pub value: AttrValue,
    pub trigger: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AccordionItem)]
pub fn accordion_item(props: &AccordionItemProps) -> Html {
    let context = use_context::<AccordionContext>();
    let Some(context) = context else {
        log::error!("AccordionItem {} rendered outside an Accordion", props.value);
        return html! {};
    };

    let is_open = context.open.as_ref() == Some(&props.value);

    let toggle = {
        let on_toggle = context.on_toggle.clone();
        let value = props.value.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(value.clone());
        })
    };

    html! {
        <div
            id={props.value.clone()}
            class={classes!("accordion-item", is_open.then(|| "open"))}
        >
            <button
                type="button"
                class="accordion-trigger"
                aria-expanded={if is_open { "true" } else { "false" }}
                onclick={toggle}
            >
                <span class="question-text">{ &props.trigger }</span>
                <span class="toggle-icon">{ if is_open { "−" } else { "+" } }</span>
            </button>
            <div class="accordion-content" hidden={!is_open}>
                { for props.children.iter() }
            </div>
        </div>
    }
}
