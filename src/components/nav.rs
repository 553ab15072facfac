use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::config;
use crate::content::{NavLink, NAV_LINKS};
use crate::scroll::use_scrolled;
use crate::Route;

/// Presentation of the navigation bar.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NavVariant {
    /// Resting at the top of the page.
    Transparent,
    /// Scrolled: semi-opaque with a backdrop blur.
    Translucent,
}

impl NavVariant {
    pub fn from_scrolled(scrolled: bool) -> Self {
        if scrolled {
            NavVariant::Translucent
        } else {
            NavVariant::Transparent
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            NavVariant::Transparent => "site-nav--transparent",
            NavVariant::Translucent => "site-nav--translucent",
        }
    }
}

fn nav_links(link_class: &'static str, onclick: Option<Callback<MouseEvent>>) -> Html {
    NAV_LINKS
        .iter()
        .map(|NavLink { label, href }| {
            html! {
                <a key={*href} href={*href} class={link_class} onclick={onclick.clone()}>
                    {*label}
                </a>
            }
        })
        .collect()
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_scrolled(config::SCROLL_THRESHOLD_PX);
    let variant = NavVariant::from_scrolled(is_scrolled);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Anchors still navigate; only the sheet closes.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <nav class={classes!("site-nav", variant.class())}>
            <div class="container nav-content">
                <Link<Route> to={Route::Home} classes="nav-brand">
                    { config::BRAND_NAME }
                </Link<Route>>
                <div class="nav-links">
                    { nav_links("nav-link", None) }
                </div>
                <div class="nav-cta">
                    <Button>{"Enroll Now"}</Button>
                </div>
                <Button
                    variant={ButtonVariant::Outline}
                    size={ButtonSize::Icon}
                    class="burger-menu"
                    aria_label="Open menu"
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </Button>
            </div>
            if *menu_open {
                <>
                    <div class="sheet-overlay" onclick={close_menu.clone()}></div>
                    <aside class="sheet sheet-right">
                        <nav class="sheet-links">
                            { nav_links("nav-link", Some(close_menu.clone())) }
                            <Button class="btn-block" onclick={close_menu}>{"Enroll Now"}</Button>
                        </nav>
                    </aside>
                </>
            }
        </nav>
    }
}
