use log::debug;
use web_sys::{Event, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::content::{CANDIDATE, NAV_ITEMS};
use crate::dom::scroll_metrics;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub menu_open: bool,
    pub on_toggle: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { menu_open, on_toggle, on_close } = props;
    let is_scrolled = use_state_eq(|| false);

    let refresh = {
        let is_scrolled = is_scrolled.clone();
        move || {
            if let Some(metrics) = scroll_metrics() {
                is_scrolled.set(metrics.is_scrolled());
            }
        }
    };
    {
        let refresh = refresh.clone();
        use_event_with_window("scroll", move |_: Event| refresh());
    }
    use_effect_with_deps(
        |scrolled| {
            debug!("Nav style switched, scrolled={}", scrolled);
            || ()
        },
        *is_scrolled,
    );
    use_effect_with_deps(
        move |_| {
            // page may be restored mid-scroll
            refresh();
            || ()
        },
        (),
    );

    let toggle_menu = {
        let on_toggle = on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };

    // no prevent_default: the anchor still has to jump to its section
    let close_menu = {
        let on_close = on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then_some("scrolled"))}>
            <div class="nav-content">
                <a href="#" class="nav-logo">{CANDIDATE.name}</a>

                <div class="nav-links">
                    { for NAV_ITEMS.iter().enumerate().map(|(index, item)| html! {
                        <a
                            key={item.label}
                            href={item.href()}
                            class="nav-link"
                            style={format!("animation-delay: {:.1}s;", index as f64 * 0.1)}
                            onclick={close_menu.clone()}
                        >
                            {item.label}
                        </a>
                    }) }
                </div>

                <button
                    class="burger-menu"
                    aria-label="Toggle menu"
                    aria-expanded={menu_open.to_string()}
                    onclick={toggle_menu}
                >
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>
            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            { for NAV_ITEMS.iter().map(|item| html! {
                                <a key={item.label} href={item.href()} class="mobile-link" onclick={close_menu.clone()}>
                                    {item.label}
                                </a>
                            }) }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </nav>
    }
}
