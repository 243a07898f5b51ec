use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use web_sys::Element;
use yew::prelude::*;

use crate::config::REVEAL_THRESHOLD;
use crate::dom::{log_js_error, Observation};
use crate::state::RevealLatch;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
}

/// Holds its children hidden until at least a fifth of the wrapper has been
/// on screen, then fades them in once.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let latch = use_mut_ref(RevealLatch::default);
    let visible = use_state(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let observation = node
                    .cast::<Element>()
                    .and_then(|element| watch(&element, latch, visible));
                move || drop(observation)
            },
            (),
        );
    }

    html! {
        <div ref={node} class={classes!("reveal", (*visible).then_some("revealed"))}>
            { for props.children.iter() }
        </div>
    }
}

fn watch(
    element: &Element,
    latch: Rc<RefCell<RevealLatch>>,
    visible: UseStateHandle<bool>,
) -> Option<Observation> {
    let on_sample = {
        let latch = latch.clone();
        let visible = visible.clone();
        move |is_intersecting: bool, ratio: f64| {
            let fired = latch.borrow_mut().observe(is_intersecting, ratio);
            if fired {
                debug!("Revealing section at ratio {:.2}", ratio);
                visible.set(true);
            }
            fired
        }
    };

    match Observation::start(element, REVEAL_THRESHOLD, on_sample) {
        Ok(observation) => Some(observation),
        Err(e) => {
            log_js_error("IntersectionObserver unavailable", &e);
            warn!("Revealing without waiting for visibility");
            if latch.borrow_mut().force() {
                visible.set(true);
            }
            None
        }
    }
}
