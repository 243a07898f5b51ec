use web_sys::Event;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::dom::scroll_metrics;

/// Thin bar pinned to the top of the viewport whose width tracks how far the
/// document has been scrolled.
#[function_component(ProgressBar)]
pub fn progress_bar() -> Html {
    let progress = use_state_eq(|| 0.0_f64);

    let refresh = {
        let progress = progress.clone();
        move || {
            if let Some(metrics) = scroll_metrics() {
                progress.set(metrics.progress());
            }
        }
    };

    {
        let refresh = refresh.clone();
        use_event_with_window("scroll", move |_: Event| refresh());
    }
    {
        let refresh = refresh.clone();
        use_event_with_window("resize", move |_: Event| refresh());
    }
    use_effect_with_deps(
        move |_| {
            refresh();
            || ()
        },
        (),
    );

    html! {
        <div
            class="scroll-progress"
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="1"
            aria-valuenow={format!("{:.3}", *progress)}
            style={format!("transform: scaleX({});", *progress)}
        ></div>
    }
}
