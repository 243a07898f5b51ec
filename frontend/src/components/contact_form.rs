use log::{info, warn};
use web_sys::{HtmlInputElement, HtmlTextAreaElement, InputEvent, SubmitEvent};
use yew::prelude::*;

use crate::config::ACKNOWLEDGMENT;
use crate::dom::alert;
use crate::state::{ContactAction, ContactDraft, ContactField};

/// Contact form that never leaves the page: a complete draft is cleared and
/// acknowledged with a single alert, an incomplete one is left untouched.
#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let draft = use_reducer(ContactDraft::default);

    let edit = |field: ContactField| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let value = match field {
                ContactField::Message => e.target_unchecked_into::<HtmlTextAreaElement>().value(),
                _ => e.target_unchecked_into::<HtmlInputElement>().value(),
            };
            draft.dispatch(ContactAction::Edit(field, value));
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match draft.validate() {
                Ok(()) => {
                    draft.dispatch(ContactAction::Clear);
                    info!("Contact message acknowledged");
                    alert(ACKNOWLEDGMENT);
                }
                Err(err) => warn!("Contact form refused: {}", err),
            }
        })
    };

    html! {
        <form class="contact-form" onsubmit={onsubmit}>
            <div class="form-field" style="animation-delay: 0s;">
                <label for="name">{"Name"}</label>
                <input
                    type="text"
                    id="name"
                    name="name"
                    value={draft.name.clone()}
                    oninput={edit(ContactField::Name)}
                    required=true
                />
            </div>
            <div class="form-field" style="animation-delay: 0.1s;">
                <label for="email">{"Email"}</label>
                <input
                    type="email"
                    id="email"
                    name="email"
                    value={draft.email.clone()}
                    oninput={edit(ContactField::Email)}
                    required=true
                />
            </div>
            <div class="form-field" style="animation-delay: 0.2s;">
                <label for="message">{"Message"}</label>
                <textarea
                    id="message"
                    name="message"
                    rows="4"
                    value={draft.message.clone()}
                    oninput={edit(ContactField::Message)}
                    required=true
                ></textarea>
            </div>
            <button type="submit" class="submit-button">{"Send Message"}</button>
        </form>
    }
}
