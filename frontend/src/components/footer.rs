use yew::prelude::*;

use crate::content::{Icon, CONTACT, COPYRIGHT, FOOTER_TAGLINE, NAV_ITEMS};

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    /// Called when a quick link is followed, so an open mobile menu can close.
    pub on_link: Callback<()>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let on_link = {
        let on_link = props.on_link.clone();
        Callback::from(move |_: MouseEvent| on_link.emit(()))
    };

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-column" style="animation-delay: 0s;">
                    <div class="footer-brand">
                        <span class="icon">{Icon::GraduationCap.glyph()}</span>
                        <h2>{"Vote for Progress"}</h2>
                    </div>
                    <p>{FOOTER_TAGLINE}</p>
                </div>
                <div class="footer-column" style="animation-delay: 0.1s;">
                    <h3>{"Quick Links"}</h3>
                    <ul class="quick-links">
                        { for NAV_ITEMS.iter().map(|item| html! {
                            <li key={item.label}>
                                <a href={item.href()} onclick={on_link.clone()}>{item.label}</a>
                            </li>
                        }) }
                    </ul>
                </div>
                <div class="footer-column" style="animation-delay: 0.2s;">
                    <h3>{"Campus Address"}</h3>
                    <p>
                        { for CONTACT.address.iter().enumerate().map(|(i, line)| html! {
                            <>
                                { if i > 0 { html! { <br /> } } else { html! {} } }
                                {*line}
                            </>
                        }) }
                    </p>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{COPYRIGHT}</p>
            </div>
        </footer>
    }
}
