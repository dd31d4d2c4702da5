use leptos::prelude::*;

use crate::models::{COPYRIGHT_YEAR, FooterColumn, SITE};

#[component]
fn FooterLinks(column: FooterColumn) -> impl IntoView {
    view! {
        <div class="col footer__col">
            <div class="footer__title">{column.title}</div>
            <ul class="footer__items clean-list">
                {column
                    .links
                    .iter()
                    .map(|link| view! {
                        <li class="footer__item">
                            <a class="footer__link-item" href=link.href>{link.label}</a>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer footer--dark">
            <div class="container container-fluid">
                <div class="row footer__links">
                    {SITE
                        .footer
                        .iter()
                        .map(|column| view! { <FooterLinks column={*column}/> })
                        .collect_view()}
                </div>
                <div class="footer__bottom text--center">
                    <div class="footer__copyright">{SITE.copyright(COPYRIGHT_YEAR)}</div>
                </div>
            </div>
        </footer>
    }
}
