//! フッターコンポーネント

use leptos::prelude::*;
use las_portal_common::Footer;

#[component]
pub fn SiteFooter(#[prop(into)] brand: String, footer: Footer) -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="footer-overlay" />
            <div class="footer-inner">
                <div class="footer-grid">
                    <div>
                        <h3>{brand}</h3>
                        <p class="text-muted">{footer.about}</p>
                    </div>
                    {footer.columns
                        .into_iter()
                        .map(|col| view! {
                            <div>
                                <h4>{col.title}</h4>
                                <ul>
                                    {col.links
                                        .into_iter()
                                        .map(|link| view! { <li><a href=link.href>{link.label}</a></li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        })
                        .collect_view()}
                </div>
                <div class="footer-bottom">
                    <p>{footer.copyright}</p>
                    <p class="text-muted">{footer.tagline}</p>
                </div>
            </div>
        </footer>
    }
}
