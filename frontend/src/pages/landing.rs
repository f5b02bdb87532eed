use yew::prelude::*;

use crate::catalog::{catalog, ContentRecord, GroupKey};
use crate::components::accordion::Faq;
use crate::components::carousel::ContentRow;
use crate::components::detail_modal::{sync_body_scroll, DetailModal, OverlayState};
use crate::components::email_form::EmailForm;
use crate::components::navbar::Navbar;
use crate::utils::preference::Theme;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
}

#[function_component]
pub fn Landing(props: &LandingProps) -> Html {
    let overlay = use_state(OverlayState::default);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    {
        let state = (*overlay).clone();
        use_effect_with_deps(
            move |state| {
                sync_body_scroll(state);
                || ()
            },
            state,
        );
    }

    let on_select = {
        let overlay = overlay.clone();
        Callback::from(move |record: ContentRecord| {
            log::info!("Showing details for {} ({})", record.title, record.id);
            overlay.set(OverlayState::open(&record));
        })
    };
    let on_close = {
        let overlay = overlay.clone();
        Callback::from(move |_: ()| overlay.set(OverlayState::Closed))
    };

    let rows = GroupKey::ALL.into_iter().filter_map(|group| {
        let records = catalog().group(group);
        if records.is_empty() {
            log::warn!("No titles for {}, skipping row", group.key());
            return None;
        }
        Some(html! {
            <ContentRow
                key={group.key()}
                {group}
                {records}
                on_select={on_select.clone()}
            />
        })
    });

    html! {
        <div class="landing-page">
            <style>{LANDING_CSS}</style>
            <Navbar theme={props.theme} on_toggle_theme={props.on_toggle_theme.clone()} />
            <header class="hero">
                <div class="hero-background"></div>
                <div class="hero-overlay"></div>
                <div class="hero-content">
                    <h1 class="hero-title">{"Unlimited films, series and more"}</h1>
                    <p class="hero-subtitle">{"Starts at ₹149. Cancel at any time."}</p>
                    <EmailForm id="signup" />
                </div>
            </header>
            <main class="rows">
                { for rows }
            </main>
            <Faq />
            <section class="footer-cta">
                <EmailForm id="footer-signup" />
            </section>
            <footer class="site-footer">
                <p>{"Questions? Call 000-800-919-1743"}</p>
                <ul class="footer-links">
                    <li><a href="#faq">{"FAQ"}</a></li>
                    <li><a href="#signup">{"Help Centre"}</a></li>
                    <li><a href="#signup">{"Terms of Use"}</a></li>
                    <li><a href="#signup">{"Privacy"}</a></li>
                </ul>
                <p class="footer-note">{"Reelview is a demo page. No account is created and nothing is sent anywhere."}</p>
            </footer>
            <DetailModal state={(*overlay).clone()} {on_close} />
        </div>
    }
}

const LANDING_CSS: &str = r#"
    :root {
        --bg: #000;
        --surface: #141414;
        --text: #fff;
        --muted: #b3b3b3;
        --accent: #e50914;
    }
    body {
        margin: 0;
        background: var(--bg);
        color: var(--text);
        font-family: "Helvetica Neue", Arial, sans-serif;
    }
    body.light-theme {
        --bg: #f5f5f1;
        --surface: #fff;
        --text: #141414;
        --muted: #555;
    }
    .visually-hidden {
        position: absolute;
        width: 1px;
        height: 1px;
        overflow: hidden;
        clip: rect(0 0 0 0);
    }
    .navbar {
        position: fixed;
        top: 0;
        width: 100%;
        z-index: 100;
        transition: background-color 0.3s ease;
        background: linear-gradient(180deg, rgba(0, 0, 0, 0.7) 10%, transparent);
    }
    .navbar.scrolled {
        background: var(--surface);
        box-shadow: 0 2px 8px rgba(0, 0, 0, 0.4);
    }
    .navbar-inner {
        display: flex;
        justify-content: space-between;
        align-items: center;
        padding: 1rem 4%;
    }
    .nav-logo {
        color: var(--accent);
        font-size: 2rem;
        font-weight: 800;
        text-decoration: none;
        letter-spacing: 0.05em;
    }
    .nav-actions {
        display: flex;
        gap: 1rem;
        align-items: center;
    }
    .theme-toggle {
        cursor: pointer;
        font-size: 1.3rem;
        padding: 0.25rem 0.5rem;
    }
    .sign-in-button {
        background: var(--accent);
        color: #fff;
        padding: 0.4rem 1rem;
        border-radius: 4px;
        text-decoration: none;
    }
    .hero {
        position: relative;
        min-height: 80vh;
        display: flex;
        align-items: center;
        justify-content: center;
        text-align: center;
    }
    .hero-background {
        position: absolute;
        inset: 0;
        background:
            radial-gradient(ellipse at top, rgba(229, 9, 20, 0.35), transparent 60%),
            linear-gradient(160deg, #1f1f1f 0%, #000 70%);
    }
    .hero-overlay {
        position: absolute;
        inset: 0;
        background: rgba(0, 0, 0, 0.6);
    }
    .hero-content {
        position: relative;
        z-index: 1;
        max-width: 900px;
        padding: 0 1rem;
    }
    .hero-title {
        font-size: 3rem;
        color: #fff;
    }
    .hero-subtitle {
        font-size: 1.5rem;
        color: #fff;
    }
    .email-form-row {
        display: flex;
        gap: 0.5rem;
        justify-content: center;
        flex-wrap: wrap;
    }
    .email-form input {
        min-width: 300px;
        padding: 1rem;
        border-radius: 4px;
        border: 1px solid var(--muted);
        background: rgba(0, 0, 0, 0.5);
        color: #fff;
    }
    .cta-button {
        background: var(--accent);
        color: #fff;
        border: none;
        border-radius: 4px;
        padding: 1rem 1.5rem;
        font-size: 1.2rem;
        cursor: pointer;
    }
    .form-message.error { color: #ff6b6b; }
    .form-message.success { color: #46d369; }
    .row {
        padding: 1rem 4%;
    }
    .row-container {
        position: relative;
    }
    .row-posters {
        display: flex;
        gap: 0.5rem;
        overflow-x: auto;
        scroll-behavior: smooth;
        scrollbar-width: none;
    }
    .row-posters::-webkit-scrollbar { display: none; }
    .poster-card {
        position: relative;
        flex: 0 0 auto;
        width: 200px;
        cursor: pointer;
        transition: transform 0.3s ease;
    }
    .poster-card:hover, .poster-card:focus { transform: scale(1.05); }
    .poster-card.ranked { padding-left: 3rem; }
    .rank-number {
        position: absolute;
        left: 0;
        bottom: 0;
        font-size: 5rem;
        font-weight: 900;
        color: var(--bg);
        -webkit-text-stroke: 2px var(--muted);
    }
    .row-poster {
        width: 100%;
        border-radius: 4px;
    }
    .poster-title {
        font-size: 0.9rem;
        color: var(--muted);
        margin-top: 0.25rem;
    }
    .handle {
        position: absolute;
        top: 0;
        bottom: 0;
        z-index: 2;
        width: 3rem;
        border: none;
        background: rgba(0, 0, 0, 0.5);
        color: #fff;
        font-size: 2.5rem;
        cursor: pointer;
    }
    .handle.hidden { display: none; }
    .left-handle { left: 0; }
    .right-handle { right: 0; }
    .faq-section {
        max-width: 900px;
        margin: 4rem auto;
        padding: 0 1rem;
    }
    .faq-question {
        width: 100%;
        display: flex;
        justify-content: space-between;
        padding: 1.5rem;
        margin-top: 0.5rem;
        background: var(--surface);
        color: var(--text);
        border: none;
        font-size: 1.3rem;
        cursor: pointer;
    }
    .faq-answer {
        max-height: 0;
        overflow: hidden;
        background: var(--surface);
        transition: max-height 0.3s ease;
        padding: 0 1.5rem;
    }
    .faq-answer.open {
        max-height: 600px;
        padding: 1rem 1.5rem;
    }
    .modal {
        position: fixed;
        inset: 0;
        z-index: 200;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .modal-backdrop {
        position: absolute;
        inset: 0;
        background: rgba(0, 0, 0, 0.75);
    }
    .modal-content {
        position: relative;
        width: min(850px, 95vw);
        max-height: 90vh;
        overflow-y: auto;
        background: var(--surface);
        border-radius: 8px;
    }
    .modal-close {
        position: absolute;
        top: 1rem;
        right: 1rem;
        z-index: 3;
        border: none;
        border-radius: 50%;
        width: 2.5rem;
        height: 2.5rem;
        background: #181818;
        color: #fff;
        cursor: pointer;
    }
    .modal-banner {
        position: relative;
    }
    .modal-banner img {
        width: 100%;
        display: block;
    }
    .modal-banner-fade {
        position: absolute;
        inset: 0;
        background: linear-gradient(0deg, var(--surface), transparent 60%);
    }
    .modal-title {
        position: absolute;
        left: 2rem;
        bottom: 1rem;
        font-size: 2.2rem;
    }
    .modal-body { padding: 1rem 2rem 2rem; }
    .modal-meta {
        display: flex;
        gap: 1rem;
        color: var(--muted);
    }
    .modal-rating {
        border: 1px solid var(--muted);
        padding: 0 0.4rem;
    }
    .genre-tag {
        display: inline-block;
        margin: 0.75rem 0.5rem 0 0;
        padding: 0.2rem 0.6rem;
        border-radius: 999px;
        background: rgba(229, 9, 20, 0.15);
        color: var(--accent);
        font-size: 0.85rem;
    }
    .credit-label { color: var(--muted); }
    .footer-cta {
        text-align: center;
        padding: 2rem 1rem;
    }
    .site-footer {
        color: var(--muted);
        padding: 2rem 4%;
    }
    .footer-links {
        display: grid;
        grid-template-columns: repeat(auto-fill, minmax(160px, 1fr));
        list-style: none;
        padding: 0;
    }
    .footer-links a { color: var(--muted); }
    @media (max-width: 768px) {
        .hero-title { font-size: 2rem; }
        .email-form input { min-width: 0; width: 100%; }
        .poster-card { width: 140px; }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn stylesheet_only_references_shipped_assets() {
        let crate_root = Path::new(env!("CARGO_MANIFEST_DIR"));
        for reference in LANDING_CSS.split("url(").skip(1) {
            let target = reference
                .split(')')
                .next()
                .unwrap_or_default()
                .trim_matches(|c| c == '"' || c == '\'');
            if let Some(local) = target.strip_prefix('/') {
                assert!(crate_root.join(local).is_file(), "missing asset {}", target);
            }
        }
    }
}
