use chrono::Datelike;
use yew::prelude::*;

use crate::components::feature_card::FeatureCard;
use crate::components::protocol_card::ProtocolCard;
use crate::config;
use crate::motion::dom;

pub const PHONE_DISPLAY: &str = "0161 555 0142";
pub const PHONE_HREF: &str = "tel:+441615550142";
const EMAIL: &str = "jobs@hartwellheating.co.uk";

fn quote_href() -> String {
    format!(
        "mailto:{}?subject={}",
        EMAIL,
        urlencoding::encode("Quote request: boiler & plumbing")
    )
}

#[function_component(Landing)]
pub fn landing() -> Html {
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

    // Bind scroll motion for the lifetime of this mount; dropping the handle
    // releases every trigger at once.
    {
        use_effect_with_deps(
            move |_| {
                let handle = dom::mount(config::load());
                move || drop(handle)
            },
            (),
        );
    }

    let year = chrono::Local::now().year();

    html! {
        <div class="landing-page">
            <header class="hero">
                <div class="hero-background"></div>
                <div class="hero-content">
                    <p class="hero-badge">{"Gas Safe registered · Manchester & Stockport"}</p>
                    <h1 class="hero-title">
                        <span class="hero-line">{"Warm homes."}</span>
                        <span class="hero-line">{"Honest pipes."}</span>
                        <span class="hero-line accent">{"Fixed first time."}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"Boiler installs, servicing and emergency plumbing from engineers who answer the phone and show up when they said they would."}
                    </p>
                    <div class="hero-cta-group">
                        <a href={PHONE_HREF} class="hero-cta">{"Call an engineer"}</a>
                        <a href={quote_href()} class="hero-secondary">{"Get a free quote"}</a>
                    </div>
                </div>
            </header>

            <section class="features" id="services">
                <h2>{"What we fix"}</h2>
                <div class="features-grid">
                    <FeatureCard
                        icon="🔥"
                        title="Boiler installation"
                        body="A-rated combi and system boilers fitted in a day, with up to ten years of manufacturer warranty."
                    />
                    <FeatureCard
                        icon="🛠️"
                        title="Annual servicing"
                        body="Safety checks, flue analysis and a written report. Keeps your warranty valid and your bills down."
                    />
                    <FeatureCard
                        icon="🚨"
                        title="Emergency call-outs"
                        body="No heat, no hot water or a leak through the ceiling. We aim to be with you within two hours."
                    />
                    <FeatureCard
                        icon="🚿"
                        title="Leaks & bathrooms"
                        body="From a dripping tap to a full bathroom refit, priced up front with no surprises."
                    />
                </div>
            </section>

            <section class="philosophy">
                <p class="philosophy-line">{"We quote before we pick up a spanner."}</p>
                <p class="philosophy-line">{"We turn up in the slot we booked."}</p>
                <p class="philosophy-line">{"We leave the place cleaner than we found it."}</p>
                <p class="philosophy-line accent">{"And we stand behind every joint for two years."}</p>
            </section>

            <section class="protocol" id="how-we-work">
                <h2 class="protocol-heading">{"How we work"}</h2>
                <ProtocolCard
                    step={1}
                    title="Survey"
                    body="An engineer looks at the job, tests the system and explains what is actually wrong."
                    points={vec![
                        AttrValue::from("Fixed call-out fee, deducted if you go ahead"),
                        AttrValue::from("Written quote before any work starts"),
                    ]}
                />
                <ProtocolCard
                    step={2}
                    title="Repair"
                    body="We carry common parts on the van, so most repairs are finished on the first visit."
                    points={vec![
                        AttrValue::from("Dust sheets down, floors protected"),
                        AttrValue::from("Old parts shown to you and taken away"),
                    ]}
                />
                <ProtocolCard
                    step={3}
                    title="Guarantee"
                    body="Every job is signed off, registered where required, and covered by our two-year workmanship guarantee."
                    points={vec![
                        AttrValue::from("Gas Safe and Building Control certificates"),
                        AttrValue::from("Service reminder a year later"),
                    ]}
                />
            </section>

            <section class="cta" id="contact">
                <h2>{"Cold radiators? Dripping tap?"}</h2>
                <p>{"Tell us what is going on and we will give you a time slot and a price today."}</p>
                <div class="hero-cta-group">
                    <a href={PHONE_HREF} class="hero-cta">{format!("Call {}", PHONE_DISPLAY)}</a>
                    <a href={quote_href()} class="hero-secondary">{"Email for a quote"}</a>
                </div>
            </section>

            <footer class="site-footer">
                <p>{format!("© {} Hartwell Heating & Plumbing Ltd", year)}</p>
                <p class="disclaimer">{"Gas Safe Register no. 512384 · Fully insured · Prices include VAT"}</p>
            </footer>

            <style>
                {r#"
                :root {
                    --ink: #e8edf4;
                    --muted: #9aa7b8;
                    --flame: #ff7a3d;
                    --panel: #141c28;
                }

                .landing-page {
                    min-height: 100vh;
                    background: #0c121c;
                    color: var(--ink);
                    overflow-x: hidden;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }

                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    border-bottom: 1px solid transparent;
                }

                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1rem 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-logo {
                    color: var(--ink);
                    font-weight: 700;
                    font-size: 1.2rem;
                    text-decoration: none;
                }

                .nav-logo-accent {
                    color: var(--muted);
                    font-weight: 400;
                }

                .nav-right {
                    display: flex;
                    gap: 1.5rem;
                    align-items: center;
                }

                .nav-link {
                    color: var(--muted);
                    text-decoration: none;
                }

                .nav-link:hover {
                    color: var(--ink);
                }

                .nav-call-button {
                    padding: 0.5rem 1rem;
                    border-radius: 8px;
                    background: var(--flame);
                    color: #0c121c;
                    font-weight: 600;
                    text-decoration: none;
                }

                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }

                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: var(--ink);
                }

                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 6rem 2rem 4rem;
                }

                .hero-background {
                    position: absolute;
                    inset: 0;
                    background: radial-gradient(circle at 70% 30%, rgba(255, 122, 61, 0.25), transparent 60%);
                    pointer-events: none;
                }

                .hero-content {
                    position: relative;
                    max-width: 900px;
                    text-align: center;
                }

                .hero-badge {
                    color: var(--muted);
                    letter-spacing: 0.08em;
                    text-transform: uppercase;
                    font-size: 0.8rem;
                }

                .hero-title {
                    display: flex;
                    flex-direction: column;
                    margin: 1.5rem 0;
                }

                .hero-line {
                    display: block;
                    font-size: 4.5rem;
                    font-weight: 800;
                    line-height: 1.05;
                }

                .accent {
                    color: var(--flame);
                }

                .hero-subtitle {
                    color: var(--muted);
                    font-size: 1.2rem;
                    line-height: 1.6;
                    max-width: 640px;
                    margin: 0 auto 2rem;
                }

                .hero-cta-group {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    flex-wrap: wrap;
                }

                .hero-cta {
                    padding: 1rem 2rem;
                    border-radius: 8px;
                    background: var(--flame);
                    color: #0c121c;
                    font-weight: 700;
                    text-decoration: none;
                    transition: transform 0.3s ease;
                }

                .hero-cta:hover {
                    transform: translateY(-2px);
                }

                .hero-secondary {
                    padding: 1rem 2rem;
                    border-radius: 8px;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    color: var(--ink);
                    text-decoration: none;
                }

                .features {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 6rem 2rem;
                }

                .features h2,
                .protocol-heading,
                .cta h2 {
                    font-size: 2.5rem;
                    text-align: center;
                    margin-bottom: 3rem;
                }

                .features-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 1.5rem;
                }

                .feature-card {
                    background: var(--panel);
                    border: 1px solid rgba(255, 255, 255, 0.06);
                    border-radius: 16px;
                    padding: 2rem;
                }

                .feature-icon {
                    font-size: 2rem;
                    margin-bottom: 1rem;
                }

                .feature-card p {
                    color: var(--muted);
                    line-height: 1.6;
                }

                .philosophy {
                    max-width: 900px;
                    margin: 0 auto;
                    padding: 6rem 2rem;
                }

                .philosophy-line {
                    font-size: 2.2rem;
                    font-weight: 700;
                    line-height: 1.3;
                    margin: 0 0 1.5rem;
                }

                .protocol {
                    position: relative;
                }

                .protocol-card {
                    position: relative;
                    height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 2rem;
                    background: #0c121c;
                    transform-origin: center top;
                    will-change: transform, opacity, filter;
                }

                .protocol-inner {
                    max-width: 720px;
                    width: 100%;
                    background: var(--panel);
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    border-radius: 24px;
                    padding: 3rem;
                }

                .protocol-step {
                    color: var(--flame);
                    font-size: 1rem;
                    font-weight: 700;
                    letter-spacing: 0.1em;
                }

                .protocol-inner h3 {
                    font-size: 2.5rem;
                    margin: 0.5rem 0 1rem;
                }

                .protocol-inner p,
                .protocol-points {
                    color: var(--muted);
                    line-height: 1.6;
                }

                .cta {
                    position: relative;
                    z-index: 10;
                    background: #0c121c;
                    text-align: center;
                    padding: 8rem 2rem;
                }

                .cta p {
                    color: var(--muted);
                    margin-bottom: 2rem;
                }

                .site-footer {
                    position: relative;
                    z-index: 10;
                    background: #0c121c;
                    border-top: 1px solid rgba(255, 255, 255, 0.06);
                    text-align: center;
                    padding: 2rem;
                    color: var(--muted);
                }

                .disclaimer {
                    font-size: 0.85rem;
                }

                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }

                    .nav-right {
                        display: none;
                    }

                    .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        padding: 1rem 2rem;
                        background: #0c121c;
                    }

                    .hero-line {
                        font-size: 3rem;
                    }

                    .philosophy-line {
                        font-size: 1.6rem;
                    }

                    .protocol-inner {
                        padding: 2rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
