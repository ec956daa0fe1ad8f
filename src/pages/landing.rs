use log::{info, warn};
use yew::prelude::*;
use yew::virtual_dom::AttrValue;

use crate::components::lead_form::LeadForm;
use crate::components::nav::{scroll_to_section, Nav};
use crate::config::MotionConfig;
use crate::motion::context::AnimationContext;
use crate::pages::scenes::landing_timelines;

pub const BRAND: &str = "Tucson Impact Ledger";
const HERO_IMAGE: &str = "hero-city.jpg";

#[derive(Properties, PartialEq)]
struct PinnedProps {
    id: AttrValue,
    class: AttrValue,
    spacer_height_vh: f64,
    children: Children,
}

/// Scroll spacer holding a full-screen sticky section for the pin's scroll distance.
#[function_component(Pinned)]
fn pinned(props: &PinnedProps) -> Html {
    html! {
        <div id={props.id.clone()} class="pin-spacer" style={format!("height: {}vh;", props.spacer_height_vh)}>
            <section class={classes!("pinned-section", props.class.to_string())}>
                <div class="section-bg">
                    <img src={HERO_IMAGE} alt="" />
                    <div class="section-shade"></div>
                </div>
                { for props.children.iter() }
            </section>
        </div>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let config = use_memo(|_| MotionConfig::default(), ());

    // Scroll to top only on initial mount, then build the motion context for this view.
    {
        let config = config.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                let context = match AnimationContext::setup(landing_timelines(&config), (*config).clone()) {
                    Ok(context) => Some(context),
                    Err(e) => {
                        warn!("Animations disabled, rendering static page: {}", e);
                        None
                    }
                };
                move || {
                    if let Some(context) = context {
                        context.revert();
                    }
                }
            },
            (),
        );
    }

    let request_access = Callback::from(|_: MouseEvent| scroll_to_section("join"));
    let spacer = config.spacer_height_vh();

    info!("Rendering landing page");
    html! {
        <div class="landing-page">
            <style>{ LANDING_CSS }</style>
            <div class="grain-overlay"></div>
            <Nav brand={BRAND} />

            <div id="hero" class="pin-spacer" style={format!("height: {}vh;", spacer)}>
                <section class="pinned-section hero-section">
                    <div class="hero-bg">
                        <img src={HERO_IMAGE} alt="Tucson skyline" />
                        <div class="section-shade"></div>
                    </div>
                    <div class="hero-content">
                        <div class="hero-headline-group">
                            <h1>
                                <span class="hero-headline-1">{"Keep Tucson"}</span>
                                <span class="hero-headline-2">{"thriving."}</span>
                            </h1>
                        </div>
                        <p class="hero-subheadline">
                            {"Track your spending at local Old Pueblo businesses and watch your community impact grow."}
                        </p>
                        <button class="hero-cta cta-button" onclick={request_access}>
                            {"Request early access"}
                        </button>
                    </div>
                    <div class="hero-scroll-hint">
                        <span>{"Scroll to explore"}</span>
                    </div>
                </section>
            </div>

            <Pinned id="problem" class="problem-section" spacer_height_vh={spacer}>
                <div class="card-row">
                    <div class="card problem-card-left">
                        <div class="problem-card-content">
                            <span class="card-label">{"Local"}</span>
                            <h2 class="card-figure">{"~68¢"}</h2>
                            <p>{"stays in Tucson"}</p>
                        </div>
                        <p class="problem-card-content">
                            {"Shop at Time Market, Exo Roast, or Antigone Books—wages, supplies, and taxes recirculate locally."}
                        </p>
                        <div class="card-icon problem-card-content">{"🔄"}</div>
                    </div>
                    <div class="card problem-card-right">
                        <div class="problem-card-content">
                            <span class="card-label">{"Outside"}</span>
                            <h2 class="card-figure">{"~32¢"}</h2>
                            <p>{"leaks to outside chains"}</p>
                        </div>
                        <p class="problem-card-content">
                            {"Big-box spending leaves Tucson through distant corporate supply chains."}
                        </p>
                        <div class="card-icon problem-card-content">{"↗"}</div>
                    </div>
                </div>
            </Pinned>

            <Pinned id="solution" class="solution-section" spacer_height_vh={spacer}>
                <div class="card solution-card">
                    <span class="card-label">{"Multiplier Effect"}</span>
                    <h2 class="solution-headline">{"Your dollars work harder in Tucson."}</h2>
                    <p class="solution-subheadline">
                        {"Money spent on 4th Avenue, Congress Street, and Main Gate recirculates 2–3x through local wages and taxes."}
                    </p>
                    <div class="card-icon">{"📈"}</div>
                </div>
            </Pinned>

            <Pinned id="feature" class="feature-section" spacer_height_vh={spacer}>
                <div class="card feature-card">
                    <span class="card-label">{"Dashboard"}</span>
                    <h2 class="feature-headline">{"Track. Categorize. Improve."}</h2>
                    <p class="feature-body">
                        {"Connect accounts securely. Tag purchases as Tucson Local / Chain / Unknown. Set a monthly target—and watch your Old Pueblo impact grow."}
                    </p>
                    <div class="card-icon">{"✅"}</div>
                </div>
            </Pinned>

            <Pinned id="collective" class="collective-section" spacer_height_vh={spacer}>
                <div class="card-row">
                    <div class="card collective-card-left">
                        <span class="card-label">{"Collective Goal"}</span>
                        <h2>{"Old Pueblo goals."}</h2>
                        <p>
                            {"When 50 Tucsonans shift just $50 to local businesses, we can fund a mural in Barrio Viejo or support Tucson Meet Yourself."}
                        </p>
                        <div class="card-icon">{"👥"}</div>
                    </div>
                    <div class="card collective-card-right">
                        <span class="card-label">{"This Quarter"}</span>
                        <h2 class="card-figure">{"$48,200"}</h2>
                        <p>{"shifted to Tucson businesses"}</p>
                        <div class="progress-track">
                            <div class="collective-progress" style="width: 72%; transform-origin: left;"></div>
                        </div>
                        <p class="progress-note">{"72% toward our next Tucson project"}</p>
                        <div class="card-icon">{"🎯"}</div>
                    </div>
                </div>
            </Pinned>

            <Pinned id="story" class="story-section" spacer_height_vh={spacer}>
                <div class="card story-card">
                    <span class="card-label story-content">{"Impact Narrative"}</span>
                    <h2 class="story-content">{"Your Tucson impact story."}</h2>
                    <p class="story-content">
                        {"Get a clear monthly story: how many hours of Tucson wages your spending supported—and what that means for your neighborhood."}
                    </p>
                    <div class="card-icon story-content">{"📄"}</div>
                </div>
            </Pinned>

            <section id="join" class="join-section">
                <div class="join-main">
                    <div class="join-headline">
                        <h2>{"Be part of the ledger."}</h2>
                        <p>{"Early access + community updates. No spam."}</p>
                    </div>
                    <div class="join-form-card">
                        <LeadForm />
                    </div>
                </div>

                <div class="how-it-works-section">
                    <h3>{"How it works"}</h3>
                    <div class="how-it-works-grid">
                        <div class="how-it-works-card">
                            <div class="card-icon">{"👛"}</div>
                            <h4>{"Connect accounts securely."}</h4>
                            <p>{"Link your bank accounts with bank-level encryption and security."}</p>
                        </div>
                        <div class="how-it-works-card">
                            <div class="card-icon">{"🏷"}</div>
                            <h4>{"Tag spending in seconds."}</h4>
                            <p>{"Categorize purchases as Local, Chain, or Unknown with one tap."}</p>
                        </div>
                        <div class="how-it-works-card">
                            <div class="card-icon">{"🏅"}</div>
                            <h4>{"See Tucson wins."}</h4>
                            <p>{"Watch Tucson's collective impact grow and celebrate community milestones."}</p>
                        </div>
                    </div>
                </div>

                <footer class="landing-footer">
                    <div class="footer-brand">{ BRAND }</div>
                    <div class="footer-links">
                        <button>{"Privacy"}</button>
                        <button>{"Terms"}</button>
                        <button>{"Contact"}</button>
                    </div>
                    <p>{"© Tucson Impact Ledger · Made with ❤️ in the Old Pueblo"}</p>
                </footer>
            </section>
        </div>
    }
}

const LANDING_CSS: &str = r#"
:root {
    --charcoal: #141414;
    --paper: #f3efe6;
    --text-secondary: #b9b3a6;
    --accent: #d9643a;
}
body { margin: 0; background: var(--charcoal); color: var(--paper); font-family: "Inter", -apple-system, sans-serif; }
.landing-page { position: relative; overflow-x: hidden; }
.grain-overlay { position: fixed; inset: 0; pointer-events: none; opacity: 0.06; z-index: 60;
    background-image: radial-gradient(rgba(255,255,255,0.4) 1px, transparent 1px); background-size: 3px 3px; }

.top-nav { position: fixed; top: 0; left: 0; width: 100%; z-index: 50; box-sizing: border-box;
    padding: 24px 4vw; display: flex; align-items: center; justify-content: space-between; }
.nav-brand { font-weight: 700; font-size: 1.25rem; letter-spacing: -0.01em; }
.nav-links { display: flex; gap: 32px; }
.nav-link, .mobile-menu-link, .footer-links button { background: none; border: none; cursor: pointer;
    color: var(--text-secondary); font-size: 0.875rem; font-weight: 500; }
.nav-link:hover { color: var(--paper); }
.burger-menu { display: none; background: none; border: none; color: var(--paper); font-size: 24px; cursor: pointer; }
.mobile-menu { position: fixed; inset: 0; z-index: 40; background: var(--charcoal);
    display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 32px; }
.mobile-menu-link { color: var(--paper); font-size: 1.5rem; font-weight: 700; }
@media (max-width: 768px) {
    .nav-links { display: none; }
    .burger-menu { display: block; }
    .card-row { flex-direction: column; }
}

.pin-spacer { position: relative; }
.pinned-section { position: sticky; top: 0; height: 100vh; overflow: hidden;
    display: flex; align-items: center; justify-content: center; }
.section-bg, .hero-bg { position: absolute; inset: 0; }
.section-bg img, .hero-bg img { width: 100%; height: 100%; object-fit: cover; }
.section-shade { position: absolute; inset: 0; background: rgba(20,20,20,0.72); }

.hero-content { position: relative; z-index: 2; padding: 0 4vw; max-width: 900px; }
.hero-headline-group h1 { font-size: clamp(3rem, 8vw, 7rem); line-height: 0.95; margin: 0 0 24px; }
.hero-headline-1, .hero-headline-2 { display: block; }
.hero-subheadline { color: var(--text-secondary); font-size: 1.125rem; max-width: 560px; }
.hero-scroll-hint { position: absolute; bottom: 32px; left: 0; right: 0; text-align: center;
    z-index: 2; font-size: 0.75rem; letter-spacing: 0.2em; text-transform: uppercase; }

.card-row { position: relative; z-index: 2; display: flex; gap: 4vw; padding: 0 6vw; width: 100%; box-sizing: border-box; }
.card { position: relative; z-index: 2; flex: 1; background: var(--paper); color: var(--charcoal);
    border-radius: 28px; padding: 40px; max-width: 640px; box-shadow: 0 24px 60px rgba(0,0,0,0.35); }
.card-label { font-size: 0.75rem; text-transform: uppercase; letter-spacing: 0.18em; color: var(--accent); }
.card-figure { font-size: 3.5rem; margin: 12px 0 4px; }
.card-icon { font-size: 24px; margin-top: 24px; }
.progress-track { height: 8px; border-radius: 4px; background: rgba(20,20,20,0.12); margin-top: 20px; }
.collective-progress { height: 100%; border-radius: 4px; background: var(--accent); }
.progress-note { font-size: 0.8rem; opacity: 0.7; }

.cta-button, .cta-button-paper { border: none; border-radius: 999px; padding: 14px 28px; cursor: pointer;
    font-weight: 600; background: var(--accent); color: var(--paper); }
.cta-button-paper { background: var(--paper); color: var(--charcoal); margin-top: 32px; }

.join-section { position: relative; background: var(--paper); color: var(--charcoal); padding: 120px 6vw 48px; }
.join-main { display: flex; flex-wrap: wrap; gap: 6vw; align-items: flex-start; }
.join-headline { flex: 1 1 320px; }
.join-headline h2 { font-size: clamp(2.5rem, 5vw, 4.5rem); margin: 0 0 16px; }
.join-form-card { flex: 1 1 360px; background: #fff; border-radius: 28px; padding: 40px; box-shadow: 0 24px 60px rgba(0,0,0,0.12); }
.lead-form { display: flex; flex-direction: column; gap: 18px; }
.lead-form label { display: block; font-size: 0.75rem; text-transform: uppercase; letter-spacing: 0.12em; margin-bottom: 6px; }
.lead-form input { width: 100%; box-sizing: border-box; padding: 12px 14px; border-radius: 12px; border: 1px solid rgba(20,20,20,0.2); }
.form-note { font-size: 0.75rem; opacity: 0.6; }
.form-confirmation { text-align: center; }
.confirmation-icon { font-size: 32px; }

.how-it-works-section { margin-top: 120px; }
.how-it-works-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 24px; }
.how-it-works-card { background: #fff; border-radius: 24px; padding: 32px; }
.landing-footer { margin-top: 120px; padding-top: 32px; border-top: 1px solid rgba(20,20,20,0.1);
    display: flex; flex-wrap: wrap; gap: 16px; justify-content: space-between; align-items: center; font-size: 0.85rem; }
.footer-brand { font-weight: 700; }
.footer-links button { color: var(--charcoal); }
"#;
