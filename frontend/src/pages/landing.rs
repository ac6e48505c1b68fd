use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::catalog::{self, Product};
use crate::components::animated_section::AnimatedSection;
use crate::components::contact_form::ContactForm;
use crate::components::lazy_image::LazyImage;
use crate::components::lazy_section::LazySection;
use crate::components::licensing::Licensing;
use crate::components::shared_styles::SharedStyles;
use crate::components::parallax_section::ParallaxSection;
use crate::components::sand_particles::SandParticles;
use crate::components::section_wrapper::SectionWrapper;
use crate::config;
use crate::motion::gate::Direction;
use crate::motion::particles::HoleSpec;
use crate::Route;

/// Clear patch of sand under the headline.
const HERO_HOLE: HoleSpec = HoleSpec { cx: 0.5, cy: 0.85, rx: 0.25, ry: 0.08 };

const PILLARS: &[(&str, &str, Direction)] = &[
    (
        "Assayed and sealed",
        "Every bar ships in tamper-evident packaging with a serial-numbered assay certificate.",
        Direction::Left,
    ),
    (
        "Insured to your door",
        "Full-value transit insurance and signature on delivery, or allocated storage in our vault.",
        Direction::Up,
    ),
    (
        "Buy-back guarantee",
        "We quote a buy-back price on every product we sell, published daily.",
        Direction::Right,
    ),
];

#[derive(Properties, PartialEq)]
struct ProductCardProps {
    product: Product,
}

#[function_component(ProductCard)]
fn product_card(props: &ProductCardProps) -> Html {
    let product = &props.product;
    let (usd, eur) = product.display_prices();
    html! {
        <article class={classes!("product-card", format!("metal-{}", product.metal.label().to_lowercase()))}>
            <LazyImage
                src={config::asset_url(&product.image)}
                alt={product.alt.clone()}
                aspect_ratio="4 / 3"
            />
            <div class="product-body">
                <span class="product-metal">{product.metal.label()}</span>
                <h3>{product.name.clone()}</h3>
                <p class="product-weight">{format!("{:.1} g", product.weight_grams)}</p>
                <p class="product-price">
                    <span class="price-primary">{usd}</span>
                    <span class="price-secondary">{format!("≈ {}", eur)}</span>
                </p>
            </div>
        </article>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();
    html! {
        <footer class="site-footer">
            <p>{format!("© {} Aurum Vault Ltd. All rights reserved.", year)}</p>
            <p class="legal-links">
                <Link<Route> to={Route::Licensing}>{"Licensing & disclosures"}</Link<Route>>
                {" | "}
                <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
            </p>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let products = use_memo(|_| catalog::products(), ());

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

    html! {
        <div class="landing-page">
            <ParallaxSection class="hero" speed={0.4} background={config::asset_url("hero-vault.webp")}>
                <SandParticles hole={Some(HERO_HOLE)} />
                <div class="hero-content">
                    <div class="hero-text">
                        <p class="hero-eyebrow">{"Physical gold, silver and platinum"}</p>
                        <h1>{"Wealth you can hold."}</h1>
                        <p class="hero-subtitle">
                            {"Investment-grade bullion from accredited refiners, delivered insured or stored in our vault."}
                        </p>
                        <div class="hero-cta-group">
                            <a href="#products" class="hero-cta">{"Browse bullion"}</a>
                            <a href="#contact" class="hero-link">{"Talk to a dealer"}</a>
                        </div>
                    </div>
                    <div class="hero-visual">
                        <LazyImage
                            src={config::asset_url("products/gold-bar-1oz.webp")}
                            alt="One ounce gold bar resting on sand"
                            aspect_ratio="3 / 4"
                            priority={true}
                        />
                    </div>
                </div>
            </ParallaxSection>

            <SectionWrapper id="products" eyebrow="Bullion" title="Bars and coins">
                { for products.iter().map(|product| html! {
                    <ProductCard key={product.id.clone()} product={product.clone()} />
                }) }
            </SectionWrapper>
            <p class="price-note">
                {format!(
                    "Indicative prices. Euro amounts use a fixed reference rate of {:.2} EUR per USD.",
                    config::USD_TO_EUR
                )}
            </p>

            <section class="pillars">
                { for PILLARS.iter().enumerate().map(|(index, (title, text, direction))| html! {
                    <AnimatedSection direction={*direction} delay={index as u32 * config::STAGGER_STEP_MS} class="pillar">
                        <h3>{*title}</h3>
                        <p>{*text}</p>
                    </AnimatedSection>
                }) }
            </section>

            <LazySection id="licensing" delay={200} min_height="420px" class="licensing-section">
                <h2>{"Licensing and disclosures"}</h2>
                <Licensing />
            </LazySection>

            <LazySection id="contact" root_margin="100px" min_height="520px" class="contact-section">
                <h2>{"Speak to a dealer"}</h2>
                <p>{"Questions about a purchase, storage or selling back? Send us a note."}</p>
                <ContactForm />
            </LazySection>

            <Footer />

            <SharedStyles />
            <style>
                {r#"
                    .hero {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                    }
                    .hero .parallax-layer {
                        filter: brightness(0.45);
                    }
                    .hero-content {
                        position: relative;
                        z-index: 1;
                        display: grid;
                        grid-template-columns: 1.2fr 1fr;
                        gap: 3rem;
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 8rem 2rem 6rem;
                    }
                    .hero-eyebrow, .section-eyebrow, .product-metal {
                        text-transform: uppercase;
                        letter-spacing: 0.18em;
                        font-size: 0.8rem;
                        color: #d4af37;
                    }
                    .hero h1 {
                        font-size: 3.5rem;
                        line-height: 1.05;
                        margin: 0.5rem 0 1rem;
                    }
                    .hero-subtitle {
                        color: #cfc8b8;
                        font-size: 1.2rem;
                        max-width: 32rem;
                    }
                    .hero-cta-group {
                        display: flex;
                        gap: 1.5rem;
                        align-items: center;
                        margin-top: 2rem;
                    }
                    .hero-cta, .contact-submit {
                        background: linear-gradient(45deg, #b8902f, #e8c766);
                        color: #1a1408;
                        border: none;
                        border-radius: 999px;
                        padding: 0.9rem 2rem;
                        font-weight: 600;
                        text-decoration: none;
                        cursor: pointer;
                    }
                    .hero-link {
                        color: #f4efe3;
                    }
                    .page-section {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 6rem 2rem 2rem;
                    }
                    .section-body {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
                        gap: 2rem;
                    }
                    .product-card {
                        background: #16161a;
                        border: 1px solid rgba(212, 175, 55, 0.15);
                        border-radius: 16px;
                        overflow: hidden;
                    }
                    .product-body {
                        padding: 1.25rem;
                    }
                    .price-primary {
                        font-size: 1.4rem;
                        font-weight: 600;
                        margin-right: 0.75rem;
                    }
                    .price-secondary, .price-note, .product-weight {
                        color: #9d968a;
                    }
                    .price-note {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 2rem;
                        font-size: 0.85rem;
                    }
                    .lazy-image-pending {
                        background: linear-gradient(90deg, #1c1c21, #26262c, #1c1c21);
                    }
                    .lazy-image img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        display: block;
                    }
                    .lazy-image-fallback {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        height: 100%;
                        padding: 1rem;
                        color: #9d968a;
                        text-align: center;
                    }
                    .pillars {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 6rem 2rem;
                    }
                    .contact-section {
                        max-width: 900px;
                        margin: 0 auto;
                        padding: 4rem 2rem;
                    }
                    .contact-form {
                        display: grid;
                        gap: 0.5rem;
                    }
                    .contact-form input, .contact-form textarea {
                        background: #16161a;
                        border: 1px solid rgba(244, 239, 227, 0.2);
                        border-radius: 8px;
                        color: inherit;
                        padding: 0.75rem;
                    }
                    .field-error {
                        color: #ff7b6b;
                        margin: 0;
                        font-size: 0.9rem;
                    }
                    @media (max-width: 768px) {
                        .hero-content, .pillars {
                            grid-template-columns: 1fr;
                        }
                        .hero h1 {
                            font-size: 2.4rem;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
