use yew::prelude::*;

use crate::animation::{self, RevealTrigger};
use crate::components::accordion::{Accordion, AccordionItem};
use crate::components::button::{Button, ButtonSize};
use crate::components::card::{
    Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
};
use crate::components::footer::Footer;
use crate::components::nav::Nav;
use crate::components::reveal::Reveal;
use crate::content::{self, FAQS, FEATURES, PRICING, TESTIMONIALS};
use crate::structured_data::StructuredData;

#[derive(Properties, PartialEq)]
struct SectionHeadingProps {
    #[prop_or_default]
    class: Classes,
    children: Children,
}

/// Section title that fades up the first time it scrolls into view.
///
/// Headings below the fold would otherwise finish their mount animation
/// before anyone sees them, so they wait for the viewport instead.
#[function_component(SectionHeading)]
fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <Reveal transition={animation::fade_in()} trigger={RevealTrigger::InView}>
            <h2 class={classes!("section-title", props.class.clone())}>
                { for props.children.iter() }
            </h2>
        </Reveal>
    }
}

fn hero() -> Html {
    html! {
        <section class="hero">
            <div class="container text-center">
                <Reveal transition={animation::hero_title()}>
                    <h1 class="hero-title">{ content::HERO_TITLE }</h1>
                </Reveal>
                <Reveal transition={animation::hero_subtitle()}>
                    <p class="hero-subtitle">{ content::HERO_SUBTITLE }</p>
                </Reveal>
                <Reveal transition={animation::hero_call_to_action()}>
                    <Button size={ButtonSize::Large} class="btn-hero">
                        {"Enroll Now - Limited Spots Available!"}
                    </Button>
                </Reveal>
            </div>
        </section>
    }
}

fn features() -> Html {
    html! {
        <section id="features" class="section">
            <div class="container">
                <SectionHeading>{"What You'll Learn"}</SectionHeading>
                <div class="grid grid-3">
                    { for FEATURES.iter().enumerate().map(|(index, feature)| html! {
                        <Reveal key={index} transition={animation::feature_card(index)} class="feature-card">
                            <Card>
                                <CardHeader>
                                    <CardTitle>{ feature.title }</CardTitle>
                                </CardHeader>
                                <CardContent>
                                    <p>{ feature.description }</p>
                                </CardContent>
                            </Card>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

fn testimonials() -> Html {
    html! {
        <section id="testimonials" class="section section-muted">
            <div class="container">
                <SectionHeading>{"What Our Students Say"}</SectionHeading>
                <div class="grid grid-2">
                    { for TESTIMONIALS.iter().enumerate().map(|(index, testimonial)| html! {
                        <Reveal key={index} transition={animation::testimonial(index)} class="testimonial">
                            <Card>
                                <CardContent class="testimonial-body">
                                    <p class="testimonial-quote">{ format!("\"{}\"", testimonial.quote) }</p>
                                    <p class="testimonial-name">{ format!("- {}", testimonial.name) }</p>
                                </CardContent>
                            </Card>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

fn pricing() -> Html {
    html! {
        <section id="pricing" class="section">
            <div class="container text-center">
                <SectionHeading>{"Invest in Your Future"}</SectionHeading>
                <Reveal transition={animation::pricing_card()}>
                    <Card class="pricing-card">
                        <CardHeader>
                            <CardTitle class="pricing-title">{ PRICING.title }</CardTitle>
                            <CardDescription>{ PRICING.subtitle }</CardDescription>
                        </CardHeader>
                        <CardContent>
                            <p class="pricing-price">{ PRICING.price }</p>
                            <ul class="pricing-bullets">
                                { for PRICING.bullets.iter().map(|bullet| html! {
                                    <li>{ format!("✅ {}", bullet) }</li>
                                }) }
                            </ul>
                        </CardContent>
                        <CardFooter>
                            <Button size={ButtonSize::Large} class="btn-block">
                                { PRICING.call_to_action }
                            </Button>
                        </CardFooter>
                    </Card>
                </Reveal>
            </div>
        </section>
    }
}

fn faq() -> Html {
    html! {
        <section id="faq" class="section section-muted">
            <div class="container">
                <SectionHeading>{"Frequently Asked Questions"}</SectionHeading>
                <Accordion class="faq-accordion">
                    { for FAQS.iter().enumerate().map(|(index, faq)| html! {
                        <Reveal key={index} transition={animation::faq_entry(index)}>
                            <AccordionItem value={content::faq_item_id(index)} trigger={faq.question}>
                                <p>{ faq.answer }</p>
                            </AccordionItem>
                        </Reveal>
                    }) }
                </Accordion>
            </div>
        </section>
    }
}

fn closing_call() -> Html {
    html! {
        <section class="section">
            <div class="container text-center">
                <SectionHeading class="closing-title">
                    {"Ready to Start Your Web Development Journey?"}
                </SectionHeading>
                <Reveal transition={animation::closing_text()}>
                    <p class="closing-text">
                        {"Join thousands of successful graduates and transform your career today!"}
                    </p>
                </Reveal>
                <Reveal transition={animation::closing_call_to_action()}>
                    <Button size={ButtonSize::Large} class="btn-hero">
                        {"Enroll Now and Save 20% - Limited Time Offer!"}
                    </Button>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    html! {
        <div class="landing-page">
            <StructuredData />
            <Nav />
            { hero() }
            { features() }
            { testimonials() }
            { pricing() }
            { faq() }
            { closing_call() }
            <Footer />

            <style>
                {r#"
                :root {
                    --primary: #18181b;
                    --primary-foreground: #fafafa;
                    --background: #ffffff;
                    --foreground: #09090b;
                    --muted: #f4f4f5;
                    --muted-foreground: #71717a;
                    --border: #e4e4e7;
                }

                .landing-page {
                    min-height: 100vh;
                    background: var(--background);
                    color: var(--foreground);
                    font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
                }

                .container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1rem;
                }

                .text-center {
                    text-align: center;
                }

                .site-nav {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 50;
                    transition: all 0.3s ease;
                }

                .site-nav--transparent {
                    background: transparent;
                }

                .site-nav--translucent {
                    background: rgba(255, 255, 255, 0.95);
                }

                @supports (backdrop-filter: blur(8px)) {
                    .site-nav--translucent {
                        background: rgba(255, 255, 255, 0.6);
                        backdrop-filter: blur(8px);
                    }
                }

                .nav-content {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    height: 4rem;
                }

                .nav-brand {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: var(--primary);
                    text-decoration: none;
                }

                .nav-links {
                    display: flex;
                    gap: 1rem;
                }

                .nav-link {
                    color: var(--muted-foreground);
                    text-decoration: none;
                }

                .nav-link:hover {
                    color: var(--primary);
                }

                .btn.burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                }

                .burger-menu span {
                    display: block;
                    width: 1.25rem;
                    height: 2px;
                    background: var(--primary);
                }

                .sheet-overlay {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.5);
                    z-index: 60;
                }

                .sheet {
                    position: fixed;
                    top: 0;
                    bottom: 0;
                    right: 0;
                    width: 75%;
                    max-width: 20rem;
                    padding: 2rem 1.5rem;
                    background: var(--background);
                    z-index: 70;
                    box-shadow: -8px 0 32px rgba(0, 0, 0, 0.15);
                }

                .sheet-links {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .btn {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 0.375rem;
                    padding: 0.5rem 1rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                    cursor: pointer;
                    border: 1px solid transparent;
                    transition: opacity 0.2s ease;
                }

                .btn:hover {
                    opacity: 0.9;
                }

                .btn-primary {
                    background: var(--primary);
                    color: var(--primary-foreground);
                }

                .hero .btn-primary {
                    background: var(--primary-foreground);
                    color: var(--primary);
                }

                .btn-outline {
                    background: var(--background);
                    border-color: var(--border);
                }

                .btn-lg {
                    padding: 0.75rem 2rem;
                    font-size: 1rem;
                }

                .btn-icon {
                    width: 2.5rem;
                    height: 2.5rem;
                    padding: 0;
                }

                .btn-hero {
                    font-size: 1.125rem;
                    padding: 1.5rem 2rem;
                }

                .btn-block {
                    width: 100%;
                }

                .hero {
                    background: var(--primary);
                    color: var(--primary-foreground);
                    padding: 8rem 0 5rem;
                }

                .hero-title {
                    font-size: 3.75rem;
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                }

                .hero-subtitle {
                    font-size: 1.5rem;
                    margin-bottom: 2rem;
                }

                .section {
                    padding: 5rem 0;
                }

                .section-muted {
                    background: var(--muted);
                }

                .section-title {
                    font-size: 1.875rem;
                    font-weight: 700;
                    text-align: center;
                    margin-bottom: 3rem;
                }

                .closing-title {
                    margin-bottom: 1.5rem;
                }

                .closing-text {
                    font-size: 1.25rem;
                    margin-bottom: 2rem;
                }

                .grid {
                    display: grid;
                    gap: 2rem;
                }

                .grid-2 {
                    grid-template-columns: repeat(2, minmax(0, 1fr));
                }

                .grid-3 {
                    grid-template-columns: repeat(3, minmax(0, 1fr));
                }

                .card {
                    background: var(--background);
                    border: 1px solid var(--border);
                    border-radius: 0.75rem;
                    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.08);
                    height: 100%;
                }

                .card-header {
                    padding: 1.5rem 1.5rem 0;
                }

                .card-title {
                    font-size: 1.25rem;
                    font-weight: 600;
                    margin: 0 0 0.5rem;
                }

                .card-description {
                    color: var(--muted-foreground);
                    margin: 0;
                }

                .card-content {
                    padding: 1.5rem;
                }

                .card-footer {
                    padding: 0 1.5rem 1.5rem;
                }

                .testimonial-quote {
                    font-style: italic;
                    margin-bottom: 1rem;
                }

                .testimonial-name {
                    font-weight: 600;
                }

                .pricing-card {
                    max-width: 28rem;
                    margin: 0 auto;
                }

                .pricing-title {
                    font-size: 1.5rem;
                }

                .pricing-price {
                    font-size: 2.25rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }

                .pricing-bullets {
                    list-style: none;
                    text-align: left;
                    padding: 0;
                    margin: 0 0 1.5rem;
                }

                .pricing-bullets li {
                    padding: 0.25rem 0;
                }

                .faq-accordion {
                    max-width: 42rem;
                    margin: 0 auto;
                }

                .accordion-item {
                    border-bottom: 1px solid var(--border);
                }

                .accordion-trigger {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1rem 0;
                    background: none;
                    border: none;
                    font-size: 1rem;
                    font-weight: 500;
                    text-align: left;
                    cursor: pointer;
                }

                .accordion-trigger:hover .question-text {
                    text-decoration: underline;
                }

                .toggle-icon {
                    transition: transform 0.2s ease;
                }

                .accordion-item.open .toggle-icon {
                    transform: rotate(180deg);
                }

                .accordion-content {
                    padding-bottom: 1rem;
                    color: var(--muted-foreground);
                    line-height: 1.6;
                }

                .site-footer {
                    background: var(--muted);
                    padding: 1.5rem 0;
                }

                .footer-links {
                    margin-top: 0.5rem;
                    display: flex;
                    justify-content: center;
                    gap: 1rem;
                }

                .footer-link {
                    color: var(--primary);
                    text-decoration: none;
                }

                .footer-link:hover {
                    text-decoration: underline;
                }

                @media (max-width: 1024px) {
                    .grid-3 {
                        grid-template-columns: repeat(2, minmax(0, 1fr));
                    }
                }

                @media (max-width: 768px) {
                    .nav-links,
                    .nav-cta {
                        display: none;
                    }

                    .btn.burger-menu {
                        display: inline-flex;
                    }

                    .hero-title {
                        font-size: 2.25rem;
                    }

                    .hero-subtitle {
                        font-size: 1.25rem;
                    }

                    .grid-2,
                    .grid-3 {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
