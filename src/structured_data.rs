//! schema.org JSON-LD for the landing page, so search engines can read the
//! course offer and the FAQ without running the app.

use log::error;
use serde::Serialize;
use yew::prelude::*;

use crate::content::{Faq, FAQS, HERO_SUBTITLE, PRICING};

const SCHEMA_CONTEXT: &str = "https://schema.org";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FaqPage {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    main_entity: Vec<Question>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Question {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    accepted_answer: Answer,
}

#[derive(Serialize)]
struct Answer {
    #[serde(rename = "@type")]
    kind: &'static str,
    text: &'static str,
}

#[derive(Serialize)]
struct Course {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    description: &'static str,
    provider: Organization,
    offers: Offer,
}

#[derive(Serialize)]
struct Organization {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Offer {
    #[serde(rename = "@type")]
    kind: &'static str,
    price: String,
    price_currency: &'static str,
    category: &'static str,
}

/// "$1,999" -> "1999"
fn plain_price(display: &str) -> String {
    display
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}

pub fn faq_page_json() -> serde_json::Result<String> {
    let main_entity = FAQS
        .iter()
        .map(|faq: &Faq| Question {
            kind: "Question",
            name: faq.question,
            accepted_answer: Answer {
                kind: "Answer",
                text: faq.answer,
            },
        })
        .collect();

    serde_json::to_string(&FaqPage {
        context: SCHEMA_CONTEXT,
        kind: "FAQPage",
        main_entity,
    })
}

pub fn course_json() -> serde_json::Result<String> {
    serde_json::to_string(&Course {
        context: SCHEMA_CONTEXT,
        kind: "Course",
        name: PRICING.title,
        description: HERO_SUBTITLE,
        provider: Organization {
            kind: "Organization",
            name: "Web Dev Mastery",
        },
        offers: Offer {
            kind: "Offer",
            price: plain_price(PRICING.price),
            price_currency: "USD",
            category: "Paid",
        },
    })
}

#[function_component(StructuredData)]
pub fn structured_data() -> Html {
    [course_json(), faq_page_json()]
        .into_iter()
        .filter_map(|json| {
            json.map_err(|err| error!("failed to serialize structured data: {}", err))
                .ok()
        })
        .map(|json| html! { <script type="application/ld+json">{ json }</script> })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn price_is_numeric() {
        assert_eq!(plain_price("$1,999"), "1999");
        assert_eq!(plain_price("$49.50"), "49.50");
    }

    #[test]
    fn faq_page_lists_every_question() {
        let value: Value = serde_json::from_str(&faq_page_json().unwrap()).unwrap();
        assert_eq!(value["@type"], "FAQPage");
        let entities = value["mainEntity"].as_array().unwrap();
        assert_eq!(entities.len(), FAQS.len());
        assert_eq!(entities[0]["name"], FAQS[0].question);
        assert_eq!(entities[3]["acceptedAnswer"]["text"], FAQS[3].answer);
    }

    #[test]
    fn course_offer_matches_pricing_card() {
        let value: Value = serde_json::from_str(&course_json().unwrap()).unwrap();
        assert_eq!(value["@context"], "https://schema.org");
        assert_eq!(value["name"], PRICING.title);
        assert_eq!(value["offers"]["price"], "1999");
        assert_eq!(value["offers"]["priceCurrency"], "USD");
    }
}
