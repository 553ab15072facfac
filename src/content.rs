//! Static copy for the landing page. Everything here is compiled in and
//! rendered in declaration order.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub quote: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingPlan {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub price: &'static str,
    pub bullets: [&'static str; 5],
    pub call_to_action: &'static str,
}

pub const HERO_TITLE: &str = "Master Web Development in 12 Weeks";
pub const HERO_SUBTITLE: &str =
    "Learn to build modern, responsive websites and web applications from scratch";

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { label: "Features", href: "#features" },
    NavLink { label: "Testimonials", href: "#testimonials" },
    NavLink { label: "Pricing", href: "#pricing" },
    NavLink { label: "FAQ", href: "#faq" },
];

pub const FEATURES: [Feature; 6] = [
    Feature {
        title: "HTML5 & CSS3",
        description: "Build the structure and style of modern websites",
    },
    Feature {
        title: "JavaScript & ES6+",
        description: "Create interactive and dynamic web applications",
    },
    Feature {
        title: "React & Next.js",
        description: "Develop powerful, scalable front-end applications",
    },
    Feature {
        title: "Node.js & Express",
        description: "Build robust back-end services and APIs",
    },
    Feature {
        title: "Database & ORM",
        description: "Work with databases using modern ORM tools",
    },
    Feature {
        title: "Deployment & DevOps",
        description: "Deploy and manage your applications in the cloud",
    },
];

pub const TESTIMONIALS: [Testimonial; 2] = [
    Testimonial {
        name: "Sarah L.",
        quote: "This course completely transformed my career. I went from a complete beginner to landing a job as a junior developer in just 6 months!",
    },
    Testimonial {
        name: "Michael R.",
        quote: "The instructors are top-notch, and the curriculum is constantly updated with the latest industry trends. Highly recommended!",
    },
];

pub const PRICING: PricingPlan = PricingPlan {
    title: "Full Web Development Course",
    subtitle: "12 Weeks of Intensive Training",
    price: "$1,999",
    bullets: [
        "60+ hours of video content",
        "12 weekly live Q&A sessions",
        "Personal mentor support",
        "Real-world projects for your portfolio",
        "Job placement assistance",
    ],
    call_to_action: "Enroll Now",
};

pub const FAQS: [Faq; 4] = [
    Faq {
        question: "Is this course suitable for beginners?",
        answer: "Our course is designed to take you from zero to hero, no prior experience required. We start with the basics and gradually build up to more advanced concepts, ensuring that even complete beginners can follow along and succeed.",
    },
    Faq {
        question: "How much time do I need to dedicate per week?",
        answer: "We recommend setting aside 15-20 hours per week for the best results. This includes time for watching video lessons, completing exercises, working on projects, and attending live Q&A sessions. However, the course is flexible, and you can adjust your pace based on your schedule and learning style.",
    },
    Faq {
        question: "Is there a money-back guarantee?",
        answer: "Yes, we offer a 14-day money-back guarantee. If you're not satisfied with the course content or find that it's not the right fit for you, you can request a full refund within the first 14 days of your enrollment. No questions asked!",
    },
    Faq {
        question: "Will I receive a certificate upon completion?",
        answer: "Yes, you'll receive a certificate of completion that you can share with potential employers or on your LinkedIn profile. This certificate demonstrates your commitment to learning and the skills you've acquired throughout the course.",
    },
];

/// Stable accordion value for the FAQ entry at `index`.
pub fn faq_item_id(index: usize) -> String {
    format!("item-{}", index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn features_keep_declaration_order() {
        let titles: Vec<&str> = FEATURES.iter().map(|f| f.title).collect();
        assert_eq!(
            titles,
            [
                "HTML5 & CSS3",
                "JavaScript & ES6+",
                "React & Next.js",
                "Node.js & Express",
                "Database & ORM",
                "Deployment & DevOps",
            ]
        );
    }

    #[test]
    fn testimonials_in_order() {
        let names: Vec<&str> = TESTIMONIALS.iter().map(|t| t.name).collect();
        assert_eq!(names, ["Sarah L.", "Michael R."]);
    }

    #[test]
    fn pricing_is_fixed() {
        assert_eq!(PRICING.price, "$1,999");
        assert_eq!(PRICING.bullets.len(), 5);
        assert!(PRICING.bullets.iter().all(|b| !b.is_empty()));
    }

    #[test]
    fn nav_links_point_at_sections() {
        let hrefs: Vec<&str> = NAV_LINKS.iter().map(|l| l.href).collect();
        assert_eq!(hrefs, ["#features", "#testimonials", "#pricing", "#faq"]);
    }

    #[test]
    fn faq_ids_are_index_based() {
        assert_eq!(FAQS.len(), 4);
        assert_eq!(faq_item_id(0), "item-0");
        assert_eq!(faq_item_id(3), "item-3");
    }
}
