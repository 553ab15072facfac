use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

fn legal_links() -> Html {
    html! {
        <div class="legal-links">
            <Link<Route> to={Route::Home}>{"Home"}</Link<Route>>
            {" | "}
            <Link<Route> to={Route::Terms}>{"Terms of Service"}</Link<Route>>
            {" | "}
            <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
        </div>
    }
}

pub(crate) const LEGAL_CSS: &str = r#"
.legal-content {
    min-height: 100vh;
    padding: 4rem 2rem;
    max-width: 800px;
    margin: 0 auto;
    font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
    line-height: 1.6;
}

.legal-content h1 {
    font-size: 2rem;
    margin-bottom: 2rem;
}

.legal-content section {
    margin: 1.5rem 0;
}

.legal-content h2 {
    font-size: 1.25rem;
    margin-bottom: 0.75rem;
}

.legal-links {
    margin-top: 3rem;
    text-align: center;
}
"#;

#[function_component(TermsOfService)]
pub fn terms_of_service() -> Html {
    html! {
        <div class="legal-content terms-of-service">
            <h1>{"Terms of Service"}</h1>

            <section>
                <h2>{"1. Enrollment"}</h2>
                <p>{"Enrolling in the Full Web Development Course gives you personal, non-transferable access to the course videos, live Q&A sessions and mentor support for the duration of the program."}</p>
            </section>

            <section>
                <h2>{"2. Payment"}</h2>
                <p>{"The course fee is paid once at enrollment. Prices are shown in US dollars."}</p>
            </section>

            <section>
                <h2>{"3. Refunds"}</h2>
                <p>{"You can request a full refund within the first 14 days of your enrollment. No questions asked."}</p>
            </section>

            <section>
                <h2>{"4. Course Material"}</h2>
                <p>{"Course videos and exercises are for your own learning. Projects you build during the course are yours to keep and show in your portfolio."}</p>
            </section>

            { legal_links() }
            <style>{ LEGAL_CSS }</style>
        </div>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="legal-content privacy-policy">
            <h1>{"Privacy Policy"}</h1>

            <section>
                <h2>{"1. Data We Collect"}</h2>
                <ul>
                    <li>{"Name and email address (for enrollment and course access)"}</li>
                    <li>{"Progress through lessons and projects (for mentor support)"}</li>
                </ul>
            </section>

            <section>
                <h2>{"2. How We Use It"}</h2>
                <p>{"Your data is used only to deliver the course, issue your certificate of completion and provide job placement assistance you opt into."}</p>
            </section>

            <section>
                <h2>{"3. Your Rights"}</h2>
                <p>{"You can request access to or deletion of your personal data at any time."}</p>
            </section>

            { legal_links() }
            <style>{ LEGAL_CSS }</style>
        </div>
    }
}
