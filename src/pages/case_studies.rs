//! Case studies page.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::public_header::PublicHeader;

struct CaseStudy {
    client: &'static str,
    summary: &'static str,
    outcome: &'static str,
}

const CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        client: "Regional retailer",
        summary: "Lifted a monolith into containers across two regions.",
        outcome: "Release cadence went from monthly to daily.",
    },
    CaseStudy {
        client: "Fintech startup",
        summary: "Designed a landing zone with audited access controls.",
        outcome: "Passed compliance review on the first attempt.",
    },
    CaseStudy {
        client: "Logistics platform",
        summary: "Right-sized compute and storage after a rushed migration.",
        outcome: "Cut the monthly cloud bill by a third.",
    },
];

#[component]
pub fn CaseStudiesPage() -> impl IntoView {
    view! {
        <div class="page page--case-studies">
            <PublicHeader/>
            <section class="case-studies">
                <h1>"Case Studies"</h1>
                {CASE_STUDIES
                    .iter()
                    .map(|cs| {
                        view! {
                            <article class="case-study">
                                <h2>{cs.client}</h2>
                                <p>{cs.summary}</p>
                                <p class="case-study__outcome">{cs.outcome}</p>
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()}
            </section>
            <Footer/>
        </div>
    }
}
