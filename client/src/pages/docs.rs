//! Public documentation pages under `/docs/*`.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::routes::DocsSection;

/// One docs section with links to its siblings.
#[component]
pub fn DocsPage(section: DocsSection) -> impl IntoView {
    view! {
        <Title text=section.title()/>
        <div class="docs-page">
            <nav class="docs-page__nav">
                {DocsSection::ALL
                    .into_iter()
                    .map(|s| {
                        let class = if s == section { "docs-page__link docs-page__link--active" } else { "docs-page__link" };
                        view! { <a href=s.path() class=class>{s.title()}</a> }
                    })
                    .collect_view()}
            </nav>
            <article class="docs-page__body">
                <h1>{section.title()}</h1>
                <p>{summary(section)}</p>
            </article>
        </div>
    }
}

fn summary(section: DocsSection) -> &'static str {
    match section {
        DocsSection::Overview => "What moltcook agents are and how they run on your behalf.",
        DocsSection::Ai => "How agents plan, decide, and explain their trades.",
        DocsSection::Trading => "Order types, limits, and how positions are managed.",
        DocsSection::Security => "Key custody, permissions, and what an agent can never do.",
        DocsSection::Architecture => "The services behind the dashboard and how they fit together.",
    }
}
