//! Content page rendering.

use leptos::prelude::*;

use crate::markdown::{Block, CodeBlock, Inline};
use crate::routes::PageId;

const PARAGRAPH_CLASS: &str = "mt-2 text-dolphin-blue font-regular leading-normal";

/// Renders one page's document. No inputs besides which page.
#[component]
pub fn ContentPage(page: PageId) -> impl IntoView {
    let document = page.document();

    view! {
        <div class="w-full mb-10 w-750" data-page=format!("{page:?}")>
            {document.blocks.iter().map(render_block).collect_view()}
        </div>
    }
}

/// Placeholder for paths no menu entry is bound to.
#[component]
pub fn NotFound(#[prop(into)] path: String) -> impl IntoView {
    view! {
        <div class="w-full mb-10 w-750" data-page="NotFound">
            <h1 class="font-bold text-4xl">"Page not found"</h1>
            <p class=PARAGRAPH_CLASS>"Nothing lives at "<code>{path}</code>"."</p>
        </div>
    }
}

fn render_block(block: &'static Block) -> AnyView {
    match block {
        Block::Heading { level: 1, text } => {
            view! { <h1 class="font-bold text-4xl">{text.as_str()}</h1> }.into_any()
        }
        Block::Heading { level: 2, text } => {
            view! { <h2 class="mt-12 mb-3 border-solid border-b pb-2">{text.as_str()}</h2> }
                .into_any()
        }
        Block::Heading { text, .. } => {
            view! { <h3 class="mt-10 font-semibold text-dolphin-blue">{text.as_str()}</h3> }
                .into_any()
        }
        Block::Paragraph(spans) => {
            view! { <p class=PARAGRAPH_CLASS>{render_inlines(spans)}</p> }.into_any()
        }
        Block::List(items) => view! {
            <ul class="mt-2 ml-6 list-disc text-dolphin-blue">
                {items
                    .iter()
                    .map(|item| {
                        view! {
                            <li>
                                {render_inlines(&item.spans)}
                                {item.blocks.iter().map(render_block).collect_view()}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
        .into_any(),
        Block::Code(code) => render_code(code),
        Block::Rule => view! { <hr class="mt-10" /> }.into_any(),
    }
}

fn render_inlines(spans: &'static [Inline]) -> impl IntoView {
    spans.iter().map(render_inline).collect_view()
}

fn render_inline(span: &'static Inline) -> AnyView {
    let text = span.text.as_str();
    if span.code {
        return view! { <code class="bg-light-gray rounded-sm px-1">{text}</code> }.into_any();
    }
    let class = inline_class(span);
    match span.href.as_deref() {
        Some(href) => view! {
            <a href=href class=format!("text-dolphin-blue underline {class}")>{text}</a>
        }
        .into_any(),
        None => view! { <span class=class>{text}</span> }.into_any(),
    }
}

fn inline_class(span: &Inline) -> String {
    let mut classes = Vec::new();
    if span.strong {
        classes.push("font-bold");
    }
    if span.emphasis {
        classes.push("italic");
    }
    classes.join(" ")
}

fn render_code(code: &'static CodeBlock) -> AnyView {
    let language = format!("language-{}", code.language.as_deref().unwrap_or("text"));
    let spans = code
        .lines
        .iter()
        .flat_map(|line| line.spans.iter())
        .map(|span| {
            let style = span.color.as_ref().map(|color| format!("color: {color}"));
            view! { <span style=style>{span.text.as_str()}</span> }
        })
        .collect_view();

    view! {
        <div class="bg-light-gray mt-3 rounded-sm w-full overflow-x-scroll">
            <pre class="p-4"><code class=language>{spans}</code></pre>
        </div>
    }
    .into_any()
}
