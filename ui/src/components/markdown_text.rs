//! Renders post content written in markdown.

use pulldown_cmark::{Options, Parser, html};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component]
pub fn MarkdownText(props: &Props) -> Html {
    let html_content = render_markdown(&props.text);

    let base_classes = classes!(
        "prose",
        "prose-neutral",
        "dark:prose-invert",
        "prose-sm",
        "max-w-none",
        props.class.clone()
    );

    html! {
        <div class={base_classes}>
            { Html::from_html_unchecked(html_content.into()) }
        </div>
    }
}

/// Converts markdown to HTML. Raw HTML in the input is escaped.
fn render_markdown(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_SMART_PUNCTUATION;

    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        pulldown_cmark::Event::Html(raw)
        | pulldown_cmark::Event::InlineHtml(raw) => {
            pulldown_cmark::Event::Text(raw)
        }
        other => other,
    });
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    html_output
}

#[cfg(test)]
mod tests {
    use super::render_markdown;

    #[test]
    fn renders_headings_and_lists() {
        let html = render_markdown("## Tukad Cepung\n\n- Arrive early");
        assert!(html.contains("<h2>Tukad Cepung</h2>"));
        assert!(html.contains("<li>Arrive early</li>"));
    }

    #[test]
    fn raw_html_is_escaped() {
        let html = render_markdown("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
