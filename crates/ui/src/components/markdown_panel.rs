use dioxus::prelude::*;

use crate::vm::markdown_to_html;

#[component]
pub fn MarkdownPanel(markdown: &'static str) -> Element {
    let html = markdown_to_html(markdown);
    rsx! {
        section { class: "card markdown", dangerous_inner_html: "{html}" }
    }
}
