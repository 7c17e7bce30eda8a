use std::collections::{HashMap, HashSet};

#[must_use]
pub fn markdown_to_html(input: &str) -> String {
    let mut options = pulldown_cmark::Options::empty();
    options.insert(pulldown_cmark::Options::ENABLE_STRIKETHROUGH);
    options.insert(pulldown_cmark::Options::ENABLE_TABLES);

    let parser = pulldown_cmark::Parser::new_ext(input, options);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    sanitize_html(&html)
}

#[must_use]
pub fn sanitize_html(html: &str) -> String {
    let tags: HashSet<&str> = [
        "h2", "h3", "h4", "p", "br", "em", "strong", "code", "pre", "blockquote", "ul", "ol",
        "li", "a", "table", "thead", "tbody", "tr", "th", "td",
    ]
    .into_iter()
    .collect();

    let mut attributes: HashMap<&str, HashSet<&str>> = HashMap::new();
    attributes.insert("a", ["href"].into_iter().collect());
    attributes.insert("code", ["class"].into_iter().collect());

    ammonia::Builder::new()
        .tags(tags)
        .tag_attributes(attributes)
        .clean(html)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::{markdown_to_html, sanitize_html};

    #[test]
    fn markdown_to_html_sanitizes_links() {
        let html = markdown_to_html("[Link](javascript:alert(1))");
        assert!(html.contains("Link"));
        assert!(!html.contains("javascript:"));
    }

    #[test]
    fn fenced_code_keeps_language_class() {
        let html = markdown_to_html("```java\ndriver.get(url);\n```");
        assert!(html.contains("<pre><code class=\"language-java\">"), "{html}");
        assert!(html.contains("driver.get(url);"));
    }

    #[test]
    fn script_tags_are_dropped() {
        let html = sanitize_html("<p>ok</p><script>alert(1)</script>");
        assert_eq!(html, "<p>ok</p>");
    }
}
