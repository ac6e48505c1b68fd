use yew::prelude::*;

/// Rules needed by every page: base palette, disclosures and the footer.
pub const SHARED_CSS: &str = r#"
    .landing-page {
        background: #0b0b0d;
        color: #f4efe3;
        font-family: "Inter", -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
    }
    .licensing-section {
        max-width: 900px;
        margin: 0 auto;
        padding: 4rem 2rem;
    }
    .disclosure {
        border-bottom: 1px solid rgba(244, 239, 227, 0.12);
    }
    .disclosure-toggle {
        width: 100%;
        display: flex;
        justify-content: space-between;
        background: none;
        border: none;
        color: inherit;
        font-size: 1.1rem;
        padding: 1rem 0;
        cursor: pointer;
    }
    .disclosure-body p, .licensing-footnote {
        color: #cfc8b8;
        line-height: 1.6;
    }
    .site-footer {
        text-align: center;
        padding: 3rem 2rem;
        color: #9d968a;
    }
    .site-footer a {
        color: #d4af37;
    }
"#;

#[function_component(SharedStyles)]
pub fn shared_styles() -> Html {
    html! {
        <style>{SHARED_CSS}</style>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_classes_rendered_outside_the_landing_page() {
        for selector in [
            ".landing-page",
            ".licensing-section",
            ".disclosure {",
            ".disclosure-toggle",
            ".site-footer",
        ] {
            assert!(SHARED_CSS.contains(selector), "missing {}", selector);
        }
    }
}
