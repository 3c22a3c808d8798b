/// HTML rendering for the query form.
///
/// The page is small enough that it is assembled with `format!`; every piece of
/// user or dataset text goes through `escape_html` first.
use std::fmt::Write;

use advisor_common::presenter::Recommendation;
use advisor_common::scorer::Decision;

#[derive(Debug, Clone, Default)]
pub struct PageView {
    /// Last submitted query, echoed back into the input box.
    pub query: Option<String>,
    pub error: Option<String>,
    pub results: Vec<Recommendation>,
}

impl PageView {
    pub fn with_results(query: String, results: Vec<Recommendation>) -> Self {
        Self {
            query: Some(query),
            error: None,
            results,
        }
    }

    pub fn with_error(query: String, error: String) -> Self {
        Self {
            query: Some(query),
            error: Some(error),
            results: Vec::new(),
        }
    }
}

pub fn render(view: &PageView) -> String {
    let query = view.query.as_deref().map(escape_html).unwrap_or_default();

    let error = view
        .error
        .as_deref()
        .map(|e| format!("<p class=\"error\">{}</p>", escape_html(e)))
        .unwrap_or_default();

    let results = if view.results.is_empty() {
        String::new()
    } else {
        render_results(&view.results)
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Smart Electronics Advisor</title>
<style>
body {{ font-family: sans-serif; margin: 2rem auto; max-width: 60rem; }}
table {{ border-collapse: collapse; width: 100%; margin-top: 1rem; }}
th, td {{ border: 1px solid #ccc; padding: 0.4rem 0.6rem; text-align: left; }}
.error {{ color: #b00020; }}
.buy {{ color: #1b7f3a; font-weight: bold; }}
.not-buy {{ color: #b00020; font-weight: bold; }}
</style>
</head>
<body>
<h1>Smart Electronics Advisor</h1>
<form method="post" action="/">
<label for="product">Product</label>
<input id="product" name="product" type="text" placeholder="phone by samsung" value="{query}" required>
<button type="submit">Check</button>
</form>
{error}{results}</body>
</html>
"#
    )
}

fn render_results(results: &[Recommendation]) -> String {
    let mut rows = String::new();
    for r in results {
        let class = match r.decision {
            Decision::Buy => "buy",
            Decision::NotBuy => "not-buy",
        };
        let _ = writeln!(
            rows,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{:.1}</td><td class=\"{class}\">{}</td></tr>",
            escape_html(&r.name),
            escape_html(&r.company),
            r.price,
            r.rating,
            r.reviews,
            escape_html(&r.manufactured),
            r.score,
            r.decision,
        );
    }

    format!(
        "<table>\n<thead><tr><th>Name</th><th>Company</th><th>Price</th><th>Rating</th><th>Reviews</th><th>Made in</th><th>Score</th><th>Decision</th></tr></thead>\n<tbody>\n{rows}</tbody>\n</table>\n"
    )
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
