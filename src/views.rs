// HTML page rendering

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Ask Gemini AI</title>
</head>
<body>
    <h1>Ask Gemini AI</h1>
    <form method="POST" action="/ask">
        <input type="text" name="question" placeholder="Enter your question" style="width:300px">
        <button type="submit">Ask</button>
    </form>
"#;

const PAGE_TAIL: &str = "</body>\n</html>\n";

/// Render the question form, with the answer section when there is one
pub fn render_page(answer: Option<&str>) -> String {
    let mut page = String::from(PAGE_HEAD);

    if let Some(answer) = answer.filter(|a| !a.is_empty()) {
        page.push_str("    <h3>Answer:</h3>\n    <p>");
        page.push_str(&html_escape::encode_text(answer));
        page.push_str("</p>\n");
    }

    page.push_str(PAGE_TAIL);
    page
}
