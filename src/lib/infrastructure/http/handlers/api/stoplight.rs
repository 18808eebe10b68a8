//! API documentation.

use axum::response::Html;

/// Stoplight API documentation.
pub async fn handler() -> Html<&'static str> {
    Html(
        r#"
<html lang="en">
<head>
    <title>Form Relay API</title>
    <script src="https://unpkg.com/@stoplight/elements/web-components.min.js"></script>
    <link rel="stylesheet" href="https://unpkg.com/@stoplight/elements/styles.min.css">
</head>
<body>
    <main role="main">
        <elements-api apiDescriptionUrl="/api/openapi.json" router="hash" />
    </main>
</body>
</html>
"#,
    )
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use testresult::TestResult;

    use crate::infrastructure::http::{router, state::tests::test_state};

    #[tokio::test]
    async fn test_docs_handler() -> TestResult {
        let server = TestServer::new(router(test_state(None)))?;

        let response = server.get("/api").await;

        response.assert_status_ok();

        let raw_text = response.text();

        assert!(raw_text.contains("Form Relay API"));
        assert!(raw_text.contains("/api/openapi.json"));

        let openapi = server.get("/api/openapi.json").await;

        openapi.assert_status_ok();
        assert!(openapi.text().contains("/api/contact"));
        assert!(openapi.text().contains("/api/partner"));

        Ok(())
    }
}
