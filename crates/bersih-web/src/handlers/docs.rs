//! API documentation: a Swagger 2.0 document and a Swagger UI page.

use axum::{
    http::{header::HOST, HeaderMap},
    response::Html,
    Json,
};
use serde_json::{json, Value};

pub const DOCS_TITLE: &str = "API Documentation for Data Processing and Modeling";
pub const DOCS_VERSION: &str = "1.0.0";
pub const DOCS_DESCRIPTION: &str = "Dokumentasi API untuk Data Processing dan Modeling";

/// GET /docs.json
pub async fn docs_json(headers: HeaderMap) -> Json<Value> {
    let host = headers
        .get(HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost");
    Json(openapi_document(host))
}

/// Build the Swagger 2.0 description of the processing routes.
pub fn openapi_document(host: &str) -> Value {
    json!({
        "swagger": "2.0",
        "info": {
            "title": DOCS_TITLE,
            "version": DOCS_VERSION,
            "description": DOCS_DESCRIPTION,
        },
        "host": host,
        "paths": {
            "/text-processing": {
                "post": {
                    "tags": ["Text Processing"],
                    "summary": "Proses satu teks",
                    "consumes": ["application/x-www-form-urlencoded", "multipart/form-data"],
                    "produces": ["application/json"],
                    "parameters": [{
                        "name": "text",
                        "in": "formData",
                        "type": "string",
                        "required": true,
                        "description": "Teks yang akan diproses",
                    }],
                    "responses": processed_responses("string"),
                }
            },
            "/text-processing-file": {
                "post": {
                    "tags": ["File Processing"],
                    "summary": "Proses file CSV dengan kolom Tweet",
                    "consumes": ["multipart/form-data"],
                    "produces": ["application/json"],
                    "parameters": [{
                        "name": "file",
                        "in": "formData",
                        "type": "file",
                        "required": true,
                        "description": "File CSV (latin-1) dengan kolom Tweet",
                    }],
                    "responses": processed_responses("array"),
                }
            }
        }
    })
}

fn processed_responses(data_type: &str) -> Value {
    let data = if data_type == "array" {
        json!({ "type": "array", "items": { "type": "string" } })
    } else {
        json!({ "type": data_type })
    };
    json!({
        "200": {
            "description": "Successful response",
            "schema": {
                "type": "object",
                "properties": {
                    "status_code": { "type": "integer" },
                    "description": { "type": "string" },
                    "data": data,
                }
            }
        },
        "500": { "description": "Processing failed" }
    })
}

/// GET /docs/
pub async fn docs_ui() -> Html<String> {
    Html(format!(r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{}</title>
    <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
<div id="swagger-ui"></div>
<script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
<script>
    window.ui = SwaggerUIBundle({{ url: "/docs.json", dom_id: "#swagger-ui" }});
</script>
</body>
</html>"##, DOCS_TITLE))
}
