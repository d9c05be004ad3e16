use serde::{Deserialize, Serialize};

pub mod api;
mod confirmed;
mod not_found;
mod pending;

/// Status assumed on the confirmed screen when the provider omits one.
pub const DEFAULT_STATUS: &str = "approved";

/// Query parameters attached by the payment provider's browser redirect.
///
/// Every field is optional on the wire; a bare URL deserializes to all-empty
/// values. Providers attach plenty of extra parameters, those are ignored.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ReturnQuery {
    #[serde(default)]
    pub payment_id: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub external_reference: String,
}

/// Per-render snapshot of the redirect parameters, discarded with the
/// response.
#[derive(Debug, Clone)]
pub struct PaymentReturnInfo {
    pub payment_id: String,
    pub status: String,
    /// Captured for logging only, never rendered.
    pub external_reference: String,
}

impl From<ReturnQuery> for PaymentReturnInfo {
    fn from(query: ReturnQuery) -> Self {
        Self {
            payment_id: query.payment_id,
            status: query.status.unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            external_reference: query.external_reference,
        }
    }
}

/// Escape a query value for interpolation into markup. Redirect values are
/// opaque display strings and must never become live HTML.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Base stylesheet shared by every screen this service renders.
const STYLE: &str = r#"
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        :root {
            --background: 210 20% 98%;
            --foreground: 215 25% 17%;
            --muted-foreground: 215 14% 42%;
            --card: 0 0% 100%;
            --border: 214 15% 87%;
            --primary: 221 71% 48%;
            --primary-foreground: 0 0% 100%;
            --success: 152 60% 38%;
            --pending: 38 92% 44%;
            --radius: 0.75rem;
        }

        body {
            font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
            background: hsl(var(--background));
            color: hsl(var(--foreground));
            line-height: 1.6;
            display: flex;
            align-items: center;
            justify-content: center;
            min-height: 100vh;
            padding: 24px;
        }

        .card {
            background: hsl(var(--card));
            border: 1px solid hsl(var(--border));
            border-radius: var(--radius);
            box-shadow: 0 10px 30px hsl(215 25% 17% / 0.08);
            max-width: 480px;
            width: 100%;
            padding: 48px 40px;
            text-align: center;
        }

        .status-icon {
            width: 72px;
            height: 72px;
            margin: 0 auto 1.5rem;
        }

        .status-icon.success {
            color: hsl(var(--success));
        }

        .status-icon.pending {
            color: hsl(var(--pending));
        }

        h1 {
            font-size: 1.6rem;
            margin-bottom: 0.75rem;
        }

        .description {
            color: hsl(var(--muted-foreground));
            margin-bottom: 1.5rem;
        }

        .panel {
            border: 1px solid hsl(var(--border));
            border-radius: var(--radius);
            background: hsl(var(--background));
            padding: 12px 16px;
            margin-bottom: 1.5rem;
            font-size: 0.95rem;
        }

        .panel .label {
            color: hsl(var(--muted-foreground));
            margin-right: 0.35rem;
        }

        .notice {
            font-size: 0.9rem;
            color: hsl(var(--muted-foreground));
            margin-bottom: 1.5rem;
        }

        .action-buttons {
            display: flex;
            gap: 1rem;
            justify-content: center;
            flex-wrap: wrap;
        }

        .btn {
            display: inline-flex;
            align-items: center;
            justify-content: center;
            padding: 12px 24px;
            border-radius: var(--radius);
            font-size: 0.95rem;
            font-weight: 500;
            text-decoration: none;
            border: 1px solid transparent;
            transition: all 0.2s ease;
        }

        .btn-primary {
            background: hsl(var(--primary));
            color: hsl(var(--primary-foreground));
        }

        .btn-primary:hover {
            background: hsl(var(--primary) / 0.9);
        }

        .btn-secondary {
            background: hsl(var(--card));
            color: hsl(var(--foreground));
            border-color: hsl(var(--border));
        }

        .btn-secondary:hover {
            background: hsl(var(--border) / 0.4);
        }

        @media (max-width: 480px) {
            .card {
                padding: 32px 24px;
            }

            .action-buttons {
                flex-direction: column;
            }

            .btn {
                width: 100%;
            }
        }
"#;

/// Wrap a card body into a complete standalone HTML document.
fn document(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{STYLE}    </style>
</head>
<body>
    <main class="card">
{body}    </main>
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_query_deserializes_to_defaults() {
        let query: ReturnQuery = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(query.payment_id.is_empty());
        assert!(query.status.is_none());
        assert!(query.external_reference.is_empty());
    }

    #[test]
    fn unknown_parameters_are_ignored() {
        let query: ReturnQuery = serde_json::from_value(serde_json::json!({
            "payment_id": "123",
            "collection_status": "approved",
            "merchant_order_id": "555",
        }))
        .unwrap();
        assert_eq!(query.payment_id, "123");
    }

    #[test]
    fn missing_status_defaults_to_approved() {
        let info = PaymentReturnInfo::from(ReturnQuery::default());
        assert_eq!(info.status, DEFAULT_STATUS);
    }

    #[test]
    fn escape_neutralizes_metacharacters() {
        assert_eq!(
            escape_html(r#"<a href="x">&'"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;"
        );
    }
}
