//! Server-rendered pages: the shared document shell, the credit risk console
//! page, and the static fallback screens.

pub mod credit_risk;
pub mod fallback;

use crate::seo::{render_head, PageMetadata};

/// Wraps page content in the full HTML document: head metadata, embedded
/// stylesheet, body.
pub fn layout(meta: &PageMetadata, body: &str) -> String {
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n{head}<style>{STYLESHEET}</style>\n</head>\n<body>\n{body}</body>\n</html>\n",
        head = render_head(meta),
    )
}

const STYLESHEET: &str = r#"
:root {
  --ink: #0f172a;
  --muted: #64748b;
  --border: #e2e8f0;
  --surface: #f8fafc;
  --accent: #1d4ed8;
  --accent-dark: #1e40af;
  --danger: #e11d48;
}
* { box-sizing: border-box; }
body {
  margin: 0;
  font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
  color: var(--ink);
  background: #ffffff;
  line-height: 1.5;
}
.page { max-width: 48rem; margin: 0 auto; padding: 2rem 1rem; }
.page-header { margin-bottom: 2rem; }
.page-header h1 { margin: 0 0 0.5rem; font-size: 1.75rem; color: var(--accent-dark); }
.muted { color: var(--muted); font-size: 0.875rem; margin: 0.25rem 0; }
.caption { color: var(--muted); font-size: 0.75rem; text-transform: uppercase; letter-spacing: 0.05em; margin: 0; }
.value { margin: 0.25rem 0 0; font-weight: 600; }
.card { border: 1px solid var(--border); border-radius: 0.75rem; margin-bottom: 1.5rem; background: #ffffff; }
.card-header { padding: 1.25rem 1.25rem 0.75rem; }
.card-title { margin: 0; font-size: 1.125rem; }
.card-body { padding: 0.75rem 1.25rem 1.25rem; }
.preset-row { display: flex; flex-wrap: wrap; align-items: center; gap: 0.5rem; margin-top: 0.75rem; }
.btn {
  display: inline-block;
  border: 1px solid var(--border);
  border-radius: 0.5rem;
  padding: 0.375rem 0.75rem;
  font-size: 0.875rem;
  text-decoration: none;
  color: var(--ink);
  background: var(--surface);
  cursor: pointer;
}
.btn-secondary:hover { background: var(--border); }
.btn-submit {
  width: 100%;
  margin-top: 1rem;
  padding: 0.625rem;
  font-size: 1rem;
  color: #ffffff;
  background: var(--accent);
  border: none;
}
.btn-submit:disabled { opacity: 0.6; cursor: not-allowed; }
.btn-home { margin-top: 1.5rem; }
.form-section { margin: 1rem 0; }
.section-title { margin: 0 0 0.75rem; font-size: 0.9375rem; }
.separator { border: none; border-top: 1px solid var(--border); margin: 1.25rem 0; }
.grid-2 { display: grid; gap: 1rem; grid-template-columns: repeat(2, minmax(0, 1fr)); }
.grid-3 { display: grid; gap: 1rem; grid-template-columns: repeat(3, minmax(0, 1fr)); }
.field { margin: 0.5rem 0; }
.label { display: block; font-size: 0.875rem; font-weight: 500; margin-bottom: 0.375rem; }
.required-mark { color: var(--danger); margin-left: 0.125rem; }
.control { display: flex; align-items: center; gap: 0; }
.prefix {
  padding: 0.5rem 0.75rem;
  font-size: 0.875rem;
  color: var(--muted);
  border: 1px solid var(--border);
  border-right: none;
  border-radius: 0.5rem 0 0 0.5rem;
  background: var(--surface);
}
.input, .select {
  width: 100%;
  padding: 0.5rem 0.75rem;
  font-size: 0.875rem;
  border: 1px solid var(--border);
  border-radius: 0.5rem;
  background: #ffffff;
}
.prefix + .input { border-radius: 0 0.5rem 0.5rem 0; }
.input:focus, .select:focus { outline: 2px solid var(--accent); outline-offset: -1px; }
.invalid { border-color: var(--danger); }
.error-message { color: var(--danger); font-size: 0.8125rem; margin: 0.375rem 0 0; }
.helper-text { color: var(--muted); font-size: 0.8125rem; margin: 0.375rem 0 0; }
.checkbox-label { display: flex; align-items: center; gap: 0.5rem; font-size: 0.875rem; }
.panel { border: 1px solid var(--border); border-radius: 0.5rem; padding: 0.75rem; margin-top: 1rem; }
.panel-title { margin: 0 0 0.75rem; font-weight: 500; font-size: 0.9375rem; }
.panel-loading { text-align: center; padding: 2.5rem 0; }
.spinner {
  width: 1.5rem;
  height: 1.5rem;
  margin: 0 auto 0.75rem;
  border: 3px solid var(--border);
  border-top-color: var(--accent);
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}
@keyframes spin { to { transform: rotate(360deg); } }
.panel-error {
  border: 1px solid rgba(225, 29, 72, 0.4);
  background: rgba(225, 29, 72, 0.05);
  border-radius: 0.5rem;
  padding: 1rem;
}
.panel-error-title { margin: 0; font-weight: 500; color: var(--danger); }
.panel-empty {
  border: 1px dashed var(--border);
  background: var(--surface);
  border-radius: 0.5rem;
  padding: 1.5rem;
}
.panel-empty-title { margin: 0; font-weight: 500; }
.result-header { display: flex; align-items: flex-start; justify-content: space-between; gap: 0.75rem; }
.result-header h2 { margin: 0.25rem 0; }
.badge {
  display: inline-flex;
  align-items: center;
  border-radius: 9999px;
  padding: 0.25rem 0.75rem;
  font-size: 0.75rem;
  font-weight: 500;
  white-space: nowrap;
}
.badge-low { background: #ecfdf5; color: #047857; border: 1px solid #a7f3d0; }
.badge-medium { background: #fffbeb; color: #b45309; border: 1px solid #fde68a; }
.badge-high { background: #fff1f2; color: #be123c; border: 1px solid #fecdd3; }
.confidence { margin-top: 1.25rem; }
.confidence-row { display: flex; align-items: center; justify-content: space-between; }
.confidence-value { font-weight: 600; }
.bar { height: 0.5rem; border-radius: 9999px; background: var(--border); overflow: hidden; margin: 0.5rem 0; }
.bar-fill { height: 100%; border-radius: 9999px; background: var(--accent); }
.trace { display: flex; flex-direction: column; gap: 0.5rem; }
.trace-item { background: var(--surface); border-radius: 0.375rem; padding: 0.5rem 0.75rem; }
.trace-rule { margin: 0; font-weight: 500; font-size: 0.8125rem; }
.fallback {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  text-align: center;
  padding: 1rem;
}
.fallback-icon { font-size: 3rem; color: var(--danger); }
.fallback h1 { margin: 1.5rem 0 0; font-size: 1.75rem; }
@media (max-width: 640px) {
  .grid-2, .grid-3 { grid-template-columns: 1fr; }
}
"#;
