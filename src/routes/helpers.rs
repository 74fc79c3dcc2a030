use std::error::Error;

use actix_web::HttpResponseBuilder;
use anyhow::Context;

pub fn error_chain_fmt(e: &impl Error, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    writeln!(f, "{e}\n")?;
    let mut current = e.source();

    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{cause}")?;
        current = cause.source();
    }

    Ok(())
}

pub fn prepare_html_template(
    entries: &[(&str, &str)],
    template_name: &str,
) -> Result<String, anyhow::Error> {
    let mut ctx = tera::Context::new();
    for (key, value) in entries.iter().copied() {
        ctx.insert(key, value);
    }
    let tera = tera::Tera::new("views/**/*").context("Failed to initialize Tera templates")?;
    let html = tera
        .render(template_name, &ctx)
        .context("Failed rendering email template")?;
    Ok(html)
}

/// The permissive cross-origin header set the landing page relies on.
/// Every response of the public endpoints carries it, failures included.
pub const CORS_HEADERS: [(&str, &str); 3] = [
    ("Access-Control-Allow-Origin", "*"),
    (
        "Access-Control-Allow-Headers",
        "authorization, x-client-info, apikey, content-type",
    ),
    ("Access-Control-Allow-Methods", "POST, OPTIONS"),
];

pub fn cross_origin(mut builder: HttpResponseBuilder) -> HttpResponseBuilder {
    for header in CORS_HEADERS {
        builder.insert_header(header);
    }
    builder
}
