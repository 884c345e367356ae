use crate::context::{CompileOptions, CompilerContext};
use dwd_content::Document;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompileError {
    #[error("Failed to serialize {name}: {source}")]
    Serialize {
        name: &'static str,
        source: serde_json::Error,
    },
}

/// Constants exported by the generated module, in output order
pub const EXPORT_NAMES: [&str; 13] = [
    "BRAND",
    "ICON_KEYS",
    "SECTIONS",
    "HERO",
    "MARQUEE",
    "ABOUT",
    "FOCUS",
    "TEAM",
    "BUSINESS",
    "NETWORK",
    "PORTFOLIO",
    "CONTACT",
    "FOOTER",
];

/// Compile the content document to an ES module with one exported constant
/// per top-level section
pub fn compile_content_module(
    document: &Document,
    options: CompileOptions,
) -> Result<String, CompileError> {
    let mut ctx = CompilerContext::new(options);

    compile_header(&mut ctx);

    let exports = [
        pretty("BRAND", &document.brand)?,
        pretty("ICON_KEYS", &document.icon_keys)?,
        pretty("SECTIONS", &document.sections)?,
        pretty("HERO", &document.hero)?,
        pretty("MARQUEE", &document.marquee)?,
        pretty("ABOUT", &document.about)?,
        pretty("FOCUS", &document.focus)?,
        pretty("TEAM", &document.team)?,
        pretty("BUSINESS", &document.business)?,
        pretty("NETWORK", &document.network)?,
        pretty("PORTFOLIO", &document.portfolio)?,
        pretty("CONTACT", &document.contact)?,
        pretty("FOOTER", &document.footer)?,
    ];

    for (name, literal) in exports {
        ctx.add("\n");
        ctx.add_line(&format!("export const {} = {};", name, literal));
    }

    Ok(ctx.get_output())
}

fn compile_header(ctx: &mut CompilerContext) {
    let source = ctx.options.source_name.clone();
    let command = ctx.options.regenerate_command.clone();

    ctx.add_line(&format!(
        "// AUTO-GENERATED from {}. Do not edit directly.",
        source
    ));
    ctx.add_line(&format!("// Use the editor UI or run `{}`.", command));
}

/// Two-space pretty JSON, which is also a valid JS literal
fn pretty<T: Serialize>(
    name: &'static str,
    value: &T,
) -> Result<(&'static str, String), CompileError> {
    serde_json::to_string_pretty(value)
        .map(|literal| (name, literal))
        .map_err(|source| CompileError::Serialize { name, source })
}
