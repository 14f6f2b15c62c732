//! Prompt builder.
//!
//! Renders the embedded e-book instruction template for an audience. The
//! output depends only on the audience text.

use std::sync::OnceLock;

use include_dir::{Dir, include_dir};
use minijinja::{AutoEscape, Environment, UndefinedBehavior};

use crate::domain::{AppError, Audience, PromptContext};

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/services/assets/templates");

const EBOOK_PROMPT_TEMPLATE: &str = "ebook_prompt.md.j2";

static ENV: OnceLock<Result<Environment<'static>, String>> = OnceLock::new();

/// Build the full generation instruction for `audience`.
pub fn build_prompt(audience: &Audience) -> Result<String, AppError> {
    let env = ENV.get_or_init(init_environment).as_ref().map_err(|e| AppError::PromptRender(e.clone()))?;

    let template = env
        .get_template(EBOOK_PROMPT_TEMPLATE)
        .map_err(|e| AppError::PromptRender(e.to_string()))?;

    template
        .render(PromptContext::for_audience(audience))
        .map_err(|e| AppError::PromptRender(format!("{}: {}", EBOOK_PROMPT_TEMPLATE, e)))
}

fn init_environment() -> Result<Environment<'static>, String> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_auto_escape_callback(|_| AutoEscape::None);

    let source = TEMPLATES_DIR
        .get_file(EBOOK_PROMPT_TEMPLATE)
        .and_then(|file| file.contents_utf8())
        .ok_or_else(|| format!("Missing embedded template {}", EBOOK_PROMPT_TEMPLATE))?;

    env.add_template(EBOOK_PROMPT_TEMPLATE, source).map_err(|e| e.to_string())?;
    Ok(env)
}
