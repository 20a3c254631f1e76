//! Renders configuration files through tera before they are parsed, so yaml
//! can pull values from the environment with `{{ get_env(name="...") }}`.
use tera::{Context, Tera};

use crate::Result;

pub fn render_string(tera_template: &str, locals: &serde_json::Value) -> Result<String> {
    let context = Context::from_serialize(locals)?;
    Ok(Tera::one_off(tera_template, &context, false)?)
}
