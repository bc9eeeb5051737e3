//! Template readers
//!
//! Handlers are tried in order and the first one that recognizes the
//! template wins: footnotes, the percent-change template, country
//! shorthands, then the generic fallback.

use crate::error::{Error, Result};
use crate::field::{Field, Part};
use crate::node::{Node, Template};
use crate::options::ReadContext;
use crate::value::Value;
use std::collections::HashMap;

type Handler = fn(&Template, &ReadContext) -> Result<Option<Vec<Part>>>;

const HANDLERS: &[Handler] = &[
    read_footnote_template,
    read_change_template,
    read_flag_template,
    read_unknown_template,
];

/// Named and positional template parameters as plain text
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateArgs {
    pub named: HashMap<String, String>,
    pub positional: Vec<String>,
}

impl TemplateArgs {
    pub fn from_template(template: &Template) -> Self {
        let mut args = Self::default();
        for param in &template.params {
            match &param.name {
                Some(name) => {
                    args.named.insert(name.clone(), param.text());
                }
                None => args.positional.push(param.text()),
            }
        }
        log::debug!(
            "parsed template {}: args={:?} params={:?}",
            template.name,
            args.positional,
            args.named
        );
        args
    }
}

/// Expand a template into the parts it contributes to a cell
pub fn read_template(template: &Template, ctx: &ReadContext) -> Result<Vec<Part>> {
    for handler in HANDLERS {
        if let Some(parts) = handler(template, ctx)? {
            return Ok(parts);
        }
    }
    Ok(Vec::new())
}

fn read_footnote_template(template: &Template, ctx: &ReadContext) -> Result<Option<Vec<Part>>> {
    if !ctx
        .options()
        .footnote_templates
        .iter()
        .any(|name| template.is_named(name))
    {
        return Ok(None);
    }
    log::debug!("omitting {} subtext from field", template.name);
    Ok(Some(Vec::new()))
}

/// `{{change|a|b}}` yields `a`, `b` and the percent change from `a` to `b`;
/// with `invert=on` the change runs from `b` to `a`
fn read_change_template(template: &Template, ctx: &ReadContext) -> Result<Option<Vec<Part>>> {
    if !template.is_named(&ctx.options().delta_template) {
        return Ok(None);
    }

    let args = TemplateArgs::from_template(template);
    let operand = |idx: usize| -> Result<i64> {
        let raw = args.positional.get(idx).ok_or_else(|| {
            Error::template(&template.name, format!("missing positional argument {}", idx + 1))
        })?;
        raw.parse::<i64>()
            .map_err(|_| Error::template(&template.name, format!("'{}' is not an integer", raw)))
    };
    let a = operand(0)?;
    let b = operand(1)?;

    let inverted = args.named.get("invert").is_some_and(|v| v == "on");
    let (num, den) = if inverted { (a, b) } else { (b, a) };
    if den == 0 {
        return Err(Error::template(&template.name, "division by zero"));
    }
    let change = (num as f64 / den as f64 - 1.0) * 100.0;

    let raw = Node::Template(template.clone());
    Ok(Some(vec![
        Part::Field(Field::new(raw.clone(), Value::Integer(a))),
        Part::Field(Field::new(raw.clone(), Value::Integer(b))),
        Part::Field(Field::new(raw, Value::Float(change))),
    ]))
}

/// Country shorthands such as `{{AUT}}` become the localized country name
fn read_flag_template(template: &Template, ctx: &ReadContext) -> Result<Option<Vec<Part>>> {
    Ok(ctx.countries().lookup(&template.name).map(|country| {
        let name = ctx.catalog().translate(&country).into_owned();
        vec![Part::Text(name)]
    }))
}

/// Unknown templates contribute their positional arguments
fn read_unknown_template(template: &Template, _ctx: &ReadContext) -> Result<Option<Vec<Part>>> {
    let args = TemplateArgs::from_template(template);
    Ok(Some(args.positional.into_iter().map(Part::Text).collect()))
}
