//! Indented text dump of a parsed resource.

use std::fmt::Write;

use rowan::TextRange;

use crate::ast::{Attributes, BodyItem, Entry, Expression, Resource, Value};

pub struct ResourcePrinter<'r> {
    resource: &'r Resource,
    spans: bool,
    trivia: bool,
}

impl<'r> ResourcePrinter<'r> {
    pub fn new(resource: &'r Resource) -> Self {
        Self {
            resource,
            spans: false,
            trivia: false,
        }
    }

    pub fn with_spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    /// Include whitespace between entries.
    pub fn with_trivia(mut self, value: bool) -> Self {
        self.trivia = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        writeln!(w, "Resource{}", self.span(self.resource.range))?;
        for item in &self.resource.body {
            match item {
                BodyItem::Entry(entry) => self.format_entry(entry, 1, w)?,
                BodyItem::Whitespace(ws) if self.trivia => {
                    writeln!(w, "  Whitespace {:?}{}", ws.text, self.span(ws.range))?;
                }
                BodyItem::Whitespace(_) => {}
            }
        }
        Ok(())
    }

    fn format_entry(&self, entry: &Entry, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        match entry {
            Entry::Entity(entity) => {
                writeln!(w, "{prefix}Entity {}{}", entity.id.name, self.span(entity.range))?;
                if let Some(index) = &entity.index {
                    writeln!(w, "{prefix}  Index")?;
                    for expr in index {
                        self.format_expression(expr, indent + 2, w)?;
                    }
                }
                self.format_value(&entity.value, indent + 1, w)?;
                self.format_attributes(entity.attrs.as_ref(), indent + 1, w)
            }
            Entry::Macro(mac) => {
                let params: Vec<String> =
                    mac.params.iter().map(|p| format!("${}", p.name)).collect();
                writeln!(
                    w,
                    "{prefix}Macro {}({}){}",
                    mac.id.name,
                    params.join(", "),
                    self.span(mac.range)
                )?;
                self.format_expression(&mac.body, indent + 1, w)?;
                self.format_attributes(mac.attrs.as_ref(), indent + 1, w)
            }
        }
    }

    fn format_attributes(
        &self,
        attrs: Option<&Attributes>,
        indent: usize,
        w: &mut impl Write,
    ) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        for (key, value) in attrs.into_iter().flatten() {
            writeln!(w, "{prefix}Attr {key}")?;
            self.format_value(value, indent + 1, w)?;
        }
        Ok(())
    }

    fn format_value(&self, value: &Value, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        match value {
            Value::String(s) => {
                let q = s.quote;
                writeln!(w, "{prefix}String {q}{}{q}{}", s.content, self.span(s.range))
            }
            Value::Array(array) => {
                writeln!(w, "{prefix}Array{}", self.span(array.range))?;
                for item in &array.items {
                    self.format_expression(item, indent + 1, w)?;
                }
                Ok(())
            }
            Value::Object(object) => {
                writeln!(w, "{prefix}Object{}", self.span(object.range))?;
                for (key, item) in &object.members {
                    let marker = if object.default.as_ref() == Some(key) { "*" } else { "" };
                    writeln!(w, "{prefix}  Key {marker}{key}")?;
                    self.format_expression(item, indent + 2, w)?;
                }
                Ok(())
            }
        }
    }

    fn format_expression(
        &self,
        expr: &Expression,
        indent: usize,
        w: &mut impl Write,
    ) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        let span = self.span(expr.range());
        match expr {
            Expression::Integer { value, .. } => writeln!(w, "{prefix}Integer {value}{span}"),
            Expression::Identifier(id) => writeln!(w, "{prefix}Ident {}{span}", id.name),
            Expression::Variable { id, .. } => writeln!(w, "{prefix}Variable ${}{span}", id.name),
            Expression::Global { id, .. } => writeln!(w, "{prefix}Global @{}{span}", id.name),
            Expression::This { .. } => writeln!(w, "{prefix}This{span}"),
            Expression::Value(value) => self.format_value(value, indent, w),
            Expression::Parenthesis { inner, .. } => {
                writeln!(w, "{prefix}Paren{span}")?;
                self.format_expression(inner, indent + 1, w)
            }
            Expression::Call { callee, args, .. } => {
                writeln!(w, "{prefix}Call {}{span}", callee.name)?;
                for arg in args {
                    self.format_expression(arg, indent + 1, w)?;
                }
                Ok(())
            }
            Expression::Attribute { base, key, .. } => {
                writeln!(w, "{prefix}Attribute {}{span}", base.name)?;
                self.format_expression(key, indent + 1, w)
            }
            Expression::Member { base, index, .. } => {
                writeln!(w, "{prefix}Member {}{span}", base.name)?;
                self.format_expression(index, indent + 1, w)
            }
            Expression::Unary { op, arg, .. } => {
                writeln!(w, "{prefix}Unary {}{span}", op.as_str())?;
                self.format_expression(arg, indent + 1, w)
            }
            Expression::Binary {
                op, left, right, ..
            } => {
                writeln!(w, "{prefix}Binary {}{span}", op.as_str())?;
                self.format_expression(left, indent + 1, w)?;
                self.format_expression(right, indent + 1, w)
            }
            Expression::Logical {
                op, left, right, ..
            } => {
                writeln!(w, "{prefix}Logical {}{span}", op.as_str())?;
                self.format_expression(left, indent + 1, w)?;
                self.format_expression(right, indent + 1, w)
            }
            Expression::Conditional {
                test,
                consequent,
                alternate,
                ..
            } => {
                writeln!(w, "{prefix}Conditional{span}")?;
                self.format_expression(test, indent + 1, w)?;
                self.format_expression(consequent, indent + 1, w)?;
                self.format_expression(alternate, indent + 1, w)
            }
        }
    }

    fn span(&self, range: TextRange) -> String {
        if !self.spans {
            return String::new();
        }
        format!(" @{}..{}", u32::from(range.start()), u32::from(range.end()))
    }
}
