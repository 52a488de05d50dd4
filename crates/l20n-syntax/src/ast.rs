//! Syntax tree produced by the parser.
//!
//! The tree is owned: nodes hold their text, and every node records the byte
//! range it was parsed from. A [`Resource`] keeps the whitespace between
//! entries, so the input can be rebuilt from the tree and the source.

use indexmap::IndexMap;
use rowan::TextRange;
use serde::Serialize;

/// Ordered attribute map of an entry.
///
/// Inserting an existing key replaces its value and keeps the key's first position.
pub type Attributes = IndexMap<String, Value>;

/// Ordered key → expression map used by object values.
pub type Members = IndexMap<String, Expression>;

/// Top-level container for one parsed resource file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resource {
    pub body: Vec<BodyItem>,
    pub range: TextRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum BodyItem {
    Entry(Entry),
    Whitespace(Whitespace),
}

/// Skipped characters between entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Whitespace {
    pub text: String,
    pub range: TextRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum Entry {
    Entity(Entity),
    Macro(Macro),
}

impl Entry {
    pub fn id(&self) -> &Identifier {
        match self {
            Entry::Entity(e) => &e.id,
            Entry::Macro(m) => &m.id,
        }
    }

    pub fn range(&self) -> TextRange {
        match self {
            Entry::Entity(e) => e.range,
            Entry::Macro(m) => m.range,
        }
    }
}

/// `<id[index] value attr: value, ...>`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entity {
    pub id: Identifier,
    pub index: Option<Vec<Expression>>,
    /// Whitespace between the id (or index) and the value. May be empty.
    pub ws_before_value: Whitespace,
    pub value: Value,
    /// Whitespace between the value and the attributes or closing `>`. May be empty.
    pub ws_after_value: Whitespace,
    /// Present only when at least one attribute was written.
    pub attrs: Option<Attributes>,
    pub range: TextRange,
}

/// `<id($param, ...) { expression } attr: value, ...>`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Macro {
    pub id: Identifier,
    /// Parameter names without the `$` sigil.
    pub params: Vec<Identifier>,
    pub body: Expression,
    pub attrs: Option<Attributes>,
    pub range: TextRange,
}

/// A name, with any quotes from the source already stripped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Identifier {
    pub name: String,
    pub range: TextRange,
}

impl Identifier {
    pub fn as_str(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Value {
    String(StringValue),
    Array(ArrayValue),
    Object(ObjectValue),
}

impl Value {
    pub fn range(&self) -> TextRange {
        match self {
            Value::String(s) => s.range,
            Value::Array(a) => a.range,
            Value::Object(o) => o.range,
        }
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(&s.content),
            _ => None,
        }
    }
}

/// Quoted text. Escape sequences are kept verbatim in `content`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringValue {
    pub content: String,
    pub quote: char,
    pub range: TextRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArrayValue {
    pub items: Vec<Expression>,
    pub range: TextRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectValue {
    pub members: Members,
    /// Key marked with `*`, at most one per object.
    pub default: Option<String>,
    pub range: TextRange,
}

impl ObjectValue {
    /// Member selected when no key matches.
    pub fn default_member(&self) -> Option<(&str, &Expression)> {
        let key = self.default.as_deref()?;
        self.members.get_key_value(key).map(|(k, v)| (k.as_str(), v))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum Expression {
    Integer {
        value: u64,
        range: TextRange,
    },
    Identifier(Identifier),
    /// `$name`
    Variable {
        id: Identifier,
        range: TextRange,
    },
    /// `@name`
    Global {
        id: Identifier,
        range: TextRange,
    },
    /// `~`
    This {
        range: TextRange,
    },
    Value(Value),
    Parenthesis {
        inner: Box<Expression>,
        range: TextRange,
    },
    Call {
        callee: Identifier,
        args: Vec<Expression>,
        range: TextRange,
    },
    /// `base[.key]`
    Attribute {
        base: Identifier,
        key: Box<Expression>,
        range: TextRange,
    },
    /// `base[index]`
    Member {
        base: Identifier,
        index: Box<Expression>,
        range: TextRange,
    },
    Unary {
        op: UnaryOperator,
        arg: Box<Expression>,
        range: TextRange,
    },
    Binary {
        op: BinaryOperator,
        left: Box<Expression>,
        right: Box<Expression>,
        range: TextRange,
    },
    Logical {
        op: LogicalOperator,
        left: Box<Expression>,
        right: Box<Expression>,
        range: TextRange,
    },
    Conditional {
        test: Box<Expression>,
        consequent: Box<Expression>,
        alternate: Box<Expression>,
        range: TextRange,
    },
}

impl Expression {
    pub fn range(&self) -> TextRange {
        match self {
            Expression::Identifier(id) => id.range,
            Expression::Value(v) => v.range(),
            Expression::Integer { range, .. }
            | Expression::Variable { range, .. }
            | Expression::Global { range, .. }
            | Expression::This { range }
            | Expression::Parenthesis { range, .. }
            | Expression::Call { range, .. }
            | Expression::Attribute { range, .. }
            | Expression::Member { range, .. }
            | Expression::Unary { range, .. }
            | Expression::Binary { range, .. }
            | Expression::Logical { range, .. }
            | Expression::Conditional { range, .. } => *range,
        }
    }

    pub fn as_integer(&self) -> Option<u64> {
        match self {
            Expression::Integer { value, .. } => Some(*value),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum UnaryOperator {
    Not,
    Plus,
    Minus,
}

impl UnaryOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Not => "!",
            Self::Plus => "+",
            Self::Minus => "-",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BinaryOperator {
    Eq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl BinaryOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::LtEq => "<=",
            Self::GtEq => ">=",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LogicalOperator {
    And,
    Or,
}

impl LogicalOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::And => "&&",
            Self::Or => "||",
        }
    }
}

impl Resource {
    pub fn entries(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.body.iter().filter_map(|item| match item {
            BodyItem::Entry(entry) => Some(entry),
            BodyItem::Whitespace(_) => None,
        })
    }

    pub fn entities(&self) -> impl Iterator<Item = &Entity> + '_ {
        self.entries().filter_map(|entry| match entry {
            Entry::Entity(entity) => Some(entity),
            Entry::Macro(_) => None,
        })
    }

    /// Last entry with this name, matching how later definitions shadow earlier ones.
    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries().filter(|e| e.id().name == name).last()
    }

    /// Source slices for every body item, in order.
    ///
    /// Concatenated, they reproduce `source` exactly.
    pub fn fragments<'s>(&self, source: &'s str) -> impl Iterator<Item = &'s str> {
        self.body.iter().map(move |item| {
            let range = match item {
                BodyItem::Entry(entry) => entry.range(),
                BodyItem::Whitespace(ws) => ws.range,
            };
            &source[std::ops::Range::<usize>::from(range)]
        })
    }
}
