// ── Vec2i ─────────────────────────────────────────────────────────────────

/// 2D integer vector, written `[x, y]` in markup.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Vec2i {
    pub x: i32,
    pub y: i32,
}

impl Vec2i {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

// ── PropertyValue ─────────────────────────────────────────────────────────

/// A tagged property value as emitted by the push parser.
///
/// `Enum` is only produced for properties with a registered variant set; the
/// parser validates membership before the value ever reaches a handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    Str(String),
    Int(i32),
    Bool(bool),
    Vec2i(Vec2i),
    Enum(String),
}

/// Discriminant of a [`PropertyValue`], used to key assignment rules.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ValueKind {
    Str,
    Int,
    Bool,
    Vec2i,
    Enum,
}

impl PropertyValue {
    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            PropertyValue::Str(_) => ValueKind::Str,
            PropertyValue::Int(_) => ValueKind::Int,
            PropertyValue::Bool(_) => ValueKind::Bool,
            PropertyValue::Vec2i(_) => ValueKind::Vec2i,
            PropertyValue::Enum(_) => ValueKind::Enum,
        }
    }

    /// The value as `&str` if it is a `Str`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// The value as `&str` if it is an `Enum` variant name.
    pub fn as_enum(&self) -> Option<&str> {
        match self {
            PropertyValue::Enum(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// The value as `&str` if it is either a `Str` or an `Enum`.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            PropertyValue::Str(s) | PropertyValue::Enum(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            PropertyValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_vec2i(&self) -> Option<Vec2i> {
        match self {
            PropertyValue::Vec2i(v) => Some(*v),
            _ => None,
        }
    }
}
