use im::OrdMap;
use std::fmt;
use std::sync::Arc;

/// Signature of a callable stored in a [`FunctionRef`].
pub type NativeFn = dyn Fn(&[Value]) -> Value + Send + Sync;

/// Represents any value that can be handed to an assertion.
///
/// The universe is closed: every kind the comparator understands has a
/// variant here, and `Symbol` stands in for kinds it deliberately refuses
/// to compare.
///
/// # Examples
///
/// ```rust
/// use attest::value::Value;
/// let n = Value::from(3.14);
/// assert_eq!(n.type_name(), "Number");
/// let s = Value::from("hello");
/// assert_eq!(s.type_name(), "String");
/// let absent = Value::default();
/// assert!(absent.is_undefined());
/// ```
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Function(FunctionRef),
    List(Vec<Value>),
    Map(OrdMap<String, Value>),
    Symbol(Symbol),
}

impl Value {
    /// Returns the type name of the value as a string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attest::value::Value;
    /// assert_eq!(Value::Bool(true).type_name(), "Bool");
    /// assert_eq!(Value::list([1, 2]).type_name(), "List");
    /// ```
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "Undefined",
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::Number(_) => "Number",
            Value::String(_) => "String",
            Value::Function(_) => "Function",
            Value::List(_) => "List",
            Value::Map(_) => "Map",
            Value::Symbol(_) => "Symbol",
        }
    }

    /// Returns true if the value is absent.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Returns true if the value is an explicit null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the contained number if this is a Number value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attest::value::Value;
    /// assert_eq!(Value::from(2).as_number(), Some(2.0));
    /// assert_eq!(Value::from("nope").as_number(), None);
    /// ```
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the contained bool if this is a Bool value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the contained string slice if this is a String value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Builds a list value from anything convertible into values.
    pub fn list<T: Into<Value>>(items: impl IntoIterator<Item = T>) -> Value {
        Value::List(items.into_iter().map(Into::into).collect())
    }

    /// Builds a map value from key/value pairs. Later duplicates win.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attest::value::Value;
    /// let m = Value::map([("a", 1), ("b", 2)]);
    /// assert_eq!(m.to_string(), r#"{"a":1,"b":2}"#);
    /// ```
    pub fn map<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Value
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Wraps a closure as a function value with a fresh identity.
    pub fn function(f: impl Fn(&[Value]) -> Value + Send + Sync + 'static) -> Value {
        Value::Function(FunctionRef::new(f))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::stringify::stringify(self))
    }
}

// ============================================================================
// FUNCTION AND SYMBOL KINDS
// ============================================================================

/// A shared callable compared by identity only.
///
/// Clones share identity with the original. Two refs built from separate
/// `new` calls never do, even when the closures are textually identical.
#[derive(Clone)]
pub struct FunctionRef {
    inner: Arc<NativeFn>,
}

impl FunctionRef {
    pub fn new(f: impl Fn(&[Value]) -> Value + Send + Sync + 'static) -> Self {
        Self { inner: Arc::new(f) }
    }

    pub fn call(&self, args: &[Value]) -> Value {
        (self.inner)(args)
    }

    /// Returns true if both refs point at the same function object.
    pub fn same_as(&self, other: &FunctionRef) -> bool {
        // Compare data pointers only; vtable pointers may differ across codegen units.
        std::ptr::eq(
            Arc::as_ptr(&self.inner) as *const (),
            Arc::as_ptr(&other.inner) as *const (),
        )
    }
}

impl fmt::Debug for FunctionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[Function]")
    }
}

/// A unique token the comparator cannot reason about. Never equal to anything.
#[derive(Debug, Clone)]
pub struct Symbol {
    description: Arc<str>,
}

impl Symbol {
    pub fn new(description: impl AsRef<str>) -> Self {
        Self {
            description: Arc::from(description.as_ref()),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Number(f64::from(n))
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Number(n as f64)
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&Value> for Value {
    fn from(v: &Value) -> Self {
        v.clone()
    }
}

impl From<FunctionRef> for Value {
    fn from(f: FunctionRef) -> Self {
        Value::Function(f)
    }
}

impl From<Symbol> for Value {
    fn from(s: Symbol) -> Self {
        Value::Symbol(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::list(items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl From<OrdMap<String, Value>> for Value {
    fn from(map: OrdMap<String, Value>) -> Self {
        Value::Map(map)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => Value::list(items),
            serde_json::Value::Object(entries) => Value::map(entries),
        }
    }
}
