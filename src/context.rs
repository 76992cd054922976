use serde::Serialize;
use serde_json::Value;
use std::fmt::{self, Debug, Display};

/// Structured context attached to a single log call.
///
/// Entries are rendered as space-separated `key=value` tokens appended to the
/// message, in insertion order. Values are JSON-encoded, so strings come out
/// quoted and numbers bare:
///
/// ```
/// use posix_syslog::context;
///
/// let ctx = context! { "code" => 500, "action" => "login" };
/// assert_eq!(ctx.to_string(), r#"code=500 action="login""#);
/// ```
///
/// A value whose `Serialize` implementation fails is kept as its `Debug`
/// rendering instead; building a context never fails, so a log call never
/// fails on malformed context.
#[derive(Clone, Debug, Default)]
pub struct Context {
    entries: Vec<(String, Value)>,
}

impl Context {
    /// Creates an empty `Context`.
    pub fn new() -> Self {
        Context::default()
    }

    /// Adds an entry.
    ///
    /// The value is converted to JSON immediately. If the conversion fails,
    /// the entry degrades to the value's `Debug` form rather than being
    /// dropped.
    pub fn insert<K, V>(&mut self, key: K, value: V) -> &mut Self
    where
        K: Into<String>,
        V: Serialize + Debug,
    {
        let value = match serde_json::to_value(&value) {
            Ok(value) => value,
            Err(_) => Value::String(format!("{:?}", value)),
        };
        self.entries.push((key.into(), value));
        self
    }

    /// Whether this context has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            // `Display` for `Value` is compact JSON and cannot fail.
            write!(f, "{}={}", key, value)?;
        }
        Ok(())
    }
}

/// Builds a [`Context`] from `key => value` pairs.
///
/// ```
/// use posix_syslog::context;
///
/// let ctx = context! { "user" => "alice", "attempts" => 3 };
/// assert_eq!(ctx.len(), 2);
/// ```
///
/// [`Context`]: struct.Context.html
#[macro_export]
macro_rules! context {
    () => { $crate::Context::new() };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut ctx = $crate::Context::new();
        $( ctx.insert($key, $value); )+
        ctx
    }};
}
