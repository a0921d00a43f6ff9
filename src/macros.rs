/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// ```rust
/// use serde_jsnotation::{jsnotation, to_string};
///
/// let value = jsnotation!({
///     "name": "Alice",
///     "tags": ["a", "b"],
///     "manager": null
/// });
/// assert_eq!(
///     to_string(&value).unwrap(),
///     r#"{"name":"Alice","tags":["a","b"],"manager":null}"#
/// );
/// ```
///
/// Any other expression is captured with [`to_value`](crate::to_value);
/// expressions that fail to capture become `Null`.
#[macro_export]
macro_rules! jsnotation {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::jsnotation!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::Map::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::Map::new();
        $(
            object.insert($key.to_string(), $crate::jsnotation!($value));
        )*
        $crate::Value::Object(object)
    }};

    ($s:expr) => {{
        $crate::to_value(&$s).unwrap_or($crate::Value::Null)
    }};
}
