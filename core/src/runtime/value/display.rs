use super::Value;
use std::fmt;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Number(n) => {
                if n.fract() == 0.0 && n.is_finite() {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{n}")
                }
            }
            Value::String(s) => write!(f, "{s}"),
            Value::Function(function) => {
                write!(f, "function {}() {{ [native code] }}", function.name())
            }
            Value::Class(class) => write!(f, "class {}", class.name()),
            Value::Object(obj) => {
                let obj = obj.borrow();
                let mut pairs: Vec<String> = obj
                    .properties
                    .iter()
                    .map(|(k, v)| format!("{k}: {v}"))
                    .collect();
                pairs.sort();
                write!(f, "{{ {} }}", pairs.join(", "))
            }
        }
    }
}
