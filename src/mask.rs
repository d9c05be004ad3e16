use serde::Serialize;

/// Mask an identifier keeping the last 4 characters so it can still be
/// correlated with provider dashboards.
pub fn mask_reference(value: &str) -> String {
    let len = value.len();
    if len > 4 && value.is_ascii() {
        "*".repeat(len - 4) + &value[len - 4..]
    } else {
        value.to_string()
    }
}

/// Return true if a key name likely holds a provider payment identifier.
fn is_payment_id_key(key: &str) -> bool {
    let k = key.to_lowercase();
    k.ends_with("payment_id") || k == "collection_id"
}

/// Return true if a key name likely holds a merchant-side reference.
fn is_reference_key(key: &str) -> bool {
    let k = key.to_lowercase();
    k.contains("reference") || k == "preference_id" || k == "merchant_order_id"
}

pub fn secure_serializable(v: impl Serialize) -> serde_json::Value {
    let value = serde_json::to_value(v).expect("serialization is infallible");
    secure_value(&value)
}

pub fn secure_value(v: &serde_json::Value) -> serde_json::Value {
    use serde_json::Value;

    match v {
        Value::Object(map) => {
            let mut new = serde_json::Map::with_capacity(map.len());
            for (k, val) in map {
                let sensitive = is_payment_id_key(k) || is_reference_key(k);
                let new_val = match val {
                    Value::String(s) if sensitive => Value::String(mask_reference(s)),
                    Value::Number(n) if sensitive => Value::String(mask_reference(&n.to_string())),
                    _ => secure_value(val),
                };
                new.insert(k.clone(), new_val);
            }
            Value::Object(new)
        }
        Value::Array(arr) => Value::Array(arr.iter().map(secure_value).collect()),
        // primitives that are not objects: leave them as-is
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    #[test]
    fn masks_payment_id_keeping_suffix() {
        let value = super::secure_value(&json!({"payment_id": "123456789"}));
        assert_eq!(value["payment_id"], "*****6789");
    }

    #[test]
    fn short_values_left_untouched() {
        assert_eq!(super::mask_reference("999"), "999");
    }

    #[test]
    fn status_stays_readable() {
        let value = super::secure_value(&json!({
            "status": "approved",
            "external_reference": "res-20260806",
        }));
        assert_eq!(value["status"], "approved");
        assert_eq!(value["external_reference"], "********0806");
    }
}
