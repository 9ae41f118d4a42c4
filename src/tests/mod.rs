mod pluck;


#[cfg(test)]
pub mod test_util {
    use crate::Value;

    pub fn value(input: &str) -> Value {
        serde_json::from_str(input).expect("valid json")
    }

    pub fn json(value: &Value) -> String {
        serde_json::to_string(value).expect("serialized")
    }
}
