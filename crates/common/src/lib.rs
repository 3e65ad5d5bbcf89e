pub mod types;
pub mod utils;
pub mod env;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ping_type_ok() {
        let p = types::Ping::ok();
        assert!(p.success);
        assert_eq!(serde_json::to_value(&p).unwrap(), serde_json::json!({"success": true}));
    }
}
