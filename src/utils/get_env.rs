use dotenv::dotenv;
use std::env;

pub fn get_env_var_or(key: &str, default: &str) -> String {
    dotenv().ok();
    env::var(key).unwrap_or_else(|_| default.to_string())
}

pub fn env_var_to_vec(key: &str) -> Vec<String> {
    dotenv().ok();
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod cfg_tests {
    use super::*;

    #[test]
    fn test_env_var_to_vec_splits_and_trims() {
        unsafe {
            std::env::set_var("DROPOFF_TEST_TYPES", " image/png, image/jpeg ,,application/pdf ");
        }

        let parsed = env_var_to_vec("DROPOFF_TEST_TYPES");
        assert_eq!(parsed, vec!["image/png", "image/jpeg", "application/pdf"]);

        assert!(env_var_to_vec("DROPOFF_TEST_UNSET").is_empty());
    }

    #[test]
    fn test_get_env_var_or_falls_back() {
        assert_eq!(get_env_var_or("DROPOFF_TEST_MISSING", "uploads"), "uploads");
    }
}
