//! Paths of the two resources the client talks to.
//!
//! Both sides build their routes from these constants so the client and the
//! service cannot drift apart.

/// Collection of products, read-only for the client.
pub const PRODUCTS_PATH: &str = "/products";

/// Collection of submitted feedback records.
pub const EVALUATIONS_PATH: &str = "/evaluations";

/// Joins a configured base URL with a resource path.
///
/// Trailing slashes on `base` are dropped so `"http://host:3000/"` and
/// `"http://host:3000"` resolve the same way. An empty base yields the bare
/// path, which the browser resolves against the page origin.
pub fn endpoint(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_trims_trailing_slash() {
        assert_eq!(
            endpoint("http://192.168.0.18:3000/", PRODUCTS_PATH),
            "http://192.168.0.18:3000/products"
        );
    }

    #[test]
    fn endpoint_with_empty_base_is_relative() {
        assert_eq!(endpoint("", EVALUATIONS_PATH), "/evaluations");
    }
}
