//! Content digest of rendered markup.
//!
//! Renders are pure, so equal inputs must give equal digests. The CLI prints
//! it so two renders can be compared without diffing the HTML.

use sha2::{Digest, Sha256};

/// `sha256:<hex>` of the markup bytes.
pub fn render_digest(markup: &str) -> String {
    format!("sha256:{}", hex::encode(Sha256::digest(markup.as_bytes())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vector() {
        assert_eq!(
            render_digest(""),
            "sha256:e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_digest_differs_on_change() {
        assert_ne!(render_digest("<p>a</p>"), render_digest("<p>b</p>"));
    }
}
