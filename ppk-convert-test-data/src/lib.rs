//! Test data shared between the ppk-convert crates.

// Unencrypted RSA-1344 key, private section spans exactly 14 base64 lines.
pub const PPK_RSA_1344: &str = include_str!("../test_assets/ppk/rsa-1344.ppk");
pub const PPK_RSA_1344_CONVERTED: &str = include_str!("../test_assets/pem/rsa-1344-converted.pem");

// Unencrypted RSA-2048 key, private section spans 20 base64 lines.
// Only convertible when the line count is taken from the `Private-Lines` marker.
pub const PPK_RSA_2048: &str = include_str!("../test_assets/ppk/rsa-2048.ppk");
pub const PPK_RSA_2048_CONVERTED: &str = include_str!("../test_assets/pem/rsa-2048-converted.pem");
