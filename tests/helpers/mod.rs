// Test Helper Modules
//
// Shared by the HTTP-level test binaries. Include with:
//
//   #[path = "../helpers/mod.rs"]
//   mod helpers;
//
// Example:
//   #[actix_web::test]
//   async fn test_single_week() {
//       let response = get(&sales_uri("start=2025-01-01&end=2025-01-01")).await;
//       assert_ok(&response);
//   }

#![allow(dead_code)]


// Re-export commonly used types and functions
pub use assertions::*;
pub use test_app::*;
