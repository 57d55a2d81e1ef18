//! Header names sent to the API.

use http::HeaderName;

/// A tenant identifier header.
pub const TENANT_ID: HeaderName = HeaderName::from_static("x-tenant-id");
/// A development role header.
pub const DEV_ROLE: HeaderName = HeaderName::from_static("x-dev-role");
/// A development subject header.
pub const DEV_SUB: HeaderName = HeaderName::from_static("x-dev-sub");
