//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! Each type mirrors a core type but uses C-compatible representations:
//! `*mut c_char` instead of `String`, a pointer/length pair instead of `Vec`,
//! and enums with explicit discriminants. Conversion functions live here to
//! keep `lib.rs` focused on the `extern "C"` surface.

use std::ffi::CString;
use std::os::raw::c_char;

use profile_core::{HttpMethod, HttpRequest, LookupError, ProfileClient, UserProfile};

/// Opaque handle to a `ProfileClient`. C callers receive a pointer to this
/// and pass it back into every FFI function.
pub struct FfiProfileClient {
    pub(crate) inner: ProfileClient,
}

/// Move `s` onto the C heap. Interior NUL bytes are dropped rather than
/// failing the whole conversion.
pub(crate) fn c_string(s: String) -> *mut c_char {
    CString::new(s)
        .unwrap_or_else(|err| {
            let mut bytes = err.into_vec();
            bytes.retain(|&b| b != 0);
            CString::new(bytes).unwrap_or_default()
        })
        .into_raw()
}

pub(crate) fn optional_c_string(s: Option<String>) -> *mut c_char {
    s.map(c_string).unwrap_or(std::ptr::null_mut())
}

/// Free a string produced by `c_string`. Null is ignored.
pub(crate) fn free_c_string(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// HTTP method as a C enum.
#[repr(C)]
pub enum FfiHttpMethod {
    Get = 0,
}

impl From<HttpMethod> for FfiHttpMethod {
    fn from(m: HttpMethod) -> Self {
        match m {
            HttpMethod::Get => FfiHttpMethod::Get,
        }
    }
}

/// A single HTTP header as a key-value pair of C strings.
#[repr(C)]
pub struct FfiHeader {
    pub key: *mut c_char,
    pub value: *mut c_char,
}

/// An HTTP request described as C-compatible plain data.
///
/// Built by `profile_build_fetch_user`. The C caller executes the request
/// and passes the response back through `profile_parse_fetch_user`.
#[repr(C)]
pub struct FfiHttpRequest {
    pub method: FfiHttpMethod,
    pub url: *mut c_char,
    pub headers: *mut FfiHeader,
    pub headers_len: u32,
}

impl FfiHttpRequest {
    /// Convert a core `HttpRequest` into a heap-allocated `FfiHttpRequest`.
    pub(crate) fn from_core(req: HttpRequest) -> *mut Self {
        let headers_len = req.headers.len() as u32;
        let headers = if req.headers.is_empty() {
            std::ptr::null_mut()
        } else {
            let headers: Box<[FfiHeader]> = req
                .headers
                .into_iter()
                .map(|(key, value)| FfiHeader {
                    key: c_string(key),
                    value: c_string(value),
                })
                .collect();
            Box::into_raw(headers) as *mut FfiHeader
        };

        Box::into_raw(Box::new(FfiHttpRequest {
            method: req.method.into(),
            url: c_string(req.url),
            headers,
            headers_len,
        }))
    }
}

// ---------------------------------------------------------------------------
// Response input (caller-provided, not heap-allocated by us)
// ---------------------------------------------------------------------------

/// An HTTP response described as C-compatible plain data.
///
/// The C caller constructs this on the stack after executing a request, then
/// passes a pointer to `profile_parse_fetch_user`. The FFI layer reads but
/// does not free these fields. A null `body` is treated as empty.
#[repr(C)]
pub struct FfiHttpResponse {
    pub status: u16,
    pub body: *const c_char,
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Error codes returned in `FfiLookupResult`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiErrorCode {
    Ok = 0,
    InvalidUrl = 1,
    InvalidResponse = 2,
    InvalidData = 3,
    Transport = 4,
    Panic = 5,
    NullArg = 6,
}

impl From<&LookupError> for FfiErrorCode {
    fn from(err: &LookupError) -> Self {
        match err {
            LookupError::InvalidUrl(_) => FfiErrorCode::InvalidUrl,
            LookupError::InvalidResponse { .. } => FfiErrorCode::InvalidResponse,
            LookupError::InvalidData(_) => FfiErrorCode::InvalidData,
            LookupError::Transport(_) => FfiErrorCode::Transport,
        }
    }
}

/// A user profile exposed to C. `name` and `bio` may be null.
#[repr(C)]
pub struct FfiUserProfile {
    pub login: *mut c_char,
    pub avatar_url: *mut c_char,
    pub name: *mut c_char,
    pub bio: *mut c_char,
}

impl FfiUserProfile {
    fn from_core(profile: UserProfile) -> Self {
        Self {
            login: c_string(profile.login),
            avatar_url: c_string(profile.avatar_url),
            name: optional_c_string(profile.name),
            bio: optional_c_string(profile.bio),
        }
    }

    /// Free the C-string fields (but not the struct itself).
    pub(crate) fn free_fields(&self) {
        free_c_string(self.login);
        free_c_string(self.avatar_url);
        free_c_string(self.name);
        free_c_string(self.bio);
    }
}

/// Result envelope for `profile_parse_fetch_user`.
///
/// On success `error_code` is `Ok`, `error_message` is null, and `profile`
/// points to the decoded record. On failure `error_code` describes the
/// category, `error_message` is a human-readable C string, `user_message`
/// is text fit for the end user (null for `NullArg`/`Panic`), and `profile`
/// is null. `http_status` is set for `InvalidResponse`.
#[repr(C)]
pub struct FfiLookupResult {
    pub error_code: FfiErrorCode,
    pub error_message: *mut c_char,
    pub user_message: *mut c_char,
    pub http_status: u16,
    pub profile: *mut FfiUserProfile,
}

impl FfiLookupResult {
    fn boxed(self) -> *mut Self {
        Box::into_raw(Box::new(self))
    }

    /// Build a success result carrying the decoded profile.
    pub(crate) fn ok(profile: UserProfile) -> *mut Self {
        FfiLookupResult {
            error_code: FfiErrorCode::Ok,
            error_message: std::ptr::null_mut(),
            user_message: std::ptr::null_mut(),
            http_status: 0,
            profile: Box::into_raw(Box::new(FfiUserProfile::from_core(profile))),
        }
        .boxed()
    }

    /// Build an error result from a `LookupError`.
    pub(crate) fn from_error(err: LookupError) -> *mut Self {
        let error_code = FfiErrorCode::from(&err);
        let http_status = match &err {
            LookupError::InvalidResponse { status, .. } => *status,
            _ => 0,
        };

        FfiLookupResult {
            error_code,
            error_message: c_string(err.to_string()),
            user_message: c_string(err.user_message()),
            http_status,
            profile: std::ptr::null_mut(),
        }
        .boxed()
    }

    /// Build an error result for a null argument.
    pub(crate) fn null_arg(name: &str) -> *mut Self {
        Self::failure(FfiErrorCode::NullArg, format!("null argument: {name}"))
    }

    /// Build an error result for a caught panic.
    pub(crate) fn panic(msg: &str) -> *mut Self {
        Self::failure(FfiErrorCode::Panic, msg.to_string())
    }

    fn failure(error_code: FfiErrorCode, msg: String) -> *mut Self {
        FfiLookupResult {
            error_code,
            error_message: c_string(msg),
            user_message: std::ptr::null_mut(),
            http_status: 0,
            profile: std::ptr::null_mut(),
        }
        .boxed()
    }
}
