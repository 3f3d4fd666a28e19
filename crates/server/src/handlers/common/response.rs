// Copyright (C) 2026 Ledger Tx REST Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

/// Terminal error response: the status line followed by the raw message as a plain-text body.
pub fn write_error(status: StatusCode, message: impl Into<String>) -> Response {
    (status, message.into()).into_response()
}

/// Terminal success response carrying an already-marshaled JSON body.
pub fn write_success(body: Vec<u8>) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}

/// Implements `IntoResponse` for an error type by mapping variants to status codes.
/// The body is the error's `Display` text, written through [`write_error`]. The mapping is
/// also exposed as an inherent `status()`.
///
/// An optional `inspect = path` runs `path(&err)` just before the response is written.
///
/// Usage:
/// ```ignore
/// impl_error_response!(MyError,
///     MyError::BadInput(_) => BAD_REQUEST,
///     _ => INTERNAL_SERVER_ERROR
/// );
/// impl_error_response!(OtherError, inspect = OtherError::record,
///     _ => BAD_REQUEST
/// );
/// ```
macro_rules! impl_error_response {
    ($error_type:ty, inspect = $hook:path, $($variant:pat => $status:ident),+ $(,)?) => {
        impl $error_type {
            pub(crate) fn status(&self) -> axum::http::StatusCode {
                match self {
                    $($variant => axum::http::StatusCode::$status,)+
                }
            }
        }

        impl axum::response::IntoResponse for $error_type {
            fn into_response(self) -> axum::response::Response {
                $hook(&self);
                $crate::handlers::common::write_error(self.status(), self.to_string())
            }
        }
    };
    ($error_type:ty, $($variant:pat => $status:ident),+ $(,)?) => {
        impl_error_response!($error_type, inspect = $crate::handlers::common::ignore_error,
            $($variant => $status),+);
    };
}

pub(crate) fn ignore_error<E>(_: &E) {}

pub(crate) use impl_error_response;
