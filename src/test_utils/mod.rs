#![allow(missing_docs)]

pub(crate) mod fake_api;
pub(crate) mod html;
pub(crate) mod http;
pub(crate) mod logs;

pub(crate) use fake_api::FakeTransactionsApi;
pub(crate) use html::{assert_valid_html, parse_html_document, parse_html_fragment};
pub(crate) use http::{assert_content_type, get_header};
pub(crate) use logs::capture_logs;
