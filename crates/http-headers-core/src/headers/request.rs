//! Headers of an HTTP request.

use chrono::{DateTime, Utc};

use crate::error::{Error, Result};
use crate::headers::header_info::HeaderKind;
use crate::headers::http_headers::HttpHeaders;
use crate::headers::known;
use crate::headers::value::HeaderValue;
use crate::parser::primitives::{try_parse_email, try_parse_host};
use crate::types::{
    AuthenticationHeaderValue, CacheControlHeaderValue, EntityTagHeaderValue, HeaderUri,
    MediaTypeWithQualityHeaderValue, NameValueHeaderValue, NameValueWithParametersHeaderValue,
    ProductHeaderValue, ProductInfoHeaderValue, RangeConditionHeaderValue, RangeHeaderValue,
    StringWithQualityHeaderValue, TransferCodingHeaderValue, TransferCodingWithQualityHeaderValue,
    ViaHeaderValue, WarningHeaderValue,
};

const CONTINUE: &str = "100-continue";

/// Request headers, with typed accessors for every request and general header.
///
/// Content headers are rejected; response headers are stored without parsing.
#[derive(Debug, Clone)]
pub struct HttpRequestHeaders {
    headers: HttpHeaders,
}

header_collection_wrapper!(HttpRequestHeaders);

impl HttpRequestHeaders {
    pub fn new() -> Self {
        HttpRequestHeaders {
            headers: HttpHeaders::with_kind(HeaderKind::REQUEST),
        }
    }

    general_headers!();

    list_header!(accept, known::ACCEPT, MediaTypeWithQualityHeaderValue);
    list_header!(accept_charset, known::ACCEPT_CHARSET, StringWithQualityHeaderValue);
    list_header!(accept_encoding, known::ACCEPT_ENCODING, StringWithQualityHeaderValue);
    list_header!(accept_language, known::ACCEPT_LANGUAGE, StringWithQualityHeaderValue);
    list_header!(expect, known::EXPECT, NameValueWithParametersHeaderValue);
    list_header!(if_match, known::IF_MATCH, EntityTagHeaderValue);
    list_header!(if_none_match, known::IF_NONE_MATCH, EntityTagHeaderValue);
    list_header!(
        /// Transfer codings the client accepts; may be empty.
        te,
        known::TE,
        TransferCodingWithQualityHeaderValue
    );
    list_header!(user_agent, known::USER_AGENT, ProductInfoHeaderValue);

    single_header!(authorization, set_authorization, known::AUTHORIZATION, AuthenticationHeaderValue);
    single_header!(if_modified_since, set_if_modified_since, known::IF_MODIFIED_SINCE, DateTime<Utc>);
    single_header!(if_range, set_if_range, known::IF_RANGE, RangeConditionHeaderValue);
    single_header!(if_unmodified_since, set_if_unmodified_since, known::IF_UNMODIFIED_SINCE, DateTime<Utc>);
    single_header!(
        proxy_authorization,
        set_proxy_authorization,
        known::PROXY_AUTHORIZATION,
        AuthenticationHeaderValue
    );
    single_header!(range, set_range, known::RANGE, RangeHeaderValue);
    single_header!(referer, set_referer, known::REFERER, HeaderUri);

    /// The `From` mailbox.
    pub fn from(&mut self) -> Option<&str> {
        self.headers.typed_value::<String>(&known::FROM).map(String::as_str)
    }

    pub fn set_from(&mut self, mailbox: Option<&str>) -> Result<()> {
        let value = match mailbox {
            Some(mailbox) => Some(try_parse_email(mailbox).ok_or_else(|| Error::invalid_format(mailbox))?),
            None => None,
        };
        self.headers.store_value(&known::FROM, value.map(HeaderValue::Text));
        Ok(())
    }

    /// The `Host` authority, `host[:port]`.
    pub fn host(&mut self) -> Option<&str> {
        self.headers.typed_value::<String>(&known::HOST).map(String::as_str)
    }

    pub fn set_host(&mut self, host: Option<&str>) -> Result<()> {
        let value = match host {
            Some(host) => Some(try_parse_host(host).ok_or_else(|| Error::invalid_format(host))?),
            None => None,
        };
        self.headers.store_value(&known::HOST, value.map(HeaderValue::Text));
        Ok(())
    }

    pub fn max_forwards(&mut self) -> Option<i32> {
        self.headers.typed_value::<i32>(&known::MAX_FORWARDS).copied()
    }

    /// Sets the remaining hop count, which may not be negative.
    pub fn set_max_forwards(&mut self, hops: Option<i32>) -> Result<()> {
        if let Some(hops) = hops {
            if hops < 0 {
                return Err(Error::out_of_range("max_forwards", hops));
            }
        }
        self.headers.store_value(&known::MAX_FORWARDS, hops.map(HeaderValue::Int));
        Ok(())
    }

    /// True if `Expect` carries `100-continue`.
    pub fn expect_continue(&mut self) -> bool {
        self.headers
            .has_list_value::<NameValueWithParametersHeaderValue>(&known::EXPECT, |expectation| {
                expectation.name().eq_ignore_ascii_case(CONTINUE)
            })
    }

    pub fn set_expect_continue(&mut self, expect: bool) {
        self.headers.set_list_flag::<NameValueWithParametersHeaderValue>(
            &known::EXPECT,
            CONTINUE,
            expect,
            |expectation| expectation.name().eq_ignore_ascii_case(CONTINUE),
        );
    }
}
