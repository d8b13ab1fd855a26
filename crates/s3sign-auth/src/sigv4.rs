//! AWS Signature Version 4 signing.
//!
//! This module implements the header-based signing flow:
//!
//! 1. Build the canonical request from method, URI, query and the three fixed headers.
//! 2. Build the string to sign from the timestamp, credential scope and canonical request hash.
//! 3. Derive the signing key from the secret key and credential scope components.
//! 4. Compute the HMAC-SHA256 signature and assemble the `Authorization` header.
//!
//! The main entry point is [`sign_header_auth`]. Presigned URLs share steps 2-4
//! and live in [`crate::presigned`].

use hmac::{Hmac, KeyInit, Mac};
use http::{HeaderMap, HeaderValue, Method};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::canonical::{
    AMZ_DATE_HEADER, CONTENT_SHA256_HEADER, UNSIGNED_PAYLOAD, build_canonical_request,
    canonical_headers,
};
use crate::credentials::Credentials;
use crate::error::AuthError;
use crate::time::SigningTime;

/// The signing algorithm name.
pub const ALGORITHM: &str = "AWS4-HMAC-SHA256";

/// Terminal component of every credential scope.
pub const SCOPE_TERMINATOR: &str = "aws4_request";

/// Signing name of the S3 service.
pub const S3_SERVICE: &str = "s3";

type HmacSha256 = Hmac<Sha256>;

/// Every intermediate key of the SigV4 derivation cascade.
///
/// ```text
/// DateKey              = HMAC-SHA256("AWS4" + secret_key, date)
/// DateRegionKey        = HMAC-SHA256(DateKey, region)
/// DateRegionServiceKey = HMAC-SHA256(DateRegionKey, service)
/// SigningKey           = HMAC-SHA256(DateRegionServiceKey, "aws4_request")
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct SigningKeyChain {
    /// `HMAC("AWS4" + secret, datestamp)`.
    pub date_key: [u8; 32],
    /// `HMAC(date_key, region)`.
    pub region_key: [u8; 32],
    /// `HMAC(region_key, service)`.
    pub service_key: [u8; 32],
    /// `HMAC(service_key, "aws4_request")`.
    pub signing_key: [u8; 32],
}

impl std::fmt::Debug for SigningKeyChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKeyChain").finish_non_exhaustive()
    }
}

/// Run the four-stage derivation cascade.
///
/// Each stage is keyed by the previous stage's output; the message is the next
/// scope component.
#[must_use]
pub fn derive_signing_key_chain(
    secret_key: &str,
    datestamp: &str,
    region: &str,
    service: &str,
) -> SigningKeyChain {
    let date_key = hmac_sha256(format!("AWS4{secret_key}").as_bytes(), datestamp.as_bytes());
    let region_key = hmac_sha256(&date_key, region.as_bytes());
    let service_key = hmac_sha256(&region_key, service.as_bytes());
    let signing_key = hmac_sha256(&service_key, SCOPE_TERMINATOR.as_bytes());

    SigningKeyChain {
        date_key,
        region_key,
        service_key,
        signing_key,
    }
}

/// Derive the final SigV4 signing key.
///
/// # Examples
///
/// ```
/// use s3sign_auth::sigv4::derive_signing_key;
///
/// let key = derive_signing_key(
///     "wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY",
///     "20130524",
///     "us-east-1",
///     "s3",
/// );
/// assert_eq!(
///     hex::encode(key),
///     "dbb893acc010964918f1fd433add87c70e8b0db6be30c1fbeafefa5ec6ba8378"
/// );
/// ```
#[must_use]
pub fn derive_signing_key(
    secret_key: &str,
    datestamp: &str,
    region: &str,
    service: &str,
) -> [u8; 32] {
    let chain = derive_signing_key_chain(secret_key, datestamp, region, service);
    chain.signing_key
}

/// Build the credential scope `datestamp/region/service/aws4_request`.
#[must_use]
pub fn credential_scope(datestamp: &str, region: &str, service: &str) -> String {
    format!("{datestamp}/{region}/{service}/{SCOPE_TERMINATOR}")
}

/// Build the SigV4 string to sign.
///
/// Format:
/// ```text
/// AWS4-HMAC-SHA256\n
/// <ISO8601 timestamp>\n
/// <credential_scope>\n
/// <hex(SHA256(canonical_request))>
/// ```
///
/// # Examples
///
/// ```
/// use s3sign_auth::sigv4::build_string_to_sign;
///
/// let sts = build_string_to_sign(
///     "20130524T000000Z",
///     "20130524/us-east-1/s3/aws4_request",
///     "7344ae5b7ee6c3e7e6b0fe0640412a37625d1fbfff95c48bbb2dc43964946972",
/// );
/// assert!(sts.starts_with("AWS4-HMAC-SHA256\n20130524T000000Z\n"));
/// ```
#[must_use]
pub fn build_string_to_sign(
    timestamp: &str,
    credential_scope: &str,
    canonical_request_hash: &str,
) -> String {
    format!("{ALGORITHM}\n{timestamp}\n{credential_scope}\n{canonical_request_hash}")
}

/// Hex-encoded SHA-256 of a canonical request.
#[must_use]
pub fn hash_canonical_request(canonical_request: &str) -> String {
    hex::encode(Sha256::digest(canonical_request.as_bytes()))
}

/// Compute the HMAC-SHA256 signature of `data` using the given `signing_key`.
///
/// Returns the lowercase hex-encoded signature.
#[must_use]
pub fn compute_signature(signing_key: &[u8], data: &str) -> String {
    hex::encode(hmac_sha256(signing_key, data.as_bytes()))
}

/// Inputs of one header-authenticated request.
#[derive(Debug, Clone, Copy)]
pub struct HeaderAuthParams<'a> {
    /// HTTP method (GET, PUT, POST, DELETE or HEAD).
    pub method: &'a Method,
    /// Request host, e.g. `test-bucket.s3.fr-par.scw.cloud`.
    pub host: &'a str,
    /// Canonical URI as produced by [`crate::canonical::normalize_path`].
    pub canonical_uri: &'a str,
    /// Canonical query string as produced by [`crate::canonical::canonical_query_string`].
    pub canonical_query: &'a str,
    /// Timestamp pair for this request.
    pub time: &'a SigningTime,
    /// Signing credentials.
    pub credentials: &'a Credentials,
    /// Region of the credential scope.
    pub region: &'a str,
    /// Service of the credential scope, normally [`S3_SERVICE`].
    pub service: &'a str,
}

/// The artifact of header-based signing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderAuthorization {
    /// Full `Authorization` header value.
    pub authorization: String,
    /// `x-amz-content-sha256` header value (always `UNSIGNED-PAYLOAD`).
    pub content_sha256: &'static str,
    /// `x-amz-date` header value.
    pub amz_date: String,
    /// `;`-joined signed header names.
    pub signed_headers: String,
    /// Hex-encoded signature.
    pub signature: String,
    /// The canonical request that was signed.
    pub canonical_request: String,
    /// The string that was signed.
    pub string_to_sign: String,
}

impl HeaderAuthorization {
    /// Merge `authorization`, `x-amz-content-sha256` and `x-amz-date` into `headers`.
    ///
    /// Other headers already present are left untouched.
    pub fn apply_to(&self, headers: &mut HeaderMap) -> Result<(), AuthError> {
        headers.insert(
            http::header::AUTHORIZATION,
            header_value("authorization", &self.authorization)?,
        );
        headers.insert(
            CONTENT_SHA256_HEADER,
            HeaderValue::from_static(self.content_sha256),
        );
        headers.insert(
            AMZ_DATE_HEADER,
            header_value(AMZ_DATE_HEADER, &self.amz_date)?,
        );
        Ok(())
    }
}

/// Sign a request with the `Authorization` header scheme.
///
/// # Errors
///
/// Returns [`AuthError::UnsupportedMethod`] for methods other than GET, PUT,
/// POST, DELETE and HEAD, and [`AuthError::InvalidInput`] for an empty host,
/// region or service or a canonical URI that does not start with `/`.
pub fn sign_header_auth(params: &HeaderAuthParams<'_>) -> Result<HeaderAuthorization, AuthError> {
    validate_method(params.method)?;
    validate_scope_inputs(params.host, params.region, params.service)?;
    validate_canonical_uri(params.canonical_uri)?;

    let timestamp = params.time.timestamp();
    let datestamp = params.time.datestamp();

    let headers = canonical_headers(params.host, UNSIGNED_PAYLOAD, timestamp);
    let signed_headers = headers.signed_headers();
    let canonical_request = build_canonical_request(
        params.method.as_str(),
        params.canonical_uri,
        params.canonical_query,
        &headers,
        UNSIGNED_PAYLOAD,
    );

    debug!(canonical_request, "Built canonical request");

    let scope = credential_scope(datestamp, params.region, params.service);
    let string_to_sign = build_string_to_sign(
        timestamp,
        &scope,
        &hash_canonical_request(&canonical_request),
    );

    debug!(string_to_sign, "Built string to sign");

    let signing_key = derive_signing_key(
        params.credentials.secret_access_key(),
        datestamp,
        params.region,
        params.service,
    );
    let signature = compute_signature(&signing_key, &string_to_sign);

    let authorization = format!(
        "{ALGORITHM} Credential={}/{scope},SignedHeaders={signed_headers},Signature={signature}",
        params.credentials.access_key_id()
    );

    debug!(
        access_key_id = %params.credentials.access_key_id(),
        host = %params.host,
        method = %params.method,
        "Signed request"
    );

    Ok(HeaderAuthorization {
        authorization,
        content_sha256: UNSIGNED_PAYLOAD,
        amz_date: timestamp.to_owned(),
        signed_headers,
        signature,
        canonical_request,
        string_to_sign,
    })
}

/// Reject methods this client never signs.
pub(crate) fn validate_method(method: &Method) -> Result<(), AuthError> {
    if [
        Method::GET,
        Method::PUT,
        Method::POST,
        Method::DELETE,
        Method::HEAD,
    ]
    .contains(method)
    {
        Ok(())
    } else {
        Err(AuthError::UnsupportedMethod(method.to_string()))
    }
}

/// Reject empty or whitespace-bearing host, region and service values.
pub(crate) fn validate_scope_inputs(
    host: &str,
    region: &str,
    service: &str,
) -> Result<(), AuthError> {
    for (name, value) in [("host", host), ("region", region), ("service", service)] {
        if value.is_empty() {
            return Err(AuthError::InvalidInput(format!("{name} is empty")));
        }
        if !value.bytes().all(|b| b.is_ascii_graphic()) {
            return Err(AuthError::InvalidInput(format!(
                "{name} contains invalid characters: {value}"
            )));
        }
    }
    if host.starts_with('.') || host.contains("..") {
        return Err(AuthError::InvalidInput(format!("malformed host: {host}")));
    }
    if region.contains('/') || service.contains('/') {
        return Err(AuthError::InvalidInput(
            "credential scope components must not contain '/'".to_owned(),
        ));
    }
    Ok(())
}

/// The canonical URI is either empty (bucket root) or rooted at `/`.
pub(crate) fn validate_canonical_uri(canonical_uri: &str) -> Result<(), AuthError> {
    if canonical_uri.is_empty() || canonical_uri.starts_with('/') {
        Ok(())
    } else {
        Err(AuthError::InvalidInput(format!(
            "canonical URI must start with '/': {canonical_uri}"
        )))
    }
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue, AuthError> {
    HeaderValue::from_str(value)
        .map_err(|_| AuthError::InvalidHeaderValue(name.to_owned()))
}

/// Compute HMAC-SHA256 and return the raw 32 bytes.
fn hmac_sha256(key: &[u8], data: &[u8]) -> [u8; 32] {
    let mut mac = <HmacSha256 as KeyInit>::new_from_slice(key)
        .expect("HMAC can accept keys of any length");
    mac.update(data);
    let mut out = [0u8; 32];
    out.copy_from_slice(&mac.finalize().into_bytes());
    out
}
