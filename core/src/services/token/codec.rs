//! JWT encoding and decoding bound to a single signing algorithm

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, TokenError};

/// The only algorithm tokens are signed and accepted with
pub const SIGNING_ALGORITHM: Algorithm = Algorithm::RS256;

/// Encodes claims into signed JWTs and decodes them back
///
/// The accepted algorithm is fixed here, never read from the token. A token
/// whose header names another known algorithm (an HMAC variant, say) fails as
/// an invalid signature; `alg: none` is not a known algorithm and the token
/// fails as malformed.
#[derive(Debug, Clone)]
pub struct TokenCodec {
    validation: Validation,
}

impl Default for TokenCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenCodec {
    /// Creates a codec for RS256 tokens with strict expiry checking
    pub fn new() -> Self {
        let mut validation = Validation::new(SIGNING_ALGORITHM);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.set_required_spec_claims(&["exp", "iat", "sub"]);

        Self { validation }
    }

    /// Signs `claims` with the private key
    ///
    /// # Errors
    ///
    /// * `TokenError::SigningFailed` - No key supplied or the key cannot sign RS256
    pub fn encode(&self, claims: &Claims, key: Option<&EncodingKey>) -> Result<String, DomainError> {
        let key = key.ok_or_else(|| TokenError::SigningFailed {
            message: "private key is not loaded".to_string(),
        })?;

        encode(&Header::new(SIGNING_ALGORITHM), claims, key).map_err(|e| {
            TokenError::SigningFailed {
                message: e.to_string(),
            }
            .into()
        })
    }

    /// Verifies the signature of `token` and returns its claims
    ///
    /// # Errors
    ///
    /// * `TokenError::InvalidSignature` - Signature does not verify against `key`,
    ///   or the token names a different algorithm
    /// * `TokenError::MalformedToken` - Not a parseable JWT carrying valid claims
    /// * `TokenError::TokenExpired` - Signature is fine but `exp` has passed
    pub fn decode(&self, token: &str, key: &DecodingKey) -> Result<Claims, DomainError> {
        decode::<Claims>(token, key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| classify_decode_error(e.kind()).into())
    }
}

fn classify_decode_error(kind: &ErrorKind) -> TokenError {
    match kind {
        ErrorKind::ExpiredSignature => TokenError::TokenExpired,
        ErrorKind::InvalidSignature
        | ErrorKind::InvalidAlgorithm
        | ErrorKind::InvalidRsaKey(_)
        | ErrorKind::InvalidKeyFormat
        | ErrorKind::Crypto(_) => TokenError::InvalidSignature,
        _ => TokenError::MalformedToken,
    }
}
