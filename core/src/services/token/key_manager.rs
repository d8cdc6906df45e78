//! RS256 key management for JWT signing and verification
//!
//! The manager owns one RSA keypair for the lifetime of the process. The pair
//! is generated and written to disk on first use, then loaded into memory
//! exactly once. After that every accessor is lock-free.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use jsonwebtoken::{DecodingKey, EncodingKey};
use once_cell::sync::OnceCell;
use rand::rngs::OsRng;
use rsa::pkcs1::{DecodeRsaPrivateKey, EncodeRsaPrivateKey};
use rsa::pkcs8::{DecodePrivateKey, EncodePublicKey, LineEnding};
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};
use tracing::{debug, info};

use passage_shared::config::JwtConfig;

use crate::errors::{DomainError, KeyError};

/// Smallest RSA modulus accepted for signing keys
pub const MIN_KEY_BITS: usize = 2048;

/// Path marker for keys that only live in memory
const IN_MEMORY: &str = "memory";

/// Key material derived from the private key, immutable once built
struct LoadedKeys {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    public_key_pem: String,
    bits: usize,
}

impl LoadedKeys {
    fn from_private_key(private_key: &RsaPrivateKey) -> Result<Self, KeyError> {
        let bits = private_key.size() * 8;
        if bits < MIN_KEY_BITS {
            return Err(KeyError::Format {
                message: format!("RSA key is {} bits, at least {} required", bits, MIN_KEY_BITS),
            });
        }

        let private_key_pem = private_key
            .to_pkcs1_pem(LineEnding::LF)
            .map_err(|e| KeyError::Format {
                message: format!("Failed to encode private key: {}", e),
            })?;
        let public_key_pem = encode_public_key(&RsaPublicKey::from(private_key))?;

        let encoding_key = EncodingKey::from_rsa_pem(private_key_pem.as_bytes())
            .map_err(|e| KeyError::Format {
                message: format!("Invalid private key format: {}", e),
            })?;
        let decoding_key = DecodingKey::from_rsa_pem(public_key_pem.as_bytes())
            .map_err(|e| KeyError::Format {
                message: format!("Invalid public key format: {}", e),
            })?;

        Ok(Self {
            encoding_key,
            decoding_key,
            public_key_pem,
            bits,
        })
    }
}

/// Manager for the RS256 keypair used in JWT operations
///
/// Share it behind an `Arc`; all methods take `&self`.
pub struct Rs256KeyManager {
    /// Path to private key file
    private_key_path: PathBuf,
    /// Path to public key file
    public_key_path: PathBuf,
    /// Set at most once
    keys: OnceCell<LoadedKeys>,
    /// Serializes first-time generation and loading
    init_lock: Mutex<()>,
}

impl std::fmt::Debug for Rs256KeyManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rs256KeyManager")
            .field("private_key_path", &self.private_key_path)
            .field("public_key_path", &self.public_key_path)
            .field("loaded", &self.is_loaded())
            .finish()
    }
}

impl Rs256KeyManager {
    /// Creates a key manager for the given key file locations
    ///
    /// Nothing is read or written until [`ensure_keys`](Self::ensure_keys)
    /// is called.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use passage_core::services::token::Rs256KeyManager;
    ///
    /// let key_manager = Rs256KeyManager::new(
    ///     "keys/jwt_private_key.pem",
    ///     "keys/jwt_public_key.pem",
    /// );
    /// key_manager.ensure_keys().expect("signing keys unavailable");
    /// ```
    pub fn new<P: AsRef<Path>>(private_key_path: P, public_key_path: P) -> Self {
        Self {
            private_key_path: private_key_path.as_ref().to_path_buf(),
            public_key_path: public_key_path.as_ref().to_path_buf(),
            keys: OnceCell::new(),
            init_lock: Mutex::new(()),
        }
    }

    /// Creates a key manager from the JWT configuration
    pub fn from_config(config: &JwtConfig) -> Self {
        Self::new(&config.private_key_path, &config.public_key_path)
    }

    /// Creates an already-loaded key manager from a PEM private key
    ///
    /// Accepts PKCS#1 (`RSA PRIVATE KEY`) and PKCS#8 (`PRIVATE KEY`) PEM. The
    /// public half is derived from the private key. Nothing touches disk.
    pub fn from_private_key_pem(private_key_pem: &str) -> Result<Self, DomainError> {
        let private_key = parse_private_key(private_key_pem)?;
        Self::from_private_key(private_key)
    }

    /// Creates an already-loaded key manager around a freshly generated pair
    ///
    /// Useful for tests and throwaway deployments; nothing touches disk.
    pub fn generate_in_memory() -> Result<Self, DomainError> {
        Self::from_private_key(generate_private_key(MIN_KEY_BITS)?)
    }

    fn from_private_key(private_key: RsaPrivateKey) -> Result<Self, DomainError> {
        let manager = Self::new(IN_MEMORY, IN_MEMORY);
        let loaded = LoadedKeys::from_private_key(&private_key)?;
        manager.keys.get_or_init(|| loaded);
        Ok(manager)
    }

    /// Makes sure a keypair exists on disk and is loaded into memory
    ///
    /// Idempotent and safe to call from any number of threads at once: the
    /// pair is generated at most once, only one caller parses the key file,
    /// and every caller that gets `Ok(())` can sign immediately afterwards.
    ///
    /// # Errors
    ///
    /// * `KeyError::Io` - The key files could not be read or written
    /// * `KeyError::Format` - The stored key could not be parsed or is too small
    pub fn ensure_keys(&self) -> Result<(), DomainError> {
        if self.keys.get().is_some() {
            return Ok(());
        }

        let _guard = self.init_lock.lock().unwrap_or_else(PoisonError::into_inner);

        // Another caller may have finished while we waited for the lock
        if self.keys.get().is_some() {
            return Ok(());
        }

        if !self.private_key_path.exists() {
            self.generate_and_persist()?;
        }

        let loaded = self.load_from_disk()?;
        info!(
            path = %self.private_key_path.display(),
            bits = loaded.bits,
            "Loaded RS256 signing key"
        );
        self.keys.get_or_init(|| loaded);

        Ok(())
    }

    /// Whether the keypair is loaded
    pub fn is_loaded(&self) -> bool {
        self.keys.get().is_some()
    }

    /// Returns the encoding key for signing JWTs, if loaded
    pub fn encoding_key(&self) -> Option<&EncodingKey> {
        self.keys.get().map(|k| &k.encoding_key)
    }

    /// Returns the decoding key for verifying JWTs, if loaded
    pub fn decoding_key(&self) -> Option<&DecodingKey> {
        self.keys.get().map(|k| &k.decoding_key)
    }

    /// Returns the PEM (SPKI) encoding of the public key
    ///
    /// # Errors
    ///
    /// * `KeyError::NotLoaded` - [`ensure_keys`](Self::ensure_keys) has not succeeded yet
    pub fn public_key_pem(&self) -> Result<&str, DomainError> {
        self.keys
            .get()
            .map(|k| k.public_key_pem.as_str())
            .ok_or_else(|| KeyError::NotLoaded.into())
    }

    /// Returns the paths to the key files
    pub fn key_paths(&self) -> (&Path, &Path) {
        (&self.private_key_path, &self.public_key_path)
    }

    fn generate_and_persist(&self) -> Result<(), DomainError> {
        info!(
            path = %self.private_key_path.display(),
            bits = MIN_KEY_BITS,
            "No signing key found, generating a new RSA keypair"
        );

        let private_key = generate_private_key(MIN_KEY_BITS)?;
        let private_key_pem = private_key
            .to_pkcs1_pem(LineEnding::LF)
            .map_err(|e| KeyError::Format {
                message: format!("Failed to encode private key: {}", e),
            })?;
        let public_key_pem = encode_public_key(&RsaPublicKey::from(&private_key))?;

        write_key_file(&self.private_key_path, private_key_pem.as_bytes(), 0o600)?;
        write_key_file(&self.public_key_path, public_key_pem.as_bytes(), 0o644)?;

        debug!(
            private_key = %self.private_key_path.display(),
            public_key = %self.public_key_path.display(),
            "Persisted RSA keypair"
        );
        Ok(())
    }

    fn load_from_disk(&self) -> Result<LoadedKeys, DomainError> {
        let private_key_pem = fs::read_to_string(&self.private_key_path).map_err(|source| {
            KeyError::Io {
                path: self.private_key_path.clone(),
                source,
            }
        })?;

        let private_key = parse_private_key(&private_key_pem)?;
        Ok(LoadedKeys::from_private_key(&private_key)?)
    }
}

fn generate_private_key(bits: usize) -> Result<RsaPrivateKey, KeyError> {
    RsaPrivateKey::new(&mut OsRng, bits).map_err(|e| KeyError::Format {
        message: format!("RSA key generation failed: {}", e),
    })
}

fn parse_private_key(pem: &str) -> Result<RsaPrivateKey, KeyError> {
    RsaPrivateKey::from_pkcs1_pem(pem)
        .or_else(|_| RsaPrivateKey::from_pkcs8_pem(pem))
        .map_err(|e| KeyError::Format {
            message: format!("Invalid private key format: {}", e),
        })
}

fn encode_public_key(public_key: &RsaPublicKey) -> Result<String, KeyError> {
    public_key
        .to_public_key_pem(LineEnding::LF)
        .map_err(|e| KeyError::Format {
            message: format!("Failed to encode public key: {}", e),
        })
}

/// Writes key material, creating parent directories as needed
fn write_key_file(path: &Path, contents: &[u8], mode: u32) -> Result<(), KeyError> {
    let io_error = |source| KeyError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error)?;
    }

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(mode);
    }

    let mut file = options.open(path).map_err(io_error)?;
    file.write_all(contents).map_err(io_error)?;
    file.sync_all().map_err(io_error)?;

    // The mode passed to open() is ignored when the file already exists
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(mode)).map_err(io_error)?;
    }
    #[cfg(not(unix))]
    let _ = mode;

    Ok(())
}
