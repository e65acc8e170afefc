//! Durable session storage (encrypted file)
//!
//! Entries are kept in ~/.config/murmur/session.enc, AES-256-GCM encrypted
//! with a key derived from machine-specific identifiers.

use aes_gcm::{
    Aes256Gcm, Nonce,
    aead::{Aead, KeyInit},
};
use anyhow::{Context, Result, anyhow, bail};
use rand::Rng;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::paths;

const NONCE_SIZE: usize = 12;

/// Fixed entry name the bearer token is stored under
pub const TOKEN_KEY: &str = "token";

/// Entry name for the serialized identity
pub const USER_KEY: &str = "user";

/// Get machine ID for key derivation
fn get_machine_id() -> String {
    #[cfg(target_os = "linux")]
    {
        for candidate in ["/etc/machine-id", "/var/lib/dbus/machine-id"] {
            if let Ok(id) = fs::read_to_string(candidate) {
                return id.trim().to_string();
            }
        }
    }

    dirs::home_dir()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "murmur-fallback-key".to_string())
}

/// Derive encryption key from machine-specific data
fn derive_key() -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(get_machine_id().as_bytes());
    if let Some(home) = dirs::home_dir() {
        hasher.update(home.to_string_lossy().as_bytes());
    }
    hasher.update(b"murmur-session-v1");
    hasher.finalize().into()
}

fn cipher() -> Result<Aes256Gcm> {
    Aes256Gcm::new_from_slice(&derive_key()).map_err(|_| anyhow!("Invalid session key length"))
}

/// Encrypt under a fresh nonce; the nonce is prepended to the output
fn seal(plaintext: &[u8]) -> Result<Vec<u8>> {
    let mut nonce = [0u8; NONCE_SIZE];
    rand::rng().fill(&mut nonce);
    let sealed = cipher()?
        .encrypt(Nonce::from_slice(&nonce), plaintext)
        .map_err(|_| anyhow!("Failed to encrypt session"))?;
    Ok([nonce.as_slice(), sealed.as_slice()].concat())
}

fn unseal(bytes: &[u8]) -> Result<Vec<u8>> {
    let Some((nonce, ciphertext)) = bytes.split_at_checked(NONCE_SIZE) else {
        bail!("Session file is truncated");
    };
    cipher()?
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| anyhow!("Failed to decrypt session"))
}

/// Stored entries, by name
pub type Entries = BTreeMap<String, String>;

/// Encrypted key/value file holding the session
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store at the default location
    pub fn open() -> Result<Self> {
        Ok(Self::at(paths::session_path()?))
    }

    /// Store at a specific path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File backing this store
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every stored entry; a missing file is an empty store
    ///
    /// Fails when the file exists but cannot be decrypted or parsed.
    pub fn entries(&self) -> Result<Entries> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Entries::new()),
            Err(e) => return Err(e).context("Failed to read session file"),
        };
        let json = unseal(&bytes)?;
        serde_json::from_slice(&json).context("Session file is not valid JSON")
    }

    /// Write several entries at once, overwriting existing values
    pub fn set_many(&self, entries: &[(&str, String)]) -> Result<()> {
        self.update(|stored| {
            for (key, value) in entries {
                stored.insert((*key).to_string(), value.clone());
            }
        })
    }

    /// Remove entries; missing keys are ignored
    pub fn remove(&self, keys: &[&str]) -> Result<()> {
        self.update(|stored| {
            for key in keys {
                stored.remove(*key);
            }
        })
    }

    /// Read, edit and rewrite the file; an unreadable file starts over empty
    fn update(&self, edit: impl FnOnce(&mut Entries)) -> Result<()> {
        let mut stored = self.entries().unwrap_or_else(|e| {
            tracing::warn!("Replacing unreadable session file: {e:#}");
            Entries::new()
        });
        edit(&mut stored);

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context("Failed to create session directory")?;
        }
        let sealed = seal(&serde_json::to_vec(&stored)?)?;

        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        options
            .open(&self.path)
            .and_then(|mut file| file.write_all(&sealed))
            .context("Failed to write session file")
    }
}
