//! Package download, verification, and unpack.
//!
//! The archive and its checksum sidecar come from a fixed repository URL;
//! the transport's default timeouts apply and no retries are attempted.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::application::ports::PackageFetcher;

/// Archive name published by the package repository.
pub const PACKAGE_FILENAME: &str = "miniond-latest.tar.gz";

/// Production [`PackageFetcher`] — HTTP download with SHA-256 verification.
pub struct HttpPackageFetcher {
    base_url: String,
}

impl HttpPackageFetcher {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl PackageFetcher for HttpPackageFetcher {
    fn fetch(&self, dest: &Path) -> Result<()> {
        std::fs::create_dir_all(dest)
            .with_context(|| format!("creating install directory {}", dest.display()))?;

        let archive_url = format!("{}/{PACKAGE_FILENAME}", self.base_url);
        let checksum_url = format!("{archive_url}.sha256");
        let archive_path = dest.join(PACKAGE_FILENAME);

        info!(url = %archive_url, "downloading agent package");
        download(&archive_url, &archive_path)?;

        let expected = fetch_checksum(&checksum_url)?;
        let actual = sha256_file(&archive_path)?;
        anyhow::ensure!(
            actual == expected,
            "checksum mismatch for {PACKAGE_FILENAME}: expected {expected}, got {actual}"
        );
        debug!(sha256 = %actual, "package verified");

        unpack(&archive_path, dest)?;
        std::fs::remove_file(&archive_path)
            .with_context(|| format!("removing {}", archive_path.display()))?;
        info!("package unpacked into {}", dest.display());
        Ok(())
    }
}

fn download(url: &str, dest: &Path) -> Result<()> {
    let response = ureq::get(url)
        .call()
        .with_context(|| format!("fetching {url}"))?;
    let mut reader = response.into_reader();
    let mut file =
        File::create(dest).with_context(|| format!("creating {}", dest.display()))?;
    std::io::copy(&mut reader, &mut file)
        .with_context(|| format!("writing {}", dest.display()))?;
    Ok(())
}

fn fetch_checksum(url: &str) -> Result<String> {
    let body = ureq::get(url)
        .call()
        .with_context(|| format!("fetching {url}"))?
        .into_string()
        .context("reading checksum response")?;
    parse_checksum(&body).with_context(|| format!("parsing checksum from {url}"))
}

/// Extract the hash from a `sha256sum`-style line (`<hex>  <filename>`).
fn parse_checksum(body: &str) -> Result<String> {
    body.split_whitespace()
        .next()
        .filter(|token| token.len() == 64 && token.chars().all(|c| c.is_ascii_hexdigit()))
        .map(str::to_ascii_lowercase)
        .ok_or_else(|| anyhow::anyhow!("no SHA-256 hash found in checksum file"))
}

/// Compute the SHA-256 hash of a file as lowercase hex.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn sha256_file(path: &Path) -> Result<String> {
    let mut file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let mut hasher = Sha256::new();
    let mut buf = [0u8; 64 * 1024];
    loop {
        let n = file
            .read(&mut buf)
            .with_context(|| format!("reading {}", path.display()))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hex_encode(&hasher.finalize()))
}

fn unpack(archive: &Path, dest: &Path) -> Result<()> {
    let file = File::open(archive).with_context(|| format!("opening {}", archive.display()))?;
    tar::Archive::new(GzDecoder::new(file))
        .unpack(dest)
        .with_context(|| format!("unpacking {} into {}", archive.display(), dest.display()))?;
    Ok(())
}

/// Encode bytes as lowercase hex string.
#[must_use]
fn hex_encode(bytes: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut out = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        out.push(char::from(HEX[(b >> 4) as usize]));
        out.push(char::from(HEX[(b & 0xf) as usize]));
    }
    out
}
