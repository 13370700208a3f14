use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fmt;
use std::os::unix::ffi::OsStringExt;
use std::path::PathBuf;

const FILE_SCHEME: &str = "file://";

/// Strips whitespace and any surrounding single or double quotes.
pub(crate) fn strip_quotes(raw: &str) -> &str {
    raw.trim().trim_matches(|c| c == '\'' || c == '"')
}

/// Decodes `%XX` escapes. Malformed escapes are kept literally.
fn percent_decode(s: &str) -> Vec<u8> {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let decoded = s
                .get(i + 1..i + 3)
                .filter(|hex| hex.bytes().all(|b| b.is_ascii_hexdigit()))
                .and_then(|hex| u8::from_str_radix(hex, 16).ok());
            if let Some(byte) = decoded {
                out.push(byte);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    out
}

/// A wallpaper location as stored by the desktop, usually a `file://` URI.
///
/// The value is normalized on construction, so two URIs naming the same
/// setting compare equal regardless of how gsettings quoted them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct WallpaperUri(String);

impl WallpaperUri {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(strip_quotes(raw.as_ref()).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Filesystem path of the image. `file://` URIs are percent-decoded the
    /// way GNOME encodes them; a value without the scheme is taken as a path
    /// as-is.
    pub fn to_path(&self) -> PathBuf {
        match self.0.strip_prefix(FILE_SCHEME) {
            Some(encoded) => PathBuf::from(OsString::from_vec(percent_decode(encoded))),
            None => PathBuf::from(&self.0),
        }
    }
}

impl From<String> for WallpaperUri {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<WallpaperUri> for String {
    fn from(uri: WallpaperUri) -> Self {
        uri.0
    }
}

impl fmt::Display for WallpaperUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
