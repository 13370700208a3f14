use super::SettingKey;
use crate::domain::errors::{WallchError, WallchResult};
use std::process::{Command, Stdio};

pub struct GSettingsCommand;

impl GSettingsCommand {
    fn unavailable(setting: SettingKey, reason: impl Into<String>) -> WallchError {
        WallchError::SettingUnavailable {
            schema: setting.schema,
            key: setting.key,
            reason: reason.into(),
        }
    }

    fn execute_gsettings(setting: SettingKey, args: &[&str]) -> WallchResult<String> {
        let output = Command::new("gsettings")
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|err| Self::unavailable(setting, format!("could not run gsettings: {err}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Self::unavailable(setting, stderr.trim().to_string()));
        }

        String::from_utf8(output.stdout)
            .map_err(|_| Self::unavailable(setting, "gsettings printed non UTF-8 output"))
    }

    /// Unquotes a GVariant string as printed by `gsettings get`. gsettings
    /// picks `'...'` or `"..."` depending on the content and backslash-escapes
    /// the rest. Anything that is not a quoted string is returned trimmed.
    pub fn parse_string(raw: &str) -> String {
        let raw = raw.trim();
        let quote = match raw.chars().next() {
            Some(q @ ('\'' | '"')) if raw.len() >= 2 && raw.ends_with(q) => q,
            _ => return raw.to_string(),
        };
        let inner = &raw[quote.len_utf8()..raw.len() - quote.len_utf8()];

        let mut out = String::with_capacity(inner.len());
        let mut chars = inner.chars();
        while let Some(c) = chars.next() {
            if c != '\\' {
                out.push(c);
                continue;
            }
            match chars.next() {
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some(other) => out.push(other),
                None => out.push('\\'),
            }
        }
        out
    }

    /// Formats `value` as a single-quoted GVariant string for `gsettings set`.
    pub fn quote_string(value: &str) -> String {
        let mut out = String::with_capacity(value.len() + 2);
        out.push('\'');
        for c in value.chars() {
            if c == '\'' || c == '\\' {
                out.push('\\');
            }
            out.push(c);
        }
        out.push('\'');
        out
    }

    pub fn get(setting: SettingKey) -> WallchResult<String> {
        tracing::trace!("Running: gsettings get {} {}", setting.schema, setting.key);
        let value = Self::execute_gsettings(setting, &["get", setting.schema, setting.key])?;
        Ok(Self::parse_string(&value))
    }

    pub fn set(setting: SettingKey, value: &str) -> WallchResult<()> {
        let value = Self::quote_string(value);
        tracing::debug!("Running: gsettings set {} {} {}", setting.schema, setting.key, value);
        Self::execute_gsettings(setting, &["set", setting.schema, setting.key, &value])?;
        Ok(())
    }
}
