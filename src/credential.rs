use std::env;

use crate::errors::{BiliError, Result};

/// Login cookies. The default value is the anonymous credential.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credential {
    pub sessdata: Option<String>,
    pub bili_jct: Option<String>,
    pub buvid3: Option<String>,
    pub dedeuserid: Option<String>,
}

impl Credential {
    pub fn new(sessdata: impl Into<String>, bili_jct: impl Into<String>) -> Self {
        Self {
            sessdata: Some(sessdata.into()),
            bili_jct: Some(bili_jct.into()),
            ..Self::default()
        }
    }

    /// Reads `SESSDATA`, `BILI_JCT`, `BUVID3` and `DEDEUSERID`, loading `.env` first.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            sessdata: env::var("SESSDATA").ok(),
            bili_jct: env::var("BILI_JCT").ok(),
            buvid3: env::var("BUVID3").ok(),
            dedeuserid: env::var("DEDEUSERID").ok(),
        }
    }

    pub fn is_anonymous(&self) -> bool {
        self.sessdata.is_none()
            && self.bili_jct.is_none()
            && self.buvid3.is_none()
            && self.dedeuserid.is_none()
    }

    pub fn cookies(&self) -> Vec<(&'static str, &str)> {
        [
            ("SESSDATA", &self.sessdata),
            ("bili_jct", &self.bili_jct),
            ("buvid3", &self.buvid3),
            ("DedeUserID", &self.dedeuserid),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.as_deref().map(|v| (name, v)))
        .collect()
    }

    /// Value for a `Cookie` header, `None` when there is nothing to send.
    pub fn cookie_header(&self) -> Option<String> {
        let cookies = self.cookies();
        if cookies.is_empty() {
            return None;
        }
        Some(
            cookies
                .iter()
                .map(|(name, value)| format!("{}={}", name, value))
                .collect::<Vec<_>>()
                .join("; "),
        )
    }

    pub fn raise_for_no_sessdata(&self) -> Result<()> {
        match self.sessdata.as_deref() {
            Some(s) if !s.is_empty() => Ok(()),
            _ => Err(BiliError::CredentialNoSessdata),
        }
    }

    pub fn raise_for_no_bili_jct(&self) -> Result<()> {
        match self.bili_jct.as_deref() {
            Some(s) if !s.is_empty() => Ok(()),
            _ => Err(BiliError::CredentialNoBiliJct),
        }
    }
}
