//! Route segments carrying structured state as base64 encoded CBOR.

use std::{fmt::Display, str::FromStr};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;
use serde::{Deserialize, Serialize};

/// Any serde value usable as a single URL path segment.
///
/// The router needs `Display`, `FromStr` and `Default` for segment types.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct UrlParam<T>(pub T);

impl<T> From<T> for UrlParam<T> {
    fn from(value: T) -> Self {
        UrlParam(value)
    }
}

impl<T> UrlParam<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Serialize> Display for UrlParam<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut encoded = Vec::new();
        if ciborium::into_writer(&self.0, &mut encoded).is_ok() {
            write!(f, "{}", URL_SAFE.encode(encoded))?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum UrlParamError {
    Base64(base64::DecodeError),
    Cbor(ciborium::de::Error<std::io::Error>),
}

impl Display for UrlParamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base64(err) => write!(f, "url segment is not base64: {err}"),
            Self::Cbor(err) => write!(f, "url segment does not decode: {err}"),
        }
    }
}

impl<T: for<'de> Deserialize<'de>> FromStr for UrlParam<T> {
    type Err = UrlParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = URL_SAFE.decode(s.as_bytes()).map_err(UrlParamError::Base64)?;
        let value = ciborium::from_reader(std::io::Cursor::new(bytes)).map_err(UrlParamError::Cbor)?;
        Ok(UrlParam(value))
    }
}

#[cfg(test)]
mod tests {
    use common::file_library::FileKind;

    use super::*;

    #[test]
    fn kind_filter_survives_the_url() {
        for filter in [None, Some(FileKind::Video), Some(FileKind::Notes)] {
            let segment = UrlParam::from(filter).to_string();
            assert!(!segment.contains('/'));
            let parsed: UrlParam<Option<FileKind>> = segment.parse().unwrap();
            assert_eq!(parsed.into_inner(), filter);
        }
    }

    #[test]
    fn rejects_garbage_segments() {
        assert!("not base64!".parse::<UrlParam<Option<FileKind>>>().is_err());
        let wrong_shape = UrlParam::from("hello".to_string()).to_string();
        assert!(wrong_shape.parse::<UrlParam<Option<FileKind>>>().is_err());
    }
}
