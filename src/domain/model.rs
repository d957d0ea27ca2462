use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::IpAddr;

/// Raw input handed to a handler by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Payload(Vec<u8>);

impl Payload {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// 以 UTF-8 解碼，無效位元組視為錯誤而非替換字元
    pub fn into_text(self) -> Result<String> {
        Ok(String::from_utf8(self.0)?)
    }

    /// 無效位元組以 U+FFFD 取代
    pub fn to_text_lossy(&self) -> String {
        String::from_utf8_lossy(&self.0).into_owned()
    }
}

impl From<&str> for Payload {
    fn from(value: &str) -> Self {
        Self(value.as_bytes().to_vec())
    }
}

impl From<String> for Payload {
    fn from(value: String) -> Self {
        Self(value.into_bytes())
    }
}

impl From<Vec<u8>> for Payload {
    fn from(value: Vec<u8>) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressFamily {
    #[default]
    Any,
    Ipv4,
    Ipv6,
}

impl AddressFamily {
    pub fn matches(&self, addr: &IpAddr) -> bool {
        match self {
            AddressFamily::Any => true,
            AddressFamily::Ipv4 => addr.is_ipv4(),
            AddressFamily::Ipv6 => addr.is_ipv6(),
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressFamily::Any => write!(f, "any"),
            AddressFamily::Ipv4 => write!(f, "ipv4"),
            AddressFamily::Ipv6 => write!(f, "ipv6"),
        }
    }
}

impl std::str::FromStr for AddressFamily {
    type Err = crate::utils::error::HandlerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "any" | "0" | "" => Ok(AddressFamily::Any),
            "ipv4" | "4" => Ok(AddressFamily::Ipv4),
            "ipv6" | "6" => Ok(AddressFamily::Ipv6),
            other => Err(crate::utils::error::HandlerError::InvalidConfigValueError {
                field: "resolver.family".to_string(),
                value: other.to_string(),
                reason: "Valid families: any, ipv4, ipv6".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DegreeType {
    #[serde(rename = "C")]
    Celsius,
    #[serde(rename = "F")]
    Fahrenheit,
}

impl DegreeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DegreeType::Celsius => "C",
            DegreeType::Fahrenheit => "F",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherQuery {
    pub search: String,
    pub degree_type: DegreeType,
}

/// 單次呼叫的回應封裝，給 CLI 與 Lambda 輸出用
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invocation<T> {
    pub handler: String,
    pub result: T,
    pub elapsed_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_decodes_utf8() {
        let payload = Payload::from("example.com");
        assert_eq!(payload.into_text().unwrap(), "example.com");
    }

    #[test]
    fn test_payload_rejects_invalid_utf8() {
        let payload = Payload::new(vec![0x66, 0x6f, 0xff, 0xfe]);
        assert!(payload.into_text().is_err());
    }

    #[test]
    fn test_payload_lossy_text() {
        let payload = Payload::new(vec![b'Z', 0xfc, b'r', b'i', b'c', b'h']);
        assert_eq!(payload.to_text_lossy(), "Z\u{FFFD}rich");
        assert_eq!(Payload::from("Zürich").to_text_lossy(), "Zürich");
    }

    #[test]
    fn test_address_family_parse() {
        assert_eq!("IPv4".parse::<AddressFamily>().unwrap(), AddressFamily::Ipv4);
        assert_eq!("6".parse::<AddressFamily>().unwrap(), AddressFamily::Ipv6);
        assert_eq!("any".parse::<AddressFamily>().unwrap(), AddressFamily::Any);
        assert!("ipx".parse::<AddressFamily>().is_err());
    }

    #[test]
    fn test_address_family_matches() {
        let v4: IpAddr = "127.0.0.1".parse().unwrap();
        let v6: IpAddr = "::1".parse().unwrap();

        assert!(AddressFamily::Any.matches(&v4));
        assert!(AddressFamily::Ipv4.matches(&v4));
        assert!(!AddressFamily::Ipv4.matches(&v6));
        assert!(AddressFamily::Ipv6.matches(&v6));
    }

    #[test]
    fn test_degree_type_serde() {
        assert_eq!(serde_json::to_string(&DegreeType::Celsius).unwrap(), "\"C\"");
        assert_eq!(DegreeType::Fahrenheit.as_str(), "F");
    }
}
