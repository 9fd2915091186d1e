use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    AAAA,
    CNAME,
    ALIAS,
    DNAME,
    MX,
    SRV,
    TXT,
    SPF,
    NS,
    PTR,
    SOA,
    CAA,
    NAPTR,
    SVCB,
    HTTPS,
    TLSA,
    SSHFP,
    DS,
    DNSKEY,
    CERT,
    LOC,
    URI,
    SMIMEA,
    /// Provider-specific or unrecognized type, kept verbatim (upper-cased).
    Other(String),
}

impl RecordType {
    pub fn parse(s: &str) -> Self {
        let upper = s.trim().to_uppercase();
        match upper.as_str() {
            "A" => RecordType::A,
            "AAAA" => RecordType::AAAA,
            "CNAME" => RecordType::CNAME,
            "ALIAS" => RecordType::ALIAS,
            "DNAME" => RecordType::DNAME,
            "MX" => RecordType::MX,
            "SRV" => RecordType::SRV,
            "TXT" => RecordType::TXT,
            "SPF" => RecordType::SPF,
            "NS" => RecordType::NS,
            "PTR" => RecordType::PTR,
            "SOA" => RecordType::SOA,
            "CAA" => RecordType::CAA,
            "NAPTR" => RecordType::NAPTR,
            "SVCB" => RecordType::SVCB,
            "HTTPS" => RecordType::HTTPS,
            "TLSA" => RecordType::TLSA,
            "SSHFP" => RecordType::SSHFP,
            "DS" => RecordType::DS,
            "DNSKEY" => RecordType::DNSKEY,
            "CERT" => RecordType::CERT,
            "LOC" => RecordType::LOC,
            "URI" => RecordType::URI,
            "SMIMEA" => RecordType::SMIMEA,
            _ => RecordType::Other(upper),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::CNAME => "CNAME",
            RecordType::ALIAS => "ALIAS",
            RecordType::DNAME => "DNAME",
            RecordType::MX => "MX",
            RecordType::SRV => "SRV",
            RecordType::TXT => "TXT",
            RecordType::SPF => "SPF",
            RecordType::NS => "NS",
            RecordType::PTR => "PTR",
            RecordType::SOA => "SOA",
            RecordType::CAA => "CAA",
            RecordType::NAPTR => "NAPTR",
            RecordType::SVCB => "SVCB",
            RecordType::HTTPS => "HTTPS",
            RecordType::TLSA => "TLSA",
            RecordType::SSHFP => "SSHFP",
            RecordType::DS => "DS",
            RecordType::DNSKEY => "DNSKEY",
            RecordType::CERT => "CERT",
            RecordType::LOC => "LOC",
            RecordType::URI => "URI",
            RecordType::SMIMEA => "SMIMEA",
            RecordType::Other(name) => name,
        }
    }

    /// CNAME-like types whose whole content names another record.
    pub fn is_alias(&self) -> bool {
        matches!(self, RecordType::CNAME | RecordType::ALIAS | RecordType::DNAME)
    }

    pub fn is_address(&self) -> bool {
        matches!(self, RecordType::A | RecordType::AAAA)
    }

    /// Types whose root-level records get grouped under the value they point at.
    pub fn is_reroot_candidate(&self) -> bool {
        self.is_address() || self.is_alias()
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}
