pub mod name;
pub mod record;
pub mod record_type;

pub use name::DnsName;
pub use record::DnsRecord;
pub use record_type::RecordType;
