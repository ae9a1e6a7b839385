//! Mapping from domain record types and classes to their `hickory_proto` counterparts.

use ferrous_dig_domain::{QueryClass, RecordType};
use hickory_proto::rr::{DNSClass, RecordType as HickoryRecordType};

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    pub fn to_hickory(record_type: &RecordType) -> HickoryRecordType {
        match record_type {
            // Basic records
            RecordType::A => HickoryRecordType::A,
            RecordType::AAAA => HickoryRecordType::AAAA,
            RecordType::CNAME => HickoryRecordType::CNAME,
            RecordType::MX => HickoryRecordType::MX,
            RecordType::TXT => HickoryRecordType::TXT,
            RecordType::PTR => HickoryRecordType::PTR,

            // Advanced records
            RecordType::SRV => HickoryRecordType::SRV,
            RecordType::SOA => HickoryRecordType::SOA,
            RecordType::NS => HickoryRecordType::NS,
            RecordType::NAPTR => HickoryRecordType::NAPTR,
            RecordType::DS => HickoryRecordType::DS,
            RecordType::DNSKEY => HickoryRecordType::DNSKEY,
            RecordType::SVCB => HickoryRecordType::SVCB,
            RecordType::HTTPS => HickoryRecordType::HTTPS,

            // Security & informational records
            RecordType::CAA => HickoryRecordType::CAA,
            RecordType::TLSA => HickoryRecordType::TLSA,
            RecordType::SSHFP => HickoryRecordType::SSHFP,
            RecordType::HINFO => HickoryRecordType::HINFO,

            RecordType::ANY => HickoryRecordType::ANY,
        }
    }

    pub fn class_to_hickory(class: &QueryClass) -> DNSClass {
        match class {
            QueryClass::IN => DNSClass::IN,
            QueryClass::CH => DNSClass::CH,
            QueryClass::HS => DNSClass::HS,
            QueryClass::NONE => DNSClass::NONE,
            QueryClass::ANY => DNSClass::ANY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_type_keeps_its_code() {
        for rt in RecordType::ALL {
            let hickory = RecordTypeMapper::to_hickory(&rt);
            assert_eq!(u16::from(hickory), rt.to_u16(), "code mismatch for {}", rt);
        }
    }

    #[test]
    fn test_class_mapping() {
        assert_eq!(RecordTypeMapper::class_to_hickory(&QueryClass::IN), DNSClass::IN);
        assert_eq!(RecordTypeMapper::class_to_hickory(&QueryClass::CH), DNSClass::CH);
    }
}
