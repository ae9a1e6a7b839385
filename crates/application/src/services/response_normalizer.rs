//! Converts decoded responses into display-ready [`Answer`] and [`Authority`] rows.
//!
//! Only SOA records are taken from the authority section. Answer records are
//! rendered through [`ResponseNormalizer::render_address`]; record types it
//! does not know about keep an empty address.

use ferrous_dig_domain::{Answer, Authority, LookupResult};
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::rdata::{CAA, SOA};
use hickory_proto::rr::{RData, Record};
use std::time::Duration;
use tracing::debug;

pub struct ResponseNormalizer;

impl ResponseNormalizer {
    pub fn normalize(message: &Message, rtt: Duration, nameserver: &str) -> LookupResult {
        let rtt = format!("{}ms", rtt.as_millis());
        let status = Self::rcode_to_status(message.response_code());
        let mut result = LookupResult::default();

        for record in message.name_servers() {
            let RData::SOA(soa) = record.data() else {
                continue;
            };
            let (name, record_type, ttl, class) = Self::header_fields(record);
            result.authorities.push(Authority {
                name,
                record_type,
                ttl,
                class,
                mname: Self::soa_mname(soa),
                status: status.clone(),
                rtt: rtt.clone(),
                nameserver: nameserver.to_string(),
            });
        }

        for record in message.answers() {
            let (name, record_type, ttl, class) = Self::header_fields(record);
            result.answers.push(Answer {
                name,
                record_type,
                ttl,
                class,
                address: Self::render_address(record.data()),
                rtt: rtt.clone(),
                nameserver: nameserver.to_string(),
            });
        }

        debug!(
            nameserver = nameserver,
            status = %status,
            answers = result.answers.len(),
            authorities = result.authorities.len(),
            "DNS response normalized"
        );

        result
    }

    /// Textual form of a record's data as shown in the address column.
    pub fn render_address(rdata: &RData) -> String {
        match rdata {
            RData::A(a) => a.0.to_string(),
            RData::AAAA(aaaa) => aaaa.0.to_string(),
            RData::CNAME(target) => target.0.to_utf8(),
            RData::CAA(caa) => Self::caa_tag_value(caa),
            RData::HINFO(hinfo) => format!(
                "{} {}",
                String::from_utf8_lossy(hinfo.cpu()),
                String::from_utf8_lossy(hinfo.os())
            ),
            RData::PTR(target) => target.0.to_utf8(),
            RData::SRV(srv) => format!(
                "{} {} {}:{}",
                srv.priority(),
                srv.weight(),
                srv.target().to_utf8(),
                srv.port()
            ),
            RData::TXT(txt) => txt
                .iter()
                .map(|s| format!("\"{}\"", String::from_utf8_lossy(s)))
                .collect::<Vec<_>>()
                .join(" "),
            RData::NS(target) => target.0.to_utf8(),
            RData::MX(mx) => format!("{} {}", mx.preference(), mx.exchange().to_utf8()),
            RData::SOA(soa) => soa.to_string(),
            RData::NAPTR(naptr) => format!(
                "{} {} \"{}\" \"{}\" \"{}\" {}",
                naptr.order(),
                naptr.preference(),
                String::from_utf8_lossy(naptr.flags()),
                String::from_utf8_lossy(naptr.services()),
                String::from_utf8_lossy(naptr.regexp()),
                naptr.replacement().to_utf8()
            ),
            _ => String::new(),
        }
    }

    /// Mnemonic for well-known codes, the numeric value otherwise.
    pub fn rcode_to_status(rcode: ResponseCode) -> String {
        let name = match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::FormErr => "FORMERR",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::YXDomain => "YXDOMAIN",
            ResponseCode::YXRRSet => "YXRRSET",
            ResponseCode::NXRRSet => "NXRRSET",
            ResponseCode::NotAuth => "NOTAUTH",
            ResponseCode::NotZone => "NOTZONE",
            ResponseCode::BADVERS => "BADVERS",
            other => return u16::from(other).to_string(),
        };
        name.to_string()
    }

    fn header_fields(record: &Record) -> (String, String, String, String) {
        (
            record.name().to_utf8(),
            record.record_type().to_string(),
            format!("{}s", record.ttl()),
            record.dns_class().to_string(),
        )
    }

    fn soa_mname(soa: &SOA) -> String {
        format!(
            "{} {} {} {} {} {} {}",
            soa.mname().to_utf8(),
            soa.rname().to_utf8(),
            soa.serial(),
            soa.refresh(),
            soa.retry(),
            soa.expire(),
            soa.minimum()
        )
    }

    // Presentation form is `flags tag "value"`; the flags are not shown.
    fn caa_tag_value(caa: &CAA) -> String {
        let text = caa.to_string();
        let tag_value = match text.split_once(' ') {
            Some((_, rest)) => rest,
            None => text.as_str(),
        };
        tag_value.replace('"', "")
    }
}
