use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::rdata::{A, MX, NS, SOA};
use hickory_proto::rr::{Name, RData, Record};
use std::net::Ipv4Addr;
use std::str::FromStr;

pub fn response(code: ResponseCode, answers: Vec<Record>, authorities: Vec<Record>) -> Message {
    let mut message = Message::new(0, MessageType::Response, OpCode::Query);
    message.set_response_code(code);
    for record in answers {
        message.add_answer(record);
    }
    for record in authorities {
        message.add_name_server(record);
    }
    message
}

pub fn a_record(name: &str, ip: Ipv4Addr, ttl: u32) -> Record {
    Record::from_rdata(Name::from_str(name).unwrap(), ttl, RData::A(A(ip)))
}

pub fn mx_record(name: &str, preference: u16, exchange: &str) -> Record {
    let exchange = Name::from_str(exchange).unwrap();
    Record::from_rdata(
        Name::from_str(name).unwrap(),
        300,
        RData::MX(MX::new(preference, exchange)),
    )
}

pub fn ns_record(zone: &str, target: &str) -> Record {
    Record::from_rdata(
        Name::from_str(zone).unwrap(),
        3600,
        RData::NS(NS(Name::from_str(target).unwrap())),
    )
}

pub fn soa_record(zone: &str, minimum: u32) -> Record {
    let name = Name::from_str(zone).unwrap();
    let mname = Name::from_str(&format!("ns1.{}", zone)).unwrap();
    let rname = Name::from_str(&format!("hostmaster.{}", zone)).unwrap();
    let soa = SOA::new(mname, rname, 2024010101, 7200, 3600, 1209600, minimum);
    Record::from_rdata(name, 900, RData::SOA(soa))
}
