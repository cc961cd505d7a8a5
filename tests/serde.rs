use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::read_to_string;
use std::net::IpAddr;
use table_conf::{from_document, from_str, ConfError, Document};
use test_case::test_case;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Service {
    server: Server,
    database: Database,
    logging: Logging,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Server {
    host: String,
    port: u16,
    secure: bool,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Database {
    url: String,
    pool: u8,
    password: Option<String>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Level {
    Debug,
    Info,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Logging {
    level: Level,
    target: String,
}

#[test]
fn deserialize_service() {
    let raw = read_to_string("tests/data/service.conf").unwrap();
    let service: Service = from_str(&raw)
        .map_err(miette::Error::from)
        .expect("failed to deserialize test data");
    assert_eq!(
        service,
        Service {
            server: Server {
                host: "example.com".into(),
                port: 8080,
                secure: true,
            },
            database: Database {
                url: "postgres://user@db/app?sslmode=require".into(),
                pool: 4,
                password: None,
            },
            logging: Logging {
                level: Level::Debug,
                target: "stderr".into(),
            },
        }
    );
}

#[derive(Debug, Deserialize)]
struct Peer {
    peer: PeerTable,
}

#[derive(Debug, Deserialize)]
struct PeerTable {
    address: IpAddr,
    weight: f32,
    tag: char,
}

#[test]
fn borrowed_document() {
    let document = Document::parse("[peer]\naddress = 10.0.0.1\nweight = 0.5\ntag = x\n");
    let peer: Peer = from_document(&document).unwrap();
    assert_eq!(peer.peer.address, "10.0.0.1".parse::<IpAddr>().unwrap());
    assert_eq!(peer.peer.weight, 0.5);
    assert_eq!(peer.peer.tag, 'x');
}

#[derive(Debug, Deserialize)]
struct Borrowed<'a> {
    #[serde(borrow)]
    a: BTreeMap<String, &'a str>,
}

#[test]
fn borrowed_strings() {
    let document = Document::parse("[a]\nk = 'quoted value'\n");
    let borrowed: Borrowed = from_document(&document).unwrap();
    assert_eq!(borrowed.a["k"], "quoted value");
}

#[test_case("[server]\nhost = h\nport = 70000\nsecure = true\n"; "port out of range")]
#[test_case("[server]\nhost = h\nport = 1\nsecure = yes\n"; "not a boolean")]
fn invalid_values(input: &str) {
    #[derive(Debug, Deserialize)]
    #[allow(dead_code)]
    struct Only {
        server: Server,
    }

    let err = from_str::<Only>(input).unwrap_err();
    assert!(matches!(err, ConfError::ParseValue(_)), "{err:?}");
}

#[test]
fn missing_key() {
    #[derive(Debug, Deserialize)]
    #[allow(dead_code)]
    struct Only {
        server: Server,
    }

    let err = from_str::<Only>("[server]\nhost = h\nport = ''\nsecure = true\n").unwrap_err();
    assert_eq!(err.to_string(), "missing field `port`");
}
