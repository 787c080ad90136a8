use libpn532::ndef::{Record, TypeNameFormat, UriPrefix, code_of, prefix_of};

#[test]
fn unmapped_prefix_byte_keeps_literal_text() {
    let r = Record::new(TypeNameFormat::WellKnown, "U", b"\xFFexample.org".to_vec()).unwrap();
    assert_eq!(r.uri_string().as_deref(), Some("example.org"));
    assert_eq!(prefix_of(0xFF), "");
}

#[test]
fn every_code_maps_back() {
    for code in 0x01..=0x23u8 {
        assert_eq!(code_of(prefix_of(code)), code);
    }
}

#[test]
fn builder_without_known_scheme() {
    let r = Record::uri("geo:35.0,139.0").unwrap();
    assert_eq!(r.payload()[0], UriPrefix::None.code());
    assert_eq!(r.uri_string().as_deref(), Some("geo:35.0,139.0"));
}
