#[path = "../common/mod.rs"]
mod common;

use libpn532::Error;
use libpn532::protocol::{decode_data_exchange, decode_list_passive_target};

#[test]
fn single_target_decodes() {
    let target = decode_list_passive_target(&common::fixtures::list_target_payload())
        .unwrap()
        .unwrap();
    assert_eq!(target.target_id, 1);
    assert_eq!(target.sens_res, 0x0004);
    assert_eq!(target.sel_res, 0x08);
    assert_eq!(target.uid, common::fixtures::SAMPLE_UID.to_vec());
}

#[test]
fn no_target_is_none() {
    assert!(decode_list_passive_target(&[0x00]).unwrap().is_none());
}

#[test]
fn two_targets_rejected() {
    assert!(matches!(
        decode_list_passive_target(&[0x02]),
        Err(Error::MultipleCardsDetected { count: 2 })
    ));
}

#[test]
fn data_exchange_status_masks_flags() {
    // MI flag set, status OK
    assert_eq!(decode_data_exchange(&[0x40, 0xAB]).unwrap(), &[0xAB]);
    assert!(matches!(
        decode_data_exchange(&[0x14]),
        Err(Error::CardStatus { status: 0x14, .. })
    ));
}
