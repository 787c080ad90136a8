#[path = "../common/mod.rs"]
mod common;

use std::io;

use libpn532::Error;
use libpn532::protocol::Command;
use libpn532::transport::Transport;
use libpn532::types::BaudRate;

#[test]
fn missing_ack_times_out() {
    let (t, _bus) = common::helpers::transport();
    let err = t.execute(&Command::get_firmware_version(), 1000).unwrap_err();
    assert!(matches!(err, Error::AckTimeout { command: 0x02 }));
    assert!(!err.is_timeout());
}

#[test]
fn unanswered_command_is_response_timeout() {
    let (t, bus) = common::helpers::transport();
    bus.set_responder(|_| None);
    let err = t
        .execute(&Command::in_list_passive_target(BaudRate::Iso14443A), 100)
        .unwrap_err();
    assert!(err.is_timeout());
}

#[test]
fn garbage_instead_of_ack() {
    let (t, bus) = common::helpers::transport();
    bus.push_raw(vec![0x00, 0x00, 0xFF, 0xFF, 0x00, 0x00]);
    match t.execute(&Command::get_firmware_version(), 1000) {
        Err(Error::AckMismatch { actual }) => {
            assert_eq!(actual, vec![0x00, 0x00, 0xFF, 0xFF, 0x00, 0x00])
        }
        other => panic!("expected AckMismatch, got {:?}", other),
    }
}

#[test]
fn bus_error_is_passed_through() {
    let (t, bus) = common::helpers::transport();
    bus.fail_next_exchange(io::ErrorKind::BrokenPipe);
    match t.execute(&Command::get_firmware_version(), 1000) {
        Err(Error::Bus(e)) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
        other => panic!("expected Bus error, got {:?}", other),
    }
    // chip select was still released
    assert_eq!(bus.select_log().last(), Some(&false));
}

#[test]
fn corrupted_response_is_frame_error() {
    let (t, bus) = common::helpers::transport();
    let mut frame = common::fixtures::firmware_response_frame();
    let dcs = frame.len() - 2;
    frame[dcs] ^= 0xFF;
    bus.push_ack();
    bus.push_raw(frame);
    let err = t.execute(&Command::get_firmware_version(), 1000).unwrap_err();
    assert!(err.is_frame_error());
}
