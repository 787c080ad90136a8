use libpn532::config::{SamConfig, SamMode};
use libpn532::constants::MIFARE_NFC_KEY;
use libpn532::protocol::commands::{KeyType, mifare};
use libpn532::protocol::{Command, Opcode};
use libpn532::types::{BaudRate, Uid};

#[test]
fn sam_configuration_normal_mode() {
    let cmd = Command::sam_configuration(&SamConfig::default());
    assert_eq!(cmd.encode(), vec![0x14, 0x01, 0x14, 0x01]);

    let cfg = SamConfig {
        mode: SamMode::VirtualCard,
        timeout_multiplier: 0x00,
        use_irq: false,
    };
    assert_eq!(Command::sam_configuration(&cfg).encode(), vec![0x14, 0x02, 0x00, 0x00]);
}

#[test]
fn list_passive_target_type_a() {
    let cmd = Command::in_list_passive_target(BaudRate::Iso14443A);
    assert_eq!(cmd.encode(), vec![0x4A, 0x01, 0x00]);
    assert_eq!(cmd.response_code(), 0x4B);
}

#[test]
fn register_access_is_big_endian() {
    assert_eq!(Command::read_register(0x6302).encode(), vec![0x06, 0x63, 0x02]);
    assert_eq!(
        Command::write_register(0x6302, 0x80).encode(),
        vec![0x08, 0x63, 0x02, 0x80]
    );
}

#[test]
fn mifare_read_wraps_in_data_exchange() {
    let cmd = mifare::encode_read_block(1, 8);
    assert_eq!(cmd.code(), Opcode::InDataExchange.code());
    assert_eq!(cmd.header(), &[0x40, 0x01]);
    assert_eq!(cmd.body(), &[0x30, 0x08]);
}

#[test]
fn mifare_auth_key_a_uses_0x60() {
    let uid = Uid::from_bytes([1, 2, 3, 4]);
    let cmd = mifare::encode_authenticate(1, KeyType::A, &MIFARE_NFC_KEY, 4, &uid);
    assert_eq!(cmd.body()[0], 0x60);
    assert_eq!(&cmd.body()[7..], &[4, 1, 2, 3, 4]);
}
